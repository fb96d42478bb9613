//! # proforma
//!
//! A command-line toolkit for proforma invoice forms.
//!
//! `proforma` loads a declarative field template, lets edits flow through
//! the [`formdoc`] form model, assembles the nested invoice record, renders
//! the HTML invoice preview, and submits document references to a remote AI
//! endpoint for analysis.
//!
//! ## Features
//!
//! - **Field Templates**: bundled proforma invoice template plus support
//!   for user-supplied field lists
//! - **Record Assembly**: dotted field names folded into a nested invoice
//!   record via pure path updates
//! - **HTML Preview**: liquid-rendered proforma invoice document
//! - **AI Analysis**: HTTP submission of a prompt and file reference to a
//!   configured endpoint
//! - **Typed Store**: explicit state container tracking analysis requests
//!
//! ## Modules
//!
//! - [`ai`] - AI analysis HTTP client
//! - [`config`] - Application configuration and schema export
//! - [`invoice`] - Invoice record assembly and HTML rendering
//! - [`store`] - Typed state container for analysis requests

/// AI document analysis client.
pub mod ai;

/// Application configuration.
pub mod config;

/// Invoice record assembly and HTML preview rendering.
pub mod invoice;

/// Typed state container for AI analysis requests.
pub mod store;

#[macro_use]
extern crate log;
