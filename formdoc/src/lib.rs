//! # formdoc
//!
//! A schema-driven form model for editable documents.
//!
//! formdoc turns a declarative field list (a JSON array of typed field
//! descriptors) into an editable, grouped form state, and provides the pure
//! path-update primitive used to fold single-field edits back into nested
//! document records.
//!
//! ## Features
//!
//! - Typed field descriptors: text, boolean and number fields with labels,
//!   groups and required markers
//! - Deterministic grouping in first-seen order for display
//! - Immutable change handling: every edit returns a new form state
//! - Synchronous change notification for presentation layers
//! - Pure "set at path" updates over nested JSON maps, creating missing
//!   intermediate nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use formdoc::data::Document;
//! use formdoc::form::FormState;
//! use serde_json::json;
//!
//! let doc = Document::from_str(
//!     r#"[{"name": "shipper.name", "label": "Name", "type": "text",
//!          "value": "", "required": true, "group": "Shipper"}]"#,
//! )
//! .unwrap();
//!
//! let state = FormState::from(doc);
//! let state = state.set_value("shipper.name", json!("ACME")).unwrap();
//! assert_eq!(state.fields()[0].value, json!("ACME"));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Field descriptors and document templates
//! - [`form`] - Renderer state, grouping, and change handling
//! - [`path`] - Pure nested path updates
//! - [`error`] - Error types for form and path operations

/// Field and document data structures.
pub mod data;

/// Error types for form and path operations.
pub mod error;

/// Renderer state for editable, grouped field lists.
pub mod form;

/// Pure "set at path" updates over nested JSON maps.
pub mod path;

pub use error::FormError;
pub use serde_json::Value;
