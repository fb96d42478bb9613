//! Field and document data structures.
//!
//! This module provides the data model for schema-driven forms:
//!
//! - Field descriptor parsing and per-kind value normalization
//! - Document templates built from JSON field lists
//! - Nested record assembly from dotted field names
//!
//! ## Architecture
//!
//! - [`field`] - Field descriptors, kinds, editors, and value normalization
//! - [`document`] - Document templates and record assembly

/// Field descriptors, kinds, editors, and value normalization.
pub mod field;

/// Document templates parsed from JSON field lists.
pub mod document;

pub use document::Document;
pub use field::{Editor, FieldDescriptor, FieldKind};
