use thiserror::Error;

/// Errors produced by form and path operations.
///
/// All variants are recoverable conditions. A caller that wants the
/// permissive behavior of the original editors (ignore bad edits) can match
/// and drop them; nothing here should abort a running session.
#[derive(Debug, Error)]
pub enum FormError {
    /// An edit targeted a field name absent from the document.
    #[error("field not found: {name}")]
    FieldNotFound {
        /// The missing field name.
        name: String,
    },

    /// A template declared the same field name twice.
    #[error("duplicate field name: {name}")]
    DuplicateField {
        /// The repeated field name.
        name: String,
    },

    /// A path update was invoked with a zero-length path.
    #[error("empty update path")]
    EmptyPath,

    /// A value does not match the type expected for a field.
    #[error("type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Field name or dotted path of the offending value.
        path: String,
        /// Expected type description.
        expected: String,
        /// Actual value rendered as text.
        actual: String,
    },

    /// A template failed to parse as a field list.
    #[error("template parse error: {0}")]
    Template(#[from] serde_json::Error),
}
