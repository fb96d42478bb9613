use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormError;

/// Recognized field kinds.
///
/// Unrecognized kinds deserialize to [`FieldKind::Unknown`] instead of
/// failing the whole template; such fields get no editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form string value.
    Text,
    /// Two-state value.
    Boolean,
    /// Floating-point value.
    Number,
    /// Any kind not listed above.
    #[serde(other)]
    Unknown,
}

/// How a field value is edited by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    /// Free-form string input.
    Text,
    /// Two-state toggle.
    Toggle,
    /// Numeric input with zero fallback on invalid text.
    Numeric,
    /// No editor; the field is skipped.
    None,
}

/// One editable unit of a document.
///
/// `name` is unique within a document and may be dotted
/// (e.g. `shipper.name`) to place the value inside a nested record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique field key within the document.
    pub name: String,
    /// Human-readable display text.
    pub label: String,
    /// Declared value kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Current value; kept consistent with `kind` by normalization.
    #[serde(default)]
    pub value: Value,
    /// Whether downstream validation requires a non-empty value.
    #[serde(default)]
    pub required: bool,
    /// Display cluster key.
    pub group: String,
}

impl FieldDescriptor {
    /// The editor a presentation layer should show for this field.
    pub fn editor(&self) -> Editor {
        match self.kind {
            FieldKind::Text => Editor::Text,
            FieldKind::Boolean => Editor::Toggle,
            FieldKind::Number => Editor::Numeric,
            FieldKind::Unknown => Editor::None,
        }
    }

    /// Normalize an incoming value for this field's kind.
    ///
    /// Number fields accept raw string input and fall back to zero when it
    /// does not parse, matching the numeric editor contract. Boolean and
    /// number fields reject values of an unrelated type with
    /// [`FormError::TypeMismatch`]; unknown-kind fields store the value
    /// as given.
    pub fn normalize(&self, value: Value) -> Result<Value, FormError> {
        match self.kind {
            FieldKind::Text => Ok(match value {
                Value::String(s) => Value::String(s),
                other => Value::String(other.to_string()),
            }),
            FieldKind::Boolean => match value {
                Value::Bool(b) => Ok(Value::Bool(b)),
                other => Err(self.mismatch("boolean", &other)),
            },
            FieldKind::Number => match value {
                Value::Number(n) => Ok(Value::Number(n)),
                Value::String(s) => Ok(number_from_input(&s)),
                other => Err(self.mismatch("number", &other)),
            },
            FieldKind::Unknown => Ok(value),
        }
    }

    fn mismatch(&self, expected: &str, actual: &Value) -> FormError {
        FormError::TypeMismatch {
            path: self.name.clone(),
            expected: expected.to_string(),
            actual: format!("{actual}"),
        }
    }
}

/// Parse numeric editor input.
///
/// The longest leading numeric prefix wins, so `"12abc"` stores `12` and
/// `"1e2x"` stores `100`. Empty or non-numeric text stores zero rather
/// than failing; the raw input is only visible in the debug log.
pub fn number_from_input(raw: &str) -> Value {
    let trimmed = raw.trim();
    let mut parsed = None;
    for end in trimmed.char_indices().map(|(i, c)| i + c.len_utf8()) {
        if let Ok(v) = trimmed[..end].parse::<f64>() {
            parsed = Some(v);
        }
    }
    let value = parsed.unwrap_or_else(|| {
        debug!("numeric input {raw:?} does not parse, storing 0");
        0.0
    });
    Value::Number(serde_json::Number::from_f64(value).unwrap_or_else(|| {
        debug!("numeric input {raw:?} is not finite, storing 0");
        serde_json::Number::from(0)
    }))
}
