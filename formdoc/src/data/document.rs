use std::collections::HashSet;

use log::warn;
use serde_json::{Map, Value};

use crate::data::field::{FieldDescriptor, FieldKind};
use crate::error::FormError;
use crate::path;

/// An ordered field list parsed from a document template.
///
/// Construction validates that field names are unique. Unrecognized field
/// kinds are tolerated (the field keeps its value but maps to no editor);
/// each one is logged once here so a broken template is visible without
/// failing the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Vec<FieldDescriptor>,
}

impl Document {
    /// Build a document from a field list, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DuplicateField`] when two fields share a name.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField {
                    name: field.name.clone(),
                });
            }
            if field.kind == FieldKind::Unknown {
                warn!(
                    "field {:?} has an unrecognized type, no editor will be shown",
                    field.name
                );
            }
        }
        Ok(Self { fields })
    }

    /// Parse a template from JSON text (an array of field descriptors).
    pub fn from_str(s: &str) -> Result<Self, FormError> {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(s)?;
        Self::new(fields)
    }

    /// Parse a template from an already-decoded JSON value.
    pub fn from_json(value: Value) -> Result<Self, FormError> {
        let fields: Vec<FieldDescriptor> = serde_json::from_value(value)?;
        Self::new(fields)
    }

    /// The fields in template order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Consume the document, yielding its fields.
    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    /// Assemble a nested record by treating dotted field names as paths.
    ///
    /// Each field value is written at the path given by splitting its name
    /// on `.`, so `shipper.name` lands at `{"shipper": {"name": ...}}`.
    /// Later fields never disturb sibling branches written by earlier ones.
    pub fn to_record(&self) -> Result<Map<String, Value>, FormError> {
        let mut record = Map::new();
        for field in &self.fields {
            let segments = path::parse_path(&field.name);
            record = path::update_at_path(&record, &segments, field.value.clone())?;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &str = r#"[
        {"name": "shipper.name", "label": "Name", "type": "text",
         "value": "ACME", "required": true, "group": "Shipper"},
        {"name": "shipper.email", "label": "Email", "type": "text",
         "value": "ops@acme.example", "group": "Shipper"},
        {"name": "item.quantity", "label": "Quantity", "type": "number",
         "value": 3, "group": "Item"}
    ]"#;

    #[test]
    fn test_parse_template() {
        let doc = Document::from_str(TEMPLATE).unwrap();
        assert_eq!(doc.fields().len(), 3);
        assert_eq!(doc.fields()[0].name, "shipper.name");
        assert!(doc.fields()[0].required);
        assert_eq!(doc.fields()[2].kind, FieldKind::Number);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let fields = vec![
            FieldDescriptor {
                name: "a".to_string(),
                label: "A".to_string(),
                kind: FieldKind::Text,
                value: json!(""),
                required: false,
                group: "G".to_string(),
            };
            2
        ];
        let err = Document::new(fields).unwrap_err();
        assert!(matches!(err, FormError::DuplicateField { name } if name == "a"));
    }

    #[test]
    fn test_to_record_nests_dotted_names() {
        let doc = Document::from_str(TEMPLATE).unwrap();
        let record = doc.to_record().unwrap();
        assert_eq!(
            Value::Object(record),
            json!({
                "shipper": {"name": "ACME", "email": "ops@acme.example"},
                "item": {"quantity": 3}
            })
        );
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        assert!(matches!(
            Document::from_str("{\"not\": \"an array\"}"),
            Err(FormError::Template(_))
        ));
    }
}
