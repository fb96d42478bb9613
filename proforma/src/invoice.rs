//! Invoice record assembly and HTML preview rendering.
//!
//! The bundled template reproduces the proforma invoice layout: tracking
//! info, shipper/exporter and consignee details, country info, optional
//! customs fields, one goods line, and the signature block. Dotted field
//! names fold into the nested record consumed by the HTML template.

use anyhow::Context;
use formdoc::data::Document;
use formdoc::form::FormState;
use formdoc::path::{get_at_path, update_at_path};
use serde_json::{Map, Value};

/// Bundled proforma invoice field template.
pub const PROFORMA_TEMPLATE: &str = include_str!("../assets/proforma-template.json");

const INVOICE_HTML: &str = include_str!("../assets/invoice.html.liquid");

/// Load the bundled proforma field template.
pub fn proforma_template() -> anyhow::Result<Document> {
    Document::from_str(PROFORMA_TEMPLATE).context("bundled proforma template is invalid")
}

/// Assemble the nested invoice record from an edited form state.
///
/// The goods line total is derived from quantity and unit value, matching
/// the invoice preview where the total column is not directly editable.
pub fn assemble_record(state: &FormState) -> anyhow::Result<Map<String, Value>> {
    let doc = Document::new(state.fields().to_vec())?;
    let record = doc.to_record()?;
    with_item_total(record)
}

fn with_item_total(record: Map<String, Value>) -> anyhow::Result<Map<String, Value>> {
    let quantity = get_at_path(&record, &["item", "quantity"]).and_then(Value::as_f64);
    let unit_value = get_at_path(&record, &["item", "unitValue"]).and_then(Value::as_f64);
    let (Some(quantity), Some(unit_value)) = (quantity, unit_value) else {
        return Ok(record);
    };
    let total = serde_json::Number::from_f64(quantity * unit_value)
        .unwrap_or_else(|| serde_json::Number::from(0));
    let updated = update_at_path(&record, &["item", "totalValue"], Value::Number(total))?;
    Ok(updated)
}

/// Render the HTML invoice preview for an assembled record.
pub fn render_html(record: &Map<String, Value>) -> anyhow::Result<String> {
    let parser = liquid::ParserBuilder::with_stdlib()
        .build()
        .context("failed to build template parser")?;
    let template = parser
        .parse(INVOICE_HTML)
        .context("bundled invoice template is invalid")?;
    let globals = liquid::model::to_object(&Value::Object(record.clone()))
        .context("invoice record is not renderable")?;
    let html = template
        .render(&globals)
        .context("failed to render invoice")?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edited_state() -> FormState {
        let mut state = FormState::from(proforma_template().unwrap());
        for (name, value) in [
            ("shipper.name", json!("ACME Exports")),
            ("consignee.name", json!("Bob Imports")),
            ("countryInfo.export", json!("France")),
            ("item.description", json!("Widgets")),
            ("item.quantity", json!(3)),
            ("item.unitValue", json!(2.5)),
        ] {
            state = state.set_value(name, value).unwrap();
        }
        state
    }

    #[test]
    fn test_bundled_template_parses() {
        let doc = proforma_template().unwrap();
        let groups = FormState::from(doc).grouped().len();
        assert_eq!(groups, 7);
    }

    #[test]
    fn test_assemble_record_nests_groups() {
        let record = assemble_record(&edited_state()).unwrap();
        assert_eq!(
            get_at_path(&record, &["shipper", "name"]),
            Some(&json!("ACME Exports"))
        );
        assert_eq!(
            get_at_path(&record, &["countryInfo", "export"]),
            Some(&json!("France"))
        );
    }

    #[test]
    fn test_assemble_record_derives_item_total() {
        let record = assemble_record(&edited_state()).unwrap();
        assert_eq!(
            get_at_path(&record, &["item", "totalValue"]),
            Some(&json!(7.5))
        );
    }

    #[test]
    fn test_render_html_contains_values() {
        let record = assemble_record(&edited_state()).unwrap();
        let html = render_html(&record).unwrap();
        assert!(html.contains("Proforma Invoice"));
        assert!(html.contains("ACME Exports"));
        assert!(html.contains("Bob Imports"));
        assert!(html.contains("Widgets"));
    }
}
