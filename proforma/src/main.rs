use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use formdoc::data::Document;
use formdoc::form::FormState;
use log::info;
use serde_json::Value;

use proforma::ai::AiClient;
use proforma::config::{AppConfig, DEFAULT_CONFIG_PATH};
use proforma::invoice;
use proforma::store::{RequestStatus, Store};

#[derive(Parser)]
#[command(
    name = "proforma",
    version,
    about = "Proforma invoice form editor and AI document analysis"
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the grouped field list of a template.
    Fields {
        /// Template JSON file; defaults to the bundled proforma template.
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
    /// Apply name=value edits and print the assembled invoice record.
    Set {
        /// Template JSON file; defaults to the bundled proforma template.
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Edits in name=value form.
        edits: Vec<String>,
    },
    /// Render the HTML invoice preview.
    Render {
        /// Template JSON file; defaults to the bundled proforma template.
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Edits in name=value form.
        #[arg(short, long = "set")]
        set: Vec<String>,
        /// Output HTML file.
        #[arg(short, long, default_value = "invoice.html")]
        output: PathBuf,
    },
    /// Submit a file reference to the AI endpoint for analysis.
    Analyze {
        /// File reference (URL or encoded payload) to analyze.
        file: String,
        /// Override the configured prompt.
        #[arg(short, long)]
        prompt: Option<String>,
    },
    /// Print the JSON schema of the configuration file.
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Fields { template } => {
            let state = FormState::from(load_template(template.as_deref())?);
            print_fields(&state);
        }
        Command::Set { template, edits } => {
            let mut state = FormState::from(load_template(template.as_deref())?);
            state = apply_edits(state, &edits)?;
            let record = invoice::assemble_record(&state)?;
            println!("{}", serde_json::to_string_pretty(&Value::Object(record))?);
        }
        Command::Render {
            template,
            set,
            output,
        } => {
            let mut state = FormState::from(load_template(template.as_deref())?);
            state = apply_edits(state, &set)?;
            let record = invoice::assemble_record(&state)?;
            let html = invoice::render_html(&record)?;
            fs::write(&output, html)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!(
                "{}",
                format!("Invoice written to {}", output.display())
                    .bold()
                    .purple()
            );
        }
        Command::Analyze { file, prompt } => {
            let client = AiClient::new(&config)?;
            let prompt = prompt.unwrap_or(config.prompt);
            let mut store = Store::default();
            info!("analyzing {file}");
            let state = store.analyze_file(&client, &prompt, &file).await;
            match state.status {
                RequestStatus::Succeeded => {
                    println!("{}", serde_json::to_string_pretty(&state.messages)?);
                }
                _ => {
                    let reason = state.error.as_deref().unwrap_or("unknown error");
                    bail!("analysis failed: {reason}");
                }
            }
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&AppConfig::schema()?)?);
        }
    }

    Ok(())
}

fn load_template(path: Option<&Path>) -> Result<Document> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Document::from_str(&content)
                .with_context(|| format!("invalid template {}", path.display()))
        }
        None => invoice::proforma_template(),
    }
}

fn apply_edits(state: FormState, edits: &[String]) -> Result<FormState> {
    let mut state = state;
    for edit in edits {
        let (name, raw) = edit
            .split_once('=')
            .with_context(|| format!("edit {edit:?} is not in name=value form"))?;
        let value = parse_edit_value(raw);
        state = state.set_value(name, value)?;
    }
    Ok(state)
}

/// Interpret an edit value as JSON when possible, otherwise as a string.
fn parse_edit_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_fields(state: &FormState) {
    for group in state.grouped() {
        println!("{}", group.name.bold().purple());
        for field in group.fields {
            let marker = if field.required { "*" } else { " " };
            println!("  {marker} {} ({}) = {}", field.label, field.name, field.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_edit_value() {
        assert_eq!(parse_edit_value("3"), json!(3));
        assert_eq!(parse_edit_value("true"), json!(true));
        assert_eq!(parse_edit_value("ACME Exports"), json!("ACME Exports"));
        assert_eq!(parse_edit_value("\"3\""), json!("3"));
    }

    #[test]
    fn test_apply_edits() {
        let state = FormState::from(invoice::proforma_template().unwrap());
        let edits = vec![
            "shipper.name=ACME".to_string(),
            "item.quantity=4".to_string(),
            "optionalInfo.sample=true".to_string(),
        ];
        let state = apply_edits(state, &edits).unwrap();
        assert_eq!(state.field("shipper.name").unwrap().value, json!("ACME"));
        assert_eq!(state.field("item.quantity").unwrap().value, json!(4));
        assert_eq!(state.field("optionalInfo.sample").unwrap().value, json!(true));
    }

    #[test]
    fn test_apply_edits_rejects_malformed() {
        let state = FormState::from(invoice::proforma_template().unwrap());
        assert!(apply_edits(state.clone(), &["no-equals".to_string()]).is_err());
        assert!(apply_edits(state, &["missing.field=1".to_string()]).is_err());
    }
}
