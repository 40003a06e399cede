//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use lumin_diagnostics::LuminError;
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    JsonPretty,
    Table,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "json-pretty" => Ok(Self::JsonPretty),
            "table" => Ok(Self::Table),
            other => Err(LuminError::system(
                lumin_diagnostics::LUM0406,
                format!("Unknown output format '{}', expected json, pretty or table", other),
            )
            .into()),
        }
    }
}

impl OutputFormat {
    /// Resolve the global `--format` flag, defaulting to pretty JSON
    pub fn from_flag(flag: Option<&str>) -> Result<Self> {
        flag.map_or(Ok(Self::default()), Self::from_str)
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display
///
/// LUMIN errors are shown with their code, a help line when one is
/// registered, and the outermost context attached by the command.
pub fn format_error(error: &anyhow::Error) -> String {
    let Some(lumin) = error.downcast_ref::<LuminError>() else {
        return format!("{} {:#}", "Error:".red().bold(), error);
    };

    let diagnostic = lumin.to_diagnostic();
    let mut out = format!(
        "{} {} - {}",
        "Error:".red().bold(),
        diagnostic.code.to_string().yellow(),
        diagnostic.message
    );
    if let Some(path) = &diagnostic.path {
        out.push_str(&format!(" (at {})", format_path(&path.to_string())));
    }
    if let Some(help) = diagnostic.effective_help() {
        out.push_str(&format!("\n  {} {}", "help:".cyan(), help));
    }
    let outer = error.to_string();
    if outer != lumin.to_string() {
        out.push_str(&format!("\n  {} {}", "note:".cyan(), outer));
    }
    out
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format an expression path such as `/2/1`
pub fn format_path(path: &str) -> String {
    path.cyan().to_string()
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Format an object as a key/value table, `None` for any other value
pub fn format_as_table(value: &Value) -> Option<String> {
    #[derive(Tabled)]
    struct KeyValue {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let Value::Object(obj) = value else {
        return None;
    };

    let rows: Vec<KeyValue> = obj
        .iter()
        .map(|(k, v)| KeyValue {
            key: k.clone(),
            value: format_value(v),
        })
        .collect();

    Some(Table::new(rows).with(Style::modern()).to_string())
}

/// Format a simple value for display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(compact).collect::<Vec<_>>().join(", "),
        Value::Object(_) => compact(value),
    }
}

fn compact(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a value in the specified format
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(value, false),
        OutputFormat::JsonPretty => format_json(value, true),
        OutputFormat::Table => match format_as_table(value) {
            Some(table) => Ok(table),
            None => format_json(value, true),
        },
    }
}

/// Print output in the specified format
pub fn print_output(value: &Value, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let content = render(value, format)?;
    write_output(&content, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Pretty".parse::<OutputFormat>().unwrap(), OutputFormat::JsonPretty);
        assert_eq!(OutputFormat::from_flag(None).unwrap(), OutputFormat::JsonPretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_error_shows_code_and_help() {
        colored::control::set_override(false);
        let err: anyhow::Error = LuminError::evaluation(lumin_diagnostics::LUM0201, "latitude vs solar_longitude").into();
        assert_eq!(
            format_error(&err),
            "Error: LUM0201 - latitude vs solar_longitude\n  help: Only concepts on the same field can be intersected"
        );
    }

    #[test]
    fn test_non_objects_fall_back_to_json() {
        let rendered = render(&json!(["Midnight", "Night"]), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "[\n  \"Midnight\",\n  \"Night\"\n]");
    }

    #[test]
    fn test_table_lists_object_keys() {
        let rendered = render(&json!({"type": "empty", "field": "latitude"}), OutputFormat::Table).unwrap();
        assert!(rendered.contains("type"));
        assert!(rendered.contains("latitude"));
    }
}
