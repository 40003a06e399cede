//! Concepts command implementation

use super::loader;
use super::output::{self, OutputFormat};
use anyhow::Result;
use lumin_ontology::OntologyStore;
use serde_json::{Value, json};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Configuration for concepts command
pub struct ConceptsConfig {
    pub ontology: Option<PathBuf>,
    pub default_period: Option<f64>,
    /// Print only the vocabulary line handed to the plan translator
    pub names_only: bool,
    pub separator: String,
    pub output_format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

#[derive(Tabled)]
struct ConceptRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Selection")]
    selection: String,
}

/// List the concepts of an ontology
pub fn concepts(config: ConceptsConfig) -> Result<()> {
    let path = loader::resolve_ontology_path(config.ontology)?;
    let store = loader::load_ontology(&path, config.default_period)?;

    let content = if config.names_only {
        store.vocabulary(&config.separator)
    } else {
        render_concepts(&store, config.output_format)?
    };
    output::write_output(&content, config.output_file.as_deref())
}

/// Render the concept listing in the given format
pub fn render_concepts(store: &OntologyStore, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ConceptRow> = store
                .iter()
                .map(|(name, concept)| ConceptRow {
                    name: name.to_string(),
                    kind: concept.kind().to_string(),
                    selection: concept.to_string(),
                })
                .collect();
            Ok(Table::new(rows).with(Style::modern()).to_string())
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output::render(&concepts_json(store), format)
        }
    }
}

/// Concepts as a JSON array of `{name, concept}` objects, in file order
pub fn concepts_json(store: &OntologyStore) -> Value {
    store
        .iter()
        .map(|(name, concept)| json!({ "name": name, "concept": concept }))
        .collect()
}
