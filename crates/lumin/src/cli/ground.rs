//! Ground command implementation

use super::loader;
use super::output::{self, OutputFormat};
use anyhow::{Context, Result};
use lumin_diagnostics::LuminError;
use lumin_eval::{EngineConfig, GroundingEngine};
use lumin_ontology::ConceptSource;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Where the plan to ground comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    /// JSON text given on the command line
    Inline(String),
    /// JSON file
    File(PathBuf),
    /// JSON read from standard input
    Stdin,
}

/// Configuration for ground command
pub struct GroundConfig {
    pub ontology: Option<PathBuf>,
    pub plan: PlanSource,
    pub default_period: Option<f64>,
    pub max_depth: usize,
    pub verbose: bool,
    pub output_format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Ground a plan against an ontology and print the resolved concept
pub fn ground(config: GroundConfig) -> Result<()> {
    let path = loader::resolve_ontology_path(config.ontology)?;
    let store = loader::load_ontology(&path, config.default_period)?;
    if config.verbose {
        eprintln!("Loaded {} concepts from {}", store.len(), path.display());
    }

    let plan = read_plan(&config.plan)?;
    let engine = GroundingEngine::with_config(EngineConfig::default().with_max_depth(config.max_depth));
    let grounded = ground_plan(&engine, &plan, &store)?;

    output::print_output(&grounded, config.output_format, config.output_file.as_deref())
}

/// Ground a decoded JSON plan, returning the resolved concept as JSON
pub fn ground_plan<S>(engine: &GroundingEngine, plan: &Value, source: &S) -> Result<Value>
where
    S: ConceptSource + ?Sized,
{
    let concept = engine.ground_json(plan, source).map_err(LuminError::from)?;
    serde_json::to_value(&concept).context("Failed to serialize grounded concept")
}

/// Read and parse the plan JSON
pub fn read_plan(source: &PlanSource) -> Result<Value> {
    let text = match source {
        PlanSource::Inline(text) => text.clone(),
        PlanSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file: {}", path.display()))?,
        PlanSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read plan from stdin")?;
            text
        }
    };
    log::debug!("Read plan of {} bytes", text.len());

    serde_json::from_str(&text)
        .map_err(|e| LuminError::expression(lumin_diagnostics::LUM0005, format!("Plan is not valid JSON: {}", e)))
        .map_err(anyhow::Error::from)
}
