//! LUMIN grounding core
//!
//! This crate grounds symbolic query plans into concrete selection criteria:
//! - Loading and validating a concept ontology
//! - Decoding plans from their JSON tree form
//! - Evaluating plans through the set-algebra kernel (intersect, union, difference)
//! - Wrap-around handling for cyclic domains such as local solar time
//!
//! # Example
//!
//! ```ignore
//! use lumin::{LoadOptions, OntologyStore};
//! use serde_json::json;
//!
//! let store = OntologyStore::from_file("data/mars_ontology.json", &LoadOptions::default())?;
//! let grounded = lumin::ground(&json!(["INTERSECT", "Midnight", "Obs_Window"]), &store)?;
//! // {"type": "multi_range", "field": "local_true_solar_time", "ranges": [{"min": 0.5, "max": 1.0}]}
//! ```

// Re-export all public APIs from internal crates
pub use lumin_ast as ast;
pub use lumin_diagnostics as diagnostics;
pub use lumin_eval as eval;
pub use lumin_ontology as ontology;
pub use lumin_types as types;

// Convenience re-exports
pub use lumin_ast::{Expression, SetOperator};
pub use lumin_diagnostics::{LuminError, Result};
pub use lumin_eval::{EngineConfig, GroundingEngine};
pub use lumin_ontology::{ConceptSource, LoadOptions, OntologyStore};
pub use lumin_types::Concept;

use serde_json::Value;

/// Ground a JSON plan with the default engine configuration
pub fn ground<S>(plan: &Value, source: &S) -> Result<Concept>
where
    S: ConceptSource + ?Sized,
{
    GroundingEngine::new()
        .ground_json(plan, source)
        .map_err(LuminError::from)
}

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
