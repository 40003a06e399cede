//! LUMIN Grounding Engine
//!
//! This crate turns a grounding plan into concrete selection criteria:
//!
//! - **Evaluation**: recursive walk of the plan tree, resolving concept names
//!   against a [`ConceptSource`](lumin_ontology::ConceptSource)
//! - **Intersect**: interval meet for scalar ranges, set intersection for
//!   categorical sets, unroll-and-intersect for cyclic ranges and multi-ranges
//! - **Union**: deferred pair, left to the catalog query builder
//! - **Difference**: deferred record, or the base itself when fields differ
//!
//! # Example
//!
//! ```ignore
//! use lumin_eval::GroundingEngine;
//! use lumin_ontology::{LoadOptions, OntologyStore};
//! use serde_json::json;
//!
//! let store = OntologyStore::from_file("data/mars_ontology.json", &LoadOptions::default())?;
//! let engine = GroundingEngine::new();
//!
//! let grounded = engine.ground_json(&json!(["INTERSECT", "Midnight", "Dust Storm Season"]), &store)?;
//! println!("{}", serde_json::to_string_pretty(&grounded)?);
//! ```
//!
//! # Architecture
//!
//! - `GroundingEngine`: evaluates plans, guarding recursion depth
//! - `operators`: the set-algebra kernel, one module per operator plus the
//!   cyclic segment arithmetic
//!
//! Evaluation only reads the concept source and allocates fresh results, so
//! one engine and one store can serve any number of threads.

pub mod engine;
pub mod error;
pub mod operators;

pub use engine::{EngineConfig, GroundingEngine};
pub use error::{EvalError, EvalResult};
pub use operators::apply;
