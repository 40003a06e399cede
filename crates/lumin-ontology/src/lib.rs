//! LUMIN ontology store
//!
//! The ontology is the fixed catalog of named concepts a grounding plan may
//! refer to. It is loaded once, validated as a whole, and read-only afterwards:
//!
//! - [`OntologyStore`]: the loaded catalog (JSON file or in-memory concepts)
//! - [`LoadOptions`]: load-time settings such as the default cyclic period
//! - [`ConceptSource`]: the lookup seam the evaluator depends on
//!
//! # Example
//!
//! ```ignore
//! use lumin_ontology::{LoadOptions, OntologyStore};
//!
//! let options = LoadOptions::default().with_default_period(24.0);
//! let store = OntologyStore::from_file("data/mars_ontology.json", &options)?;
//! let midnight = store.lookup("Midnight")?;
//! ```

mod entry;
mod error;
mod provider;
mod store;

pub use entry::{LoadOptions, validate_concept};
pub use error::OntologyError;
pub use provider::ConceptSource;
pub use store::OntologyStore;
