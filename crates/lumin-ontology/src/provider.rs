//! Concept lookup seam

use crate::OntologyError;
use lumin_types::Concept;
use std::collections::HashMap;

/// Anything the evaluator can resolve concept names against
///
/// Implementations must be read-only; the evaluator shares one source across
/// concurrent evaluations.
pub trait ConceptSource: Send + Sync {
    /// Resolve a concept by exact name
    fn lookup(&self, name: &str) -> Result<&Concept, OntologyError>;

    /// All concept names, the vocabulary offered to the plan translator
    fn concept_names(&self) -> Vec<&str>;
}

/// Plain in-memory mapping, unvalidated; names enumerate in sorted order
impl ConceptSource for HashMap<String, Concept> {
    fn lookup(&self, name: &str) -> Result<&Concept, OntologyError> {
        self.get(name).ok_or_else(|| OntologyError::unknown_concept(name))
    }

    fn concept_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
