//! Ontology store implementing ConceptSource
//!
//! The store is built once from a JSON document (or from concepts injected in
//! memory) and never mutated afterwards. Entry order of the source document is
//! preserved so the vocabulary handed to the translator is stable.

use crate::entry::{LoadOptions, parse_entry, validate_concept};
use crate::{ConceptSource, OntologyError};
use indexmap::IndexMap;
use lumin_types::Concept;
use serde_json::Value;
use std::path::Path;

/// Immutable catalog of named concepts
#[derive(Debug, Clone, Default)]
pub struct OntologyStore {
    concepts: IndexMap<String, Concept>,
    defaulted_periods: Vec<String>,
}

impl OntologyStore {
    /// Load an ontology from a JSON document mapping names to entries
    pub fn from_json(json: &str, options: &LoadOptions) -> Result<Self, OntologyError> {
        let document: IndexMap<String, Value> =
            serde_json::from_str(json).map_err(|e| OntologyError::Parse(e.to_string()))?;

        let mut concepts = IndexMap::with_capacity(document.len());
        let mut defaulted_periods = Vec::new();
        for (name, value) in document {
            let entry = parse_entry(&name, value, options)?;
            if entry.defaulted_period {
                defaulted_periods.push(name.clone());
            }
            concepts.insert(name, entry.concept);
        }

        log::info!(
            "Loaded ontology with {} concepts ({} using the default cyclic period)",
            concepts.len(),
            defaulted_periods.len()
        );

        Ok(Self {
            concepts,
            defaulted_periods,
        })
    }

    /// Load an ontology from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, OntologyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| OntologyError::Io(format!("{}: {}", path.display(), e)))?;
        log::debug!("Read {} bytes of ontology from {}", json.len(), path.display());
        Self::from_json(&json, options)
    }

    /// Auto-detect and load an ontology from file based on extension
    pub fn from_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, OntologyError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path, options),
            Some(ext) => Err(OntologyError::UnsupportedFormat(format!(
                "Unsupported file extension: .{}. Expected .json",
                ext
            ))),
            None => Err(OntologyError::UnsupportedFormat(
                "No file extension found. Expected .json".to_string(),
            )),
        }
    }

    /// Build a store from concepts held in memory
    ///
    /// Concepts go through the same validation as file entries; a repeated
    /// name keeps its first position and takes the last definition.
    pub fn from_concepts<I, S>(concepts: I) -> Result<Self, OntologyError>
    where
        I: IntoIterator<Item = (S, Concept)>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for (name, concept) in concepts {
            let name = name.into();
            validate_concept(&name, &concept)?;
            store.concepts.insert(name, concept);
        }
        Ok(store)
    }

    /// Resolve a concept by exact name
    pub fn lookup(&self, name: &str) -> Result<&Concept, OntologyError> {
        self.concepts
            .get(name)
            .ok_or_else(|| OntologyError::unknown_concept(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.concepts.contains_key(name)
    }

    /// Concept names in source order
    pub fn concept_names(&self) -> impl Iterator<Item = &str> {
        self.concepts.keys().map(String::as_str)
    }

    /// Concept names joined for injection into a translator prompt
    pub fn vocabulary(&self, separator: &str) -> String {
        self.concept_names().collect::<Vec<_>>().join(separator)
    }

    /// Name/concept pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Concept)> {
        self.concepts.iter().map(|(name, concept)| (name.as_str(), concept))
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Cyclic entries whose period came from [`LoadOptions::default_period`]
    pub fn defaulted_periods(&self) -> &[String] {
        &self.defaulted_periods
    }
}

impl ConceptSource for OntologyStore {
    fn lookup(&self, name: &str) -> Result<&Concept, OntologyError> {
        OntologyStore::lookup(self, name)
    }

    fn concept_names(&self) -> Vec<&str> {
        OntologyStore::concept_names(self).collect()
    }
}
