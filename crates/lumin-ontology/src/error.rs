//! Ontology errors

use lumin_diagnostics::{
    ErrorBuilder, ErrorCode, LUM0100, LUM0101, LUM0102, LUM0103, LUM0104, LUM0105, LUM0106,
    LUM0107, LUM0401, LuminError,
};
use thiserror::Error;

/// Errors raised while loading or querying the ontology
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OntologyError {
    #[error("Concept '{name}' not found in ontology")]
    UnknownConcept { name: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported ontology format: {0}")]
    UnsupportedFormat(String),

    #[error("Concept '{concept}' has unknown type '{tag}'")]
    UnknownType { concept: String, tag: String },

    #[error("Concept '{concept}' is missing attribute '{attribute}'")]
    MissingAttribute {
        concept: String,
        attribute: &'static str,
    },

    #[error("Concept '{concept}' has invalid bounds: {message}")]
    InvalidBounds { concept: String, message: String },

    #[error("Cyclic concept '{concept}' has no range_max and no default period is configured")]
    MissingPeriod { concept: String },

    #[error("Cyclic concept '{concept}' has invalid period {range_max}")]
    InvalidPeriod { concept: String, range_max: f64 },
}

impl OntologyError {
    pub fn unknown_concept(name: impl Into<String>) -> Self {
        Self::UnknownConcept { name: name.into() }
    }

    pub fn invalid_bounds(concept: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBounds {
            concept: concept.into(),
            message: message.into(),
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownConcept { .. } => LUM0100,
            Self::Io(_) => LUM0401,
            Self::Parse(_) => LUM0106,
            Self::UnsupportedFormat(_) => LUM0107,
            Self::UnknownType { .. } => LUM0101,
            Self::MissingAttribute { .. } => LUM0102,
            Self::InvalidBounds { .. } => LUM0103,
            Self::MissingPeriod { .. } => LUM0104,
            Self::InvalidPeriod { .. } => LUM0105,
        }
    }

    /// The concept the error is about, when there is one
    pub fn concept(&self) -> Option<&str> {
        match self {
            Self::UnknownConcept { name } => Some(name),
            Self::UnknownType { concept, .. }
            | Self::MissingAttribute { concept, .. }
            | Self::InvalidBounds { concept, .. }
            | Self::MissingPeriod { concept }
            | Self::InvalidPeriod { concept, .. } => Some(concept),
            Self::Io(_) | Self::Parse(_) | Self::UnsupportedFormat(_) => None,
        }
    }
}

impl From<OntologyError> for LuminError {
    fn from(err: OntologyError) -> Self {
        let builder = ErrorBuilder::new(err.code(), err.to_string());
        match &err {
            OntologyError::Io(_) => builder.system(),
            _ => match err.concept() {
                Some(name) => builder.concept(name).ontology(),
                None => builder.ontology(),
            },
        }
    }
}
