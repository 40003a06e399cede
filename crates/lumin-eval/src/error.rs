//! Evaluation errors for the grounding engine

use lumin_ast::{SetOperator, ShapeError};
use lumin_diagnostics::{ErrorBuilder, ErrorCode, LUM0201, LUM0202, LUM0203, LuminError};
use lumin_ontology::OntologyError;
use lumin_types::{Concept, ConceptKind};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while grounding a plan
///
/// Every error is terminal for the evaluation that raised it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// A plan leaf names no ontology concept
    #[error("Concept '{name}' not found in ontology")]
    UnknownConcept { name: String },

    /// The plan is not a well-formed expression tree
    #[error("Malformed expression: {0}")]
    MalformedExpression(#[from] ShapeError),

    /// Intersection of concepts on different fields
    #[error("Field mismatch: {left} vs {right}")]
    FieldMismatch { left: String, right: String },

    /// Operator not defined for the operand shapes
    #[error("Unsupported operand types for {operator}: {left} and {right}")]
    UnsupportedType {
        operator: SetOperator,
        left: ConceptKind,
        right: ConceptKind,
    },

    /// Plan nested deeper than the configured limit
    #[error("Maximum expression depth of {max_depth} exceeded")]
    RecursionLimit { max_depth: usize },

    /// Any other failure reported by the concept source
    #[error(transparent)]
    Ontology(OntologyError),
}

impl EvalError {
    /// Create a field mismatch error from the two operands
    pub fn field_mismatch(left: &Concept, right: &Concept) -> Self {
        Self::FieldMismatch {
            left: field_label(left),
            right: field_label(right),
        }
    }

    /// Create an unsupported type error from the two operands
    pub fn unsupported_type(operator: SetOperator, left: &Concept, right: &Concept) -> Self {
        Self::UnsupportedType {
            operator,
            left: left.kind(),
            right: right.kind(),
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownConcept { .. } => lumin_diagnostics::LUM0100,
            Self::MalformedExpression(shape) => shape.code(),
            Self::FieldMismatch { .. } => LUM0201,
            Self::UnsupportedType { .. } => LUM0202,
            Self::RecursionLimit { .. } => LUM0203,
            Self::Ontology(err) => err.code(),
        }
    }
}

impl From<OntologyError> for EvalError {
    fn from(err: OntologyError) -> Self {
        match err {
            OntologyError::UnknownConcept { name } => Self::UnknownConcept { name },
            other => Self::Ontology(other),
        }
    }
}

impl From<EvalError> for LuminError {
    fn from(err: EvalError) -> Self {
        let builder = ErrorBuilder::new(err.code(), err.to_string());
        match err {
            EvalError::UnknownConcept { name } => builder.concept(name).ontology(),
            EvalError::MalformedExpression(shape) => builder.at(shape.path().clone()).expression(),
            EvalError::Ontology(inner) => inner.into(),
            EvalError::FieldMismatch { .. }
            | EvalError::UnsupportedType { .. }
            | EvalError::RecursionLimit { .. } => builder.evaluation(),
        }
    }
}

fn field_label(concept: &Concept) -> String {
    match concept.field() {
        Some(field) => field.to_string(),
        None => format!("<mixed {}>", concept.kind()),
    }
}
