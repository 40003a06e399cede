//! UNION operator
//!
//! Unions are never merged here. The pair is handed on as-is for the catalog
//! query builder to turn into a disjunction.

use crate::error::EvalResult;
use lumin_types::{Concept, DeferredUnion};

/// Defer the union of two concepts
///
/// Operands may sit on different fields and may be of any shape.
pub fn union(left: Concept, right: Concept) -> EvalResult<Concept> {
    Ok(Concept::Union(DeferredUnion::new(left, right)))
}
