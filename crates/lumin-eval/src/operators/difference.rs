//! DIFFERENCE operator
//!
//! Subtraction is recorded, not computed. When the two operands select on
//! different fields the subtraction is a no-op and the base comes back as-is;
//! INTERSECT raises on the same situation.

use crate::error::EvalResult;
use lumin_types::{Concept, DifferenceResult};

/// Defer the removal of `removed` from `base`
pub fn difference(base: Concept, removed: Concept) -> EvalResult<Concept> {
    if base.field() != removed.field() {
        log::debug!(
            "DIFFERENCE across fields {:?} and {:?}, keeping base",
            base.field(),
            removed.field()
        );
        return Ok(base);
    }

    Ok(Concept::DifferenceResult(DifferenceResult {
        base: Box::new(base),
        removed: Box::new(removed),
    }))
}
