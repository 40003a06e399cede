//! Set-Algebra Kernel
//!
//! Binary operators over resolved concepts, organized by operator:
//! - Intersect (scalar meet, categorical intersection, cyclic unroll)
//! - Union (deferred pair)
//! - Difference (deferred record)
//!
//! The cyclic segment arithmetic shared by the intersect paths lives in
//! `cyclic`. Operators take their operands by value and never touch the
//! ontology, so results never alias stored concepts.

pub mod cyclic;
pub mod difference;
pub mod intersect;
pub mod union;

pub use cyclic::{Segments, intersect_segments, unroll};
pub use difference::difference;
pub use intersect::intersect;
pub use union::union;

use crate::error::EvalResult;
use lumin_ast::SetOperator;
use lumin_types::Concept;

/// Apply a set operator to two resolved operands
pub fn apply(op: SetOperator, left: Concept, right: Concept) -> EvalResult<Concept> {
    match op {
        SetOperator::Intersect => intersect(left, right),
        SetOperator::Union => union(left, right),
        SetOperator::Difference => difference(left, right),
    }
}
