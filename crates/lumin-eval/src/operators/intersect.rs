//! INTERSECT operator
//!
//! Dispatch is by operand shape once both operands are known to share a field:
//! - scalar ∩ scalar: interval meet
//! - categorical ∩ categorical: set intersection
//! - any pair involving a cyclic range or multi-range: unroll then pairwise
//!   segment intersection
//!
//! A meet with nothing in it collapses to the empty sentinel, and the empty
//! sentinel absorbs whatever it is intersected with.

use super::cyclic::{intersect_segments, unroll};
use crate::error::{EvalError, EvalResult};
use lumin_ast::SetOperator;
use lumin_types::{Categorical, Concept, MultiRange, ScalarRange};

/// Intersect two concepts on the same field
pub fn intersect(left: Concept, right: Concept) -> EvalResult<Concept> {
    if left.field() != right.field() {
        return Err(EvalError::field_mismatch(&left, &right));
    }

    match (left, right) {
        (Concept::Empty(empty), _) | (_, Concept::Empty(empty)) => Ok(Concept::Empty(empty)),
        (Concept::ScalarRange(a), Concept::ScalarRange(b)) => Ok(scalar_intersect(a, &b)),
        (Concept::Categorical(a), Concept::Categorical(b)) => Ok(categorical_intersect(a, &b)),
        (left, right) if takes_segment_path(&left) || takes_segment_path(&right) => {
            segment_intersect(&left, &right)
        }
        (left, right) => Err(EvalError::unsupported_type(SetOperator::Intersect, &left, &right)),
    }
}

fn takes_segment_path(concept: &Concept) -> bool {
    matches!(concept, Concept::CyclicRange(_) | Concept::MultiRange(_))
}

fn scalar_intersect(a: ScalarRange, b: &ScalarRange) -> Concept {
    let min = a.min.max(b.min);
    let max = a.max.min(b.max);
    if min > max {
        return Concept::empty(a.field);
    }
    Concept::ScalarRange(ScalarRange { min, max, ..a })
}

fn categorical_intersect(a: Categorical, b: &Categorical) -> Concept {
    let values: std::collections::BTreeSet<String> = a.values.intersection(&b.values).cloned().collect();
    if values.is_empty() {
        return Concept::empty(a.field);
    }
    Concept::Categorical(Categorical { field: a.field, values })
}

fn segment_intersect(left: &Concept, right: &Concept) -> EvalResult<Concept> {
    let (Some(a), Some(b)) = (unroll(left), unroll(right)) else {
        return Err(EvalError::unsupported_type(SetOperator::Intersect, left, right));
    };

    let field = left.field().unwrap_or_default().to_string();
    let ranges = intersect_segments(&a, &b);
    log::trace!(
        "Unrolled {} x {} segments on '{}', {} overlap",
        a.len(),
        b.len(),
        field,
        ranges.len()
    );

    if ranges.is_empty() {
        Ok(Concept::empty(field))
    } else {
        Ok(Concept::MultiRange(MultiRange { field, ranges }))
    }
}
