//! Difference Operator Tests

use crate::common::LTST;
use lumin_ast::SetOperator;
use lumin_eval::apply;
use lumin_types::{Concept, DifferenceResult};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Concept::scalar("latitude", 60.0, 90.0), Concept::categorical("instrument", ["TES"]))]
#[case(Concept::cyclic(LTST, 23.0, 1.0, 24.0), Concept::scalar("latitude", 0.0, 1.0))]
#[case(Concept::empty("latitude"), Concept::empty("longitude"))]
fn test_mismatched_fields_return_base_verbatim(#[case] base: Concept, #[case] removed: Concept) {
    let expected = serde_json::to_string(&base).unwrap();
    let result = apply(SetOperator::Difference, base, removed).unwrap();
    assert_eq!(serde_json::to_string(&result).unwrap(), expected);
}

#[test]
fn test_matching_fields_wrap_both_inputs() {
    let base = Concept::cyclic(LTST, 20.0, 4.0, 24.0);
    let removed = Concept::cyclic(LTST, 23.0, 1.0, 24.0);

    let result = apply(SetOperator::Difference, base.clone(), removed.clone()).unwrap();
    assert_eq!(
        result,
        Concept::DifferenceResult(DifferenceResult {
            base: Box::new(base),
            removed: Box::new(removed),
        })
    );
}

#[test]
fn test_difference_is_not_computed() {
    let base = Concept::scalar("latitude", 0.0, 10.0);
    let result = apply(SetOperator::Difference, base.clone(), base.clone()).unwrap();
    assert!(!result.is_empty());
    assert_eq!(result.field(), Some("latitude"));
}
