//! Intersect Operator Tests
//!
//! Tests for: scalar meet, categorical intersection, cyclic unroll, multi-range
//! composition, empty propagation, field and shape errors

use crate::common::{LTST, multi};
use lumin_ast::SetOperator;
use lumin_eval::{EvalError, apply};
use lumin_types::Concept;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn intersect(left: Concept, right: Concept) -> Result<Concept, EvalError> {
    apply(SetOperator::Intersect, left, right)
}

fn time(min: f64, max: f64) -> Concept {
    Concept::scalar(LTST, min, max)
}

fn clock(min: f64, max: f64) -> Concept {
    Concept::cyclic(LTST, min, max, 24.0)
}

// ============================================================================
// Scalar Tests
// ============================================================================

#[rstest]
#[case((0.0, 10.0), (5.0, 20.0), (5.0, 10.0))]
#[case((5.0, 20.0), (0.0, 10.0), (5.0, 10.0))]
#[case((0.0, 10.0), (2.0, 3.0), (2.0, 3.0))]
#[case((-90.0, 90.0), (-90.0, 90.0), (-90.0, 90.0))]
fn test_scalar_meet(#[case] a: (f64, f64), #[case] b: (f64, f64), #[case] expected: (f64, f64)) {
    let result = intersect(
        Concept::scalar("latitude", a.0, a.1),
        Concept::scalar("latitude", b.0, b.1),
    )
    .unwrap();
    assert_eq!(result, Concept::scalar("latitude", expected.0, expected.1));
}

#[test]
fn test_scalar_no_overlap_is_empty_sentinel() {
    let result = intersect(
        Concept::scalar("latitude", 0.0, 1.0),
        Concept::scalar("latitude", 5.0, 6.0),
    )
    .unwrap();
    assert!(result.is_empty());
    assert_eq!(result, Concept::empty("latitude"));
}

// ============================================================================
// Categorical Tests
// ============================================================================

#[test]
fn test_categorical_intersection() {
    let result = intersect(
        Concept::categorical("instrument", ["A", "B", "C"]),
        Concept::categorical("instrument", ["B", "C", "D"]),
    )
    .unwrap();
    assert_eq!(result, Concept::categorical("instrument", ["C", "B"]));
}

#[test]
fn test_categorical_values_are_case_sensitive() {
    let result = intersect(
        Concept::categorical("instrument", ["TES"]),
        Concept::categorical("instrument", ["tes"]),
    )
    .unwrap();
    assert_eq!(result, Concept::empty("instrument"));
}

// ============================================================================
// Cyclic Tests
// ============================================================================

#[test]
fn test_midnight_observation_window() {
    let result = intersect(clock(23.0, 1.0), time(0.5, 2.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(0.5, 1.0)]));
}

#[test]
fn test_window_before_midnight() {
    let result = intersect(time(22.0, 23.5), clock(23.0, 1.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(23.0, 23.5)]));
}

#[test]
fn test_both_cyclic_visits_all_four_pairs() {
    let result = intersect(clock(20.0, 4.0), clock(23.0, 1.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(23.0, 24.0), (0.0, 1.0)]));
}

#[test]
fn test_overlapping_segments_are_not_coalesced() {
    let result = intersect(clock(22.0, 2.0), time(0.0, 24.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(22.0, 24.0), (0.0, 2.0)]));
}

#[test]
fn test_touching_segments_survive_as_points() {
    let result = intersect(clock(23.0, 1.0), time(1.0, 23.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(23.0, 23.0), (1.0, 1.0)]));
}

#[test]
fn test_non_wrapping_cyclic_still_splits_at_the_period() {
    let result = intersect(clock(13.0, 17.0), time(16.0, 20.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(16.0, 20.0), (16.0, 17.0)]));
}

#[test]
fn test_non_wrapping_cyclic_reaches_past_midnight() {
    let result = intersect(clock(13.0, 17.0), time(0.5, 2.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(0.5, 2.0)]));

    let result = intersect(time(0.5, 2.0), clock(13.0, 17.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(0.5, 2.0)]));
}

#[test]
fn test_two_cyclic_ranges_pair_up_segment_by_segment() {
    let result = intersect(clock(23.0, 1.0), clock(13.0, 17.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(23.0, 24.0), (0.0, 1.0)]));
}

#[test]
fn test_cyclic_no_overlap_is_empty_sentinel() {
    let result = intersect(clock(23.0, 1.0), time(10.0, 14.0)).unwrap();
    assert_eq!(result, Concept::empty(LTST));
}

#[test]
fn test_multi_range_feeds_back_into_intersect() {
    let night = intersect(clock(20.0, 4.0), time(0.0, 24.0)).unwrap();
    let result = intersect(night, clock(23.0, 1.0)).unwrap();
    assert_eq!(result, multi(LTST, &[(23.0, 24.0), (0.0, 1.0)]));
}

// ============================================================================
// Empty Propagation Tests
// ============================================================================

#[rstest]
#[case(time(0.0, 1.0))]
#[case(clock(23.0, 1.0))]
#[case(multi(LTST, &[(0.0, 1.0)]))]
fn test_empty_absorbs(#[case] other: Concept) {
    let empty = Concept::empty(LTST);
    assert_eq!(intersect(empty.clone(), other.clone()).unwrap(), empty);
    assert_eq!(intersect(other, empty.clone()).unwrap(), empty);
}

// ============================================================================
// Error Tests
// ============================================================================

#[rstest]
#[case(Concept::scalar("latitude", 0.0, 1.0), Concept::scalar("longitude", 0.0, 1.0))]
#[case(Concept::categorical("instrument", ["TES"]), Concept::categorical("target", ["TES"]))]
#[case(clock(23.0, 1.0), Concept::scalar("latitude", 0.0, 1.0))]
#[case(Concept::empty("latitude"), Concept::scalar("longitude", 0.0, 1.0))]
fn test_field_mismatch_regardless_of_shape(#[case] left: Concept, #[case] right: Concept) {
    let err = intersect(left, right).unwrap_err();
    assert!(matches!(err, EvalError::FieldMismatch { .. }), "got {err:?}");
}

#[test]
fn test_deferred_operands_are_unsupported() {
    let union = apply(SetOperator::Union, time(0.0, 1.0), time(2.0, 3.0)).unwrap();
    let err = intersect(union, time(0.0, 5.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported operand types for INTERSECT: union and scalar_range"
    );
}
