//! Property tests for the intersect kernel

use lumin_ast::SetOperator;
use lumin_eval::apply;
use lumin_types::Concept;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Concept> {
    (-1000.0..1000.0f64, 0.0..500.0f64).prop_map(|(min, width)| Concept::scalar("x", min, min + width))
}

fn categorical() -> impl Strategy<Value = Concept> {
    prop::collection::btree_set("[A-F]", 0..4).prop_map(|values| Concept::categorical("x", values))
}

fn wrapping_clock() -> impl Strategy<Value = Concept> {
    (12.0..24.0f64, 0.0..12.0f64).prop_map(|(min, max)| Concept::cyclic("x", min, max, 24.0))
}

fn intersect(left: &Concept, right: &Concept) -> Concept {
    apply(SetOperator::Intersect, left.clone(), right.clone()).unwrap()
}

proptest! {
    #[test]
    fn scalar_intersect_commutes(a in scalar(), b in scalar()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn categorical_intersect_commutes(a in categorical(), b in categorical()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn scalar_meet_never_inverts(a in scalar(), b in scalar()) {
        match intersect(&a, &b) {
            Concept::ScalarRange(range) => prop_assert!(range.min <= range.max),
            Concept::Empty(empty) => prop_assert_eq!(empty.field, "x"),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn scalar_intersect_is_idempotent(a in scalar()) {
        prop_assert_eq!(intersect(&a, &a), a);
    }

    #[test]
    fn cyclic_segments_stay_inside_the_window(clock in wrapping_clock(), lo in 0.0..24.0f64, width in 0.0..24.0f64) {
        let window = Concept::scalar("x", lo, (lo + width).min(24.0));
        match intersect(&clock, &window) {
            Concept::MultiRange(multi) => {
                prop_assert!(!multi.ranges.is_empty() && multi.ranges.len() <= 2);
                for segment in &multi.ranges {
                    prop_assert!(segment.min <= segment.max);
                    prop_assert!(segment.min >= lo && segment.max <= (lo + width).min(24.0));
                }
            }
            Concept::Empty(_) => {}
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
