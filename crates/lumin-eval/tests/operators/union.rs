//! Union Operator Tests

use crate::common::LTST;
use lumin_ast::SetOperator;
use lumin_eval::apply;
use lumin_types::Concept;
use pretty_assertions::assert_eq;

#[test]
fn test_union_of_any_shapes() {
    let left = Concept::cyclic(LTST, 23.0, 1.0, 24.0);
    let right = Concept::categorical("instrument", ["THEMIS"]);

    let result = apply(SetOperator::Union, left.clone(), right.clone()).unwrap();
    let Concept::Union(deferred) = result else {
        panic!("Expected deferred union");
    };
    assert_eq!(*deferred.operands, [left, right]);
}

#[test]
fn test_union_keeps_empty_operands() {
    let result = apply(
        SetOperator::Union,
        Concept::empty("latitude"),
        Concept::empty("latitude"),
    )
    .unwrap();
    assert_eq!(result.field(), Some("latitude"));
    assert!(!result.is_empty());
}

#[test]
fn test_nested_unions_stay_nested() {
    let inner = apply(
        SetOperator::Union,
        Concept::scalar("latitude", 0.0, 1.0),
        Concept::scalar("latitude", 2.0, 3.0),
    )
    .unwrap();
    let outer = apply(SetOperator::Union, inner.clone(), Concept::scalar("latitude", 4.0, 5.0)).unwrap();

    let Concept::Union(deferred) = outer else {
        panic!("Expected deferred union");
    };
    assert_eq!(deferred.operands[0], inner);
}
