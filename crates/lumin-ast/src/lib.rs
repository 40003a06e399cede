//! LUMIN grounding plan trees
//!
//! A grounding plan is what the upstream translator emits: either the name of
//! an ontology concept, or an operator applied to two sub-plans. On the wire a
//! plan is JSON, a string for a leaf and a three-element array
//! `["INTERSECT", left, right]` for an application.

mod expression;
mod operator;

pub use expression::*;
pub use operator::*;
