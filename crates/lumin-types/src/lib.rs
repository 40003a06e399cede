//! LUMIN concept types
//!
//! This crate defines the value model the grounding engine operates on:
//! - Stored concept shapes (scalar ranges, categorical sets, cyclic ranges)
//! - Derived shapes produced by the set-algebra kernel (multi-ranges,
//!   deferred unions and differences, the empty set)
//! - Linear segments used when unrolling cyclic ranges

mod concept;
mod segment;

pub use concept::*;
pub use segment::*;
