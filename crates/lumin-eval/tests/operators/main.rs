//! Set-algebra kernel tests
//!
//! Operators are exercised directly on concepts, without a plan or a store.

#[path = "../common/mod.rs"]
mod common;

mod difference;
mod intersect;
mod properties;
mod union;
