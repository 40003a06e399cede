//! Position tracking inside an expression tree
//!
//! Expressions arrive as nested JSON arrays, so a position is the sequence of
//! array indices leading from the root to a node. It is rendered in JSON
//! Pointer style (`/2/1`), with the root rendered as `/`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path from the root of an expression tree to one of its nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExprPath(Vec<usize>);

impl ExprPath {
    /// The root of the tree
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Path to the `index`-th element of the node at this path
    #[inline]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl fmt::Display for ExprPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}
