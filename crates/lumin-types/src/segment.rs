//! Linear segments

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed linear interval `[min, max]` without a field of its own
///
/// Segments are the building blocks of multi-ranges and the unit the kernel
/// works with once cyclic ranges have been unrolled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub min: f64,
    pub max: f64,
}

impl Segment {
    /// Create a segment; no ordering check is made on the bounds
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the segment contains at least one point
    pub fn is_proper(&self) -> bool {
        self.min <= self.max
    }

    /// Linear meet of two segments, `None` when they do not overlap
    pub fn intersect(&self, other: &Segment) -> Option<Segment> {
        let meet = Segment::new(self.min.max(other.min), self.max.min(other.max));
        meet.is_proper().then_some(meet)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
