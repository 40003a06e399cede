//! Cyclic range arithmetic
//!
//! A cyclic range `[min, max]` on a period `P` is read as the wraparound
//! interval `[min, P]` plus `[0, max]`. Rather than reasoning on the circle,
//! operands are unrolled into linear segments and intersected pairwise.

use lumin_types::{Concept, Segment};
use smallvec::SmallVec;

/// Linear segments of an unrolled operand
///
/// Two inline slots cover every stored shape; multi-ranges may spill.
pub type Segments = SmallVec<[Segment; 2]>;

/// Unroll a concept into the linear segments it covers
///
/// Cyclic ranges always yield two segments in `[min, P], [0, max]` order,
/// whether or not `min > max`; scalar ranges yield one; multi-ranges yield
/// their own segments. Shapes without a linear reading return `None`.
pub fn unroll(concept: &Concept) -> Option<Segments> {
    match concept {
        Concept::ScalarRange(c) => Some(smallvec::smallvec![c.segment()]),
        Concept::CyclicRange(c) => Some(smallvec::smallvec![
            Segment::new(c.min, c.range_max),
            Segment::new(0.0, c.max),
        ]),
        Concept::MultiRange(c) => Some(c.ranges.iter().copied().collect()),
        Concept::Categorical(_)
        | Concept::DifferenceResult(_)
        | Concept::Union(_)
        | Concept::Empty(_) => None,
    }
}

/// Pairwise intersection of two segment lists
///
/// Pairs are visited left-major and only overlapping pairs are kept. The
/// output is not sorted or coalesced.
pub fn intersect_segments(left: &[Segment], right: &[Segment]) -> Vec<Segment> {
    left.iter()
        .flat_map(|a| right.iter().filter_map(move |b| a.intersect(b)))
        .collect()
}
