//! Concept values
//!
//! A concept is a typed selection criterion over a single data field. Stored
//! ontology entries are scalar ranges, categorical sets or cyclic ranges; the
//! remaining variants only ever come out of the set-algebra kernel.
//!
//! Concepts serialize with an internal `type` tag so the JSON form matches the
//! ontology file format:
//!
//! ```json
//! {"type": "cyclic_range", "field": "local_true_solar_time", "min": 23.0, "max": 1.0, "range_max": 24.0}
//! ```

use crate::Segment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A resolved concept value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Concept {
    /// Closed numeric interval
    ScalarRange(ScalarRange),
    /// Finite set of discrete labels
    Categorical(Categorical),
    /// Interval on a circular domain, wrapping when `min > max`
    CyclicRange(CyclicRange),
    /// Union of linear segments produced by cyclic intersection
    MultiRange(MultiRange),
    /// Unevaluated subtraction
    DifferenceResult(DifferenceResult),
    /// Unevaluated union of two concepts
    Union(DeferredUnion),
    /// Provably empty selection
    Empty(EmptySet),
}

impl Concept {
    /// The data field this concept selects on
    ///
    /// A deferred union only has a field when both operands agree on it.
    pub fn field(&self) -> Option<&str> {
        match self {
            Concept::ScalarRange(c) => Some(&c.field),
            Concept::Categorical(c) => Some(&c.field),
            Concept::CyclicRange(c) => Some(&c.field),
            Concept::MultiRange(c) => Some(&c.field),
            Concept::DifferenceResult(c) => c.base.field(),
            Concept::Union(c) => {
                let [left, right] = &*c.operands;
                match (left.field(), right.field()) {
                    (Some(l), Some(r)) if l == r => Some(l),
                    _ => None,
                }
            }
            Concept::Empty(c) => Some(&c.field),
        }
    }

    /// The shape of this concept
    pub fn kind(&self) -> ConceptKind {
        match self {
            Concept::ScalarRange(_) => ConceptKind::ScalarRange,
            Concept::Categorical(_) => ConceptKind::Categorical,
            Concept::CyclicRange(_) => ConceptKind::CyclicRange,
            Concept::MultiRange(_) => ConceptKind::MultiRange,
            Concept::DifferenceResult(_) => ConceptKind::DifferenceResult,
            Concept::Union(_) => ConceptKind::Union,
            Concept::Empty(_) => ConceptKind::Empty,
        }
    }

    /// Check if this is the empty-result sentinel
    pub fn is_empty(&self) -> bool {
        matches!(self, Concept::Empty(_))
    }

    /// Create a scalar range concept
    pub fn scalar(field: impl Into<String>, min: f64, max: f64) -> Self {
        Concept::ScalarRange(ScalarRange::new(field, min, max))
    }

    /// Create a categorical concept
    pub fn categorical<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Concept::Categorical(Categorical::new(field, values))
    }

    /// Create a cyclic range concept
    pub fn cyclic(field: impl Into<String>, min: f64, max: f64, range_max: f64) -> Self {
        Concept::CyclicRange(CyclicRange::new(field, min, max, range_max))
    }

    /// Create the empty-result sentinel for a field
    pub fn empty(field: impl Into<String>) -> Self {
        Concept::Empty(EmptySet { field: field.into() })
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concept::ScalarRange(c) => {
                write!(f, "{} in [{}, {}]", c.field, c.min, c.max)?;
                if let Some(unit) = &c.unit {
                    write!(f, " {}", unit)?;
                }
                Ok(())
            }
            Concept::Categorical(c) => {
                let values: Vec<&str> = c.values.iter().map(String::as_str).collect();
                write!(f, "{} in {{{}}}", c.field, values.join(", "))
            }
            Concept::CyclicRange(c) => {
                write!(f, "{} in [{}, {}] mod {}", c.field, c.min, c.max, c.range_max)
            }
            Concept::MultiRange(c) => {
                let ranges: Vec<String> = c.ranges.iter().map(ToString::to_string).collect();
                write!(f, "{} in {}", c.field, ranges.join(" | "))
            }
            Concept::DifferenceResult(c) => write!(f, "({}) minus ({})", c.base, c.removed),
            Concept::Union(c) => {
                let [left, right] = &*c.operands;
                write!(f, "({}) or ({})", left, right)
            }
            Concept::Empty(c) => write!(f, "{} in {{}}", c.field),
        }
    }
}

/// Shape tag of a concept, as written in the `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    ScalarRange,
    Categorical,
    CyclicRange,
    MultiRange,
    DifferenceResult,
    Union,
    Empty,
}

impl ConceptKind {
    /// The `type` tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConceptKind::ScalarRange => "scalar_range",
            ConceptKind::Categorical => "categorical",
            ConceptKind::CyclicRange => "cyclic_range",
            ConceptKind::MultiRange => "multi_range",
            ConceptKind::DifferenceResult => "difference_result",
            ConceptKind::Union => "union",
            ConceptKind::Empty => "empty",
        }
    }

    /// Look up a kind by its `type` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            ConceptKind::ScalarRange,
            ConceptKind::Categorical,
            ConceptKind::CyclicRange,
            ConceptKind::MultiRange,
            ConceptKind::DifferenceResult,
            ConceptKind::Union,
            ConceptKind::Empty,
        ]
        .into_iter()
        .find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed numeric interval `[min, max]` on a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    pub field: String,
    pub min: f64,
    pub max: f64,
    /// Carried through intersections, never checked for compatibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ScalarRange {
    pub fn new(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            field: field.into(),
            min,
            max,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// The interval as a bare segment
    pub fn segment(&self) -> Segment {
        Segment::new(self.min, self.max)
    }
}

/// Finite set of labels on a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorical {
    pub field: String,
    pub values: BTreeSet<String>,
}

impl Categorical {
    pub fn new<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Interval on a circular domain `[0, range_max)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclicRange {
    pub field: String,
    pub min: f64,
    pub max: f64,
    /// Period of the domain
    pub range_max: f64,
}

impl CyclicRange {
    pub fn new(field: impl Into<String>, min: f64, max: f64, range_max: f64) -> Self {
        Self {
            field: field.into(),
            min,
            max,
            range_max,
        }
    }
}

/// Union of linear segments on a field, kept exactly as produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiRange {
    pub field: String,
    pub ranges: Vec<Segment>,
}

/// Deferred subtraction of `removed` from `base`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferenceResult {
    pub base: Box<Concept>,
    pub removed: Box<Concept>,
}

/// Deferred union of two concepts, left for the consumer to interpret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredUnion {
    pub operands: Box<[Concept; 2]>,
}

impl DeferredUnion {
    pub fn new(left: Concept, right: Concept) -> Self {
        Self {
            operands: Box::new([left, right]),
        }
    }
}

/// The empty selection on a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptySet {
    pub field: String,
}

macro_rules! impl_from_shape {
    ($($shape:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$shape> for Concept {
                fn from(value: $shape) -> Self {
                    Concept::$variant(value)
                }
            }
        )*
    };
}

impl_from_shape! {
    ScalarRange => ScalarRange,
    Categorical => Categorical,
    CyclicRange => CyclicRange,
    MultiRange => MultiRange,
    DifferenceResult => DifferenceResult,
    DeferredUnion => Union,
    EmptySet => Empty,
}
