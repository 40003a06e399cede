//! Set-algebra operators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operators a grounding plan may apply to two sub-plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SetOperator {
    /// Overlap of both operands
    Intersect,
    /// Combination of both operands (deferred)
    Union,
    /// Base with the second operand removed (deferred)
    Difference,
}

impl SetOperator {
    /// All operators, in token order
    pub const ALL: [SetOperator; 3] = [
        SetOperator::Intersect,
        SetOperator::Union,
        SetOperator::Difference,
    ];

    /// The literal token used in plans
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intersect => "INTERSECT",
            Self::Union => "UNION",
            Self::Difference => "DIFFERENCE",
        }
    }
}

impl fmt::Display for SetOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that names no operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for SetOperator {
    type Err = UnknownOperator;

    /// Tokens are matched exactly; `intersect` is not `INTERSECT`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
