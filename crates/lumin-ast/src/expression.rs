//! Expression trees

use crate::{SetOperator, UnknownOperator};
use lumin_diagnostics::{ErrorCode, ExprPath, LUM0001, LUM0002, LUM0003, LUM0004};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A grounding plan
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Reference to an ontology concept by exact name
    Concept(String),
    /// Operator applied to two sub-plans
    Apply {
        op: SetOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Create a concept leaf
    pub fn concept(name: impl Into<String>) -> Self {
        Self::Concept(name.into())
    }

    /// Create an operator application
    pub fn apply(op: SetOperator, left: Expression, right: Expression) -> Self {
        Self::Apply {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn intersect(left: Expression, right: Expression) -> Self {
        Self::apply(SetOperator::Intersect, left, right)
    }

    pub fn union(left: Expression, right: Expression) -> Self {
        Self::apply(SetOperator::Union, left, right)
    }

    pub fn difference(base: Expression, removed: Expression) -> Self {
        Self::apply(SetOperator::Difference, base, removed)
    }

    /// Decode a plan from its JSON tree form
    pub fn from_json(value: &Value) -> Result<Self, ShapeError> {
        Self::decode(value, ExprPath::root())
    }

    fn decode(value: &Value, path: ExprPath) -> Result<Self, ShapeError> {
        match value {
            Value::String(name) => Ok(Self::Concept(name.clone())),
            Value::Array(items) => {
                let [op, left, right] = items.as_slice() else {
                    return Err(ShapeError::Arity {
                        len: items.len(),
                        path,
                    });
                };
                let token = op.as_str().ok_or_else(|| ShapeError::OperatorNotString {
                    found: json_kind(op),
                    path: path.child(0),
                })?;
                let op = token
                    .parse::<SetOperator>()
                    .map_err(|UnknownOperator(token)| ShapeError::UnknownOperator {
                        token,
                        path: path.child(0),
                    })?;
                let left = Self::decode(left, path.child(1))?;
                let right = Self::decode(right, path.child(2))?;
                Ok(Self::apply(op, left, right))
            }
            other => Err(ShapeError::InvalidLeaf {
                found: json_kind(other),
                path,
            }),
        }
    }

    /// Encode the plan in its JSON tree form
    pub fn to_json(&self) -> Value {
        match self {
            Self::Concept(name) => Value::String(name.clone()),
            Self::Apply { op, left, right } => Value::Array(vec![
                Value::String(op.as_str().to_string()),
                left.to_json(),
                right.to_json(),
            ]),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concept(name) => write!(f, "'{}'", name),
            Self::Apply { op, left, right } => write!(f, "{}({}, {})", op, left, right),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(de::Error::custom)
    }
}

/// A plan that does not have the shape of an expression tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown operator '{token}' at {path}")]
    UnknownOperator { token: String, path: ExprPath },

    #[error("operator must be a string, found {found} at {path}")]
    OperatorNotString { found: &'static str, path: ExprPath },

    #[error("operator application has {len} elements, expected 3 at {path}")]
    Arity { len: usize, path: ExprPath },

    #[error("expected a concept name or an operator application, found {found} at {path}")]
    InvalidLeaf { found: &'static str, path: ExprPath },
}

impl ShapeError {
    /// Position of the offending node
    pub fn path(&self) -> &ExprPath {
        match self {
            Self::UnknownOperator { path, .. }
            | Self::OperatorNotString { path, .. }
            | Self::Arity { path, .. }
            | Self::InvalidLeaf { path, .. } => path,
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownOperator { .. } => LUM0002,
            Self::OperatorNotString { .. } => LUM0001,
            Self::Arity { .. } => LUM0003,
            Self::InvalidLeaf { .. } => LUM0004,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
