//! Grounding Engine
//!
//! This module provides the [`GroundingEngine`], which walks a grounding plan
//! depth-first, resolves its leaves against a concept source and folds the
//! resolved operands through the set-algebra kernel.

use crate::error::{EvalError, EvalResult};
use crate::operators;
use lumin_ast::Expression;
use lumin_ontology::ConceptSource;
use lumin_types::Concept;
use serde_json::Value;

/// Default maximum plan depth
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest plan node the engine will visit; the root is depth 1
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The plan evaluator
///
/// The engine holds no per-evaluation state. A single instance can ground
/// plans from many threads against one shared source.
#[derive(Debug, Clone, Default)]
pub struct GroundingEngine {
    config: EngineConfig,
}

impl GroundingEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a plan against a concept source
    ///
    /// Leaves resolve to copies of the stored concepts; the source is never
    /// modified. The first error aborts the whole evaluation.
    pub fn evaluate<S>(&self, expr: &Expression, source: &S) -> EvalResult<Concept>
    where
        S: ConceptSource + ?Sized,
    {
        self.evaluate_at(expr, source, 1)
    }

    /// Parse a JSON plan and evaluate it
    pub fn ground_json<S>(&self, plan: &Value, source: &S) -> EvalResult<Concept>
    where
        S: ConceptSource + ?Sized,
    {
        let expr = Expression::from_json(plan)?;
        log::debug!("Grounding {}", expr);
        self.evaluate(&expr, source)
    }

    fn evaluate_at<S>(&self, expr: &Expression, source: &S, depth: usize) -> EvalResult<Concept>
    where
        S: ConceptSource + ?Sized,
    {
        if depth > self.config.max_depth {
            return Err(EvalError::RecursionLimit {
                max_depth: self.config.max_depth,
            });
        }

        match expr {
            Expression::Concept(name) => {
                let concept = source.lookup(name)?;
                log::trace!("Resolved '{}' to {}", name, concept.kind());
                Ok(concept.clone())
            }
            Expression::Apply { op, left, right } => {
                let left = self.evaluate_at(left, source, depth + 1)?;
                let right = self.evaluate_at(right, source, depth + 1)?;
                let (left_kind, right_kind) = (left.kind(), right.kind());

                let result = operators::apply(*op, left, right)?;
                log::debug!("{} of {} and {} gave {}", op, left_kind, right_kind, result.kind());
                Ok(result)
            }
        }
    }
}
