//! LUMIN error types

use crate::{ErrorCode, ExprPath};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - grounding cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Position in the expression tree, if the problem is tied to one
    pub path: Option<ExprPath>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            path: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            path: None,
            help: None,
        }
    }

    /// Set the expression path
    pub fn with_path(mut self, path: ExprPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Help text, falling back to the static help registered for the code
    pub fn effective_help(&self) -> Option<&str> {
        self.help.as_deref().or(self.code.info().help)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " at {}", path)?;
        }
        Ok(())
    }
}

/// Main LUMIN error type
#[derive(Debug, Clone, Error)]
pub enum LuminError {
    /// Expression shape error
    #[error("{code}: {message}")]
    Expression {
        code: ErrorCode,
        message: String,
        path: Option<ExprPath>,
        context: Option<String>,
    },

    /// Ontology error (lookup or load-time validation)
    #[error("{code}: {message}")]
    Ontology {
        code: ErrorCode,
        message: String,
        concept: Option<String>,
        context: Option<String>,
    },

    /// Evaluation error
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// System error
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl LuminError {
    /// Create an expression error
    pub fn expression(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Expression {
            code,
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Expression { code, .. } => *code,
            Self::Ontology { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Get the expression path if available
    pub fn path(&self) -> Option<&ExprPath> {
        match self {
            Self::Expression { path, .. } => path.as_ref(),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Expression { code, message, path, context } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(path) = path {
                    diag = diag.with_path(path.clone());
                }
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
            Self::Ontology { code, message, concept, context } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                match (context, concept) {
                    (Some(ctx), _) => diag = diag.with_help(ctx.clone()),
                    (None, Some(name)) => diag = diag.with_help(format!("while reading concept '{}'", name)),
                    (None, None) => {}
                }
                diag
            }
            Self::Evaluation { code, message, context } | Self::System { code, message, context } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
        }
    }
}

/// Builder for creating LUMIN errors with fluent API
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    path: Option<ExprPath>,
    concept: Option<String>,
    context: Option<String>,
}

impl ErrorBuilder {
    /// Create a new error builder
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            concept: None,
            context: None,
        }
    }

    /// Set the expression path
    pub fn at(mut self, path: ExprPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the concept the error concerns
    pub fn concept(mut self, name: impl Into<String>) -> Self {
        self.concept = Some(name.into());
        self
    }

    /// Add context information
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build an expression error
    pub fn expression(self) -> LuminError {
        LuminError::Expression {
            code: self.code,
            message: self.message,
            path: self.path,
            context: self.context,
        }
    }

    /// Build an ontology error
    pub fn ontology(self) -> LuminError {
        LuminError::Ontology {
            code: self.code,
            message: self.message,
            concept: self.concept,
            context: self.context,
        }
    }

    /// Build an evaluation error
    pub fn evaluation(self) -> LuminError {
        LuminError::Evaluation {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }

    /// Build a system error
    pub fn system(self) -> LuminError {
        LuminError::System {
            code: self.code,
            message: self.message,
            context: self.context,
        }
    }
}
