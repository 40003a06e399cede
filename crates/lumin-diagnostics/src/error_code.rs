//! LUMIN error codes following a structured numbering system
//!
//! Error code ranges:
//! - LUM0001-LUM0099: Expression errors (tree shape, operator tokens)
//! - LUM0100-LUM0199: Ontology errors (lookup, load-time validation)
//! - LUM0200-LUM0299: Evaluation errors (set-algebra kernel)
//! - LUM0400-LUM0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LUM{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Expression errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed expression"));
    map.insert(
        2,
        ErrorInfo::new("Unknown operator")
            .with_help("Operators are INTERSECT, UNION and DIFFERENCE"),
    );
    map.insert(
        3,
        ErrorInfo::new("Invalid operator arity")
            .with_help("An operator application is exactly [operator, left, right]"),
    );
    map.insert(4, ErrorInfo::new("Invalid expression leaf"));
    map.insert(5, ErrorInfo::new("Invalid expression document"));

    // Ontology errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Unknown concept")
            .with_help("Concept names are matched exactly; run `lumin concepts` to list them"),
    );
    map.insert(101, ErrorInfo::new("Unknown concept type"));
    map.insert(102, ErrorInfo::new("Missing concept attribute"));
    map.insert(103, ErrorInfo::new("Invalid concept bounds"));
    map.insert(
        104,
        ErrorInfo::new("Missing cyclic period")
            .with_help("Set range_max on the entry or pass --default-period"),
    );
    map.insert(105, ErrorInfo::new("Invalid cyclic period"));
    map.insert(106, ErrorInfo::new("Ontology parse failed"));
    map.insert(107, ErrorInfo::new("Unsupported ontology format"));

    // Evaluation errors (0200-0299)
    map.insert(
        201,
        ErrorInfo::new("Field mismatch")
            .with_help("Only concepts on the same field can be intersected"),
    );
    map.insert(202, ErrorInfo::new("Unsupported concept type for operator"));
    map.insert(203, ErrorInfo::new("Recursion limit exceeded"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(
        402,
        ErrorInfo::new("Configuration error")
            .with_help("Pass --ontology <file> or set LUMIN_ONTOLOGY"),
    );
    map.insert(406, ErrorInfo::new("Invalid format"));

    map
});

// Convenient error code constants

// Expression errors
pub const LUM0001: ErrorCode = ErrorCode::new(1);
pub const LUM0002: ErrorCode = ErrorCode::new(2);
pub const LUM0003: ErrorCode = ErrorCode::new(3);
pub const LUM0004: ErrorCode = ErrorCode::new(4);
pub const LUM0005: ErrorCode = ErrorCode::new(5);

// Ontology errors
pub const LUM0100: ErrorCode = ErrorCode::new(100);
pub const LUM0101: ErrorCode = ErrorCode::new(101);
pub const LUM0102: ErrorCode = ErrorCode::new(102);
pub const LUM0103: ErrorCode = ErrorCode::new(103);
pub const LUM0104: ErrorCode = ErrorCode::new(104);
pub const LUM0105: ErrorCode = ErrorCode::new(105);
pub const LUM0106: ErrorCode = ErrorCode::new(106);
pub const LUM0107: ErrorCode = ErrorCode::new(107);

// Evaluation errors
pub const LUM0201: ErrorCode = ErrorCode::new(201);
pub const LUM0202: ErrorCode = ErrorCode::new(202);
pub const LUM0203: ErrorCode = ErrorCode::new(203);

// System errors
pub const LUM0401: ErrorCode = ErrorCode::new(401);
pub const LUM0402: ErrorCode = ErrorCode::new(402);
pub const LUM0406: ErrorCode = ErrorCode::new(406);
