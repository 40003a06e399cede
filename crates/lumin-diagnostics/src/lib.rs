//! LUMIN diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the grounding
//! crates: structured error codes, positions inside an expression tree, and
//! diagnostic reporting for the command line.

mod error;
mod error_code;
mod path;

pub use error::*;
pub use error_code::*;
pub use path::*;

/// Result type for LUMIN operations
pub type Result<T> = std::result::Result<T, LuminError>;
