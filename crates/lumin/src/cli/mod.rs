//! CLI functionality for the lumin tool
//!
//! This module contains all CLI-related functionality including:
//! - Plan grounding
//! - Concept listing
//! - Ontology validation
//! - Ontology resolution
//! - Output formatting and logging

pub mod concepts;
pub mod ground;
pub mod loader;
pub mod logging;
pub mod output;
pub mod validate;
