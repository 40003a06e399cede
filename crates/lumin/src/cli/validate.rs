//! Validate command implementation

use super::{loader, output};
use anyhow::{Result, bail};
use colored::Colorize;
use lumin_diagnostics::{Diagnostic, LUM0104};
use std::path::{Path, PathBuf};

/// Configuration for validate command
pub struct ValidateConfig {
    pub files: Vec<PathBuf>,
    pub default_period: Option<f64>,
    /// Reject cyclic entries that rely on the default period
    pub strict: bool,
    pub verbose: bool,
}

/// Validation result for a single file
#[derive(Debug)]
pub struct ValidationResult {
    pub file: PathBuf,
    pub concepts: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate ontology files
pub fn validate(config: ValidateConfig) -> Result<()> {
    if config.files.is_empty() {
        bail!("No files specified for validation");
    }

    let results: Vec<ValidationResult> = config
        .files
        .iter()
        .map(|file| validate_file(file, config.default_period, config.strict))
        .collect();

    let total_errors: usize = results.iter().map(|r| r.errors.len()).sum();
    let total_warnings: usize = results.iter().map(|r| r.warnings.len()).sum();

    for result in &results {
        print_validation_result(result, config.verbose);
    }

    println!();
    if total_errors == 0 && total_warnings == 0 {
        println!(
            "{}",
            output::format_success(&format!("All {} file(s) valid", results.len()))
        );
    } else {
        println!(
            "Found {} error(s) and {} warning(s) in {} file(s)",
            total_errors.to_string().red(),
            total_warnings.to_string().yellow(),
            results.len()
        );
    }

    if total_errors > 0 {
        bail!("Validation failed");
    }
    Ok(())
}

/// Load one ontology file and collect its findings
///
/// Strict mode reloads without a default period so that every cyclic entry
/// missing `range_max` is reported as an error instead of a warning.
pub fn validate_file(file: &Path, default_period: Option<f64>, strict: bool) -> ValidationResult {
    let mut result = ValidationResult {
        file: file.to_path_buf(),
        concepts: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let period = if strict { None } else { default_period };
    match loader::load_ontology(file, period) {
        Ok(store) => {
            result.concepts = store.len();
            result.warnings = store
                .defaulted_periods()
                .iter()
                .map(|name| {
                    Diagnostic::warning(
                        LUM0104,
                        format!("Concept '{}' has no range_max and uses the default period", name),
                    )
                })
                .collect();
        }
        Err(e) => result.errors.push(output::format_error(&e)),
    }
    result
}

fn print_validation_result(result: &ValidationResult, verbose: bool) {
    if result.success() {
        println!(
            "{} {} ({} concepts)",
            "✓".green().bold(),
            result.file.display(),
            result.concepts
        );
    } else {
        println!("{} {}", "✗".red().bold(), result.file.display());
    }

    for error in &result.errors {
        println!("  {}", error);
    }
    if verbose || !result.success() {
        for warning in &result.warnings {
            println!("  {}", output::format_warning(&format!("{} - {}", warning.code, warning.message)));
        }
    } else if !result.warnings.is_empty() {
        println!("  {} warning(s), use --verbose to show", result.warnings.len());
    }
}
