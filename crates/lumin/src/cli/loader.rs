//! Ontology resolution and loading for CLI commands

use anyhow::{Context, Result};
use lumin_diagnostics::{LUM0402, LuminError};
use lumin_ontology::{LoadOptions, OntologyStore};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no `--ontology` is given
pub const ONTOLOGY_ENV: &str = "LUMIN_ONTOLOGY";

/// Pick the ontology file from the flag, falling back to `LUMIN_ONTOLOGY`
pub fn resolve_ontology_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_from(explicit, std::env::var(ONTOLOGY_ENV).ok())
}

/// Resolve against an already-read environment value
///
/// An empty variable counts as unset.
pub fn resolve_from(explicit: Option<PathBuf>, env: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match env {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(LuminError::system(
            LUM0402,
            format!("No ontology given; pass --ontology <file> or set {}", ONTOLOGY_ENV),
        )
        .into()),
    }
}

/// Load and validate an ontology file
///
/// `default_period` fills in `range_max` for cyclic entries that omit it;
/// with `None` such entries fail the load.
pub fn load_ontology(path: &Path, default_period: Option<f64>) -> Result<OntologyStore> {
    let options = LoadOptions { default_period };
    OntologyStore::from_file(path, &options)
        .map_err(LuminError::from)
        .with_context(|| format!("Failed to load ontology {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: &anyhow::Error) -> Option<lumin_diagnostics::ErrorCode> {
        err.downcast_ref::<LuminError>().map(LuminError::code)
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_ontology_path(Some(PathBuf::from("mars.json"))).unwrap();
        assert_eq!(path, PathBuf::from("mars.json"));

        let path = resolve_from(Some(PathBuf::from("mars.json")), Some("venus.json".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("mars.json"));
    }

    #[test]
    fn test_env_fallback() {
        let path = resolve_from(None, Some("/data/mars.json".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/data/mars.json"));
    }

    #[test]
    fn test_empty_env_counts_as_unset() {
        let err = resolve_from(None, Some(String::new())).unwrap_err();
        assert_eq!(code_of(&err), Some(LUM0402));
    }

    #[test]
    fn test_missing_ontology_is_a_configuration_error() {
        let err = resolve_from(None, None).unwrap_err();
        assert_eq!(code_of(&err), Some(LUM0402));
        assert!(err.to_string().contains("LUMIN_ONTOLOGY"), "{err}");
    }

    #[test]
    fn test_load_error_keeps_lumin_code() {
        let err = load_ontology(Path::new("missing.toml"), Some(24.0)).unwrap_err();
        let lumin = err.downcast_ref::<LuminError>().unwrap();
        assert_eq!(lumin.code(), lumin_diagnostics::LUM0107);
    }
}
