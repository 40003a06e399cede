//! Ontology entries and load-time validation

use crate::OntologyError;
use lumin_types::{Categorical, Concept, ConceptKind, CyclicRange, ScalarRange};
use serde::Deserialize;
use serde_json::Value;

/// Settings applied while loading an ontology
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOptions {
    /// Period used for cyclic entries that do not declare `range_max`
    ///
    /// With no default, such entries fail to load.
    pub default_period: Option<f64>,
}

impl LoadOptions {
    pub fn with_default_period(mut self, period: f64) -> Self {
        self.default_period = Some(period);
        self
    }
}

/// An ontology entry as written in the source document
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    field: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    unit: Option<String>,
    values: Option<Vec<String>>,
    range_max: Option<f64>,
}

/// A validated entry
#[derive(Debug)]
pub(crate) struct Entry {
    pub concept: Concept,
    /// Whether the cyclic period came from [`LoadOptions::default_period`]
    pub defaulted_period: bool,
}

pub(crate) fn parse_entry(name: &str, value: Value, options: &LoadOptions) -> Result<Entry, OntologyError> {
    let raw: RawEntry = serde_json::from_value(value)
        .map_err(|e| OntologyError::Parse(format!("concept '{}': {}", name, e)))?;

    let tag = raw.kind.ok_or_else(|| missing(name, "type"))?;
    let kind = ConceptKind::from_tag(&tag).ok_or_else(|| unknown_type(name, &tag))?;
    let field = raw.field.ok_or_else(|| missing(name, "field"))?;

    let mut defaulted_period = false;
    let concept = match kind {
        ConceptKind::ScalarRange => {
            let mut range = ScalarRange::new(
                field,
                raw.min.ok_or_else(|| missing(name, "min"))?,
                raw.max.ok_or_else(|| missing(name, "max"))?,
            );
            range.unit = raw.unit;
            Concept::ScalarRange(range)
        }
        ConceptKind::Categorical => {
            let values = raw.values.ok_or_else(|| missing(name, "values"))?;
            Concept::Categorical(Categorical::new(field, values))
        }
        ConceptKind::CyclicRange => {
            let range_max = match (raw.range_max, options.default_period) {
                (Some(declared), _) => declared,
                (None, Some(default)) => {
                    log::warn!(
                        "Cyclic concept '{}' declares no range_max, using default period {}",
                        name,
                        default
                    );
                    defaulted_period = true;
                    default
                }
                (None, None) => {
                    return Err(OntologyError::MissingPeriod {
                        concept: name.to_string(),
                    });
                }
            };
            Concept::CyclicRange(CyclicRange::new(
                field,
                raw.min.ok_or_else(|| missing(name, "min"))?,
                raw.max.ok_or_else(|| missing(name, "max"))?,
                range_max,
            ))
        }
        ConceptKind::MultiRange
        | ConceptKind::DifferenceResult
        | ConceptKind::Union
        | ConceptKind::Empty => return Err(unknown_type(name, &tag)),
    };

    validate_concept(name, &concept)?;
    Ok(Entry {
        concept,
        defaulted_period,
    })
}

/// Check that `concept` may be stored in an ontology under `name`
///
/// Only scalar, categorical and cyclic shapes are storable. Bounds must be
/// finite, scalar ranges need `min <= max`, and cyclic bounds must lie within
/// `[0, range_max]` for a positive period.
pub fn validate_concept(name: &str, concept: &Concept) -> Result<(), OntologyError> {
    if concept.field().is_none_or(str::is_empty) {
        return Err(missing(name, "field"));
    }
    match concept {
        Concept::ScalarRange(range) => {
            finite(name, "min", range.min)?;
            finite(name, "max", range.max)?;
            if range.min > range.max {
                return Err(OntologyError::invalid_bounds(
                    name,
                    format!("min {} exceeds max {}", range.min, range.max),
                ));
            }
            Ok(())
        }
        Concept::Categorical(_) => Ok(()),
        Concept::CyclicRange(range) => {
            if !range.range_max.is_finite() || range.range_max <= 0.0 {
                return Err(OntologyError::InvalidPeriod {
                    concept: name.to_string(),
                    range_max: range.range_max,
                });
            }
            for (attribute, bound) in [("min", range.min), ("max", range.max)] {
                finite(name, attribute, bound)?;
                if bound < 0.0 || bound > range.range_max {
                    return Err(OntologyError::invalid_bounds(
                        name,
                        format!("{} {} is outside [0, {}]", attribute, bound, range.range_max),
                    ));
                }
            }
            Ok(())
        }
        derived => Err(unknown_type(name, derived.kind().as_str())),
    }
}

fn finite(name: &str, attribute: &str, value: f64) -> Result<(), OntologyError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OntologyError::invalid_bounds(name, format!("{} is not a finite number", attribute)))
    }
}

fn unknown_type(name: &str, tag: &str) -> OntologyError {
    OntologyError::UnknownType {
        concept: name.to_string(),
        tag: tag.to_string(),
    }
}

fn missing(name: &str, attribute: &'static str) -> OntologyError {
    OntologyError::MissingAttribute {
        concept: name.to_string(),
        attribute,
    }
}
