//! Shared fixtures for grounding tests

#![allow(dead_code)]

use lumin_ontology::{LoadOptions, OntologyStore};
use lumin_types::{Concept, MultiRange, Segment};

pub const LTST: &str = "local_true_solar_time";

pub const MARS_ONTOLOGY: &str = r#"{
    "Southern Summer": {"type": "scalar_range", "field": "solar_longitude", "min": 270, "max": 360, "unit": "deg"},
    "Dust Storm Season": {"type": "scalar_range", "field": "solar_longitude", "min": 180, "max": 330, "unit": "deg"},
    "Polar Regions": {"type": "scalar_range", "field": "latitude", "min": 60, "max": 90, "unit": "deg"},
    "Midnight": {"type": "cyclic_range", "field": "local_true_solar_time", "min": 23.0, "max": 1.0, "range_max": 24.0},
    "Night": {"type": "cyclic_range", "field": "local_true_solar_time", "min": 20.0, "max": 4.0},
    "Afternoon": {"type": "cyclic_range", "field": "local_true_solar_time", "min": 13.0, "max": 17.0, "range_max": 24.0},
    "Obs_Window": {"type": "scalar_range", "field": "local_true_solar_time", "min": 0.5, "max": 2.0},
    "Noon Pass": {"type": "scalar_range", "field": "local_true_solar_time", "min": 11.0, "max": 13.0, "unit": "h"},
    "Thermal Instruments": {"type": "categorical", "field": "instrument", "values": ["THEMIS", "TES", "MCS"]},
    "Orbiter Spectrometers": {"type": "categorical", "field": "instrument", "values": ["TES", "CRISM", "OMEGA"]}
}"#;

/// The Mars ontology, with a 24 hour default period for `Night`
pub fn mars_store() -> OntologyStore {
    OntologyStore::from_json(MARS_ONTOLOGY, &LoadOptions::default().with_default_period(24.0)).unwrap()
}

pub fn multi(field: &str, ranges: &[(f64, f64)]) -> Concept {
    Concept::MultiRange(MultiRange {
        field: field.to_string(),
        ranges: ranges.iter().map(|&(min, max)| Segment::new(min, max)).collect(),
    })
}
