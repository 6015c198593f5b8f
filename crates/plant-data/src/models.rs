//! Raw upstream species models.

use serde::Deserialize;

/// A single species entry as returned by the listing endpoint.
///
/// Only the fields the sync pipeline cares about are captured; the upstream
/// payload carries dozens of other fields and all of them are ignored.
/// `watering` is kept as a raw JSON value because the upstream sends it as
/// either a number or a string depending on the species.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub watering: Option<serde_json::Value>,
    #[serde(default)]
    pub care_level: Option<String>,
}

/// One page of raw records plus the continuation signal.
#[derive(Debug, Clone, Default)]
pub struct SpeciesPage {
    pub records: Vec<RawSpecies>,
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{
            "id": 42,
            "common_name": "Ficus",
            "scientific_name": ["Ficus benjamina"],
            "watering": "Average",
            "cycle": "Perennial"
        }"#;

        let species: RawSpecies = serde_json::from_str(json).unwrap();
        assert_eq!(species.common_name.as_deref(), Some("Ficus"));
        assert_eq!(
            species.watering,
            Some(serde_json::Value::String("Average".to_string()))
        );
        assert_eq!(species.care_level, None);
    }

    #[test]
    fn numeric_watering_is_preserved() {
        let species: RawSpecies =
            serde_json::from_str(r#"{"common_name": "Aloe", "watering": 5}"#).unwrap();
        assert_eq!(species.watering, Some(serde_json::json!(5)));
    }

    #[test]
    fn null_fields_deserialize_as_none() {
        let species: RawSpecies =
            serde_json::from_str(r#"{"common_name": null, "watering": null}"#).unwrap();
        assert_eq!(species.common_name, None);
        assert_eq!(species.watering, None);
    }
}
