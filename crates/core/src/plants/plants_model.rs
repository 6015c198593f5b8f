//! Plant domain models and species normalization.

use serde::{Deserialize, Serialize};
use verdant_plant_data::RawSpecies;

const WATERING_UNIT_FREQUENCY: &str = "frequency";
const WATERING_UNIT_DAYS: &str = "days";

/// Display pair describing recommended watering frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringBenchmark {
    pub value: String,
    pub unit: String,
}

impl WateringBenchmark {
    fn days(value: &str) -> Self {
        Self {
            value: value.to_string(),
            unit: WATERING_UNIT_DAYS.to_string(),
        }
    }
}

/// A catalog plant. `common_name` is the natural key for upserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub common_name: String,
    pub watering_benchmark: WateringBenchmark,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for a catalog insert or upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    pub common_name: String,
    pub watering_benchmark: WateringBenchmark,
}

/// Whether an upsert created a new row or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Aggregated counters for one sync run. Transient, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStats {
    pub created: usize,
    pub updated: usize,
    pub errors: usize,
    pub total_processed: usize,
}

/// Result of a full catalog sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The run completed; counters describe what happened per record.
    Completed(SyncStats),
    /// Zero records came back across the whole run: the upstream API is
    /// unreachable or exhausted. Nothing was written.
    NoData,
}

/// A catalog plant attached to a user's personal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPlant {
    pub id: String,
    pub plant_id: String,
    pub common_name: String,
    pub watering_benchmark: WateringBenchmark,
    pub city: String,
    pub created_at: String,
}

/// Input for attaching a catalog plant to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPlant {
    pub user_id: String,
    pub plant_id: String,
    pub city: String,
}

/// Derive a watering benchmark from heterogeneous upstream fields.
///
/// Pure and total: any input yields a benchmark. A raw `watering` value
/// wins over `care_level`; a missing or unrecognized `care_level` falls
/// back to a conservative default.
pub fn infer_watering(raw: &RawSpecies) -> WateringBenchmark {
    if let Some(watering) = &raw.watering {
        let value = match watering {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return WateringBenchmark {
            value,
            unit: WATERING_UNIT_FREQUENCY.to_string(),
        };
    }

    if let Some(level) = &raw.care_level {
        match level.to_lowercase().as_str() {
            "low" => return WateringBenchmark::days("10-14"),
            "medium" => return WateringBenchmark::days("5-7"),
            "high" => return WateringBenchmark::days("2-3"),
            _ => {}
        }
    }

    WateringBenchmark::days("7-10")
}

/// Validate and reshape one raw species record into catalog form.
///
/// Records without a usable `common_name` yield `None` and are dropped:
/// they count as neither created nor updated downstream.
pub fn normalize_species(raw: &RawSpecies) -> Option<NewPlant> {
    let common_name = raw
        .common_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())?;

    Some(NewPlant {
        common_name: common_name.to_string(),
        watering_benchmark: infer_watering(raw),
    })
}
