//! Schedule-level types: races and the circuits they run on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::Record;
use crate::Error;

/// One round of a season, as returned in `RaceTable.Races`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Championship year, e.g. "2021". Kept as text, as the API sends it.
    pub season: String,

    /// Round number within the season, e.g. "3".
    pub round: String,

    pub race_name: String,

    #[serde(rename = "Circuit")]
    pub circuit: Circuit,

    /// Race day. Absent for some historical rounds.
    pub date: Option<NaiveDate>,

    /// Start time in UTC, e.g. "13:00:00Z".
    pub time: Option<String>,

    pub url: Option<String>,
}

impl Race {
    /// Reads a schedule record produced by the formatter.
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        serde_json::from_value(serde_json::Value::Object(record.clone()))
            .map_err(|e| Error::malformed_response(format!("invalid race record: {}", e)))
    }

    /// Round as a number, for building per-round queries.
    pub fn round_number(&self) -> Result<u32, Error> {
        self.round
            .parse()
            .map_err(|_| Error::malformed_response(format!("invalid round '{}'", self.round)))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub circuit_id: String,
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Option<Location>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub lat: String,
    pub long: String,
    pub locality: String,
    pub country: String,
}
