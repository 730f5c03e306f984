//! Reshapes response documents into flat records.
//!
//! Each query kind keeps its rows at a fixed place in the document, e.g.
//! `RaceTable.Races[0].Results` for race results. The live API wraps every
//! table in an `MRData` envelope; documents with and without it are accepted.

use serde_json::{Map, Value};

use crate::query::QueryKind;
use crate::Error;

/// One row: the fields of a single JSON object, passed through unchanged.
pub type Record = Map<String, Value>;

/// Post-processing switches applied to every record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Keep the `url` field (a Wikipedia link on most objects).
    pub keep_urls: bool,
}

impl FormatOptions {
    pub fn with_keep_urls(mut self, keep_urls: bool) -> Self {
        self.keep_urls = keep_urls;
        self
    }
}

/// Extracts the records for `kind` from `document`.
pub fn format_records(
    kind: QueryKind,
    document: &Value,
    options: FormatOptions,
) -> Result<Vec<Record>, Error> {
    let root = document.get("MRData").unwrap_or(document);

    let rows = match kind {
        QueryKind::SeasonList => field(field(root, "SeasonTable")?, "Seasons")?,
        QueryKind::RaceSchedule => field(field(root, "RaceTable")?, "Races")?,
        QueryKind::RaceResults => field(first_race(root)?, "Results")?,
        QueryKind::QualifyingResults => field(first_race(root)?, "QualifyingResults")?,
        QueryKind::LapTimes => {
            let laps = field(first_race(root)?, "Laps")?;
            let lap = match laps {
                Value::Array(laps) => laps
                    .first()
                    .ok_or_else(|| Error::malformed_response("no lap found in 'Laps'"))?,
                other => other,
            };
            field(lap, "Timings")?
        }
    };

    let rows = rows
        .as_array()
        .ok_or_else(|| Error::malformed_response(format!("expected a list of {} records", kind)))?;

    rows.iter()
        .map(|row| match row {
            Value::Object(record) => Ok(post_process(record.clone(), options)),
            _ => Err(Error::malformed_response(format!(
                "expected an object in {} records",
                kind
            ))),
        })
        .collect()
}

fn post_process(mut record: Record, options: FormatOptions) -> Record {
    if !options.keep_urls {
        record.remove("url");
    }
    record
}

fn field<'a>(value: &'a Value, key: &str) -> Result<&'a Value, Error> {
    value
        .get(key)
        .ok_or_else(|| Error::malformed_response(format!("missing key '{}'", key)))
}

fn first_race(root: &Value) -> Result<&Value, Error> {
    field(field(root, "RaceTable")?, "Races")?
        .as_array()
        .ok_or_else(|| Error::malformed_response("'Races' is not a list"))?
        .first()
        .ok_or_else(|| Error::malformed_response("no race found for the given season and race"))
}
