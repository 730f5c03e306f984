//! Season-wide results datasets.
//!
//! A dataset row is one classified finisher of one race, carrying the race's
//! schedule metadata alongside the flattened result fields.

use ergast_api::types::Race;
use ergast_api::{
    format_records, Client, FormatOptions, Limits, Param, QueryKind, QueryParams, Record,
};
use serde_json::Value;

use crate::error::Formula1Error;

/// Schedule fields copied onto every result row, in output order.
pub const RACE_COLUMNS: &[&str] = &["season", "round", "raceName", "date", "circuitId"];

/// Assembles result datasets by issuing one schedule query per season and one
/// results query per scheduled round.
pub struct DatasetBuilder<'a> {
    client: &'a Client,
    limits: Limits,
    options: FormatOptions,
}

impl<'a> DatasetBuilder<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            limits: Limits::default(),
            options: FormatOptions::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_keep_urls(mut self, keep_urls: bool) -> Self {
        self.options = self.options.with_keep_urls(keep_urls);
        self
    }

    /// Builds the dataset for several seasons, concatenated in the given order.
    pub async fn build(&self, seasons: &[Param]) -> Result<Vec<Record>, Formula1Error> {
        let mut rows = Vec::new();
        for season in seasons {
            rows.extend(self.build_season(season).await?);
        }
        Ok(rows)
    }

    /// Builds the dataset for one season. Rounds without published results
    /// are skipped.
    pub async fn build_season(&self, season: &Param) -> Result<Vec<Record>, Formula1Error> {
        let schedule = QueryParams::new()
            .with_season(season.clone())
            .build_with_limits(QueryKind::RaceSchedule, &self.limits)?;
        let races = self.client.execute(&schedule).await?;
        tracing::info!("Season {}: {} scheduled rounds", season, races.len());

        let mut rows = Vec::new();
        for record in &races {
            let race = Race::from_record(record)?;
            let query = QueryParams::new()
                .with_season(season.clone())
                .with_race(race.round_number()?)
                .build_with_limits(QueryKind::RaceResults, &self.limits)?;

            let document = self.client.fetch(&query).await?;
            if is_unpublished(&document) {
                tracing::warn!(
                    "Season {} round {} ({}): no results published, skipping",
                    race.season,
                    race.round,
                    race.race_name
                );
                continue;
            }

            let results = format_records(QueryKind::RaceResults, &document, self.options)?;
            tracing::debug!(
                "Season {} round {}: {} results",
                race.season,
                race.round,
                results.len()
            );
            rows.extend(
                results
                    .into_iter()
                    .map(|result| race_row(&race, result, self.options.keep_urls)),
            );
        }
        Ok(rows)
    }
}

/// A round is unpublished when the API answers with an empty `Races` list.
/// Any other shape goes through the formatter and fails there.
fn is_unpublished(document: &Value) -> bool {
    document
        .get("MRData")
        .unwrap_or(document)
        .pointer("/RaceTable/Races")
        .and_then(Value::as_array)
        .is_some_and(|races| races.is_empty())
}

fn race_row(race: &Race, result: Record, keep_urls: bool) -> Record {
    let mut row = Record::new();
    row.insert("season".to_string(), Value::from(race.season.as_str()));
    row.insert("round".to_string(), Value::from(race.round.as_str()));
    row.insert("raceName".to_string(), Value::from(race.race_name.as_str()));
    row.insert(
        "date".to_string(),
        race.date
            .map(|date| Value::from(date.to_string()))
            .unwrap_or(Value::Null),
    );
    row.insert(
        "circuitId".to_string(),
        Value::from(race.circuit.circuit_id.as_str()),
    );
    row.extend(flatten_record(result));
    if !keep_urls {
        row.retain(|key, _| key != "url" && !key.ends_with(".url"));
    }
    row
}

/// Flattens nested objects into dotted keys: `{"Driver": {"code": "HAM"}}`
/// becomes `{"Driver.code": "HAM"}`. Arrays are kept as values.
pub fn flatten_record(record: Record) -> Record {
    let mut flat = Record::new();
    for (key, value) in record {
        flatten_into(&mut flat, key, value);
    }
    flat
}

fn flatten_into(flat: &mut Record, key: String, value: Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (child, value) in map {
                flatten_into(flat, format!("{}.{}", key, child), value);
            }
        }
        other => {
            flat.insert(key, other);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn flatten_nested_objects() {
        let flat = flatten_record(record(json!({
            "position": "1",
            "Driver": { "driverId": "hamilton", "code": "HAM" },
            "FastestLap": { "rank": "1", "Time": { "time": "1:16.702" } },
            "Tags": ["a", "b"],
            "Empty": {}
        })));
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "position",
                "Driver.driverId",
                "Driver.code",
                "FastestLap.rank",
                "FastestLap.Time.time",
                "Tags",
                "Empty"
            ]
        );
        assert_eq!(flat["FastestLap.Time.time"], "1:16.702");
        assert_eq!(flat["Tags"], json!(["a", "b"]));
    }

    #[test]
    fn race_columns_lead_each_row() {
        let race = Race::from_record(&record(json!({
            "season": "2021",
            "round": "2",
            "raceName": "Emilia Romagna Grand Prix",
            "Circuit": { "circuitId": "imola", "circuitName": "Imola" },
            "date": "2021-04-18"
        })))
        .unwrap();
        let result = record(json!({
            "position": "1",
            "Driver": { "code": "VER", "url": "http://wiki/Max" }
        }));
        let row = race_row(&race, result.clone(), false);
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(&keys[..RACE_COLUMNS.len()], RACE_COLUMNS);
        assert_eq!(row["date"], "2021-04-18");
        assert_eq!(row["Driver.code"], "VER");
        assert!(!row.contains_key("Driver.url"));

        let row = race_row(&race, result, true);
        assert_eq!(row["Driver.url"], "http://wiki/Max");
    }

    #[test]
    fn only_an_empty_races_list_is_unpublished() {
        assert!(is_unpublished(&json!({ "MRData": { "RaceTable": { "Races": [] } } })));
        assert!(is_unpublished(&json!({ "RaceTable": { "Races": [] } })));
        assert!(!is_unpublished(&json!({ "MRData": { "RaceTable": { "Races": [{}] } } })));
        assert!(!is_unpublished(&json!({ "MRData": {} })));
        assert!(!is_unpublished(&json!({ "MRData": { "RaceTable": { "Races": {} } } })));
        assert!(!is_unpublished(&json!({})));
    }
}
