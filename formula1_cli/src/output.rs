use std::io::Write;

use anyhow::Result;
use formula1_lib::Record;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

use crate::xml_output;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Self {
        match input {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

/// Union of record keys, in the order they are first seen.
pub fn columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Text for one cell. Strings are shown bare, missing values as empty,
/// anything nested as compact JSON.
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn rows(records: &[Record], columns: &[String]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| columns.iter().map(|c| cell(record.get(c))).collect())
        .collect()
}

pub fn build_table(records: &[Record]) -> Table {
    let columns = columns(records);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in rows(records, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

// -- Output --

pub fn print_records(records: &[Record], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut table = build_table(records);
            table.with(Style::rounded());
            println!("{}", table);
        }
        OutputFormat::Markdown => {
            let mut table = build_table(records);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&records)?,
        OutputFormat::Csv => write_csv(records, std::io::stdout())?,
        OutputFormat::Xml => println!("{}", xml_output::records_to_xml("records", "record", records)?),
    }
    Ok(())
}

pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let columns = columns(records);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;
    for row in rows(records, &columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
