//! Library layer for the formula1 tools: configuration, input validation
//! and dataset assembly on top of the `ergast_api` client.

pub mod config;
pub mod dataset;
pub mod error;
pub mod validation;

pub use ergast_api;
pub use ergast_api::types;
pub use ergast_api::{
    Client, FilterKey, FilterSet, FormatOptions, Limits, Param, QueryKind, QueryParams, QuerySpec,
    Record,
};

pub use config::Settings;
pub use dataset::{flatten_record, DatasetBuilder};
pub use error::Formula1Error;
