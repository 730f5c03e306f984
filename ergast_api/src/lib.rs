//! Client for the Ergast Formula 1 statistics API.
//!
//! Queries are validated when they are built: a [`QuerySpec`] always
//! describes a legal request. [`Client::execute`] fetches it and flattens the
//! response into [`Record`]s.
//!
//! ```no_run
//! use ergast_api::{Client, FilterKey, QueryKind, QueryParams};
//!
//! # async fn run() -> Result<(), ergast_api::Error> {
//! let query = QueryParams::new()
//!     .with_season(2021)
//!     .with_race(2)
//!     .with_filter(FilterKey::Constructors, "ferrari")
//!     .build(QueryKind::RaceResults)?;
//! assert_eq!(
//!     query.build_url(),
//!     "https://ergast.com/api/f1/constructors/ferrari/2021/2/results"
//! );
//! let records = Client::new().execute(&query).await?;
//! println!("{} classified", records.len());
//! # Ok(())
//! # }
//! ```
mod client;
mod errors;
pub mod format;
mod query;
pub mod types;
pub use self::client::{execute, Client};
pub use self::errors::Error;
pub use self::format::{format_records, FormatOptions, Record};
pub use self::query::{
    parse_bounded, parse_season, Capabilities, Field, FilterKey, FilterSet, FilterValue, Limits,
    Param, QueryKind, QueryParams, QuerySpec, Resource, Season, Support, Validated, ALL_FILTERS,
    BASE_URL, MAX_LAP, MAX_RACE, MAX_SEASON, MIN_SEASON,
};
