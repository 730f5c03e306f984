//! Shared query infrastructure: caller-supplied [`Param`] values, the
//! per-kind [`Capabilities`] descriptor, and the range [`Limits`] every
//! validated field is checked against.

use std::fmt;

use super::filter::{FilterKey, FilterSet, FilterValue};
use crate::Error;

/// The addressable fields of a query, used to name the offending field in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Season,
    Race,
    Lap,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Field::Season => "season",
                Field::Race => "race",
                Field::Lap => "lap",
            }
        )
    }
}

/// A caller-supplied, not yet validated field value: either a number or text
/// such as `"current"` or `"2019"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Text(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Int(n) => write!(f, "{}", n),
            Param::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Param::Int(n)
    }
}

impl From<i32> for Param {
    fn from(n: i32) -> Self {
        Param::Int(n.into())
    }
}

impl From<u32> for Param {
    fn from(n: u32) -> Self {
        Param::Int(n.into())
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

/// A validated season: the ongoing championship or a specific year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Season {
    Current,
    Year(u32),
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Current => write!(f, "current"),
            Season::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Whether a query kind accepts a field, and whether it insists on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Unsupported,
    Optional,
    Required,
}

impl Support {
    pub fn is_supported(self) -> bool {
        !matches!(self, Support::Unsupported)
    }

    pub fn is_required(self) -> bool {
        matches!(self, Support::Required)
    }
}

/// The addressing rules of one query kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub season: Support,
    pub race: Support,
    pub lap: Support,
    /// Filter keys this kind accepts.
    pub filters: &'static [FilterKey],
}

/// Inclusive bounds for numeric fields.
///
/// The defaults mirror the historical limits of the API (championships from
/// 1950, at most 23 rounds, at most 100 laps). Calendars have since grown, so
/// callers can widen them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub min_season: u32,
    pub max_season: u32,
    pub max_race: u32,
    pub max_lap: u32,
}

pub const MIN_SEASON: u32 = 1950;
pub const MAX_SEASON: u32 = 2021;
pub const MAX_RACE: u32 = 23;
pub const MAX_LAP: u32 = 100;

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min_season: MIN_SEASON,
            max_season: MAX_SEASON,
            max_race: MAX_RACE,
            max_lap: MAX_LAP,
        }
    }
}

/// Unvalidated query input, assembled with the `with_*` builder methods.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    pub season: Option<Param>,
    pub race: Option<Param>,
    pub lap: Option<Param>,
    pub filters: FilterSet,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, season: impl Into<Param>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_race(mut self, race: impl Into<Param>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn with_lap(mut self, lap: impl Into<Param>) -> Self {
        self.lap = Some(lap.into());
        self
    }

    pub fn with_filter(mut self, key: FilterKey, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(key, value);
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }
}

/// Field values that passed a [`Capabilities`] check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validated {
    pub season: Option<Season>,
    pub race: Option<u32>,
    pub lap: Option<u32>,
    pub filters: FilterSet,
}

impl Capabilities {
    /// Checks season, race, lap and filters, in that order, and returns the
    /// first violation.
    pub fn validate(&self, params: &QueryParams, limits: &Limits) -> Result<Validated, Error> {
        let season = check_field(Field::Season, self.season, params.season.as_ref(), |p| {
            parse_season(p, limits)
        })?;
        let race = check_field(Field::Race, self.race, params.race.as_ref(), |p| {
            parse_bounded(Field::Race, p, 1, limits.max_race)
        })?;
        let lap = check_field(Field::Lap, self.lap, params.lap.as_ref(), |p| {
            parse_bounded(Field::Lap, p, 1, limits.max_lap)
        })?;
        self.check_filters(&params.filters)?;

        Ok(Validated {
            season,
            race,
            lap,
            filters: params.filters.clone(),
        })
    }

    fn check_filters(&self, filters: &FilterSet) -> Result<(), Error> {
        match filters.keys().find(|key| !self.filters.contains(key)) {
            Some(key) => Err(Error::unsupported_filter(key.as_str())),
            None => Ok(()),
        }
    }
}

fn check_field<T>(
    field: Field,
    support: Support,
    value: Option<&Param>,
    parse: impl FnOnce(&Param) -> Result<T, Error>,
) -> Result<Option<T>, Error> {
    match (value, support) {
        (Some(_), Support::Unsupported) => Err(Error::unsupported_parameter(field)),
        (None, Support::Required) => Err(Error::missing_required_parameter(field)),
        (Some(value), _) => parse(value).map(Some),
        (None, _) => Ok(None),
    }
}

/// Parses a season: the literal `current` or a year within the limits.
pub fn parse_season(param: &Param, limits: &Limits) -> Result<Season, Error> {
    if let Param::Text(text) = param {
        if text == "current" {
            return Ok(Season::Current);
        }
    }
    parse_bounded(Field::Season, param, limits.min_season, limits.max_season).map(Season::Year)
}

/// Coerces a param to an integer and checks it against `[min, max]`.
pub fn parse_bounded(field: Field, param: &Param, min: u32, max: u32) -> Result<u32, Error> {
    let n = match param {
        Param::Int(n) => *n,
        Param::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            Error::invalid_parameter_value(field, param, "expected an integer")
        })?,
    };
    if n < i64::from(min) || n > i64::from(max) {
        return Err(Error::invalid_parameter_value(
            field,
            param,
            format!("expected a value between {} and {}", min, max),
        ));
    }
    Ok(n as u32)
}
