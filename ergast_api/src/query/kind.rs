use std::fmt;

use super::common::{Capabilities, Support};
use super::filter::{FilterKey, ALL_FILTERS};

/// Race results cannot be narrowed by finishing position through the
/// `results` segment; every other filter applies.
const RACE_RESULT_FILTERS: &[FilterKey] = &[
    FilterKey::Circuits,
    FilterKey::Constructors,
    FilterKey::Drivers,
    FilterKey::Grid,
    FilterKey::Fastest,
    FilterKey::Status,
];

/// The resource kinds this client can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// `/seasons`
    SeasonList,
    /// `/{season}[/{race}]`
    RaceSchedule,
    /// `/{season}/{race}/results`
    RaceResults,
    /// `/{season}/{race}/qualifying`
    QualifyingResults,
    /// `/{season}/{race}/laps/{lap}`
    LapTimes,
}

impl QueryKind {
    pub const ALL: [QueryKind; 5] = [
        QueryKind::SeasonList,
        QueryKind::RaceSchedule,
        QueryKind::RaceResults,
        QueryKind::QualifyingResults,
        QueryKind::LapTimes,
    ];

    pub fn capabilities(self) -> Capabilities {
        use Support::*;
        match self {
            QueryKind::SeasonList => Capabilities {
                season: Unsupported,
                race: Unsupported,
                lap: Unsupported,
                filters: ALL_FILTERS,
            },
            QueryKind::RaceSchedule => Capabilities {
                season: Required,
                race: Optional,
                lap: Unsupported,
                filters: ALL_FILTERS,
            },
            QueryKind::RaceResults => Capabilities {
                season: Required,
                race: Required,
                lap: Unsupported,
                filters: RACE_RESULT_FILTERS,
            },
            QueryKind::QualifyingResults => Capabilities {
                season: Required,
                race: Required,
                lap: Unsupported,
                filters: ALL_FILTERS,
            },
            QueryKind::LapTimes => Capabilities {
                season: Required,
                race: Required,
                lap: Required,
                filters: &[],
            },
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QueryKind::SeasonList => "seasons",
                QueryKind::RaceSchedule => "schedule",
                QueryKind::RaceResults => "results",
                QueryKind::QualifyingResults => "qualifying",
                QueryKind::LapTimes => "laps",
            }
        )
    }
}
