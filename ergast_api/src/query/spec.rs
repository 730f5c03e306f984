use super::common::{Field, Limits, QueryParams, Season, Validated};
use super::filter::FilterSet;
use super::kind::QueryKind;
use crate::Error;

/// Root of every request URL.
pub const BASE_URL: &str = "https://ergast.com/api/f1";

/// The validated addressing data of one query, shaped per kind so that every
/// field the resource path needs is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    SeasonList,
    RaceSchedule { season: Season, race: Option<u32> },
    RaceResults { season: Season, race: u32 },
    QualifyingResults { season: Season, race: u32 },
    LapTimes { season: Season, race: u32, lap: u32 },
}

impl Resource {
    pub fn kind(&self) -> QueryKind {
        match self {
            Resource::SeasonList => QueryKind::SeasonList,
            Resource::RaceSchedule { .. } => QueryKind::RaceSchedule,
            Resource::RaceResults { .. } => QueryKind::RaceResults,
            Resource::QualifyingResults { .. } => QueryKind::QualifyingResults,
            Resource::LapTimes { .. } => QueryKind::LapTimes,
        }
    }

    fn path(&self) -> String {
        match self {
            Resource::SeasonList => "/seasons".to_string(),
            Resource::RaceSchedule { season, race: None } => format!("/{}", season),
            Resource::RaceSchedule {
                season,
                race: Some(race),
            } => format!("/{}/{}", season, race),
            Resource::RaceResults { season, race } => format!("/{}/{}/results", season, race),
            Resource::QualifyingResults { season, race } => {
                format!("/{}/{}/qualifying", season, race)
            }
            Resource::LapTimes { season, race, lap } => {
                format!("/{}/{}/laps/{}", season, race, lap)
            }
        }
    }
}

/// A validated, immutable request against one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuerySpec {
    resource: Resource,
    filters: FilterSet,
}

impl QuerySpec {
    /// Validates `params` against `kind` using the default [`Limits`].
    pub fn new(kind: QueryKind, params: QueryParams) -> Result<Self, Error> {
        Self::with_limits(kind, params, &Limits::default())
    }

    pub fn with_limits(kind: QueryKind, params: QueryParams, limits: &Limits) -> Result<Self, Error> {
        let Validated {
            season,
            race,
            lap,
            filters,
        } = kind.capabilities().validate(&params, limits)?;

        let resource = match kind {
            QueryKind::SeasonList => Resource::SeasonList,
            QueryKind::RaceSchedule => Resource::RaceSchedule {
                season: present(Field::Season, season)?,
                race,
            },
            QueryKind::RaceResults => Resource::RaceResults {
                season: present(Field::Season, season)?,
                race: present(Field::Race, race)?,
            },
            QueryKind::QualifyingResults => Resource::QualifyingResults {
                season: present(Field::Season, season)?,
                race: present(Field::Race, race)?,
            },
            QueryKind::LapTimes => Resource::LapTimes {
                season: present(Field::Season, season)?,
                race: present(Field::Race, race)?,
                lap: present(Field::Lap, lap)?,
            },
        };

        Ok(Self { resource, filters })
    }

    pub fn kind(&self) -> QueryKind {
        self.resource.kind()
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn season(&self) -> Option<Season> {
        match self.resource {
            Resource::SeasonList => None,
            Resource::RaceSchedule { season, .. }
            | Resource::RaceResults { season, .. }
            | Resource::QualifyingResults { season, .. }
            | Resource::LapTimes { season, .. } => Some(season),
        }
    }

    pub fn race(&self) -> Option<u32> {
        match self.resource {
            Resource::SeasonList => None,
            Resource::RaceSchedule { race, .. } => race,
            Resource::RaceResults { race, .. }
            | Resource::QualifyingResults { race, .. }
            | Resource::LapTimes { race, .. } => Some(race),
        }
    }

    pub fn lap(&self) -> Option<u32> {
        match self.resource {
            Resource::LapTimes { lap, .. } => Some(lap),
            _ => None,
        }
    }

    pub fn resource_path(&self) -> String {
        self.resource.path()
    }

    pub fn filter_path(&self) -> String {
        self.filters.path()
    }

    /// Everything after the base URL. Filters come before the resource.
    pub fn path(&self) -> String {
        format!("{}{}", self.filter_path(), self.resource_path())
    }

    pub fn build_url(&self) -> String {
        format!("{}{}", BASE_URL, self.path())
    }
}

impl QueryParams {
    pub fn build(self, kind: QueryKind) -> Result<QuerySpec, Error> {
        QuerySpec::new(kind, self)
    }

    pub fn build_with_limits(self, kind: QueryKind, limits: &Limits) -> Result<QuerySpec, Error> {
        QuerySpec::with_limits(kind, self, limits)
    }
}

fn present<T>(field: Field, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| Error::missing_required_parameter(field))
}
