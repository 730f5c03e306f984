mod common;
pub use self::common::{
    parse_bounded, parse_season, Capabilities, Field, Limits, Param, QueryParams, Season, Support,
    Validated, MAX_LAP, MAX_RACE, MAX_SEASON, MIN_SEASON,
};

mod filter;
pub use self::filter::{FilterKey, FilterSet, FilterValue, ALL_FILTERS};

mod kind;
pub use self::kind::QueryKind;

mod spec;
pub use self::spec::{QuerySpec, Resource, BASE_URL};
