//! Path-segment filters such as `/drivers/alonso` that narrow most queries.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Circuits,
    Constructors,
    Drivers,
    Grid,
    Results,
    Fastest,
    Status,
}

pub const ALL_FILTERS: &[FilterKey] = &[
    FilterKey::Circuits,
    FilterKey::Constructors,
    FilterKey::Drivers,
    FilterKey::Grid,
    FilterKey::Results,
    FilterKey::Fastest,
    FilterKey::Status,
];

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Circuits => "circuits",
            FilterKey::Constructors => "constructors",
            FilterKey::Drivers => "drivers",
            FilterKey::Grid => "grid",
            FilterKey::Results => "results",
            FilterKey::Fastest => "fastest",
            FilterKey::Status => "status",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FILTERS
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unsupported_filter(s))
    }
}

/// The value half of a filter segment. Percent-encoded when it is written
/// into the URL path, so `/`, `?` and `#` cannot escape their segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterValue(String);

impl FilterValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue(n.to_string())
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue(n.to_string())
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue(n.to_string())
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue(s)
    }
}

/// Ordered filter mapping. Each key appears at most once; re-inserting a key
/// replaces its value without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(FilterKey, FilterValue)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from textual keys, failing on the first unknown key.
    pub fn try_from_pairs<K, V, I>(pairs: I) -> Result<Self, Error>
    where
        K: AsRef<str>,
        V: Into<FilterValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut set = FilterSet::new();
        for (key, value) in pairs {
            set.insert(key.as_ref().parse()?, value);
        }
        Ok(set)
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: FilterKey, value: impl Into<FilterValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `/{key}/{value}` for every entry, in insertion order.
    pub fn path(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("/{}/{}", key, urlencoding::encode(value.as_str())))
            .collect()
    }
}

impl<V: Into<FilterValue>> FromIterator<(FilterKey, V)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (FilterKey, V)>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}
