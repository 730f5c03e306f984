//! Environment-driven settings for the client and query limits.

use std::time::Duration;

use ergast_api::{Client, Limits, BASE_URL};

/// Runtime settings, read from `ERGAST_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            limits: Limits::default(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Missing or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();
        let number = |key: &str, default: u32| -> u32 {
            match lookup(key) {
                Some(val) => val.trim().parse::<u32>().unwrap_or_else(|_| {
                    tracing::warn!("Ignoring {}={:?}: not a number", key, val);
                    default
                }),
                None => default,
            }
        };

        Self {
            base_url: lookup("ERGAST_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(
                number("ERGAST_TIMEOUT_SECS", defaults.timeout.as_secs() as u32).into(),
            ),
            limits: Limits {
                min_season: defaults.limits.min_season,
                max_season: number("ERGAST_MAX_SEASON", defaults.limits.max_season),
                max_race: number("ERGAST_MAX_RACE", defaults.limits.max_race),
                max_lap: number("ERGAST_MAX_LAP", defaults.limits.max_lap),
            },
        }
    }

    /// Builds an API client for the configured endpoint.
    pub fn client(&self) -> Client {
        Client::with_base_url(&self.base_url).with_timeout(self.timeout)
    }
}
