//! Validation of textual user input before it reaches a query builder.
//!
//! The API crate treats filter values as opaque path segments, so anything
//! that would break the path (`/`, `?`, `#`) is rejected here.

use ergast_api::{FilterKey, FilterSet, FilterValue, Param};

use crate::error::Formula1Error;

pub const MAX_FILTER_VALUE_LENGTH: usize = 64;

const RESERVED_PATH_CHARS: &[char] = &['/', '?', '#'];

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, Formula1Error> {
    if input.len() > max_len {
        return Err(Formula1Error::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(Formula1Error::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a filter value: sanitize, then refuse characters that would split
/// or terminate the URL path.
pub fn validate_filter_value(input: &str) -> Result<FilterValue, Formula1Error> {
    let value = sanitize_text(input, MAX_FILTER_VALUE_LENGTH)?;
    if let Some(c) = value.chars().find(|c| RESERVED_PATH_CHARS.contains(c)) {
        return Err(Formula1Error::InvalidInput(format!(
            "filter value '{}' must not contain '{}'",
            value, c
        )));
    }
    Ok(FilterValue::from(value))
}

/// Parse a `key=value` filter argument, e.g. `drivers=hamilton`.
/// Keys are case-insensitive.
pub fn parse_filter(input: &str) -> Result<(FilterKey, FilterValue), Formula1Error> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        Formula1Error::InvalidInput(format!(
            "filter '{}' must look like key=value (e.g. drivers=hamilton)",
            input
        ))
    })?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(Formula1Error::InvalidInput(format!(
            "filter '{}' has an empty key",
            input
        )));
    }
    let key: FilterKey = key.parse()?;
    Ok((key, validate_filter_value(value)?))
}

/// Parse every `key=value` argument into one ordered filter set.
pub fn parse_filters(inputs: &[String]) -> Result<FilterSet, Formula1Error> {
    let mut filters = FilterSet::new();
    for input in inputs {
        let (key, value) = parse_filter(input)?;
        filters.insert(key, value);
    }
    Ok(filters)
}

/// Turn a season argument into a query param. `current` is matched
/// case-insensitively and normalized; anything else must be a number. Range
/// checks are left to the query builder.
pub fn parse_season(input: &str) -> Result<Param, Formula1Error> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("current") {
        return Ok(Param::from("current"));
    }
    parse_number("season", trimmed)
}

/// Parse a race or lap number argument.
pub fn parse_number(field: &str, input: &str) -> Result<Param, Formula1Error> {
    input
        .trim()
        .parse::<i64>()
        .map(Param::Int)
        .map_err(|_| {
            Formula1Error::InvalidInput(format!("{} must be a number, got '{}'", field, input))
        })
}
