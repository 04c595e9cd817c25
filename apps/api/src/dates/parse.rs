//! Date parsing: heterogeneous raw inputs into a [`DateValue`].

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// Keyword that marks an ongoing range.
pub const PRESENT: &str = "present";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?$").unwrap());

/// A date field exactly as it appeared in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Year(i32),
    Text(String),
}

impl RawDate {
    /// Reads a date field from an untyped value. Integers become years,
    /// strings stay text, anything else is treated as absent.
    pub fn from_value(value: Option<&Value>) -> Option<RawDate> {
        match value? {
            Value::Number(n) => n
                .as_i64()
                .and_then(|y| i32::try_from(y).ok())
                .map(RawDate::Year),
            Value::String(s) if !s.trim().is_empty() => Some(RawDate::Text(s.clone())),
            _ => None,
        }
    }

    pub fn is_year(&self) -> bool {
        matches!(self, RawDate::Year(_))
    }
}

impl From<i32> for RawDate {
    fn from(year: i32) -> Self {
        RawDate::Year(year)
    }
}

impl From<&str> for RawDate {
    fn from(text: &str) -> Self {
        RawDate::Text(text.to_string())
    }
}

/// A parsed calendar point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DateValue {
    /// A bare integer year.
    Year(i32),
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; missing parts default to 1.
    Calendar(NaiveDate),
    /// Ongoing; resolved against a reference date only when needed.
    Present,
    /// Free text that is not a recognised shape. Rendered verbatim.
    Unparsed(String),
}

impl DateValue {
    /// Resolves to a concrete day. Years map to January 1st, `Present` to
    /// `reference`. Free text has no day.
    pub fn resolve(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateValue::Year(y) => NaiveDate::from_ymd_opt(*y, 1, 1),
            DateValue::Calendar(d) => Some(*d),
            DateValue::Present => Some(reference),
            DateValue::Unparsed(_) => None,
        }
    }

    pub fn year(&self, reference: NaiveDate) -> Option<i32> {
        match self {
            DateValue::Year(y) => Some(*y),
            other => other.resolve(reference).map(|d| d.year()),
        }
    }
}

/// Parses a raw date.
///
/// Never fails: a string that is not `present` or a dash-separated
/// `YYYY[-MM[-DD]]` (or names an impossible day) comes back as
/// [`DateValue::Unparsed`] so the caller can show it as written.
pub fn parse_date(raw: &RawDate) -> DateValue {
    match raw {
        RawDate::Year(y) => DateValue::Year(*y),
        RawDate::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> DateValue {
    let trimmed = text.trim();
    if trimmed == PRESENT {
        return DateValue::Present;
    }

    let Some(caps) = DATE_SHAPE.captures(trimmed) else {
        return DateValue::Unparsed(text.to_string());
    };
    let part = |i: usize, default: u32| {
        caps.get(i)
            .map(|m| m.as_str().parse::<u32>().unwrap_or(0))
            .unwrap_or(default)
    };
    let year = caps[1].parse::<i32>().unwrap_or(0);
    let month = part(2, 1);
    let day = part(3, 1);

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => DateValue::Calendar(date),
        None => DateValue::Unparsed(text.to_string()),
    }
}

/// Parses `YYYY-MM-DD`-style text into a day, ignoring everything else.
pub fn parse_calendar_day(text: &str) -> Option<NaiveDate> {
    match parse_text(text) {
        DateValue::Calendar(d) => Some(d),
        _ => None,
    }
}
