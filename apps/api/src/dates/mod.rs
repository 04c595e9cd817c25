//! Date model and time-span calculator.

pub mod format;
pub mod parse;
pub mod span;
pub mod template;

use serde::{Deserialize, Serialize};

pub use format::{format_date, format_date_range, format_single_date};
pub use parse::{parse_calendar_day, parse_date, DateValue, RawDate, PRESENT};
pub use span::{compute_time_span, span_between, Span};

/// The three templates every date-bearing renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTemplates {
    pub single_date: String,
    pub date_range: String,
    pub time_span: String,
}

impl Default for DateTemplates {
    fn default() -> Self {
        Self {
            single_date: "MONTH_ABBREVIATION YEAR".to_string(),
            date_range: "START_DATE – END_DATE".to_string(),
            time_span: "HOW_MANY_YEARS YEARS HOW_MANY_MONTHS MONTHS".to_string(),
        }
    }
}
