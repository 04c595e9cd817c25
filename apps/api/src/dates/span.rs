//! Elapsed-time labels such as "2 years 3 months".
//!
//! Tokens: `HOW_MANY_YEARS`, `YEARS`, `HOW_MANY_MONTHS`, `MONTHS`.
//!
//! A year is 365 days and a month 30 days, and the month count is rounded
//! up by one. This is not calendar-exact near month and year boundaries.

use chrono::NaiveDate;

use crate::dates::parse::{parse_date, RawDate};
use crate::dates::template::substitute;
use crate::models::Locale;

const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Years and months between two dates, before any wording is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub years: i64,
    pub months: i64,
}

/// Computes the span label between `start` and `end`.
///
/// If either endpoint is a bare integer year only whole years are counted,
/// with anything under two years shown as "1 year". Otherwise both sides are
/// resolved to days (`present` = `reference`) and run through the
/// 365/30-day approximation. Returns an empty string when an endpoint is
/// free text or the range runs backwards.
pub fn compute_time_span(
    start: &RawDate,
    end: &RawDate,
    locale: &Locale,
    reference: NaiveDate,
    template: &str,
) -> String {
    let start_value = parse_date(start);
    let end_value = parse_date(end);

    if start.is_year() || end.is_year() {
        let (Some(start_year), Some(end_year)) =
            (start_value.year(reference), end_value.year(reference))
        else {
            return String::new();
        };
        let years = i64::from(end_year) - i64::from(start_year);
        let (count, word) = if years < 2 {
            ("1".to_string(), locale.year.clone())
        } else {
            (years.to_string(), locale.years.clone())
        };
        return substitute(
            template,
            &[
                ("HOW_MANY_YEARS", count),
                ("YEARS", word),
                ("HOW_MANY_MONTHS", String::new()),
                ("MONTHS", String::new()),
            ],
        );
    }

    let (Some(from), Some(to)) = (start_value.resolve(reference), end_value.resolve(reference))
    else {
        return String::new();
    };
    let Some(span) = span_between(from, to) else {
        return String::new();
    };

    let (year_count, year_word) = counted(span.years, &locale.year, &locale.years);
    let (month_count, month_word) = counted(span.months, &locale.month, &locale.months);
    substitute(
        template,
        &[
            ("HOW_MANY_YEARS", year_count),
            ("YEARS", year_word),
            ("HOW_MANY_MONTHS", month_count),
            ("MONTHS", month_word),
        ],
    )
}

/// `years = days / 365`, `months = (days % 365) / 30 + 1`, with twelve
/// months carried into a year. `None` when `to` precedes `from`.
pub fn span_between(from: NaiveDate, to: NaiveDate) -> Option<Span> {
    let days = (to - from).num_days();
    if days < 0 {
        return None;
    }
    let mut years = days / DAYS_PER_YEAR;
    let mut months = (days % DAYS_PER_YEAR) / DAYS_PER_MONTH + 1;
    years += months / 12;
    months %= 12;
    Some(Span { years, months })
}

/// Zero hides the component entirely; one takes the singular word.
fn counted(n: i64, singular: &str, plural: &str) -> (String, String) {
    match n {
        0 => (String::new(), String::new()),
        1 => ("1".to_string(), singular.to_string()),
        _ => (n.to_string(), plural.to_string()),
    }
}
