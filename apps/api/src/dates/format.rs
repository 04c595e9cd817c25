//! Rendering dates and date ranges through placeholder templates.
//!
//! Single-date tokens: `MONTH_NAME`, `MONTH_ABBREVIATION`, `MONTH`,
//! `MONTH_IN_TWO_DIGITS`, `YEAR`, `YEAR_IN_TWO_DIGITS`.
//! Range tokens: `START_DATE`, `END_DATE`.

use chrono::Datelike;

use crate::dates::parse::{parse_date, DateValue, RawDate};
use crate::dates::template::substitute;
use crate::models::Locale;

/// Renders one parsed date.
///
/// Calendar dates go through `template`. A bare year prints as its digits,
/// `Present` as the locale's present word and unparsed text verbatim; none
/// of those consult the template.
pub fn format_date(value: &DateValue, locale: &Locale, template: &str) -> String {
    match value {
        DateValue::Calendar(date) => {
            let month = date.month();
            let year = date.year().to_string();
            let short_year = year
                .get(year.len().saturating_sub(2)..)
                .unwrap_or(&year)
                .to_string();
            substitute(
                template,
                &[
                    ("MONTH_NAME", locale.month_name(month)),
                    ("MONTH_ABBREVIATION", locale.month_abbreviation(month)),
                    ("MONTH", month.to_string()),
                    ("MONTH_IN_TWO_DIGITS", format!("{month:02}")),
                    ("YEAR", year.clone()),
                    ("YEAR_IN_TWO_DIGITS", short_year),
                ],
            )
        }
        DateValue::Year(y) => y.to_string(),
        DateValue::Present => locale.present.clone(),
        DateValue::Unparsed(text) => text.clone(),
    }
}

/// Parses and renders a raw date field in one step.
pub fn format_single_date(raw: &RawDate, locale: &Locale, template: &str) -> String {
    format_date(&parse_date(raw), locale, template)
}

/// Renders `start` and `end` independently, then drops them into the
/// `START_DATE` / `END_DATE` tokens of `range_template`.
pub fn format_date_range(
    start: &RawDate,
    end: &RawDate,
    locale: &Locale,
    single_template: &str,
    range_template: &str,
) -> String {
    let start_str = format_single_date(start, locale, single_template);
    let end_str = format_single_date(end, locale, single_template);
    substitute(
        range_template,
        &[("START_DATE", start_str), ("END_DATE", end_str)],
    )
}
