//! Entry formatting: classify, validate required fields, and produce
//! display strings.
//!
//! Failures are per entry. A malformed entry never stops its siblings from
//! being formatted; [`format_section`] collects both outcomes side by side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::dates::{compute_time_span, format_date_range, format_single_date, DateTemplates, RawDate};
use crate::models::document::scalar_text;
use crate::models::Locale;
use crate::resume::classifier::{classify_entry, EntryKind};

/// Shown in place of entries whose shape matches no known kind.
pub const UNKNOWN_ENTRY_PLACEHOLDER: &str = "Unknown entry type";

/// Everything the formatter needs besides the entry itself.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub locale: &'a Locale,
    pub templates: &'a DateTemplates,
    /// What `present` means.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormattedEntry {
    Education {
        institution: String,
        degree: String,
        area: String,
        gpa: Option<String>,
        date: Option<String>,
        location: Option<String>,
        summary: Option<String>,
        highlights: Vec<String>,
    },
    Experience {
        company: String,
        position: String,
        date: Option<String>,
        time_span: Option<String>,
        location: Option<String>,
        summary: Option<String>,
        highlights: Vec<String>,
    },
    Project {
        name: String,
        date: Option<String>,
        location: Option<String>,
        summary: Option<String>,
        highlights: Vec<String>,
    },
    Publication {
        title: String,
        authors: Vec<String>,
        date: Option<String>,
        journal: Option<String>,
        doi: Option<String>,
        url: Option<String>,
        summary: Option<String>,
    },
    Skill {
        label: String,
        details: String,
    },
    Bullet {
        text: String,
    },
    Text {
        text: String,
    },
    /// Rendered in italics by the presentation layer.
    Unknown {
        placeholder: String,
    },
}

impl FormattedEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            FormattedEntry::Education { .. } => EntryKind::Education,
            FormattedEntry::Experience { .. } => EntryKind::Experience,
            FormattedEntry::Project { .. } => EntryKind::Project,
            FormattedEntry::Publication { .. } => EntryKind::Publication,
            FormattedEntry::Skill { .. } => EntryKind::Skill,
            FormattedEntry::Bullet { .. } => EntryKind::Bullet,
            FormattedEntry::Text { .. } => EntryKind::Text,
            FormattedEntry::Unknown { .. } => EntryKind::Unknown,
        }
    }
}

/// A required field missing (or malformed) for the entry's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub kind: EntryKind,
    /// Offending field, e.g. `degree`.
    pub field: String,
    /// Location of the field, innermost last.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationFailure {
    fn missing(kind: EntryKind, field: &str) -> Self {
        Self {
            kind,
            field: field.to_string(),
            path: vec![field.to_string()],
            message: format!("{kind} entry is missing required field '{field}'"),
        }
    }

    /// Prepends `prefix` to the path (e.g. section title and index).
    pub fn within(mut self, prefix: &[String]) -> Self {
        let mut path = prefix.to_vec();
        path.append(&mut self.path);
        self.path = path;
        self
    }
}

/// Classifies one entry and formats it.
///
/// `Ok(None)` means the entry intentionally renders nothing (a bullet with
/// no text).
pub fn classify_and_format(
    entry: &Value,
    ctx: &FormatContext<'_>,
) -> Result<Option<FormattedEntry>, ValidationFailure> {
    let kind = classify_entry(entry);
    let map = match entry {
        Value::Object(map) => map,
        Value::String(text) => {
            return Ok(Some(FormattedEntry::Text { text: text.clone() }));
        }
        _ => {
            warn!(entry = %entry, "Entry is neither a mapping nor a string");
            return Ok(Some(unknown()));
        }
    };

    let formatted = match kind {
        EntryKind::Education => {
            let institution = required(map, kind, "institution")?;
            let degree = required(map, kind, "degree")?;
            let area = required(map, kind, "area")?;
            FormattedEntry::Education {
                institution,
                degree,
                area,
                gpa: text(map, "GPA").or_else(|| text(map, "gpa")),
                date: date_range(map, ctx),
                location: text(map, "location"),
                summary: text(map, "summary"),
                highlights: highlights(map),
            }
        }
        EntryKind::Experience => {
            let company = required(map, kind, "company")?;
            let position = required(map, kind, "position")?;
            FormattedEntry::Experience {
                company,
                position,
                date: date_range(map, ctx),
                time_span: time_span(map, ctx),
                location: text(map, "location"),
                summary: text(map, "summary"),
                highlights: highlights(map),
            }
        }
        EntryKind::Project => {
            let name = required(map, kind, "name")?;
            let date = match date_field(map, "date") {
                Some(raw) => non_empty(format_single_date(
                    &raw,
                    ctx.locale,
                    &ctx.templates.single_date,
                )),
                None => match (date_field(map, "start_date"), date_field(map, "end_date")) {
                    (Some(start), Some(end)) => non_empty(format_date_range(
                        &start,
                        &end,
                        ctx.locale,
                        &ctx.templates.single_date,
                        &ctx.templates.date_range,
                    )),
                    _ => None,
                },
            };
            FormattedEntry::Project {
                name,
                date,
                location: text(map, "location"),
                summary: text(map, "summary"),
                highlights: highlights(map),
            }
        }
        EntryKind::Publication => {
            let title = required(map, kind, "title")?;
            let authors = authors(map).ok_or_else(|| ValidationFailure {
                kind,
                field: "authors".to_string(),
                path: vec!["authors".to_string()],
                message: "publication entry needs 'authors' as a non-empty list".to_string(),
            })?;
            FormattedEntry::Publication {
                title,
                authors,
                date: date_field(map, "date").and_then(|raw| {
                    non_empty(format_single_date(
                        &raw,
                        ctx.locale,
                        &ctx.templates.single_date,
                    ))
                }),
                journal: text(map, "journal"),
                doi: text(map, "doi"),
                url: text(map, "url"),
                summary: text(map, "summary"),
            }
        }
        EntryKind::Skill => FormattedEntry::Skill {
            label: required(map, kind, "label")?,
            details: required(map, kind, "details")?,
        },
        EntryKind::Bullet => match text(map, "bullet") {
            Some(text) => FormattedEntry::Bullet { text },
            None => return Ok(None),
        },
        // Mappings never classify as text.
        EntryKind::Text | EntryKind::Unknown => {
            warn!(keys = ?map.keys().collect::<Vec<_>>(), "Unknown entry shape");
            unknown()
        }
    };
    Ok(Some(formatted))
}

fn unknown() -> FormattedEntry {
    FormattedEntry::Unknown {
        placeholder: UNKNOWN_ENTRY_PLACEHOLDER.to_string(),
    }
}

/// One entry's result inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    Formatted { index: usize, entry: FormattedEntry },
    Failed { index: usize, failure: ValidationFailure },
}

impl EntryOutcome {
    pub fn index(&self) -> usize {
        match self {
            EntryOutcome::Formatted { index, .. } | EntryOutcome::Failed { index, .. } => *index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSection {
    pub title: String,
    pub entries: Vec<EntryOutcome>,
}

impl FormattedSection {
    pub fn failures(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.entries.iter().filter_map(|o| match o {
            EntryOutcome::Failed { failure, .. } => Some(failure),
            EntryOutcome::Formatted { .. } => None,
        })
    }
}

/// Formats every entry of a section. Failure paths are rooted at
/// `cv.sections.<title>.<index>`. A section that is not a list yields a
/// single failure at index 0.
pub fn format_section(title: &str, entries: &Value, ctx: &FormatContext<'_>) -> FormattedSection {
    let prefix = |index: usize| {
        vec![
            "cv".to_string(),
            "sections".to_string(),
            title.to_string(),
            index.to_string(),
        ]
    };

    let Some(items) = entries.as_array() else {
        return FormattedSection {
            title: title.to_string(),
            entries: vec![EntryOutcome::Failed {
                index: 0,
                failure: ValidationFailure {
                    kind: EntryKind::Unknown,
                    field: title.to_string(),
                    path: vec!["cv".to_string(), "sections".to_string(), title.to_string()],
                    message: format!("section '{title}' must be a list of entries"),
                },
            }],
        };
    };

    let outcomes = items
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match classify_and_format(entry, ctx) {
            Ok(Some(entry)) => Some(EntryOutcome::Formatted { index, entry }),
            Ok(None) => None,
            Err(failure) => Some(EntryOutcome::Failed {
                index,
                failure: failure.within(&prefix(index)),
            }),
        })
        .collect();

    FormattedSection {
        title: title.to_string(),
        entries: outcomes,
    }
}

fn text(map: &Map<String, Value>, key: &str) -> Option<String> {
    scalar_text(map.get(key)).filter(|s| !s.trim().is_empty())
}

fn required(map: &Map<String, Value>, kind: EntryKind, key: &str) -> Result<String, ValidationFailure> {
    text(map, key).ok_or_else(|| ValidationFailure::missing(kind, key))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn date_field(map: &Map<String, Value>, key: &str) -> Option<RawDate> {
    RawDate::from_value(map.get(key))
}

/// Range when both ends exist, the lone end otherwise.
fn date_range(map: &Map<String, Value>, ctx: &FormatContext<'_>) -> Option<String> {
    let single = &ctx.templates.single_date;
    let rendered = match (date_field(map, "start_date"), date_field(map, "end_date")) {
        (Some(start), Some(end)) => format_date_range(
            &start,
            &end,
            ctx.locale,
            single,
            &ctx.templates.date_range,
        ),
        (Some(only), None) | (None, Some(only)) => format_single_date(&only, ctx.locale, single),
        (None, None) => return None,
    };
    non_empty(rendered)
}

fn time_span(map: &Map<String, Value>, ctx: &FormatContext<'_>) -> Option<String> {
    let start = date_field(map, "start_date")?;
    let end = date_field(map, "end_date")?;
    non_empty(compute_time_span(
        &start,
        &end,
        ctx.locale,
        ctx.reference_date,
        &ctx.templates.time_span,
    ))
}

/// Strings as written; `{GPA: x}` objects as `GPA: x`; anything else as
/// compact JSON.
fn highlights(map: &Map<String, Value>) -> Vec<String> {
    let render = |item: &Value| match item {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        Value::Object(obj) if obj.contains_key("GPA") => {
            scalar_text(obj.get("GPA")).map(|gpa| format!("GPA: {gpa}"))
        }
        other => scalar_text(Some(other)).or_else(|| serde_json::to_string(other).ok()),
    };
    match map.get("highlights") {
        Some(Value::Array(items)) => items.iter().filter_map(render).collect(),
        Some(single @ Value::String(_)) => render(single).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn authors(map: &Map<String, Value>) -> Option<Vec<String>> {
    let list: Vec<String> = map
        .get("authors")?
        .as_array()?
        .iter()
        .filter_map(|a| scalar_text(Some(a)))
        .collect();
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}
