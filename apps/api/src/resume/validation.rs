//! Whole-document checks for resume YAML, run before preview so the editor
//! can point at every problem at once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static DATE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}(-\d{2}(-\d{2})?)?$").unwrap());

const MIN_YEAR: i64 = 1900;
const MAX_YEAR: i64 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path from the document root, e.g. `["cv", "email", "0"]`.
    pub location: Vec<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ValidationIssue {
    fn new(location: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            input: None,
        }
    }

    fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// Validates a parsed resume document. An empty result means the document
/// is well formed. A missing `cv` stops further checks.
pub fn validate_document(document: &Value) -> Vec<ValidationIssue> {
    let Some(cv) = document.get("cv").and_then(Value::as_object) else {
        return vec![ValidationIssue::new(path(&["cv"]), "missing 'cv' field")];
    };

    let mut issues = Vec::new();

    if !is_truthy(cv.get("name")) {
        issues.push(ValidationIssue::new(path(&["cv", "name"]), "missing 'name' field"));
    }

    validate_emails(cv, &mut issues);

    if let Some(sections) = cv.get("sections").and_then(Value::as_object) {
        for (title, entries) in sections {
            validate_section(title, entries, &mut issues);
        }
    }

    issues
}

fn validate_emails(cv: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) {
    let emails: Vec<&Value> = match cv.get("email") {
        None | Some(Value::Null) => return,
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    };
    for (idx, email) in emails.into_iter().enumerate() {
        let text = match email {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !EMAIL.is_match(&text) {
            issues.push(
                ValidationIssue::new(
                    vec!["cv".into(), "email".into(), idx.to_string()],
                    "invalid e-mail address",
                )
                .with_input(text),
            );
        }
    }
}

fn validate_section(title: &str, entries: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(entries) = entries.as_array() else {
        issues.push(ValidationIssue::new(
            path(&["cv", "sections", title]),
            "section must be a list",
        ));
        return;
    };

    for (idx, entry) in entries.iter().enumerate() {
        let Some(entry) = entry.as_object() else {
            continue;
        };
        let idx = idx.to_string();
        let at = |field: &str| path(&["cv", "sections", title, idx.as_str(), field]);

        if is_truthy(entry.get("institution")) {
            for field in ["degree", "area"] {
                if !is_truthy(entry.get(field)) {
                    issues.push(ValidationIssue::new(
                        at(field),
                        format!("education entry is missing '{field}'"),
                    ));
                }
            }
            validate_dates(entry, &at, issues);
        }

        if is_truthy(entry.get("company")) {
            if !is_truthy(entry.get("position")) {
                issues.push(ValidationIssue::new(
                    at("position"),
                    "experience entry is missing 'position'",
                ));
            }
            validate_dates(entry, &at, issues);
        }
    }
}

fn validate_dates(
    entry: &Map<String, Value>,
    at: &dyn Fn(&str) -> Vec<String>,
    issues: &mut Vec<ValidationIssue>,
) {
    for field in ["start_date", "end_date"] {
        if let Some(issue) = entry.get(field).and_then(|date| check_date(date, at(field))) {
            issues.push(issue);
        }
    }
}

fn check_date(date: &Value, location: Vec<String>) -> Option<ValidationIssue> {
    match date {
        Value::Number(n) => {
            let in_range = n
                .as_i64()
                .is_some_and(|year| (MIN_YEAR..=MAX_YEAR).contains(&year));
            (!in_range).then(|| {
                ValidationIssue::new(location, "year must be between 1900 and 2100")
                    .with_input(n.to_string())
            })
        }
        Value::String(s) if s.is_empty() || s == crate::dates::PRESENT => None,
        Value::String(s) => (!DATE_TEXT.is_match(s)).then(|| {
            ValidationIssue::new(location, "date must be YYYY, YYYY-MM or YYYY-MM-DD")
                .with_input(s.clone())
        }),
        _ => None,
    }
}

/// Mirrors how an editor treats a field as "filled in".
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn locations(issues: &[ValidationIssue]) -> Vec<String> {
        issues.iter().map(|i| i.location.join(".")).collect()
    }

    #[test]
    fn test_missing_cv_stops_early() {
        let issues = validate_document(&json!({ "design": { "theme": "classic" } }));
        assert_eq!(locations(&issues), vec!["cv"]);
    }

    #[test]
    fn test_valid_document_has_no_issues() {
        let doc = json!({
            "cv": {
                "name": "Jane",
                "email": "jane@example.com",
                "sections": {
                    "Education": [
                        { "institution": "MIT", "degree": "BS", "area": "CS",
                          "start_date": 2018, "end_date": "2022-06" }
                    ],
                    "Experience": [
                        { "company": "Acme", "position": "Dev",
                          "start_date": "2022-07-01", "end_date": "present" }
                    ]
                }
            }
        });
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn test_missing_name_and_bad_emails() {
        let doc = json!({ "cv": { "email": ["ok@example.com", "not-an-email"] } });
        let issues = validate_document(&doc);
        assert_eq!(locations(&issues), vec!["cv.name", "cv.email.1"]);
        assert_eq!(issues[1].input.as_deref(), Some("not-an-email"));
    }

    #[test]
    fn test_section_must_be_list() {
        let doc = json!({ "cv": { "name": "J", "sections": { "About": "hello" } } });
        assert_eq!(locations(&validate_document(&doc)), vec!["cv.sections.About"]);
    }

    #[test]
    fn test_entry_fields_and_dates() {
        let doc = json!({
            "cv": {
                "name": "J",
                "sections": {
                    "Education": [{ "institution": "MIT", "start_date": 1850 }],
                    "Experience": [{ "company": "Acme", "end_date": "June 2020" }]
                }
            }
        });
        let issues = validate_document(&doc);
        assert_eq!(
            locations(&issues),
            vec![
                "cv.sections.Education.0.degree",
                "cv.sections.Education.0.area",
                "cv.sections.Education.0.start_date",
                "cv.sections.Experience.0.position",
                "cv.sections.Experience.0.end_date",
            ]
        );
        assert_eq!(issues[2].input.as_deref(), Some("1850"));
        assert_eq!(issues[4].input.as_deref(), Some("June 2020"));
    }

    #[test]
    fn test_single_digit_month_is_rejected() {
        let doc = json!({
            "cv": { "name": "J", "sections": { "Work": [
                { "company": "A", "position": "B", "start_date": "2020-1" }
            ] } }
        });
        assert_eq!(validate_document(&doc).len(), 1);
    }
}
