//! Entry classification by key presence.
//!
//! Entries are untyped, so the kind is decided by an ordered predicate
//! chain. Order matters: an object with both `name` and `company` is an
//! experience, never a project.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Education,
    Experience,
    Project,
    Publication,
    Skill,
    Bullet,
    Text,
    Unknown,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Education => "education",
            EntryKind::Experience => "experience",
            EntryKind::Project => "project",
            EntryKind::Publication => "publication",
            EntryKind::Skill => "skill",
            EntryKind::Bullet => "bullet",
            EntryKind::Text => "text",
            EntryKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Predicate = fn(&Map<String, Value>) -> bool;

/// Object rules, tried top to bottom. Plain strings are handled before
/// this table is consulted.
const RULES: &[(EntryKind, Predicate)] = &[
    (EntryKind::Education, is_education),
    (EntryKind::Experience, is_experience),
    (EntryKind::Project, is_project),
    (EntryKind::Publication, is_publication),
    (EntryKind::Skill, is_skill),
    (EntryKind::Bullet, is_bullet),
];

fn is_education(m: &Map<String, Value>) -> bool {
    m.contains_key("institution")
}

fn is_experience(m: &Map<String, Value>) -> bool {
    m.contains_key("company")
}

fn is_project(m: &Map<String, Value>) -> bool {
    m.contains_key("name") && !m.contains_key("company")
}

fn is_publication(m: &Map<String, Value>) -> bool {
    m.contains_key("title") && m.contains_key("authors")
}

fn is_skill(m: &Map<String, Value>) -> bool {
    m.contains_key("label") && m.contains_key("details")
}

fn is_bullet(m: &Map<String, Value>) -> bool {
    m.contains_key("bullet")
}

/// Decides which kind of entry `entry` is. Total.
pub fn classify_entry(entry: &Value) -> EntryKind {
    match entry {
        Value::String(_) => EntryKind::Text,
        Value::Object(map) => RULES
            .iter()
            .find(|(_, matches)| matches(map))
            .map(|(kind, _)| *kind)
            .unwrap_or(EntryKind::Unknown),
        _ => EntryKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_education_wins_over_everything() {
        let entry = json!({ "institution": "MIT", "company": "Acme", "name": "x" });
        assert_eq!(classify_entry(&entry), EntryKind::Education);
    }

    #[test]
    fn test_company_with_name_is_experience() {
        let entry = json!({ "name": "Side thing", "company": "Acme", "position": "Dev" });
        assert_eq!(classify_entry(&entry), EntryKind::Experience);
    }

    #[test]
    fn test_company_always_experience_regardless_of_other_keys() {
        let extra_keys = ["name", "title", "authors", "label", "details", "bullet", "date"];
        for key in extra_keys {
            let mut entry = json!({ "company": "Acme" });
            entry[key] = json!("x");
            assert_eq!(
                classify_entry(&entry),
                EntryKind::Experience,
                "company + {key} must stay experience"
            );
        }
    }

    #[test]
    fn test_project_by_name() {
        assert_eq!(classify_entry(&json!({ "name": "Compiler" })), EntryKind::Project);
    }

    #[test]
    fn test_publication_needs_title_and_authors() {
        assert_eq!(
            classify_entry(&json!({ "title": "Paper", "authors": ["A"] })),
            EntryKind::Publication
        );
        assert_eq!(classify_entry(&json!({ "title": "Paper" })), EntryKind::Unknown);
    }

    #[test]
    fn test_skill_and_bullet() {
        assert_eq!(
            classify_entry(&json!({ "label": "Languages", "details": "Rust" })),
            EntryKind::Skill
        );
        assert_eq!(classify_entry(&json!({ "bullet": "Did a thing" })), EntryKind::Bullet);
    }

    #[test]
    fn test_plain_string_is_text() {
        assert_eq!(classify_entry(&json!("Just a line")), EntryKind::Text);
    }

    #[test]
    fn test_unmatched_shapes_are_unknown() {
        assert_eq!(classify_entry(&json!({ "foo": 1 })), EntryKind::Unknown);
        assert_eq!(classify_entry(&json!(42)), EntryKind::Unknown);
        assert_eq!(classify_entry(&json!(null)), EntryKind::Unknown);
        assert_eq!(classify_entry(&json!(["a"])), EntryKind::Unknown);
    }

    #[test]
    fn test_key_presence_not_value() {
        // A null institution still routes to education; validation rejects it later.
        assert_eq!(
            classify_entry(&json!({ "institution": null })),
            EntryKind::Education
        );
    }
}
