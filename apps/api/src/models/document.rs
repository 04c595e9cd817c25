//! Lenient, read-only view over an untyped resume document.
//!
//! The YAML collaborator hands us a `serde_json::Value`; this module pulls
//! out the header fields without ever failing on unexpected shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::theme::StyleOverride;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialNetwork {
    pub network: String,
    pub username: String,
}

impl SocialNetwork {
    /// Profile URL in the `https://<network>.com/<username>` form.
    pub fn url(&self) -> String {
        format!(
            "https://{}.com/{}",
            self.network.to_lowercase(),
            self.username
        )
    }
}

/// Header fields of the `cv` mapping. Contact fields that may be a single
/// string or a list keep only the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeHeader {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub photo: Option<String>,
    pub social_networks: Vec<SocialNetwork>,
}

/// Borrowed view of a whole resume document (`cv`, `design`, `locale`,
/// `settings`).
#[derive(Debug, Clone, Copy)]
pub struct ResumeDocument<'a> {
    root: &'a Value,
}

impl<'a> ResumeDocument<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    pub fn cv(&self) -> Option<&'a Map<String, Value>> {
        self.root.get("cv").and_then(Value::as_object)
    }

    pub fn header(&self) -> ResumeHeader {
        let Some(cv) = self.cv() else {
            return ResumeHeader::default();
        };
        ResumeHeader {
            name: scalar_text(cv.get("name")),
            headline: scalar_text(cv.get("headline")),
            location: scalar_text(cv.get("location")),
            email: first_text(cv.get("email")),
            phone: first_text(cv.get("phone")),
            website: first_text(cv.get("website")),
            photo: scalar_text(cv.get("photo")),
            social_networks: cv
                .get("social_networks")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|n| {
                            Some(SocialNetwork {
                                network: scalar_text(n.get("network"))?,
                                username: scalar_text(n.get("username"))?,
                            })
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Sections in document order. Values are left untyped: a section that
    /// is not a sequence is still returned so validation can report it.
    pub fn sections(&self) -> Vec<(&'a str, &'a Value)> {
        self.cv()
            .and_then(|cv| cv.get("sections"))
            .and_then(Value::as_object)
            .map(|sections| sections.iter().map(|(k, v)| (k.as_str(), v)).collect())
            .unwrap_or_default()
    }

    pub fn design(&self) -> Option<&'a Value> {
        self.root.get("design")
    }

    /// `design.theme`, when it is a non-empty string.
    pub fn theme_id(&self) -> Option<&'a str> {
        self.design()
            .and_then(|d| d.get("theme"))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn style_override(&self) -> Option<StyleOverride> {
        StyleOverride::from_design(self.design())
    }

    pub fn locale(&self) -> Option<&'a Value> {
        self.root.get("locale")
    }

    /// `settings.current_date`, the document's pinned "today".
    pub fn current_date(&self) -> Option<&'a str> {
        self.root
            .get("settings")
            .and_then(|s| s.get("current_date"))
            .and_then(Value::as_str)
    }
}

/// Display text for a scalar: strings as-is, numbers and booleans printed.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First usable entry of a string-or-list field.
pub fn first_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Array(items) => items.iter().find_map(|v| scalar_text(Some(v))),
        other => scalar_text(Some(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "cv": {
                "name": "Ada Lovelace",
                "email": ["ada@example.com", "second@example.com"],
                "phone": "+44 20 0000",
                "social_networks": [
                    { "network": "GitHub", "username": "ada" },
                    { "network": "Broken" }
                ],
                "sections": {
                    "Experience": [],
                    "Education": [],
                    "About": "not a list"
                }
            },
            "design": { "theme": "modern" },
            "settings": { "current_date": "2024-07-01" }
        })
    }

    #[test]
    fn test_header_takes_first_contact_entry() {
        let doc = sample();
        let header = ResumeDocument::new(&doc).header();
        assert_eq!(header.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(header.email.as_deref(), Some("ada@example.com"));
        assert_eq!(header.phone.as_deref(), Some("+44 20 0000"));
        assert_eq!(header.social_networks.len(), 1, "incomplete network dropped");
        assert_eq!(header.social_networks[0].url(), "https://github.com/ada");
    }

    #[test]
    fn test_sections_keep_document_order() {
        let doc = sample();
        let titles: Vec<&str> = ResumeDocument::new(&doc)
            .sections()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(titles, vec!["Experience", "Education", "About"]);
    }

    #[test]
    fn test_design_and_settings_accessors() {
        let doc = sample();
        let view = ResumeDocument::new(&doc);
        assert_eq!(view.theme_id(), Some("modern"));
        assert_eq!(view.current_date(), Some("2024-07-01"));
        assert!(view.style_override().is_none());
    }

    #[test]
    fn test_missing_cv_gives_empty_header() {
        let doc = json!({ "design": {} });
        let view = ResumeDocument::new(&doc);
        assert_eq!(view.header(), ResumeHeader::default());
        assert!(view.sections().is_empty());
        assert_eq!(view.theme_id(), None);
    }
}
