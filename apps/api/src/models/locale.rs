//! Locale tables used by every date and time-span formatter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Words and month tables for one display language.
///
/// Both month tables always hold exactly 12 entries, index 0 = January.
/// Build custom locales through [`Locale::from_document`] so a short table
/// can never slip in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub language: String,
    pub last_updated: String,
    pub month: String,
    pub months: String,
    pub year: String,
    pub years: String,
    pub present: String,
    pub month_abbreviations: Vec<String>,
    pub month_names: Vec<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::chinese()
    }
}

fn owned(items: [&str; 12]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Locale {
    pub fn chinese() -> Self {
        Self {
            language: "chinese".to_string(),
            last_updated: "最后更新于".to_string(),
            month: "月".to_string(),
            months: "月".to_string(),
            year: "年".to_string(),
            years: "年".to_string(),
            present: "至今".to_string(),
            month_abbreviations: owned([
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ]),
            month_names: owned([
                "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月",
                "十一月", "十二月",
            ]),
        }
    }

    pub fn english() -> Self {
        Self {
            language: "english".to_string(),
            last_updated: "Last updated in".to_string(),
            month: "month".to_string(),
            months: "months".to_string(),
            year: "year".to_string(),
            years: "years".to_string(),
            present: "present".to_string(),
            month_abbreviations: owned([
                "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov",
                "Dec",
            ]),
            month_names: owned([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
        }
    }

    /// Built-in locale for a language tag. Anything other than `english`
    /// resolves to the Chinese tables.
    pub fn for_language(language: &str) -> Self {
        if language.trim().eq_ignore_ascii_case("english") {
            Self::english()
        } else {
            Self::chinese()
        }
    }

    /// Builds the locale a document asks for.
    ///
    /// The document's `language` tag picks the base tables (falling back to
    /// `fallback_language`), then every string field the document sets is
    /// overlaid one by one. Month tables are only taken when they hold
    /// exactly 12 strings.
    pub fn from_document(value: Option<&Value>, fallback_language: &str) -> Self {
        let Some(map) = value.and_then(Value::as_object) else {
            return Self::for_language(fallback_language);
        };

        let language = map
            .get("language")
            .and_then(Value::as_str)
            .unwrap_or(fallback_language);
        let mut locale = Self::for_language(language);
        locale.language = language.to_string();

        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        if let Some(v) = text("last_updated") {
            locale.last_updated = v;
        }
        if let Some(v) = text("month") {
            locale.month = v;
        }
        if let Some(v) = text("months") {
            locale.months = v;
        }
        if let Some(v) = text("year") {
            locale.year = v;
        }
        if let Some(v) = text("years") {
            locale.years = v;
        }
        if let Some(v) = text("present") {
            locale.present = v;
        }
        if let Some(v) = twelve_strings(map.get("month_abbreviations")) {
            locale.month_abbreviations = v;
        }
        if let Some(v) = twelve_strings(map.get("month_names")) {
            locale.month_names = v;
        }
        locale
    }

    /// Abbreviation for a 1-based month, or the month number if out of range.
    pub fn month_abbreviation(&self, month: u32) -> String {
        lookup(&self.month_abbreviations, month)
    }

    /// Full name for a 1-based month, or the month number if out of range.
    pub fn month_name(&self, month: u32) -> String {
        lookup(&self.month_names, month)
    }
}

fn lookup(table: &[String], month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .cloned()
        .unwrap_or_else(|| month.to_string())
}

fn twelve_strings(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    if items.len() != 12 {
        return None;
    }
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_tables_have_twelve_months() {
        for locale in [Locale::chinese(), Locale::english()] {
            assert_eq!(locale.month_names.len(), 12);
            assert_eq!(locale.month_abbreviations.len(), 12);
        }
    }

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Locale::default().present, "至今");
    }

    #[test]
    fn test_month_lookup_is_one_based() {
        let en = Locale::english();
        assert_eq!(en.month_name(1), "January");
        assert_eq!(en.month_abbreviation(6), "June");
        assert_eq!(en.month_name(0), "0");
        assert_eq!(en.month_name(13), "13");
    }

    #[test]
    fn test_from_document_language_picks_base_tables() {
        let doc = json!({ "language": "english" });
        let locale = Locale::from_document(Some(&doc), "chinese");
        assert_eq!(locale.years, "years");
        assert_eq!(locale.month_names[11], "December");
    }

    #[test]
    fn test_from_document_overlays_individual_words() {
        let doc = json!({ "language": "english", "present": "now" });
        let locale = Locale::from_document(Some(&doc), "chinese");
        assert_eq!(locale.present, "now");
        assert_eq!(locale.year, "year");
    }

    #[test]
    fn test_from_document_rejects_short_month_table() {
        let doc = json!({ "language": "english", "month_names": ["Jan", "Feb"] });
        let locale = Locale::from_document(Some(&doc), "chinese");
        assert_eq!(locale.month_names.len(), 12);
        assert_eq!(locale.month_names[0], "January");
    }

    #[test]
    fn test_from_document_missing_uses_fallback_language() {
        assert_eq!(Locale::from_document(None, "english"), Locale::english());
        assert_eq!(Locale::from_document(None, "chinese"), Locale::chinese());
    }
}
