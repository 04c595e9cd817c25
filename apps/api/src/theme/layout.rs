//! Per-theme layout derivation (header sizes, section title rule).

use serde::{Deserialize, Serialize};

use crate::theme::resolver::ResolvedStyle;

/// Horizontal rule drawn under section titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    pub width: String,
    pub color: String,
    pub padding_bottom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeLayout {
    pub name_size: String,
    pub headline_size: String,
    pub section_title_margin_bottom: String,
    pub section_title_rule: Option<TitleRule>,
}

/// Layout for `theme_id`, with rule colors taken from the resolved style.
/// Unknown ids get the classic layout.
pub fn layout_for(theme_id: &str, style: &ResolvedStyle) -> ThemeLayout {
    match theme_id {
        "modern" => ThemeLayout {
            name_size: "32pt".to_string(),
            headline_size: "13pt".to_string(),
            section_title_margin_bottom: "10px".to_string(),
            section_title_rule: Some(TitleRule {
                width: "2px".to_string(),
                color: style.colors.section_titles.clone(),
                padding_bottom: "3px".to_string(),
            }),
        },
        "minimal" => ThemeLayout {
            name_size: "26pt".to_string(),
            headline_size: "11pt".to_string(),
            section_title_margin_bottom: "8px".to_string(),
            section_title_rule: Some(TitleRule {
                width: "1px".to_string(),
                color: style.colors.border.clone(),
                padding_bottom: "2px".to_string(),
            }),
        },
        _ => ThemeLayout {
            name_size: "30pt".to_string(),
            headline_size: "12pt".to_string(),
            section_title_margin_bottom: "10px".to_string(),
            section_title_rule: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::registry::ThemeRegistry;
    use crate::theme::resolver::resolve_style;

    #[test]
    fn test_modern_rule_uses_section_title_color() {
        let registry = ThemeRegistry::builtin();
        let style = resolve_style(registry.get("modern"), None, None);
        let layout = layout_for("modern", &style);
        let rule = layout.section_title_rule.unwrap();
        assert_eq!(rule.width, "2px");
        assert_eq!(rule.color, "rgb(37, 99, 235)");
        assert_eq!(layout.name_size, "32pt");
    }

    #[test]
    fn test_minimal_rule_uses_border_color() {
        let registry = ThemeRegistry::builtin();
        let style = resolve_style(registry.get("minimal"), None, None);
        let rule = layout_for("minimal", &style).section_title_rule.unwrap();
        assert_eq!(rule.color, "rgb(230, 230, 230)");
    }

    #[test]
    fn test_other_themes_have_no_rule() {
        let style = resolve_style(None, None, None);
        for id in ["classic", "sb2nov", "moderncv", ""] {
            let layout = layout_for(id, &style);
            assert!(layout.section_title_rule.is_none(), "{id} should have no rule");
            assert_eq!(layout.name_size, "30pt");
        }
    }
}
