//! Per-attribute style resolution.
//!
//! Every attribute is resolved on its own, highest priority first:
//! 1. session typography override (UI-supplied, typography only)
//! 2. document override (`design.colors` / `design.typography`)
//! 3. theme registry value, including the theme's own derived fallbacks
//!    (e.g. `section_titles` → theme `primary`)
//! 4. hard-coded constant
//!
//! Empty strings count as unset at every tier.

use serde::{Deserialize, Serialize};

use crate::models::theme::{ColorPalette, StyleOverride, ThemeDescriptor, Typography};

pub const FALLBACK_ACCENT_BLUE: &str = "rgb(0, 79, 144)";
pub const FALLBACK_TEXT: &str = "rgb(0, 0, 0)";
pub const FALLBACK_BACKGROUND: &str = "white";
pub const FALLBACK_BORDER: &str = "rgb(229, 231, 235)";
pub const FALLBACK_SECONDARY: &str = "rgb(107, 114, 128)";
pub const FALLBACK_FONT_FAMILY: &str = r#""Source Sans 3", "Noto Sans SC", sans-serif"#;
pub const FALLBACK_FONT_SIZE: &str = "10pt";
pub const FALLBACK_LINE_HEIGHT: &str = "1.5";
pub const FALLBACK_ALIGNMENT: &str = "left";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
    pub border: String,
    pub name: String,
    pub headline: String,
    pub section_titles: String,
    pub links: String,
    pub connections: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTypography {
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    pub heading_font: String,
    pub heading_size: String,
    pub heading_line_height: String,
    pub alignment: String,
}

/// Fully populated style record handed to every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Id of the theme that fed tier 3, if one was found.
    pub theme_id: Option<String>,
    pub colors: ResolvedColors,
    pub typography: ResolvedTypography,
}

/// First non-empty candidate, else `fallback`.
fn first_set(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .copied()
        .unwrap_or(fallback)
        .to_string()
}

/// Reads one field out of an optional layer.
fn field<'a, T>(layer: Option<&'a T>, get: impl Fn(&'a T) -> &'a Option<String>) -> Option<&'a str> {
    layer.and_then(|l| get(l).as_deref())
}

/// Session, document and theme values for one typography field.
fn typography_tiers<'a>(
    layers: [Option<&'a Typography>; 3],
    get: fn(&Typography) -> &Option<String>,
) -> [Option<&'a str>; 3] {
    layers.map(|layer| field(layer, get))
}

/// Resolves the style for a theme plus optional override layers.
///
/// `theme` is `None` when the requested id is not in the registry; the
/// result is then built from the override layers and constants alone.
/// Pure: identical inputs always produce identical records.
pub fn resolve_style(
    theme: Option<&ThemeDescriptor>,
    document: Option<&StyleOverride>,
    session: Option<&Typography>,
) -> ResolvedStyle {
    let tc: Option<&ColorPalette> = theme.map(|t| &t.colors);
    let dc: Option<&ColorPalette> = document.map(|d| &d.colors);

    let colors = ResolvedColors {
        primary: first_set(
            &[field(dc, |c| &c.primary), field(tc, |c| &c.primary)],
            FALLBACK_ACCENT_BLUE,
        ),
        secondary: first_set(
            &[field(dc, |c| &c.secondary), field(tc, |c| &c.secondary)],
            FALLBACK_SECONDARY,
        ),
        background: first_set(
            &[field(dc, |c| &c.background), field(tc, |c| &c.background)],
            FALLBACK_BACKGROUND,
        ),
        text: first_set(
            &[
                field(dc, |c| &c.text),
                field(tc, |c| &c.text),
                field(tc, |c| &c.body),
                field(dc, |c| &c.body),
            ],
            FALLBACK_TEXT,
        ),
        accent: first_set(
            &[
                field(dc, |c| &c.accent),
                field(tc, |c| &c.accent),
                field(tc, |c| &c.primary),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
        border: first_set(
            &[field(dc, |c| &c.border), field(tc, |c| &c.border)],
            FALLBACK_BORDER,
        ),
        name: first_set(
            &[
                field(dc, |c| &c.name),
                field(tc, |c| &c.name),
                field(tc, |c| &c.primary),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
        headline: first_set(
            &[
                field(dc, |c| &c.headline),
                field(tc, |c| &c.headline),
                field(tc, |c| &c.secondary),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
        section_titles: first_set(
            &[
                field(dc, |c| &c.section_titles),
                field(tc, |c| &c.section_titles),
                field(tc, |c| &c.primary),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
        links: first_set(
            &[
                field(dc, |c| &c.links),
                field(tc, |c| &c.links),
                field(tc, |c| &c.accent),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
        connections: first_set(
            &[
                field(dc, |c| &c.connections),
                field(tc, |c| &c.connections),
                field(tc, |c| &c.secondary),
            ],
            FALLBACK_ACCENT_BLUE,
        ),
    };

    let layers = [session, document.map(|d| &d.typography), theme.map(|t| &t.typography)];

    let font_family = first_set(&typography_tiers(layers, |t| &t.font_family), FALLBACK_FONT_FAMILY);
    let font_size = first_set(&typography_tiers(layers, |t| &t.font_size), FALLBACK_FONT_SIZE);
    let line_height = first_set(&typography_tiers(layers, |t| &t.line_height), FALLBACK_LINE_HEIGHT);
    let typography = ResolvedTypography {
        heading_font: first_set(&typography_tiers(layers, |t| &t.heading_font), &font_family),
        heading_size: first_set(&typography_tiers(layers, |t| &t.heading_size), &font_size),
        heading_line_height: first_set(&typography_tiers(layers, |t| &t.heading_line_height), &line_height),
        alignment: first_set(&typography_tiers(layers, |t| &t.alignment), FALLBACK_ALIGNMENT),
        font_family,
        font_size,
        line_height,
    };

    ResolvedStyle {
        theme_id: theme.map(|t| t.id.clone()),
        colors,
        typography,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeCategory;
    use crate::theme::registry::ThemeRegistry;

    fn bare_theme(colors: ColorPalette) -> ThemeDescriptor {
        ThemeDescriptor {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            description: String::new(),
            category: ThemeCategory::Minimal,
            colors,
            typography: Typography::default(),
        }
    }

    #[test]
    fn test_section_titles_fall_back_to_theme_primary() {
        let theme = bare_theme(ColorPalette {
            primary: Some("rgb(1, 1, 1)".into()),
            ..Default::default()
        });
        let document = StyleOverride {
            colors: ColorPalette {
                text: Some("rgb(9, 9, 9)".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let style = resolve_style(Some(&theme), Some(&document), None);
        assert_eq!(style.colors.section_titles, "rgb(1, 1, 1)");
        assert_eq!(style.colors.text, "rgb(9, 9, 9)");
    }

    #[test]
    fn test_document_beats_theme_per_field() {
        let registry = ThemeRegistry::builtin();
        let document = StyleOverride {
            colors: ColorPalette {
                name: Some("rgb(5, 5, 5)".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let style = resolve_style(registry.get("modern"), Some(&document), None);
        assert_eq!(style.colors.name, "rgb(5, 5, 5)");
        assert_eq!(
            style.colors.headline, "rgb(107, 114, 128)",
            "untouched fields keep the theme value"
        );
    }

    #[test]
    fn test_missing_theme_uses_constants_only() {
        let style = resolve_style(None, None, None);
        assert_eq!(style.theme_id, None);
        assert_eq!(style.colors.primary, FALLBACK_ACCENT_BLUE);
        assert_eq!(style.colors.secondary, FALLBACK_SECONDARY);
        assert_eq!(style.colors.background, FALLBACK_BACKGROUND);
        assert_eq!(style.colors.text, FALLBACK_TEXT);
        assert_eq!(style.colors.border, FALLBACK_BORDER);
        assert_eq!(style.colors.headline, FALLBACK_ACCENT_BLUE);
        assert_eq!(style.typography.font_family, FALLBACK_FONT_FAMILY);
        assert_eq!(style.typography.heading_font, FALLBACK_FONT_FAMILY);
        assert_eq!(style.typography.heading_size, FALLBACK_FONT_SIZE);
        assert_eq!(style.typography.alignment, "left");
    }

    #[test]
    fn test_text_chain_prefers_theme_body_over_document_body() {
        let theme = bare_theme(ColorPalette {
            body: Some("theme-body".into()),
            ..Default::default()
        });
        let document = StyleOverride {
            colors: ColorPalette {
                body: Some("doc-body".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let style = resolve_style(Some(&theme), Some(&document), None);
        assert_eq!(style.colors.text, "theme-body");

        let style = resolve_style(None, Some(&document), None);
        assert_eq!(style.colors.text, "doc-body");
    }

    #[test]
    fn test_session_typography_wins() {
        let registry = ThemeRegistry::builtin();
        let document = StyleOverride {
            typography: Typography {
                font_family: Some("Doc Font".into()),
                font_size: Some("12pt".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let session = Typography {
            font_family: Some("Session Font".into()),
            ..Default::default()
        };
        let style = resolve_style(registry.get("classic"), Some(&document), Some(&session));
        assert_eq!(style.typography.font_family, "Session Font");
        assert_eq!(style.typography.font_size, "12pt");
        assert_eq!(style.typography.line_height, "1.5");
    }

    #[test]
    fn test_heading_falls_back_to_resolved_body_attributes() {
        let session = Typography {
            font_family: Some("Body".into()),
            line_height: Some("2".into()),
            ..Default::default()
        };
        let style = resolve_style(None, None, Some(&session));
        assert_eq!(style.typography.heading_font, "Body");
        assert_eq!(style.typography.heading_line_height, "2");
    }

    #[test]
    fn test_theme_heading_font_kept_when_session_changes_body() {
        let registry = ThemeRegistry::builtin();
        let session = Typography {
            font_family: Some("Body".into()),
            ..Default::default()
        };
        let style = resolve_style(registry.get("sb2nov"), None, Some(&session));
        assert_eq!(style.typography.heading_font, r#""Latin Modern Roman", serif"#);
    }

    #[test]
    fn test_empty_strings_count_as_unset() {
        let document = StyleOverride {
            colors: ColorPalette {
                primary: Some("  ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let style = resolve_style(None, Some(&document), None);
        assert_eq!(style.colors.primary, FALLBACK_ACCENT_BLUE);
    }

    #[test]
    fn test_resolution_is_referentially_transparent() {
        let registry = ThemeRegistry::builtin();
        let a = resolve_style(registry.get("creative"), None, None);
        let b = resolve_style(registry.get("creative"), None, None);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
