//! The fixed set of named themes.

use crate::models::theme::{ColorPalette, ThemeCategory, ThemeDescriptor, Typography};

/// Immutable theme table. Built once and shared (e.g. behind an `Arc`);
/// lookups never mutate it.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDescriptor>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    pub fn new(themes: Vec<ThemeDescriptor>) -> Self {
        Self { themes }
    }

    /// The seven themes shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            theme(
                "classic",
                "Classic",
                "Traditional professional style that suits any industry",
                ThemeCategory::Professional,
                [
                    "rgb(0, 79, 144)",
                    "rgb(100, 100, 100)",
                    "rgb(255, 255, 255)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 79, 144)",
                    "rgb(200, 200, 200)",
                    "rgb(0, 79, 144)",
                    "rgb(0, 79, 144)",
                    "rgb(0, 79, 144)",
                    "rgb(0, 79, 144)",
                    "rgb(100, 100, 100)",
                ],
                r#""Source Sans 3", "Noto Sans SC", sans-serif"#,
                "10pt",
                "1.5",
            ),
            theme(
                "modern",
                "Modern",
                "Clean modern look for technology roles",
                ThemeCategory::Modern,
                [
                    "rgb(37, 99, 235)",
                    "rgb(107, 114, 128)",
                    "rgb(255, 255, 255)",
                    "rgb(17, 24, 39)",
                    "rgb(59, 130, 246)",
                    "rgb(229, 231, 235)",
                    "rgb(17, 24, 39)",
                    "rgb(107, 114, 128)",
                    "rgb(37, 99, 235)",
                    "rgb(59, 130, 246)",
                    "rgb(107, 114, 128)",
                ],
                r#""Inter", "Noto Sans SC", sans-serif"#,
                "10pt",
                "1.6",
            ),
            theme(
                "minimal",
                "Minimal",
                "Pared-back design that puts the content first",
                ThemeCategory::Minimal,
                [
                    "rgb(0, 0, 0)",
                    "rgb(100, 100, 100)",
                    "rgb(255, 255, 255)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 0, 0)",
                    "rgb(230, 230, 230)",
                    "rgb(0, 0, 0)",
                    "rgb(100, 100, 100)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 0, 0)",
                    "rgb(100, 100, 100)",
                ],
                r#""Helvetica Neue", "Noto Sans SC", sans-serif"#,
                "10pt",
                "1.5",
            ),
            theme(
                "engineeringresumes",
                "Engineering",
                "Built for technical positions",
                ThemeCategory::Professional,
                [
                    "rgb(0, 102, 204)",
                    "rgb(85, 85, 85)",
                    "rgb(255, 255, 255)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 102, 204)",
                    "rgb(204, 204, 204)",
                    "rgb(0, 0, 0)",
                    "rgb(85, 85, 85)",
                    "rgb(0, 102, 204)",
                    "rgb(0, 102, 204)",
                    "rgb(85, 85, 85)",
                ],
                r#""Roboto", "Noto Sans SC", sans-serif"#,
                "10pt",
                "1.4",
            ),
            theme(
                "sb2nov",
                "Sb2nov",
                "Simple single-column layout",
                ThemeCategory::Minimal,
                [
                    "rgb(0, 0, 0)",
                    "rgb(128, 128, 128)",
                    "rgb(255, 255, 255)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 0, 0)",
                    "rgb(220, 220, 220)",
                    "rgb(0, 0, 0)",
                    "rgb(128, 128, 128)",
                    "rgb(0, 0, 0)",
                    "rgb(0, 0, 0)",
                    "rgb(128, 128, 128)",
                ],
                r#""Latin Modern Roman", serif"#,
                "11pt",
                "1.5",
            ),
            theme(
                "creative",
                "Creative",
                "Expressive design with bold accents",
                ThemeCategory::Creative,
                [
                    "rgb(139, 92, 246)",
                    "rgb(236, 72, 153)",
                    "rgb(255, 255, 255)",
                    "rgb(31, 41, 55)",
                    "rgb(168, 85, 247)",
                    "rgb(243, 244, 246)",
                    "rgb(139, 92, 246)",
                    "rgb(236, 72, 153)",
                    "rgb(139, 92, 246)",
                    "rgb(168, 85, 247)",
                    "rgb(107, 114, 128)",
                ],
                r#""Poppins", "Noto Sans SC", sans-serif"#,
                "10pt",
                "1.6",
            ),
            theme(
                "corporate",
                "Corporate",
                "Formal corporate style",
                ThemeCategory::Professional,
                [
                    "rgb(30, 58, 138)",
                    "rgb(75, 85, 99)",
                    "rgb(255, 255, 255)",
                    "rgb(17, 24, 39)",
                    "rgb(30, 58, 138)",
                    "rgb(209, 213, 219)",
                    "rgb(30, 58, 138)",
                    "rgb(75, 85, 99)",
                    "rgb(30, 58, 138)",
                    "rgb(30, 58, 138)",
                    "rgb(75, 85, 99)",
                ],
                r#""Georgia", "Noto Serif SC", serif"#,
                "10pt",
                "1.5",
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    pub fn by_category(&self, category: ThemeCategory) -> Vec<&ThemeDescriptor> {
        self.themes
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// A copy of theme `id` with `colors` laid over its palette field by
    /// field. The registry itself is untouched.
    pub fn customize_colors(&self, id: &str, colors: &ColorPalette) -> Option<ThemeDescriptor> {
        let base = self.get(id)?;
        Some(ThemeDescriptor {
            colors: base.colors.overlay(colors),
            ..base.clone()
        })
    }
}

/// Palette order: primary, secondary, background, text, accent, border,
/// name, headline, section_titles, links, connections.
#[allow(clippy::too_many_arguments)]
fn theme(
    id: &str,
    name: &str,
    description: &str,
    category: ThemeCategory,
    palette: [&str; 11],
    font_family: &str,
    font_size: &str,
    line_height: &str,
) -> ThemeDescriptor {
    let c = |i: usize| Some(palette[i].to_string());
    ThemeDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        colors: ColorPalette {
            primary: c(0),
            secondary: c(1),
            background: c(2),
            text: c(3),
            accent: c(4),
            border: c(5),
            body: None,
            name: c(6),
            headline: c(7),
            section_titles: c(8),
            links: c(9),
            connections: c(10),
        },
        typography: Typography {
            font_family: Some(font_family.to_string()),
            font_size: Some(font_size.to_string()),
            line_height: Some(line_height.to_string()),
            heading_font: Some(font_family.to_string()),
            heading_size: None,
            heading_line_height: None,
            alignment: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_seven_themes() {
        let registry = ThemeRegistry::builtin();
        let ids: Vec<&str> = registry.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "classic",
                "modern",
                "minimal",
                "engineeringresumes",
                "sb2nov",
                "creative",
                "corporate"
            ]
        );
    }

    #[test]
    fn test_get_unknown_is_none() {
        assert!(ThemeRegistry::builtin().get("moderncv").is_none());
    }

    #[test]
    fn test_classic_palette() {
        let registry = ThemeRegistry::builtin();
        let classic = registry.get("classic").unwrap();
        assert_eq!(classic.colors.primary.as_deref(), Some("rgb(0, 79, 144)"));
        assert_eq!(classic.colors.connections.as_deref(), Some("rgb(100, 100, 100)"));
        assert_eq!(classic.typography.font_size.as_deref(), Some("10pt"));
    }

    #[test]
    fn test_by_category() {
        let registry = ThemeRegistry::builtin();
        let professional: Vec<&str> = registry
            .by_category(ThemeCategory::Professional)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(professional, vec!["classic", "engineeringresumes", "corporate"]);
        assert_eq!(registry.by_category(ThemeCategory::Creative).len(), 1);
    }

    #[test]
    fn test_customize_colors_overlays_per_field() {
        let registry = ThemeRegistry::builtin();
        let custom = registry
            .customize_colors(
                "modern",
                &ColorPalette {
                    primary: Some("red".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(custom.colors.primary.as_deref(), Some("red"));
        assert_eq!(custom.colors.secondary.as_deref(), Some("rgb(107, 114, 128)"));
        assert_eq!(
            registry.get("modern").unwrap().colors.primary.as_deref(),
            Some("rgb(37, 99, 235)"),
            "registry must stay unchanged"
        );
    }

    #[test]
    fn test_customize_unknown_theme() {
        let registry = ThemeRegistry::builtin();
        assert!(registry
            .customize_colors("nope", &ColorPalette::default())
            .is_none());
    }
}
