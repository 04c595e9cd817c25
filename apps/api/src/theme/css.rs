//! CSS block for a resolved style.

use crate::theme::resolver::ResolvedStyle;

/// Stylesheet for the preview container and the classes renderers use
/// (`cv-name`, `cv-headline`, `cv-section-title`, `cv-link`,
/// `cv-connections`, `cv-border`).
pub fn theme_css(style: &ResolvedStyle) -> String {
    let c = &style.colors;
    let t = &style.typography;
    format!(
        r#".cv-preview-container {{
  font-family: {font_family};
  font-size: {font_size};
  line-height: {line_height};
  text-align: {alignment};
  color: {text};
  background-color: {background};
}}

.cv-name {{
  color: {name};
  font-family: {heading_font};
}}

.cv-headline {{
  color: {headline};
}}

.cv-section-title {{
  color: {section_titles};
  font-family: {heading_font};
  font-size: {heading_size};
  line-height: {heading_line_height};
}}

.cv-link {{
  color: {links};
}}

.cv-connections {{
  color: {connections};
}}

.cv-border {{
  border-color: {border};
}}
"#,
        font_family = t.font_family,
        font_size = t.font_size,
        line_height = t.line_height,
        alignment = t.alignment,
        text = c.text,
        background = c.background,
        name = c.name,
        heading_font = t.heading_font,
        heading_size = t.heading_size,
        heading_line_height = t.heading_line_height,
        headline = c.headline,
        section_titles = c.section_titles,
        links = c.links,
        connections = c.connections,
        border = c.border,
    )
}
