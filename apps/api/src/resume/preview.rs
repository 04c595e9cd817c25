//! Assembles everything a presentation layer needs to draw a resume:
//! header, resolved style, theme layout and formatted sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::dates::{parse_calendar_day, DateTemplates};
use crate::models::{Locale, ResumeDocument, ResumeHeader, Typography};
use crate::resume::formatter::{format_section, FormatContext, FormattedSection};
use crate::theme::{layout_for, resolve_style, ResolvedStyle, ThemeLayout, ThemeRegistry};

/// Caller-side knobs for preview assembly.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Custom typography from the editing session; outranks everything.
    pub session_typography: Option<Typography>,
    /// "Today", unless the document pins `settings.current_date`.
    pub reference_date: NaiveDate,
    /// Theme used when the document has no `design.theme`.
    pub default_theme: String,
    /// Base locale when the document's `locale` has no `language`.
    pub default_language: String,
    pub templates: DateTemplates,
}

impl PreviewOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            session_typography: None,
            reference_date,
            default_theme: "classic".to_string(),
            default_language: "chinese".to_string(),
            templates: DateTemplates::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumePreview {
    pub header: ResumeHeader,
    pub theme_id: String,
    pub style: ResolvedStyle,
    pub layout: ThemeLayout,
    pub locale: Locale,
    pub reference_date: NaiveDate,
    pub sections: Vec<FormattedSection>,
}

impl ResumePreview {
    pub fn failure_count(&self) -> usize {
        self.sections.iter().map(|s| s.failures().count()).sum()
    }
}

/// Theme id for a document: `design.theme`, else the configured default.
pub fn document_theme_id(document: &Value, options: &PreviewOptions) -> String {
    ResumeDocument::new(document)
        .theme_id()
        .map(str::to_string)
        .unwrap_or_else(|| options.default_theme.clone())
}

/// Resolved style for any parsed document, resume or not.
pub fn resolve_document_style(
    document: &Value,
    registry: &ThemeRegistry,
    options: &PreviewOptions,
) -> (String, ResolvedStyle) {
    let theme_id = document_theme_id(document, options);
    let theme = registry.get(&theme_id);
    if theme.is_none() {
        warn!(theme_id = %theme_id, "Unknown theme, using fallback style");
    }
    let doc_override = ResumeDocument::new(document).style_override();
    let style = resolve_style(
        theme,
        doc_override.as_ref(),
        options.session_typography.as_ref(),
    );
    (theme_id, style)
}

/// `settings.current_date` when it parses to a day, else the caller's date.
pub fn reference_date(document: &Value, fallback: NaiveDate) -> NaiveDate {
    ResumeDocument::new(document)
        .current_date()
        .and_then(parse_calendar_day)
        .unwrap_or(fallback)
}

/// Formats every section of a resume with the document's own locale.
pub fn format_sections(
    document: &Value,
    locale: &Locale,
    templates: &DateTemplates,
    reference_date: NaiveDate,
) -> Vec<FormattedSection> {
    let ctx = FormatContext {
        locale,
        templates,
        reference_date,
    };
    ResumeDocument::new(document)
        .sections()
        .into_iter()
        .map(|(title, entries)| format_section(title, entries, &ctx))
        .collect()
}

pub fn build_preview(
    document: &Value,
    registry: &ThemeRegistry,
    options: &PreviewOptions,
) -> ResumePreview {
    let view = ResumeDocument::new(document);
    let (theme_id, style) = resolve_document_style(document, registry, options);
    let layout = layout_for(&theme_id, &style);
    let locale = Locale::from_document(view.locale(), &options.default_language);
    let reference_date = reference_date(document, options.reference_date);
    let sections = format_sections(document, &locale, &options.templates, reference_date);

    let preview = ResumePreview {
        header: view.header(),
        theme_id,
        style,
        layout,
        locale,
        reference_date,
        sections,
    };
    debug!(
        theme_id = %preview.theme_id,
        sections = preview.sections.len(),
        failures = preview.failure_count(),
        "Built resume preview"
    );
    preview
}
