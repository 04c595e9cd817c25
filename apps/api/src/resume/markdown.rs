//! Markdown export of a formatted resume.

use chrono::NaiveDate;
use serde_json::Value;

use crate::dates::DateTemplates;
use crate::models::{Locale, ResumeDocument, ResumeHeader};
use crate::resume::formatter::{EntryOutcome, FormattedEntry, FormattedSection};
use crate::resume::preview::{format_sections, reference_date};

/// Exports a parsed resume document. The document's `locale` picks the base
/// locale (Chinese when it names none).
pub fn export_markdown(document: &Value, reference: NaiveDate) -> String {
    let view = ResumeDocument::new(document);
    let locale = Locale::from_document(view.locale(), "chinese");
    let sections = format_sections(
        document,
        &locale,
        &DateTemplates::default(),
        reference_date(document, reference),
    );
    render_markdown(&view.header(), &sections)
}

/// Serialises an already formatted resume.
pub fn render_markdown(header: &ResumeHeader, sections: &[FormattedSection]) -> String {
    let mut md = String::new();

    if let Some(name) = &header.name {
        md.push_str(&format!("# {name}'s CV\n\n"));
    }
    if let Some(phone) = &header.phone {
        md.push_str(&format!("- Phone: {phone}\n"));
    }
    if let Some(email) = &header.email {
        md.push_str(&format!("- Email: [{email}](mailto:{email})\n"));
    }
    if let Some(location) = &header.location {
        md.push_str(&format!("- Location: {location}\n"));
    }
    if let Some(website) = &header.website {
        md.push_str(&format!("- Website: [{website}]({website})\n"));
    }
    for network in &header.social_networks {
        md.push_str(&format!(
            "- {}: [{}]({})\n",
            network.network,
            network.username,
            network.url()
        ));
    }
    md.push('\n');

    for section in sections {
        md.push_str(&format!("## {}\n\n", section.title));
        for outcome in &section.entries {
            match outcome {
                EntryOutcome::Formatted { entry, .. } => render_entry(&mut md, entry),
                EntryOutcome::Failed { failure, .. } => {
                    md.push_str(&format!(
                        "*Invalid {} entry: {}*\n\n",
                        failure.kind, failure.message
                    ));
                }
            }
            md.push('\n');
        }
    }

    md
}

fn render_entry(md: &mut String, entry: &FormattedEntry) {
    match entry {
        FormattedEntry::Education {
            institution,
            degree,
            area,
            gpa,
            date,
            location,
            highlights,
            ..
        } => {
            md.push_str(&format!("### {institution}\n\n"));
            md.push_str(&format!("- **Degree:** {degree} in {area}"));
            if let Some(gpa) = gpa {
                md.push_str(&format!(" (GPA: {gpa})"));
            }
            md.push('\n');
            labelled(md, "Date", date);
            labelled(md, "Location", location);
            bullets(md, highlights);
            md.push('\n');
        }
        FormattedEntry::Experience {
            company,
            position,
            date,
            time_span,
            location,
            highlights,
            ..
        } => {
            md.push_str(&format!("### {company}\n\n"));
            md.push_str(&format!("- **Position:** {position}\n"));
            match (date, time_span) {
                (Some(date), Some(span)) => {
                    md.push_str(&format!("- **Date:** {date} ({span})\n"));
                }
                _ => labelled(md, "Date", date),
            }
            labelled(md, "Location", location);
            bullets(md, highlights);
            md.push('\n');
        }
        FormattedEntry::Project {
            name,
            date,
            summary,
            highlights,
            ..
        } => {
            md.push_str(&format!("### {name}\n\n"));
            if let Some(date) = date {
                md.push_str(&format!("*{date}*\n\n"));
            }
            if let Some(summary) = summary {
                md.push_str(&format!("{summary}\n\n"));
            }
            bullets(md, highlights);
            md.push('\n');
        }
        FormattedEntry::Publication {
            title,
            authors,
            journal,
            ..
        } => {
            md.push_str(&format!("### {title}\n\n"));
            md.push_str(&format!("{}\n\n", authors.join(", ")));
            if let Some(journal) = journal {
                md.push_str(&format!("*{journal}*\n\n"));
            }
        }
        FormattedEntry::Skill { label, details } => {
            md.push_str(&format!("- **{label}:** {details}\n"));
        }
        FormattedEntry::Bullet { text } => {
            md.push_str(&format!("- {text}\n"));
        }
        FormattedEntry::Text { text } => {
            md.push_str(&format!("{text}\n\n"));
        }
        FormattedEntry::Unknown { placeholder } => {
            md.push_str(&format!("*{placeholder}*\n\n"));
        }
    }
}

fn labelled(md: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        md.push_str(&format!("- **{label}:** {value}\n"));
    }
}

fn bullets(md: &mut String, items: &[String]) {
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
}
