//! Resume domain: entry classification, formatting, validation, preview
//! assembly and markdown export.

pub mod classifier;
pub mod formatter;
pub mod markdown;
pub mod preview;
pub mod validation;

pub use classifier::{classify_entry, EntryKind};
pub use formatter::{
    classify_and_format, format_section, EntryOutcome, FormatContext, FormattedEntry,
    FormattedSection, ValidationFailure,
};
pub use markdown::{export_markdown, render_markdown};
pub use preview::{build_preview, resolve_document_style, PreviewOptions, ResumePreview};
pub use validation::{validate_document, ValidationIssue};
