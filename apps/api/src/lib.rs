//! Structured-YAML rendering core: document-type detection, date and
//! time-span formatting, theme resolution and resume entry formatting.
//!
//! Everything outside `config`, `errors`, `routes` and `state` is pure and
//! synchronous; those four modules make up the HTTP server.

pub mod config;
pub mod dates;
pub mod detect;
pub mod documents;
pub mod errors;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
pub mod theme;

pub use dates::{compute_time_span, format_date, format_date_range, parse_date, DateValue, RawDate};
pub use detect::{detect_template_type, TemplateType};
pub use resume::{classify_and_format, FormattedEntry, ValidationFailure};
pub use theme::{resolve_style, ResolvedStyle, ThemeRegistry};
