pub mod document;
pub mod locale;
pub mod theme;

pub use document::{ResumeDocument, ResumeHeader, SocialNetwork};
pub use locale::Locale;
pub use theme::{ColorPalette, StyleOverride, ThemeCategory, ThemeDescriptor, Typography};
