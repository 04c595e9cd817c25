//! Theme registry and style resolution.

pub mod css;
pub mod layout;
pub mod registry;
pub mod resolver;

pub use css::theme_css;
pub use layout::{layout_for, ThemeLayout, TitleRule};
pub use registry::ThemeRegistry;
pub use resolver::{resolve_style, ResolvedColors, ResolvedStyle, ResolvedTypography};
