use std::sync::Arc;

use crate::config::Config;
use crate::resume::PreviewOptions;
use crate::theme::ThemeRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup and never mutated.
    pub themes: Arc<ThemeRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            themes: Arc::new(ThemeRegistry::builtin()),
        }
    }

    /// Preview options seeded from configuration.
    pub fn preview_options(&self, reference_date: chrono::NaiveDate) -> PreviewOptions {
        PreviewOptions {
            default_theme: self.config.default_theme.clone(),
            default_language: self.config.default_language.clone(),
            ..PreviewOptions::new(reference_date)
        }
    }
}
