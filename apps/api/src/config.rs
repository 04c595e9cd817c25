use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment starts the server.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Theme applied when a document has no `design.theme`.
    pub default_theme: String,
    /// Base locale for documents whose `locale` names no language.
    pub default_language: String,
    /// Upper bound on the YAML text accepted per request.
    pub max_document_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_theme: "classic".to_string(),
            default_language: "chinese".to_string(),
            max_document_bytes: 256 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_theme: std::env::var("DEFAULT_THEME").unwrap_or(defaults.default_theme),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or(defaults.default_language),
            max_document_bytes: parse_env("MAX_DOCUMENT_BYTES", defaults.max_document_bytes)
                .context("MAX_DOCUMENT_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_theme, "classic");
        assert_eq!(config.max_document_bytes, 262_144);
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u16 = parse_env("YAMLCRAFT_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
