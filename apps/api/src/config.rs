use anyhow::{anyhow, Context, Result};

use crate::models::{Language, Template};

const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enhancement is unavailable when unset.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_photo_bytes: usize,
    pub default_language: Language,
    pub default_template: Template,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            anthropic_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            default_language: Language::En,
            default_template: Template::Modern,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_photo_bytes: match lookup("MAX_PHOTO_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_PHOTO_BYTES must be a byte count")?,
                None => defaults.max_photo_bytes,
            },
            default_language: match lookup("DEFAULT_LANGUAGE") {
                Some(v) => v
                    .parse::<Language>()
                    .map_err(|e| anyhow!(e))
                    .context("DEFAULT_LANGUAGE must be 'en' or 'tr'")?,
                None => defaults.default_language,
            },
            default_template: match lookup("DEFAULT_TEMPLATE") {
                Some(v) => v
                    .parse::<Template>()
                    .map_err(|e| anyhow!(e))
                    .context("DEFAULT_TEMPLATE must be classic, modern, creative or minimalist")?,
                None => defaults.default_template,
            },
        })
    }
}
