use anyhow::{Context, Result};
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<HeaderValue>,
    /// Fixed seed for the template picker. `None` seeds from OS entropy.
    pub enhancer_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        let enhancer_seed = lookup("ENHANCER_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .context("ENHANCER_SEED must be an unsigned integer")
            })
            .transpose()?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            allowed_origins: parse_origins(&origins)?,
            enhancer_seed,
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect()
}
