use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single origin allowed by CORS. Never a wildcard: credentials are allowed.
    pub frontend_url: HeaderValue,
    pub port: u16,
    /// Anything other than `APP_ENV=production` runs in debug mode.
    pub debug: bool,
    pub gemini_api_key: String,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        if frontend_url.trim() == "*" {
            bail!("FRONTEND_URL must be an exact origin, not a wildcard");
        }
        let frontend_url = HeaderValue::from_str(frontend_url.trim())
            .context("FRONTEND_URL must be a valid header value")?;

        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let debug = lookup("APP_ENV").as_deref() != Some("production");
        let rust_log = lookup("RUST_LOG")
            .unwrap_or_else(|| (if debug { "debug" } else { "info" }).to_string());

        Ok(Config {
            frontend_url,
            port,
            debug,
            gemini_api_key,
            max_upload_bytes,
            rust_log,
        })
    }
}
