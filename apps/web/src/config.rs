use anyhow::{Context, Result};

const DEFAULT_SITE_NAME: &str = "Harvest Hope Foundation";
const DEFAULT_CONTACT_EMAIL: &str = "hello@harvesthope.org";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Application configuration loaded from environment variables.
/// Only numeric values that fail to parse abort startup; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Advisory flows are disabled when no key is configured.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    pub llm_max_retries: u32,
    pub llm_timeout_secs: u64,
    pub site_name: String,
    pub contact_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_model: env_or("LLM_MODEL", DEFAULT_MODEL),
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 0)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            site_name: env_or("SITE_NAME", DEFAULT_SITE_NAME),
            contact_email: env_or("CONTACT_EMAIL", DEFAULT_CONTACT_EMAIL),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
            llm_max_retries: 0,
            llm_timeout_secs: 120,
            site_name: DEFAULT_SITE_NAME.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
