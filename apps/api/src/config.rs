use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

use crate::keywords::config::EngineConfig;
use crate::keywords::dataforseo::MAX_SEEDS_PER_REQUEST;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataforseo_login: String,
    pub dataforseo_password: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub city_cap: usize,
    pub target_opportunities: usize,
    pub seed_cap: usize,
    /// Comma-separated brands appended to the built-in blocklist.
    pub brand_blocklist_extra: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = EngineConfig::default();

        Ok(Config {
            dataforseo_login: require_env("DATAFORSEO_LOGIN")?,
            dataforseo_password: require_env("DATAFORSEO_PASSWORD")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            city_cap: env_or("CITY_CAP", defaults.city_cap)?,
            target_opportunities: env_or("TARGET_OPPORTUNITIES", defaults.target_count)?,
            seed_cap: env_or("SEED_CAP", defaults.seed_cap)?,
            brand_blocklist_extra: std::env::var("BRAND_BLOCKLIST_EXTRA")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
        })
    }

    /// Built-in engine configuration with the env overrides applied.
    /// `seed_cap` is clamped to what one keyword-ideas request accepts.
    pub fn engine_config(&self) -> EngineConfig {
        if self.seed_cap > MAX_SEEDS_PER_REQUEST {
            warn!(
                "SEED_CAP={} exceeds the {MAX_SEEDS_PER_REQUEST} seeds one keyword-ideas request accepts; using {MAX_SEEDS_PER_REQUEST}",
                self.seed_cap
            );
        }
        let mut engine = EngineConfig {
            city_cap: self.city_cap,
            target_count: self.target_opportunities,
            seed_cap: self.seed_cap.min(MAX_SEEDS_PER_REQUEST),
            ..EngineConfig::default()
        };
        engine
            .brand_blocklist
            .extend(self.brand_blocklist_extra.iter().cloned());
        engine
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
