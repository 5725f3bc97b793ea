use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::candidates::generator::GenerationSettings;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed seed for candidate generation. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub full_wish_candidates: usize,
    pub interview_start: NaiveDate,
    pub interview_window_days: u32,
    pub dashboard_top_positions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed: optional_env("MOBILITY_SEED")?,
            full_wish_candidates: parse_env("FULL_WISH_CANDIDATES", 15)?,
            interview_start: parse_env(
                "INTERVIEW_START",
                GenerationSettings::default().interview_start,
            )?,
            interview_window_days: parse_env("INTERVIEW_WINDOW_DAYS", 17)?,
            dashboard_top_positions: parse_env("DASHBOARD_TOP_POSITIONS", 10)?,
        })
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            full_wish_candidates: self.full_wish_candidates,
            interview_start: self.interview_start,
            interview_window_days: self.interview_window_days,
        }
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(None),
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}
