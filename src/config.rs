//! Service configuration from environment variables

use crate::content::DEFAULT_RUN_WEEK;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CONTENT_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Directory holding the content JSON files
    pub content_dir: PathBuf,
    /// Section of `run.json` served for running plans
    pub run_week: String,
    /// Expected `X-Telegram-Bot-Api-Secret-Token`, if the webhook was
    /// registered with one
    pub webhook_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unparsable values fall back
    /// to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: get("FITNESS_BOT_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            content_dir: get("FITNESS_BOT_CONTENT_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR), PathBuf::from),
            run_week: get("FITNESS_BOT_RUN_WEEK").unwrap_or_else(|| DEFAULT_RUN_WEEK.to_string()),
            webhook_secret: get("TELEGRAM_WEBHOOK_SECRET"),
        }
    }
}
