//! Configuration loading utilities
//!
//! Environment overrides use the `STUDYGENIUS_` prefix:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `STUDYGENIUS_SESSION_BACKEND` | `session.backend` |
//! | `STUDYGENIUS_DATA_DIR` | `session.data_dir` |
//! | `STUDYGENIUS_SESSION_KEY` | `session.key` |
//! | `STUDYGENIUS_TRIAL_DAYS` | `auth.trial_days` |
//! | `STUDYGENIUS_PASSWORD_MIN_LENGTH` | `auth.password_policy.min_length` |
//! | `STUDYGENIUS_STRICT_PASSWORDS` | `auth.password_policy` = strict |
//! | `STUDYGENIUS_VALIDATE_CARDS` | `billing.validate_cards` |
//! | `STUDYGENIUS_LATENCY_MS` | every `latency.*_ms` |
//! | `STUDYGENIUS_MAX_UPLOAD_MB` | `study.max_upload_mb` |
//! | `STUDYGENIUS_LOG_LEVEL` | `logging.level` |
//! | `STUDYGENIUS_LOG_JSON` | `logging.json` |

use super::Config;
use super::models::*;
use crate::utils::error::{Result, StudyGeniusError};
use std::env;
use std::str::FromStr;
use tracing::debug;

const PREFIX: &str = "STUDYGENIUS_";

fn var(name: &str) -> Option<String> {
    env::var(format!("{}{}", PREFIX, name)).ok()
}

fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        StudyGeniusError::config(format!("Invalid {}{}: {}", PREFIX, name, e))
    })
}

impl Config {
    /// Overlay values from `STUDYGENIUS_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        debug!("Applying environment overrides");

        if let Some(backend) = var("SESSION_BACKEND") {
            self.session.backend = parse::<SessionBackendKind>("SESSION_BACKEND", &backend)?;
        }
        if let Some(dir) = var("DATA_DIR") {
            self.session.data_dir = dir;
        }
        if let Some(key) = var("SESSION_KEY") {
            self.session.key = key;
        }

        if let Some(days) = var("TRIAL_DAYS") {
            self.auth.trial_days = parse("TRIAL_DAYS", &days)?;
        }
        if let Some(strict) = var("STRICT_PASSWORDS") {
            if parse::<bool>("STRICT_PASSWORDS", &strict)? {
                self.auth.password_policy = PasswordPolicy::strict();
            }
        }
        if let Some(min) = var("PASSWORD_MIN_LENGTH") {
            self.auth.password_policy.min_length = parse("PASSWORD_MIN_LENGTH", &min)?;
        }

        if let Some(validate) = var("VALIDATE_CARDS") {
            self.billing.validate_cards = parse("VALIDATE_CARDS", &validate)?;
        }

        if let Some(ms) = var("LATENCY_MS") {
            self.latency = LatencyConfig::uniform(parse("LATENCY_MS", &ms)?);
        }

        if let Some(mb) = var("MAX_UPLOAD_MB") {
            self.study.max_upload_mb = parse("MAX_UPLOAD_MB", &mb)?;
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = var("LOG_JSON") {
            self.logging.json = parse("LOG_JSON", &json)?;
        }

        Ok(())
    }
}
