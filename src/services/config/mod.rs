//! Environment-backed configuration for the validate pipeline.
//!
//! Recognized variables (a `.env` file is honored when present):
//! - `PACKBUILDER_MAX_UPLOAD_MB`
//! - `PACKBUILDER_MAX_PROBE_MB`
//! - `PACKBUILDER_MAX_ENTRY_MB`
//! - `PACKBUILDER_TIMEOUT_SECS`

pub mod models;

pub use models::*;

use std::time::Duration;

pub const ENV_MAX_UPLOAD_MB: &str = "PACKBUILDER_MAX_UPLOAD_MB";
pub const ENV_MAX_PROBE_MB: &str = "PACKBUILDER_MAX_PROBE_MB";
pub const ENV_MAX_ENTRY_MB: &str = "PACKBUILDER_MAX_ENTRY_MB";
pub const ENV_TIMEOUT_SECS: &str = "PACKBUILDER_TIMEOUT_SECS";

impl ValidateConfig {
    /// Load limits from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unparsable or zero values are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mb) = read_positive(&lookup, ENV_MAX_UPLOAD_MB) {
            config = config.with_max_upload_mb(mb);
        }
        if let Some(mb) = read_positive(&lookup, ENV_MAX_PROBE_MB) {
            config = config.with_max_probe_mb(mb);
        }
        if let Some(mb) = read_positive(&lookup, ENV_MAX_ENTRY_MB) {
            config = config.with_max_entry_mb(mb);
        }
        if let Some(secs) = read_positive(&lookup, ENV_TIMEOUT_SECS) {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config
    }
}

fn read_positive<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            log::warn!("Ignoring invalid {key}={raw:?}; using default");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
