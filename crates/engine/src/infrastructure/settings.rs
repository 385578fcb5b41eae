//! Engine settings loaded from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PATTERNSMITH_LOG_FILE` | `logs.txt` |
//! | `PATTERNSMITH_LOG_LEVEL` | `INFO` |
//! | `PATTERNSMITH_LOG_LENIENT` | `false` |
//!
//! Values that fail to parse fall back to the default.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;

use super::logging::{LogFailurePolicy, LogLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Flat file the logger appends to
    pub log_file: PathBuf,
    /// Minimum level that gets recorded
    pub log_level: LogLevel,
    /// Drop entries the store rejects instead of failing
    pub log_lenient: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("logs.txt"),
            log_level: LogLevel::Info,
            log_lenient: false,
        }
    }
}

impl EngineSettings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_file: lookup_or(&lookup, "PATTERNSMITH_LOG_FILE", defaults.log_file),
            log_level: lookup_or(&lookup, "PATTERNSMITH_LOG_LEVEL", defaults.log_level),
            log_lenient: lookup_or(&lookup, "PATTERNSMITH_LOG_LENIENT", defaults.log_lenient),
        }
    }

    pub fn failure_policy(&self) -> LogFailurePolicy {
        if self.log_lenient {
            LogFailurePolicy::Lenient
        } else {
            LogFailurePolicy::Surface
        }
    }
}

fn lookup_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Load `.env.local` then `.env` from `root`; missing files are skipped.
///
/// # Errors
///
/// Returns the first env file that exists but fails to parse.
pub fn load_dotenv(root: &Path) -> anyhow::Result<()> {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            dotenvy::from_path(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }
    }
    Ok(())
}
