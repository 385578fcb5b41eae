//! Leveled application logger.
//!
//! There is exactly one [`Logger`] per process. `main` builds it from
//! [`EngineSettings`](super::settings::EngineSettings) and passes it by
//! `&mut` to whatever needs to log; nothing reaches it through a global.
//!
//! Entries below the configured minimum level are dropped before they reach
//! the store. Recorded entries are formatted as `"<LEVEL>: <message>"` and are
//! also emitted as `tracing` events.

use std::fmt;
use std::str::FromStr;

use super::error::LogError;
use super::ports::LogStore;

/// Severity of a log entry. Ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(LogError::invalid_level(s)),
        }
    }
}

/// What the logger does when its store rejects an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFailurePolicy {
    /// Return the store error to the caller.
    #[default]
    Surface,
    /// Emit a tracing warning and carry on as if the entry was not recorded.
    Lenient,
}

/// Gates entries by level and hands the survivors to a [`LogStore`].
#[derive(Debug)]
pub struct Logger<S: LogStore> {
    store: S,
    min_level: LogLevel,
    policy: LogFailurePolicy,
}

impl<S: LogStore> Logger<S> {
    /// Logger recording every level, surfacing store failures.
    pub fn new(store: S) -> Self {
        Self {
            store,
            min_level: LogLevel::Info,
            policy: LogFailurePolicy::Surface,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_policy(mut self, policy: LogFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn policy(&self) -> LogFailurePolicy {
        self.policy
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record `message` at `level` if `level` is at or above the minimum.
    ///
    /// Returns whether the entry was recorded.
    ///
    /// # Errors
    ///
    /// Returns the store's error under [`LogFailurePolicy::Surface`]. Under
    /// [`LogFailurePolicy::Lenient`] the failure is traced and `Ok(false)` is
    /// returned.
    pub fn log(&mut self, message: &str, level: LogLevel) -> Result<bool, LogError> {
        if level < self.min_level {
            return Ok(false);
        }

        let entry = format!("{level}: {message}");
        match self.store.append(&entry) {
            Ok(()) => {
                match level {
                    LogLevel::Info => tracing::info!("{}", message),
                    LogLevel::Warning => tracing::warn!("{}", message),
                    LogLevel::Error => tracing::error!("{}", message),
                }
                Ok(true)
            }
            Err(err) => match self.policy {
                LogFailurePolicy::Surface => Err(err),
                LogFailurePolicy::Lenient => {
                    tracing::warn!(error = %err, entry = %entry, "Dropping log entry");
                    Ok(false)
                }
            },
        }
    }

    pub fn info(&mut self, message: &str) -> Result<bool, LogError> {
        self.log(message, LogLevel::Info)
    }

    pub fn warning(&mut self, message: &str) -> Result<bool, LogError> {
        self.log(message, LogLevel::Warning)
    }

    pub fn error(&mut self, message: &str) -> Result<bool, LogError> {
        self.log(message, LogLevel::Error)
    }
}
