//! Bootstrap configuration.
//!
//! Everything has a built-in default. The browser shell may overlay a JSON
//! object (any subset of fields) read from localStorage; see
//! [`BootstrapConfig::from_overrides`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MOUNT_ID: &str = "root";

/// What to do when the mount element is not in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MissingMountPolicy {
    /// Log and stop; nothing is rendered.
    #[default]
    Abort,
    /// Log, create `<div id=..>` under `<body>` and render into it.
    Fallback,
}

/// When the strict-mode wrapper performs its extra checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrictMode {
    Off,
    /// Active in debug builds only.
    #[default]
    Development,
    Always,
}

impl StrictMode {
    pub fn is_active(self) -> bool {
        match self {
            StrictMode::Off => false,
            StrictMode::Development => cfg!(debug_assertions),
            StrictMode::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BootstrapConfig {
    pub mount_id: String,
    pub on_missing: MissingMountPolicy,
    pub strict: StrictMode,
    pub log_level: LogLevel,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            on_missing: MissingMountPolicy::default(),
            strict: StrictMode::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl BootstrapConfig {
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn with_policy(mut self, policy: MissingMountPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    pub fn with_strict(mut self, strict: StrictMode) -> Self {
        self.strict = strict;
        self
    }

    /// Checks that `mount_id` is usable as an HTML `id` attribute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let id = self.mount_id.as_str();
        if id.is_empty() {
            return Err(ConfigError::EmptyMountId);
        }
        if id.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ConfigError::WhitespaceInMountId(id.to_string()));
        }
        if id.starts_with('#') {
            return Err(ConfigError::SelectorMountId(id.to_string()));
        }
        Ok(())
    }

    /// Parses a JSON override object; absent fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: BootstrapConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Best-effort overlay: no overrides or bad overrides yield the defaults.
    ///
    /// The rejected error is handed back so the caller can report it once
    /// logging is up (the log level itself comes from this config).
    #[cfg(feature = "serde")]
    pub fn from_overrides(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return (Self::default(), None);
        };
        match Self::from_json(raw) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
