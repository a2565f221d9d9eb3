//! Configuration types for the logging subsystem.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".into()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_filename() -> String {
    "chaindict.log".into()
}

/// Output format for a logging sink.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// File-rotation policy for the file sink.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    Never,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::Daily
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_true")]
    pub with_ansi: bool,
    #[serde(default)]
    pub with_target: bool,
    #[serde(default)]
    pub with_thread_ids: bool,
    #[serde(default)]
    pub with_line_numbers: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: LogFormat::default(),
            with_ansi: true,
            with_target: false,
            with_thread_ids: false,
            with_line_numbers: false,
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default)]
    pub rotation: RotationPolicy,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            format: LogFormat::Json,
            filename: default_filename(),
            rotation: RotationPolicy::default(),
        }
    }
}

/// Top-level logging configuration, deserializable from the same config
/// sources as [`crate::config::DictSettings`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub console_enabled: bool,
    #[serde(default)]
    pub file_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub file: FileConfig,
    #[serde(default)]
    pub custom_fields: crate::logging::formats::CustomFields,
    #[serde(default)]
    pub span: crate::logging::formats::SpanConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_enabled: true,
            file_enabled: false,
            log_dir: default_log_dir(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            custom_fields: crate::logging::formats::CustomFields::default(),
            span: crate::logging::formats::SpanConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Overrides `level` from `RUST_LOG` if it is set, matching
    /// `tracing_subscriber`'s own convention.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.level = level;
        }
    }

    /// Rejects configurations that can't produce a working subscriber.
    pub fn validate(&self) -> Result<(), String> {
        if !self.console_enabled && !self.file_enabled {
            return Err("at least one of console_enabled/file_enabled must be true".into());
        }
        if self.level.trim().is_empty() {
            return Err("level must not be empty".into());
        }
        Ok(())
    }

    /// Creates the configured log directory if file logging is enabled.
    pub fn ensure_log_dir(&self) -> std::io::Result<()> {
        if self.file_enabled {
            std::fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }

    pub fn console_format(&self) -> LogFormat {
        self.console.format
    }

    pub fn file_format(&self) -> LogFormat {
        self.file.format
    }

    pub fn file_rotation(&self) -> RotationPolicy {
        self.file.rotation.clone()
    }
}
