//! Configuration loading for standalone binaries/tests embedding this crate.
//!
//! [`Dict::new`](crate::dict::Dict::new) never reads configuration — it
//! uses the hardcoded defaults from the sizing policy (capacity 4, resize
//! enabled, force-resize ratio 5). This module exists for hosts that want
//! those defaults overridable from a config file or environment, the same
//! way the rest of this codebase layers settings.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::logging::LoggingConfig;

fn default_initial_capacity() -> usize {
    4
}

fn default_resize_enabled() -> bool {
    true
}

fn default_force_resize_ratio() -> u64 {
    5
}

/// Sizing-policy knobs for [`Dict`](crate::dict::Dict), loadable from a
/// config file or `CHAINDICT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DictSettings {
    /// Initial bucket-array capacity used the first time `ht[0]` is sized.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Whether the dict is allowed to grow past `force_resize_ratio` load
    /// factor when resizing would otherwise be forced anyway.
    #[serde(default = "default_resize_enabled")]
    pub resize_enabled: bool,

    /// Load-factor ceiling past which growth happens even if
    /// `resize_enabled` is false.
    #[serde(default = "default_force_resize_ratio")]
    pub force_resize_ratio: u64,

    /// Logging configuration for hosts that call [`crate::logging::init_logging`].
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DictSettings {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            resize_enabled: default_resize_enabled(),
            force_resize_ratio: default_force_resize_ratio(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DictSettings {
    /// Loads settings from `config/default.{toml,...}`, an optional
    /// `config/<RUST_ENV>` profile, then `CHAINDICT_*` environment
    /// overrides, in that priority order.
    pub fn load() -> Result<Self, ConfigError> {
        let profile = std::env::var("RUST_ENV").unwrap_or_else(|_| "dev".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            .add_source(Environment::with_prefix("CHAINDICT").separator("_"))
            .set_default("initial_capacity", default_initial_capacity() as i64)?
            .set_default("resize_enabled", default_resize_enabled())?
            .set_default("force_resize_ratio", default_force_resize_ratio() as i64)?;

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn clear_env() {
        for (key, _) in env::vars() {
            if key.starts_with("CHAINDICT_") {
                env::remove_var(&key);
            }
        }
        env::remove_var("RUST_ENV");
    }

    #[test]
    fn defaults_match_sizing_policy() {
        clear_env();
        let settings = DictSettings::load().expect("load defaults");
        assert_eq!(settings.initial_capacity, 4);
        assert!(settings.resize_enabled);
        assert_eq!(settings.force_resize_ratio, 5);
    }

    #[test]
    fn env_override_applies() {
        clear_env();
        env::set_var("CHAINDICT_RESIZE_ENABLED", "false");
        let settings = DictSettings::load().expect("load with override");
        assert!(!settings.resize_enabled);
        env::remove_var("CHAINDICT_RESIZE_ENABLED");
    }
}
