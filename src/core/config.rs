//! core/config.rs
//! Application settings.
//!
//! File format: TOML at `$XDG_CONFIG_HOME/attacca/config.toml` (or
//! `~/.config/attacca/config.toml`), overridable with
//! `ATTACCA_CONFIG_PATH`.
//!
//! Precedence (highest wins):
//! 1) Environment variables (prefix `ATTACCA__`, `__` nesting)
//! 2) Config file (if present)
//! 3) Struct defaults

use std::{env, path::PathBuf};

use serde::Deserialize;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub artwork: ArtworkSettings,
    pub audio: AudioSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    /// Image shown when the current track has no embedded cover.
    /// Unset (or unreadable) falls back to the built-in placeholder.
    pub default_cover: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Initial playback volume, 0.0..=1.0.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

impl Settings {
    /// Load settings from environment and the optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ATTACCA")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err("audio.volume must be within 0.0..=1.0".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `ATTACCA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ATTACCA_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/attacca/config.toml`, or `~/.config/attacca/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("attacca").join("config.toml"))
}
