//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Daily reminder notification settings
//! - Store/product identifiers for the simulated commerce backend
//! - Player behavior tweaks
//!
//! Configuration is stored at `~/.config/backwell/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Daily reminder time, 24h clock.
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
    #[serde(default)]
    pub reminder_minute: u32,
}

/// Store / subscription configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_product_id")]
    pub product_id: String,
    /// Days playable without a subscription.
    #[serde(default = "default_free_days")]
    pub free_days: u32,
}

/// Session player configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Cosmetic pause after a countdown hits zero, before the next
    /// segment is shown. Does not delay the state transition itself.
    #[serde(default = "default_advance_grace_ms")]
    pub advance_grace_ms: u64,
}

fn default_true() -> bool {
    true
}
fn default_reminder_hour() -> u32 {
    9
}
fn default_product_id() -> String {
    "backwell_unlimited_weekly_9_99".into()
}
fn default_free_days() -> u32 {
    3
}
fn default_advance_grace_ms() -> u64 {
    500
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_hour: default_reminder_hour(),
            reminder_minute: 0,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            product_id: default_product_id(),
            free_days: default_free_days(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            advance_grace_ms: default_advance_grace_ms(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/backwell/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(ConfigError::InvalidValue {
                                key: key.to_string(),
                                message: format!("cannot parse '{value}' as number"),
                            });
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Errors on unknown keys.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(cfg.notifications.enabled);
        assert_eq!(cfg.store.free_days, 3);
        assert_eq!(cfg.player.advance_grace_ms, 500);
    }

    #[test]
    fn get_by_dot_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("notifications.enabled").as_deref(), Some("true"));
        assert_eq!(cfg.get("store.free_days").as_deref(), Some("3"));
        assert_eq!(
            cfg.get("store.product_id").as_deref(),
            Some("backwell_unlimited_weekly_9_99")
        );
        assert!(cfg.get("store.nonexistent").is_none());
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "bogus.key", "1");
        assert!(matches!(result, Err(ConfigError::UnknownKey(key)) if key == "bogus.key"));
    }

    #[test]
    fn set_rejects_unparseable_value() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result =
            Config::set_json_value_by_path(&mut json, "notifications.reminder_hour", "soon");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key, .. }) if key == "notifications.reminder_hour"
        ));
    }

    #[test]
    fn set_parses_typed_values() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "notifications.enabled", "false").unwrap();
        Config::set_json_value_by_path(&mut json, "notifications.reminder_hour", "7").unwrap();
        let cfg: Config = serde_json::from_value(json).unwrap();
        assert!(!cfg.notifications.enabled);
        assert_eq!(cfg.notifications.reminder_hour, 7);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.store.product_id, cfg.store.product_id);
    }
}
