// Groove Settings Engine
// Holds the active BrowserSettings and applies individual changes by key.
// Persistence is handled by the state store; this engine only validates and merges.

use serde_json::Value;

use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn get_settings(&self) -> &BrowserSettings;
    fn replace(&mut self, settings: BrowserSettings);
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn toggle(&mut self, key: &str) -> Result<bool, SettingsError>;
    fn merge_json(&mut self, json: &str) -> Result<(), SettingsError>;
    fn reset(&mut self);
}

/// In-memory settings engine.
pub struct SettingsEngine {
    settings: BrowserSettings,
}

impl SettingsEngine {
    pub fn new() -> Self {
        Self {
            settings: BrowserSettings::default(),
        }
    }

    fn to_object(&self) -> Result<serde_json::Map<String, Value>, SettingsError> {
        match serde_json::to_value(&self.settings) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SettingsError::SerializationError(
                "settings did not serialize to an object".to_string(),
            )),
            Err(e) => Err(SettingsError::SerializationError(format!(
                "Failed to serialize settings: {}",
                e
            ))),
        }
    }
}

impl Default for SettingsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsEngineTrait for SettingsEngine {
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    fn replace(&mut self, settings: BrowserSettings) {
        self.settings = settings;
    }

    /// Updates one setting by its persisted (camelCase) key, e.g. `"httpsEnforce"`.
    ///
    /// The change goes through a JSON round trip so an ill-typed value is
    /// rejected without touching the current settings.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut map = self.to_object()?;
        if !map.contains_key(key) {
            return Err(SettingsError::InvalidKey(format!(
                "Key '{}' not found in settings",
                key
            )));
        }
        map.insert(key.to_string(), value);

        let updated: BrowserSettings = serde_json::from_value(Value::Object(map))
            .map_err(|e| SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e)))?;

        log::debug!("setting {} updated", key);
        self.settings = updated;
        Ok(())
    }

    /// Flips a boolean setting and returns its new value.
    fn toggle(&mut self, key: &str) -> Result<bool, SettingsError> {
        let map = self.to_object()?;
        let current = match map.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(SettingsError::InvalidValue(format!(
                    "Key '{}' is not a boolean setting",
                    key
                )))
            }
            None => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )))
            }
        };
        self.set_value(key, Value::Bool(!current))?;
        Ok(!current)
    }

    /// Layers persisted JSON over the defaults. Fields absent from `json`
    /// keep their default value.
    fn merge_json(&mut self, json: &str) -> Result<(), SettingsError> {
        let merged: BrowserSettings = serde_json::from_str(json).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse settings: {}", e))
        })?;
        self.settings = merged;
        Ok(())
    }

    fn reset(&mut self) {
        self.settings = BrowserSettings::default();
    }
}
