//! Project configuration record
//!
//! Every project directory carries a `config.json` at its root holding the
//! robot dimensions and the default kinematic limits new paths start from.
//!
//! The record is deliberately flat and numeric:
//! - every field has a built-in default
//! - loading merges field by field; keys that are missing, unknown or not
//!   numeric leave the current value alone
//! - saving always writes every field

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A partial configuration update, keyed by field name.
pub type ConfigPatch = Map<String, Value>;

/// Per-project robot and default-constraint configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Robot bumper length in meters
    pub robot_length_meters: f64,
    /// Robot bumper width in meters
    pub robot_width_meters: f64,
    /// Default translational velocity limit
    pub default_max_velocity_meters_per_sec: f64,
    /// Default translational acceleration limit
    pub default_max_acceleration_meters_per_sec2: f64,
    /// Default blending radius at intermediate waypoints
    pub default_intermediate_handoff_radius_meters: f64,
    /// Default rotational velocity limit
    pub default_max_velocity_deg_per_sec: f64,
    /// Default rotational acceleration limit
    pub default_max_acceleration_deg_per_sec2: f64,
    /// Default positional tolerance at the end of a path
    pub default_end_translation_tolerance_meters: f64,
    /// Default heading tolerance at the end of a path
    pub default_end_rotation_tolerance_deg: f64,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            robot_length_meters: 0.5,
            robot_width_meters: 0.5,
            default_max_velocity_meters_per_sec: 4.5,
            default_max_acceleration_meters_per_sec2: 7.0,
            default_intermediate_handoff_radius_meters: 0.2,
            default_max_velocity_deg_per_sec: 720.0,
            default_max_acceleration_deg_per_sec2: 1500.0,
            default_end_translation_tolerance_meters: 0.03,
            default_end_rotation_tolerance_deg: 2.0,
        }
    }
}

impl ProjectConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from defaults, then merge `patch` into it.
    pub fn from_map(patch: &ConfigPatch) -> Self {
        let mut config = Self::default();
        config.update_from_map(patch);
        config
    }

    /// Merge every known, numeric-coercible field of `patch` into this config.
    ///
    /// Returns how many fields were updated.
    pub fn update_from_map(&mut self, patch: &ConfigPatch) -> usize {
        let mut fields = self.to_map();
        let mut updated = 0;
        for (name, slot) in fields.iter_mut() {
            let Some(value) = patch.get(name).and_then(coerce_number) else {
                continue;
            };
            if let Some(number) = serde_json::Number::from_f64(value) {
                *slot = Value::Number(number);
                updated += 1;
            }
        }

        match serde_json::from_value(Value::Object(fields)) {
            Ok(config) => {
                *self = config;
                updated
            }
            Err(e) => {
                tracing::warn!("Could not apply config patch: {}", e);
                0
            }
        }
    }

    /// Every field as a JSON number, keyed by field name.
    ///
    /// Non-finite values are written as their defaults, see [`sanitized`](Self::sanitized).
    pub fn to_map(&self) -> ConfigPatch {
        self.sanitized().raw_map()
    }

    /// Value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.raw_map().get(name).and_then(Value::as_f64)
    }

    /// A copy with every non-finite field replaced by its built-in default.
    pub fn sanitized(&self) -> Self {
        let mut fields = self.raw_map();
        let defaults = Self::default().raw_map();
        let mut replaced = false;
        for (name, value) in fields.iter_mut() {
            if value.is_number() {
                continue;
            }
            tracing::warn!("Config field {} is not a finite number, using its default", name);
            *value = defaults.get(name).cloned().unwrap_or(Value::Null);
            replaced = true;
        }
        if !replaced {
            return *self;
        }
        serde_json::from_value(Value::Object(fields)).unwrap_or_default()
    }

    /// Project-wide default for a per-path value.
    ///
    /// Looks up `default_<key>` first and falls back to `key` itself, so both
    /// `"max_velocity_meters_per_sec"` and `"robot_length_meters"` resolve.
    pub fn get_default_optional_value(&self, key: &str) -> Option<f64> {
        self.get(&format!("default_{key}")).or_else(|| self.get(key))
    }

    /// Merge the record stored at `path` into this config.
    ///
    /// On any error the config is left exactly as it was.
    pub fn merge_from_file(&mut self, path: &Path) -> SettingsResult<usize> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
        let value: Value = serde_json::from_str(&content)?;
        let patch = value.as_object().ok_or_else(|| {
            SettingsError::InvalidFormat(format!("{} is not a JSON object", path.display()))
        })?;
        Ok(self.update_from_map(patch))
    }

    /// Write every field to `path` as pretty-printed JSON.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = serde_json::to_string_pretty(&self.sanitized())?;
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Fields as serialized, with non-finite values showing up as `null`.
    fn raw_map(&self) -> ConfigPatch {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            _ => ConfigPatch::new(),
        }
    }
}

/// Numbers and numeric strings coerce; anything else (including non-finite
/// values) is skipped.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
