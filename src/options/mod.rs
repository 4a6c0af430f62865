//! Centralized axis configuration with TOML preset support.
//!
//! All tunable axis settings (ranges, wrap, time constants, recentering)
//! are consolidated here. Options serialize to/from TOML so hosts can ship
//! named presets, and export a JSON schema for settings UIs.

mod axis;

use std::path::Path;

pub use axis::{AxisOptions, RecenteringOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::InaxError;

/// Top-level options container for an orbit-style axis trio. All sub-structs
/// use `#[serde(default)]` so partial TOML files (e.g. only overriding
/// `[vertical]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Horizontal orbit axis: a full wrapping turn in degrees.
    pub horizontal: AxisOptions,
    /// Vertical orbit axis: clamped pitch in degrees.
    pub vertical: AxisOptions,
    /// Radial axis: clamped distance scale.
    pub radial: AxisOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            horizontal: AxisOptions {
                min: -180.0,
                max: 180.0,
                wrap: true,
                ..Default::default()
            },
            vertical: AxisOptions {
                min: -80.0,
                max: 80.0,
                ..Default::default()
            },
            radial: AxisOptions {
                min: 1.0,
                max: 10.0,
                center: 1.0,
                ..Default::default()
            },
        }
    }
}

impl Options {
    /// Generate a JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Serialize the options schema as a pretty-printed JSON string, for
    /// embedding in a settings UI.
    ///
    /// # Errors
    ///
    /// Returns [`InaxError::OptionsParse`] if serialization fails.
    pub fn json_schema_string() -> Result<String, InaxError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| InaxError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InaxError::Io`] if the file cannot be read and
    /// [`InaxError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, InaxError> {
        let content = std::fs::read_to_string(path).map_err(InaxError::Io)?;
        toml::from_str(&content)
            .map_err(|e| InaxError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`InaxError::OptionsParse`] if serialization fails and
    /// [`InaxError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), InaxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InaxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(InaxError::Io)?;
        }
        std::fs::write(path, content).map_err(InaxError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[vertical]
min = -45.0
max = 45.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.vertical.min, -45.0);
        assert_eq!(opts.vertical.max, 45.0);
        // Everything else should be default
        assert_eq!(opts.vertical.accel_time, 0.2);
        assert!(opts.horizontal.wrap);
        assert_eq!(opts.radial.min, 1.0);
    }

    #[test]
    fn partial_recentering_toml_fills_defaults() {
        let toml_str = r"
[horizontal.recentering]
enabled = true
wait = 2.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(opts.horizontal.recentering.enabled);
        assert_eq!(opts.horizontal.recentering.wait, 2.5);
        assert_eq!(opts.horizontal.recentering.time, 2.0);
    }

    #[test]
    fn default_trio_builds_consistent_runtime_pairs() {
        let opts = Options::default();
        let axis = opts.horizontal.to_axis();
        assert!(axis.wrap);
        assert_eq!(axis.range.x, -180.0);

        let radial = opts.radial.to_axis();
        assert_eq!(radial.value, 1.0);
        assert!(!radial.wrap);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("horizontal"));
        assert!(props.contains_key("vertical"));
        assert!(props.contains_key("radial"));

        let horizontal = &props["horizontal"]["properties"];
        assert!(horizontal.get("accel_time").is_some());
        assert!(horizontal.get("recentering").is_some());
    }

    #[test]
    fn schema_string_is_valid_json() {
        let s = Options::json_schema_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert!(value["properties"].is_object());
    }
}
