//! Export options with TOML preset support.
//!
//! Everything about the emitted file that is not read from the scene
//! snapshot lives here: display toggles, camera margin, surface finish and
//! lights, polymer trace styling, the banner comment and the renderer INI
//! settings.

mod camera;
mod display;
mod header;
mod lighting;
mod polymer;
mod render;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use header::HeaderOptions;
pub use lighting::{FinishOptions, LightingOptions};
pub use polymer::PolymerOptions;
pub use render::{OutputFormat, RenderSettings};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[polymer]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ExportOptions {
    /// Initial `show*` toggles.
    pub display: DisplayOptions,
    /// Camera placement.
    pub camera: CameraOptions,
    /// Surface finish and lights.
    pub lighting: LightingOptions,
    /// Backbone trace styling.
    pub polymer: PolymerOptions,
    /// Banner comment.
    #[schemars(skip)]
    pub header: HeaderOptions,
    /// Renderer INI settings.
    pub render: RenderSettings,
}

impl ExportOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ExportOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ExportError> {
        toml::from_str(content)
            .map_err(|e| ExportError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ExportError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = ExportOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: ExportOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[polymer]
radius = 0.5
color = [255, 0, 0]
";
        let opts = ExportOptions::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.polymer.radius, 0.5);
        assert_eq!(opts.polymer.color, Rgb(255, 0, 0));
        // Everything else should be default
        assert_eq!(opts.camera.zoom_margin, 1.1);
        assert!(opts.display.show_polymers);
        assert_eq!(opts.render.output_format, OutputFormat::Tga);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = ExportOptions::from_toml_str("[camera]\nzoom_margin = \"x\"")
            .unwrap_err();
        assert!(matches!(err, ExportError::OptionsParse(_)));
    }

    #[test]
    fn zoom_follows_rotation_radius_and_percent() {
        let camera = CameraOptions::default();
        approx::assert_relative_eq!(camera.zoom(10.0, 100.0), 22.0);
        approx::assert_relative_eq!(camera.zoom(10.0, 200.0), 11.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(ExportOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("display"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("polymer"));
        assert!(props.contains_key("render"));

        // Skipped sections should be absent
        assert!(!props.contains_key("header"));

        let polymer = &props["polymer"]["properties"];
        assert!(polymer.get("radius").is_some());
        assert!(polymer.get("color").is_none());
    }
}
