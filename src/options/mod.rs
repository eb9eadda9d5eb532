//! Viewer configuration with TOML preset support.
//!
//! Every tweakable input of the core (camera placement, frustum bounds,
//! dolly step, trackball sensitivity, light and material) lives here. Options serialize to/from
//! TOML so a glue layer can load and save view presets, and expose a JSON
//! schema for building slider UIs.

mod camera;
mod lighting;
mod trackball;

use std::path::Path;

pub use camera::{CameraOptions, UpMode};
pub use lighting::{LightProducts, LightingOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use trackball::TrackballOptions;

use crate::error::ViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[trackball]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement and projection parameters.
    pub camera: CameraOptions,
    /// Arcball rotation parameters.
    pub trackball: TrackballOptions,
    /// Point light and material.
    pub lighting: LightingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check the values no camera rebuild would catch. Camera placement and
    /// frustum bounds are validated when the camera is built.
    pub fn validate(&self) -> Result<(), ViewError> {
        self.trackball.validate()?;
        self.lighting.validate()
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewError> {
        toml::from_str(content)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
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
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::camera::projection::ProjectionKind;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
position = [0.0, 0.0, 5.0]
projection = "orthographic"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.position, [0.0, 0.0, 5.0]);
        assert_eq!(opts.camera.projection, ProjectionKind::Orthographic);
        // Everything else should be default
        assert_eq!(opts.camera.near, 1.0);
        assert_eq!(opts.camera.up_mode, UpMode::Point);
        assert_eq!(opts.trackball.sensitivity, 150.0);
        assert_eq!(opts.lighting, LightingOptions::default());
    }

    #[test]
    fn partial_lighting_section() {
        let toml_str = r#"
[lighting]
shininess = 4.0
light_diffuse = [0.7, 0.7, 0.7]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.lighting.shininess, 4.0);
        assert_eq!(opts.lighting.light_diffuse, [0.7, 0.7, 0.7]);
        assert_eq!(opts.lighting.specular_intensity, 2.0);
        assert_eq!(opts.camera, CameraOptions::default());
    }

    #[test]
    fn validate_flags_the_offending_field() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.trackball.sensitivity = -1.0;
        assert!(matches!(
            opts.validate(),
            Err(ViewError::InvalidOption { field: "trackball.sensitivity", .. })
        ));

        let mut opts = Options::default();
        opts.lighting.specular_intensity = f32::INFINITY;
        assert!(matches!(
            opts.validate(),
            Err(ViewError::InvalidOption { field: "lighting.specular_intensity", .. })
        ));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nnear = \"close\"").unwrap_err();
        assert!(matches!(err, ViewError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("arcview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.up_mode = UpMode::Direction;
        opts.trackball.sensitivity = 42.0;

        opts.save(&dir.join("close_up.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["close_up", "default"]);
        assert_eq!(Options::load(&dir.join("close_up.toml")).unwrap(), opts);
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(ViewError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("trackball"));
        assert!(props.contains_key("lighting"));

        // Camera should expose sliders but not the up convention
        let camera = &props["camera"]["properties"];
        assert!(camera.get("near").is_some());
        assert!(camera.get("dolly_step").is_some());
        assert!(camera.get("up").is_none());
        assert!(camera.get("up_mode").is_none());

        // Lighting exposes the slider values, not the material table
        let lighting = &props["lighting"]["properties"];
        assert!(lighting.get("shininess").is_some());
        assert!(lighting.get("diffuse_intensity").is_some());
        assert!(lighting.get("material_ambient").is_none());
        assert!(lighting.get("light_position").is_none());
    }
}
