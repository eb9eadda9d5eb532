//! Options, presets and reset for ViewEngine

use std::path::Path;

use super::ViewEngine;
use crate::error::ViewError;
use crate::options::Options;

impl ViewEngine {
    /// Snapshot of the options in effect, including camera moves made by
    /// dolly drags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            camera: self.camera_controller.options().clone(),
            trackball: self.trackball_options.clone(),
            lighting: self.lighting_options.clone(),
        }
    }

    /// Name of the last preset loaded, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace all options. Every section is checked and the camera is
    /// rebuilt before anything is stored; if either step fails nothing
    /// changes. The orientation is kept.
    pub fn set_options(&mut self, options: Options) -> Result<(), ViewError> {
        if let Err(e) = options.validate() {
            log::warn!("rejected options: {e}");
            return Err(e);
        }
        self.camera_controller.apply_options(options.camera)?;
        self.trackball.set_sensitivity(options.trackball.sensitivity);
        self.trackball_options = options.trackball;
        self.lighting_options = options.lighting;
        Ok(())
    }

    /// Load a named view preset (`<name>.toml`) from the presets directory.
    pub fn load_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), ViewError> {
        let path = presets_dir.join(format!("{name}.toml"));
        let result = Options::load(&path).and_then(|opts| self.set_options(opts));
        match &result {
            Ok(()) => {
                log::info!("Loaded view preset '{name}'");
                self.active_preset = Some(name.to_owned());
            }
            Err(e) => log::error!("Failed to load view preset '{name}': {e}"),
        }
        result
    }

    /// Restore default camera, trackball and lighting options, identity
    /// orientation and no active drag.
    pub fn reset(&mut self) -> Result<(), ViewError> {
        self.set_options(Options::default())?;
        self.trackball.reset();
        self.camera_controller.end_dolly();
        self.active_drag = None;
        self.active_preset = None;
        log::debug!("view reset");
        Ok(())
    }
}
