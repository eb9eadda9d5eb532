use glam::Vec3;

use crate::camera::core::Camera;
use crate::camera::projection::{FrustumBounds, ProjectionKind};
use crate::error::ViewError;
use crate::options::CameraOptions;

/// Owns the camera configuration and the last camera built from it.
///
/// Every change goes through [`apply_options`](Self::apply_options): a new
/// camera is built from scratch and only replaces the current one if it is
/// valid, so a rejected change leaves both camera and options untouched.
pub struct CameraController {
    options: CameraOptions,
    camera: Camera,
    /// Last pointer y seen during a dolly drag.
    dolly_prev_y: Option<f32>,
}

impl CameraController {
    /// Build the initial camera from `options`.
    pub fn new(options: CameraOptions) -> Result<Self, ViewError> {
        let camera = Camera::from_options(&options)?;
        Ok(Self {
            options,
            camera,
            dolly_prev_y: None,
        })
    }

    /// The current (always valid) camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The options the current camera was built from.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Rebuild the camera from new options, keeping the previous camera if
    /// they are rejected.
    pub fn apply_options(
        &mut self,
        options: CameraOptions,
    ) -> Result<(), ViewError> {
        match Camera::from_options(&options) {
            Ok(camera) => {
                log::debug!(
                    "camera rebuilt: eye {:?} target {:?}",
                    options.position,
                    options.target
                );
                self.camera = camera;
                self.options = options;
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected camera options: {e}");
                Err(e)
            }
        }
    }

    /// Move the eye.
    pub fn set_position(&mut self, position: Vec3) -> Result<(), ViewError> {
        let mut options = self.options.clone();
        options.position = position.to_array();
        self.apply_options(options)
    }

    /// Move the look-at target.
    pub fn set_target(&mut self, target: Vec3) -> Result<(), ViewError> {
        let mut options = self.options.clone();
        options.target = target.to_array();
        self.apply_options(options)
    }

    /// Change the up point or direction (interpreted per the current
    /// [`UpMode`](crate::options::UpMode)).
    pub fn set_up(&mut self, up: Vec3) -> Result<(), ViewError> {
        let mut options = self.options.clone();
        options.up = up.to_array();
        self.apply_options(options)
    }

    /// Change projection kind and bounds together.
    pub fn set_frustum(
        &mut self,
        kind: ProjectionKind,
        bounds: &FrustumBounds,
    ) -> Result<(), ViewError> {
        let mut options = self.options.clone();
        options.projection = kind;
        options.left = bounds.left;
        options.right = bounds.right;
        options.bottom = bounds.bottom;
        options.top = bounds.top;
        options.near = bounds.near;
        options.far = bounds.far;
        self.apply_options(options)
    }

    /// Move the eye `distance` units toward the target along the view
    /// direction (negative moves away). The target stays put.
    pub fn dolly(&mut self, distance: f32) -> Result<(), ViewError> {
        let eye = self.camera.position() - self.camera.forward() * distance;
        self.set_position(eye.truncate())
    }

    /// Start a dolly drag; the next sample only sets the baseline.
    pub fn begin_dolly(&mut self) {
        self.dolly_prev_y = None;
    }

    /// End a dolly drag.
    pub fn end_dolly(&mut self) {
        self.dolly_prev_y = None;
    }

    /// Feed a pointer sample of a dolly drag.
    ///
    /// Moving up steps the eye toward the target by
    /// [`dolly_step`](CameraOptions::dolly_step), moving down steps it away,
    /// no vertical motion does nothing (a zero Δy does not count as moving
    /// down). A step that would produce an invalid camera (the eye reaching
    /// the target) is dropped. Returns whether the camera moved.
    pub fn dolly_drag(&mut self, y: f32) -> bool {
        let Some(prev) = self.dolly_prev_y.replace(y) else {
            return false;
        };
        let step = self.options.dolly_step;
        let distance = if y > prev {
            step
        } else if y < prev {
            -step
        } else {
            return false;
        };
        self.dolly(distance).is_ok()
    }

    /// Restore the default camera configuration.
    pub fn reset(&mut self) -> Result<(), ViewError> {
        self.dolly_prev_y = None;
        self.apply_options(CameraOptions::default())
    }
}
