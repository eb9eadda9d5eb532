use glam::{Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::projection::{FrustumBounds, ProjectionKind};

/// How [`CameraOptions::up`] is interpreted when building the camera basis.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UpMode {
    /// `up` is a world-space point; the up hint is `up - position`.
    #[default]
    Point,
    /// `up` is a free direction vector.
    Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement, frustum and dolly parameters.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(title = "Position")]
    pub position: [f32; 3],
    /// Look-at target in world space.
    #[schemars(title = "Target")]
    pub target: [f32; 3],
    /// Up point or direction, see [`UpMode`].
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Interpretation of `up`.
    #[schemars(skip)]
    pub up_mode: UpMode,
    /// Orthographic or perspective projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Left frustum bound at the near plane.
    #[schemars(title = "Left", extend("step" = 0.05))]
    pub left: f32,
    /// Right frustum bound at the near plane.
    #[schemars(title = "Right", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub right: f32,
    /// Bottom frustum bound at the near plane.
    #[schemars(title = "Bottom", extend("step" = 0.05))]
    pub bottom: f32,
    /// Top frustum bound at the near plane.
    #[schemars(title = "Top", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub top: f32,
    /// Near clipping plane distance.
    #[schemars(title = "Near", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub near: f32,
    /// Far clipping plane distance.
    #[schemars(title = "Far", range(min = 10.0, max = 500.0), extend("step" = 1.0))]
    pub far: f32,
    /// World units the eye moves per dolly step.
    #[schemars(title = "Dolly Step", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub dolly_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 6.0, 10.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            up_mode: UpMode::Point,
            projection: ProjectionKind::Perspective,
            left: -0.65,
            right: 0.65,
            bottom: -0.65,
            top: 0.65,
            near: 1.0,
            far: 50.0,
            dolly_step: 2.0,
        }
    }
}

impl CameraOptions {
    /// Eye position as a homogeneous point.
    #[must_use]
    pub fn position_point(&self) -> Vec4 {
        Vec3::from(self.position).extend(1.0)
    }

    /// Target as a homogeneous point.
    #[must_use]
    pub fn target_point(&self) -> Vec4 {
        Vec3::from(self.target).extend(1.0)
    }

    /// The up parameter, with `w` set per [`UpMode`].
    #[must_use]
    pub fn up_vector(&self) -> Vec4 {
        let w = match self.up_mode {
            UpMode::Point => 1.0,
            UpMode::Direction => 0.0,
        };
        Vec3::from(self.up).extend(w)
    }

    /// The six frustum bounds.
    #[must_use]
    pub fn frustum(&self) -> FrustumBounds {
        FrustumBounds {
            left: self.left,
            right: self.right,
            bottom: self.bottom,
            top: self.top,
            near: self.near,
            far: self.far,
        }
    }
}
