//! OpenGL-style projection matrices built from off-axis frustum bounds.
//!
//! Matrices are written row by row and use the `[-1, 1]` clip depth range.

use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::math::from_rows;

/// Which projection the camera uses.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Off-axis perspective frustum.
    #[default]
    Perspective,
    /// Parallel projection of a box.
    Orthographic,
}

/// Left/right/bottom/top bounds (at the near plane for perspective) and
/// near/far clip distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    /// Left x bound.
    pub left: f32,
    /// Right x bound.
    pub right: f32,
    /// Bottom y bound.
    pub bottom: f32,
    /// Top y bound.
    pub top: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl FrustumBounds {
    /// Reject bounds that enclose no volume.
    pub fn validate(&self) -> Result<(), ViewError> {
        let all = [
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ViewError::DegenerateFrustum {
                reason: "bounds must be finite",
            });
        }
        if self.right == self.left {
            return Err(ViewError::DegenerateFrustum {
                reason: "right equals left",
            });
        }
        if self.top == self.bottom {
            return Err(ViewError::DegenerateFrustum {
                reason: "top equals bottom",
            });
        }
        if self.far == self.near {
            return Err(ViewError::DegenerateFrustum {
                reason: "far equals near",
            });
        }
        Ok(())
    }
}

impl ProjectionKind {
    /// Build this kind of projection for `bounds`.
    pub fn matrix(self, bounds: &FrustumBounds) -> Result<Mat4, ViewError> {
        match self {
            Self::Perspective => perspective(bounds),
            Self::Orthographic => orthographic(bounds),
        }
    }
}

/// Orthographic projection mapping the bounds box onto the clip cube.
pub fn orthographic(b: &FrustumBounds) -> Result<Mat4, ViewError> {
    b.validate()?;
    let (w, h, d) = (b.right - b.left, b.top - b.bottom, b.far - b.near);
    Ok(from_rows([
        [2.0 / w, 0.0, 0.0, -(b.right + b.left) / w],
        [0.0, 2.0 / h, 0.0, -(b.top + b.bottom) / h],
        [0.0, 0.0, -2.0 / d, -(b.far + b.near) / d],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

/// Off-axis perspective projection (the classic `glFrustum` matrix).
pub fn perspective(b: &FrustumBounds) -> Result<Mat4, ViewError> {
    b.validate()?;
    let (w, h, d) = (b.right - b.left, b.top - b.bottom, b.far - b.near);
    Ok(from_rows([
        [2.0 * b.near / w, 0.0, (b.right + b.left) / w, 0.0],
        [0.0, 2.0 * b.near / h, (b.top + b.bottom) / h, 0.0],
        [0.0, 0.0, -(b.far + b.near) / d, -2.0 * b.far * b.near / d],
        [0.0, 0.0, -1.0, 0.0],
    ]))
}
