use glam::{Mat4, Vec3, Vec4};

use super::projection::{self, FrustumBounds, ProjectionKind};
use crate::error::ViewError;
use crate::math::{
    cross, mat_mult, normalize, transpose, translation_matrix, Quaternion,
};
use crate::options::{CameraOptions, UpMode};

/// Camera defined by an eye position, a look-at target and an up hint.
///
/// The basis satisfies `right × up = forward`, where `forward` points from
/// the target back toward the eye (the camera looks down `-forward`). A
/// camera is rebuilt wholesale whenever its placement changes; it is never
/// patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec4,
    forward: Vec4,
    up: Vec4,
    right: Vec4,
    view: Mat4,
    projection: Mat4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame uniform block handed to the rendering collaborator.
///
/// Matrices are column-major, ready for upload.
pub struct FrameUniforms {
    /// World-to-camera transform.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Model orientation as `[w, x, y, z]`, unit length.
    pub orientation: [f32; 4],
    /// Camera world-space position (`w = 1`).
    pub eye_position: [f32; 4],
    /// Camera forward direction (`w = 0`).
    pub forward: [f32; 4],
}

impl Camera {
    /// Build a camera where `world_up` is a world-space *point* above the
    /// eye; the up hint is `world_up - position`.
    pub fn new(
        position: Vec4,
        target: Vec4,
        world_up: Vec4,
    ) -> Result<Self, ViewError> {
        Self::build(position, target, world_up.truncate() - position.truncate())
    }

    /// Build a camera where `up` is a free direction.
    pub fn with_up_direction(
        position: Vec4,
        target: Vec4,
        up: Vec4,
    ) -> Result<Self, ViewError> {
        Self::build(position, target, up.truncate())
    }

    /// Build the camera and its projection from options.
    pub fn from_options(options: &CameraOptions) -> Result<Self, ViewError> {
        let (position, target, up) = (
            options.position_point(),
            options.target_point(),
            options.up_vector(),
        );
        let mut camera = match options.up_mode {
            UpMode::Point => Self::new(position, target, up)?,
            UpMode::Direction => Self::with_up_direction(position, target, up)?,
        };
        camera.set_projection(options.projection, &options.frustum())?;
        Ok(camera)
    }

    fn build(
        position: Vec4,
        target: Vec4,
        up_hint: Vec3,
    ) -> Result<Self, ViewError> {
        let eye = position.truncate();
        let forward = normalize(eye - target.truncate())?;
        let up_hint = normalize(up_hint)?;
        let right = normalize(cross(up_hint, forward))
            .map_err(|_| ViewError::DegenerateBasis)?;
        let up = normalize(cross(forward, right))?;

        let rotation = Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            Vec4::W,
        );
        let view =
            mat_mult(transpose(rotation), translation_matrix(-eye.x, -eye.y, -eye.z));

        Ok(Self {
            position: eye.extend(1.0),
            forward: forward.extend(0.0),
            up: up.extend(0.0),
            right: right.extend(0.0),
            view,
            projection: Mat4::IDENTITY,
        })
    }

    /// Replace the projection with an orthographic one. On error the
    /// previous projection is kept.
    pub fn set_orthographic(
        &mut self,
        bounds: &FrustumBounds,
    ) -> Result<(), ViewError> {
        self.projection = projection::orthographic(bounds)?;
        Ok(())
    }

    /// Replace the projection with an off-axis perspective one. On error
    /// the previous projection is kept.
    pub fn set_perspective(
        &mut self,
        bounds: &FrustumBounds,
    ) -> Result<(), ViewError> {
        self.projection = projection::perspective(bounds)?;
        Ok(())
    }

    /// Replace the projection with one of the given kind.
    pub fn set_projection(
        &mut self,
        kind: ProjectionKind,
        bounds: &FrustumBounds,
    ) -> Result<(), ViewError> {
        self.projection = kind.matrix(bounds)?;
        Ok(())
    }

    /// Eye position (`w = 1`).
    #[must_use]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// Unit vector from the target toward the eye (`w = 0`).
    #[must_use]
    pub fn forward(&self) -> Vec4 {
        self.forward
    }

    /// Unit camera up axis (`w = 0`).
    #[must_use]
    pub fn up(&self) -> Vec4 {
        self.up
    }

    /// Unit camera right axis (`w = 0`).
    #[must_use]
    pub fn right(&self) -> Vec4 {
        self.right
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Camera-to-clip transform.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }
}

impl FrameUniforms {
    /// Gather everything the shaders need for one frame.
    #[must_use]
    pub fn new(camera: &Camera, orientation: Quaternion) -> Self {
        // A zero quaternion cannot come out of the trackball; fall back to
        // no rotation rather than uploading NaNs.
        let orientation = orientation
            .normalize()
            .unwrap_or(Quaternion::IDENTITY)
            .to_vec4();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            orientation,
            eye_position: camera.position().to_array(),
            forward: camera.forward().to_array(),
        }
    }
}
