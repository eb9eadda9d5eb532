//! The view engine: camera, arcball orientation and mesh behind one input
//! entry point and one per-frame output.

mod input;
mod options;

use crate::camera::{Camera, CameraController, FrameUniforms};
use crate::error::ViewError;
use crate::input::{DragMode, MouseButton, TrackballMapper};
use crate::lighting::LightingUniforms;
use crate::math::Quaternion;
use crate::mesh::Mesh;
use crate::options::{LightingOptions, Options, TrackballOptions};

/// Interactive viewing state for a single object.
///
/// Consumers forward pointer events to
/// [`handle_input`](Self::handle_input) and read
/// [`frame_uniforms`](Self::frame_uniforms) once per frame.
///
/// # Example
///
/// ```ignore
/// let mut engine = ViewEngine::new(Options::default(), mesh)?;
/// engine.handle_input(InputEvent::MouseButton { button: MouseButton::Left, pressed: true });
/// engine.handle_input(InputEvent::CursorMoved { x: 0.1, y: 0.0 });
/// let uniforms = engine.frame_uniforms();
/// queue.write_buffer(&buffer, 0, bytemuck::bytes_of(&uniforms));
/// ```
pub struct ViewEngine {
    camera_controller: CameraController,
    trackball: TrackballMapper,
    trackball_options: TrackballOptions,
    lighting_options: LightingOptions,
    mesh: Mesh,
    /// Button and gesture of the drag in progress.
    active_drag: Option<(MouseButton, DragMode)>,
    /// Name of the last preset loaded.
    active_preset: Option<String>,
}

impl ViewEngine {
    /// Build the camera from `options` and take ownership of the mesh.
    pub fn new(options: Options, mesh: Mesh) -> Result<Self, ViewError> {
        options.validate()?;
        let camera_controller = CameraController::new(options.camera)?;
        log::debug!("view engine created: {} vertices", mesh.vertex_count());
        Ok(Self {
            camera_controller,
            trackball: TrackballMapper::new(&options.trackball),
            trackball_options: options.trackball,
            lighting_options: options.lighting,
            mesh,
            active_drag: None,
            active_preset: None,
        })
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.camera_controller.camera()
    }

    /// Mutable access to the camera controller for programmatic placement.
    pub fn camera_controller_mut(&mut self) -> &mut CameraController {
        &mut self.camera_controller
    }

    /// The model orientation composed from pointer drags.
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.trackball.orientation()
    }

    /// The displayed mesh.
    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of vertices the draw call should cover.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// The gesture currently being dragged, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<DragMode> {
        self.active_drag.map(|(_, mode)| mode)
    }

    /// Uniforms for the current frame.
    #[must_use]
    pub fn frame_uniforms(&self) -> FrameUniforms {
        FrameUniforms::new(self.camera(), self.orientation())
    }

    /// Light and material terms for the current frame.
    #[must_use]
    pub fn lighting_uniforms(&self) -> LightingUniforms {
        LightingUniforms::new(&self.lighting_options, self.camera())
    }
}
