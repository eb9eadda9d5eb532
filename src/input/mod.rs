//! Input handling: event types, pixel normalization, and the arcball state
//! machine that turns pointer drags into rotations.

/// Platform-agnostic input events.
pub mod event;
/// Pointer-to-rotation arcball mapping.
pub mod trackball;
/// Pixel to normalized device coordinate conversion.
pub mod viewport;

pub use event::{DragMode, InputEvent, MouseButton};
pub use trackball::{project, TrackballMapper, TrackballState};
pub use viewport::Viewport;
