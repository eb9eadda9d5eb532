//! Camera system for viewing the object.
//!
//! Provides the look-at camera with its orthonormal basis, OpenGL-style
//! orthographic and perspective projections, and a controller that keeps
//! the last valid camera while configuration changes and dolly gestures
//! come in.

/// Camera controller managing configuration changes, dolly and reset.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Frustum bounds and projection matrix builders.
pub mod projection;

pub use self::controller::CameraController;
pub use self::core::{Camera, FrameUniforms};
pub use self::projection::{FrustumBounds, ProjectionKind};
