// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera transforms and quaternion arcball rotation for interactive 3D
//! object viewers.
//!
//! Arcview is the numerical core behind a "drag to spin, middle-drag to
//! zoom" object viewer. It owns no GPU resources: it builds the view and
//! projection matrices, tracks the model orientation composed from pointer
//! drags, and hands everything to the renderer as one plain uniform block.
//!
//! # Key entry points
//!
//! - [`ViewEngine`] - input dispatch and per-frame output
//! - [`camera::Camera`] - look-at camera with orthographic/perspective
//!   projection
//! - [`input::TrackballMapper`] - pointer-to-rotation arcball state machine
//! - [`math::Quaternion`] - scalar + vector quaternion algebra
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`lighting::LightingUniforms`] - Phong light/material products
//!
//! # Frame flow
//!
//! Pointer events (normalized with [`input::Viewport`]) go to
//! [`ViewEngine::handle_input`]. A button 0 drag projects the pointer onto
//! the arcball sphere and right-multiplies a rotation delta into the
//! orientation; a button 1 drag dollies the eye along the view direction
//! and rebuilds the camera. Each frame [`ViewEngine::frame_uniforms`]
//! returns column-major matrices, the orientation and the eye placement;
//! [`ViewEngine::lighting_uniforms`] returns the light and material terms.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod lighting;
pub mod math;
pub mod mesh;
pub mod options;

pub use engine::ViewEngine;
pub use error::ViewError;
