//! Arcball mapping of pointer drags onto object rotation.
//!
//! Pointer positions are projected onto a unit sphere centered on the
//! canvas. Each move rotates the running orientation about the axis
//! perpendicular to the previous and current sphere points, by an angle
//! proportional to the chord swept between them.

use glam::Vec3;

use crate::error::ViewError;
use crate::math::{cross, normalize, Quaternion};
use crate::options::TrackballOptions;

/// Drag state of the mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackballState {
    /// No button held.
    Idle,
    /// Button held. `prev` is the last projected sphere point, `None` until
    /// the first move of the drag establishes a baseline.
    Dragging {
        /// Previous sphere point.
        prev: Option<Vec3>,
    },
}

/// Project a canvas position onto the unit arcball sphere.
///
/// Inside the unit disk the point lands on the front hemisphere
/// `(-x, z, sqrt(1 - x² - z²))`; outside it is clamped to the equator
/// `(-x, z, 0) / sqrt(x² + z²)`, so every input yields a unit vector.
#[must_use]
pub fn project(x: f32, z: f32) -> Vec3 {
    let d = x * x + z * z;
    if d < 1.0 {
        Vec3::new(-x, z, (1.0 - d).sqrt())
    } else {
        let a = d.sqrt().recip();
        Vec3::new(-x * a, z * a, 0.0)
    }
}

/// Rotation delta taking sphere point `curr` back toward `prev`.
///
/// The axis is `curr × prev` and the angle its length divided by
/// `sensitivity`. The result is the unit quaternion
/// `(cos angle, sin angle · axis)`. Fails with
/// [`ViewError::DegenerateVector`] when the points coincide.
pub fn rotation_delta(
    prev: Vec3,
    curr: Vec3,
    sensitivity: f32,
) -> Result<Quaternion, ViewError> {
    let axis = cross(curr, prev);
    let angle = axis.length() / sensitivity;
    let axis = normalize(axis)?;
    let (sin, cos) = angle.sin_cos();
    Ok(Quaternion::new(cos, axis * sin))
}

/// Pointer-to-rotation state machine owning the current orientation.
///
/// Deltas are right-multiplied (`orientation · delta`), i.e. applied in the
/// object's own frame.
#[derive(Debug, Clone)]
pub struct TrackballMapper {
    state: TrackballState,
    orientation: Quaternion,
    sensitivity: f32,
}

impl Default for TrackballMapper {
    fn default() -> Self {
        Self::new(&TrackballOptions::default())
    }
}

impl TrackballMapper {
    /// Create an idle mapper with identity orientation.
    #[must_use]
    pub fn new(options: &TrackballOptions) -> Self {
        let mut mapper = Self {
            state: TrackballState::Idle,
            orientation: Quaternion::IDENTITY,
            sensitivity: TrackballOptions::default().sensitivity,
        };
        mapper.set_sensitivity(options.sensitivity);
        mapper
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> TrackballState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackballState::Dragging { .. })
    }

    /// The running orientation (unit quaternion).
    #[must_use]
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Replace the running orientation.
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
    }

    /// Chord-to-angle divisor.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Change the chord-to-angle divisor. Non-positive or non-finite values
    /// are ignored.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        if sensitivity > 0.0 && sensitivity.is_finite() {
            self.sensitivity = sensitivity;
        } else {
            log::warn!("ignoring trackball sensitivity {sensitivity}");
        }
    }

    /// Button pressed: start a drag with no baseline.
    pub fn pointer_down(&mut self) {
        self.state = TrackballState::Dragging { prev: None };
    }

    /// Button released: back to idle. Rotation already applied stays.
    pub fn pointer_up(&mut self) {
        self.state = TrackballState::Idle;
    }

    /// Pointer moved to `(x, z)` in normalized canvas coordinates.
    ///
    /// Returns the delta composed into the orientation, or `None` when
    /// idle, on the baseline sample, or when the pointer did not move on
    /// the sphere.
    pub fn pointer_move(&mut self, x: f32, z: f32) -> Option<Quaternion> {
        let TrackballState::Dragging { prev } = self.state else {
            return None;
        };
        let curr = project(x, z);
        self.state = TrackballState::Dragging { prev: Some(curr) };
        let prev = prev?;

        match rotation_delta(prev, curr, self.sensitivity) {
            Ok(delta) => {
                let next = self.orientation.multiply(delta);
                self.orientation = next.normalize().unwrap_or(next);
                Some(delta)
            }
            Err(e) => {
                log::trace!("trackball move skipped: {e}");
                None
            }
        }
    }

    /// Identity orientation, idle.
    pub fn reset(&mut self) {
        self.state = TrackballState::Idle;
        self.orientation = Quaternion::IDENTITY;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn center_projects_to_pole() {
        assert_eq!(project(0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn inside_disk_lands_on_front_hemisphere() {
        for (x, z) in [(0.3, 0.4), (-0.5, 0.1), (0.0, -0.99), (0.7, -0.7)] {
            let p = project(x, z);
            assert!((p.length() - 1.0).abs() < 1e-5);
            assert!(p.z > 0.0);
            assert_eq!(p.x, -x);
            assert_eq!(p.y, z);
        }
    }

    #[test]
    fn outside_disk_clamps_to_equator() {
        for (x, z) in [(1.0, 0.0), (0.0, -1.0), (3.0, 4.0), (-10.0, 0.5), (0.9, 0.9)] {
            let p = project(x, z);
            assert_eq!(p.z, 0.0);
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn first_move_only_sets_baseline() {
        let mut tb = TrackballMapper::default();
        tb.pointer_down();
        assert_eq!(tb.state(), TrackballState::Dragging { prev: None });
        assert!(tb.pointer_move(0.2, 0.2).is_none());
        assert_eq!(tb.orientation(), Quaternion::IDENTITY);
        assert_eq!(
            tb.state(),
            TrackballState::Dragging {
                prev: Some(project(0.2, 0.2))
            }
        );
    }

    #[test]
    fn idle_moves_are_ignored() {
        let mut tb = TrackballMapper::default();
        assert!(tb.pointer_move(0.0, 0.0).is_none());
        assert!(tb.pointer_move(0.5, 0.0).is_none());
        assert_eq!(tb.orientation(), Quaternion::IDENTITY);
        assert!(!tb.is_dragging());
    }

    #[test]
    fn horizontal_drag_rotates_about_vertical_axis() {
        let mut tb = TrackballMapper::default();
        let prior = tb.orientation();
        tb.pointer_down();
        assert!(tb.pointer_move(0.0, 0.0).is_none());
        assert!(tb.pointer_move(0.1, 0.0).is_some());

        let change = tb.orientation().multiply(prior.inverse_unit());
        assert!(change.vector.x.abs() < TOL);
        assert!(change.vector.z.abs() < TOL);
        assert!(change.vector.y > 0.0);
        // Small positive angle.
        let angle = 2.0 * change.vector.length().atan2(change.scalar);
        assert!(angle > 0.0 && angle < 0.01);
    }

    #[test]
    fn delta_angle_is_chord_over_sensitivity() {
        let prev = project(0.0, 0.0);
        let curr = project(0.1, 0.0);
        let delta = rotation_delta(prev, curr, 150.0).unwrap();
        let expected = 0.1_f32 / 150.0;
        assert!((delta.scalar - expected.cos()).abs() < TOL);
        assert!((delta.vector.y - expected.sin()).abs() < TOL);
        assert!((delta.norm_squared() - 1.0).abs() < TOL);
    }

    #[test]
    fn no_motion_is_a_no_op() {
        let mut tb = TrackballMapper::default();
        tb.pointer_down();
        assert!(tb.pointer_move(0.3, 0.3).is_none());
        assert!(tb.pointer_move(0.3, 0.3).is_none());
        assert_eq!(tb.orientation(), Quaternion::IDENTITY);
        assert!(tb.is_dragging());
        assert!(matches!(
            rotation_delta(Vec3::Z, Vec3::Z, 150.0),
            Err(ViewError::DegenerateVector)
        ));
    }

    #[test]
    fn deltas_are_right_multiplied() {
        let start = Quaternion::new(0.0, Vec3::X);
        let mut tb = TrackballMapper::default();
        tb.set_orientation(start);
        tb.pointer_down();
        let _ = tb.pointer_move(0.0, 0.0);
        let delta = tb.pointer_move(0.0, 0.3).unwrap();
        let expected = start.multiply(delta);
        assert!((tb.orientation().scalar - expected.scalar).abs() < TOL);
        assert!((tb.orientation().vector - expected.vector).length() < TOL);
    }

    #[test]
    fn release_keeps_rotation_and_clears_baseline() {
        let mut tb = TrackballMapper::default();
        tb.pointer_down();
        let _ = tb.pointer_move(0.0, 0.0);
        let _ = tb.pointer_move(0.4, 0.1);
        let rotated = tb.orientation();
        tb.pointer_up();
        assert_eq!(tb.state(), TrackballState::Idle);
        assert_eq!(tb.orientation(), rotated);

        // A new drag needs a fresh baseline.
        tb.pointer_down();
        assert!(tb.pointer_move(-0.5, -0.5).is_none());
        assert_eq!(tb.orientation(), rotated);
    }

    #[test]
    fn long_drag_stays_unit_length() {
        let mut tb = TrackballMapper::new(&TrackballOptions { sensitivity: 0.5 });
        tb.pointer_down();
        for i in 0..2000 {
            let t = i as f32 * 0.01;
            let _ = tb.pointer_move(1.3 * t.cos(), 0.9 * (2.0 * t).sin());
        }
        assert!((tb.orientation().norm_squared() - 1.0).abs() < 1e-5);
        assert_ne!(tb.orientation(), Quaternion::IDENTITY);
    }

    #[test]
    fn invalid_sensitivity_is_ignored() {
        let mut tb = TrackballMapper::new(&TrackballOptions { sensitivity: -1.0 });
        assert_eq!(tb.sensitivity(), 150.0);
        tb.set_sensitivity(f32::INFINITY);
        assert_eq!(tb.sensitivity(), 150.0);
        tb.set_sensitivity(30.0);
        assert_eq!(tb.sensitivity(), 30.0);
    }

    #[test]
    fn reset_returns_to_identity_and_idle() {
        let mut tb = TrackballMapper::default();
        tb.pointer_down();
        let _ = tb.pointer_move(0.0, 0.0);
        let _ = tb.pointer_move(0.5, 0.5);
        tb.reset();
        assert_eq!(tb.orientation(), Quaternion::IDENTITY);
        assert!(!tb.is_dragging());
    }
}
