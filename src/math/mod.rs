//! Vector and matrix primitives used by the camera and trackball.
//!
//! These are thin, side-effect-free functions over `glam` value types. The
//! ones with extra semantics are [`normalize`] (fails instead of returning a
//! default direction), [`cross4`] (drops and re-appends the homogeneous
//! slot) and [`from_rows`] (matrix literals written row index first).

/// Scalar + vector quaternion algebra.
pub mod quaternion;

use std::ops::{Add, Mul};

use glam::{Mat4, Vec3, Vec4};

pub use quaternion::Quaternion;

use crate::error::ViewError;

/// Lengths below this are treated as zero by [`normalize`].
pub const EPSILON: f32 = 1e-8;

/// Dot product of two 3-vectors.
#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Cross product of two 3-vectors.
#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Cross product of the xyz parts of two homogeneous vectors.
///
/// The 4th component of both inputs is ignored and the result is a
/// direction (`w = 0`).
#[inline]
#[must_use]
pub fn cross4(a: Vec4, b: Vec4) -> Vec4 {
    a.truncate().cross(b.truncate()).extend(0.0)
}

/// Return `v` scaled to unit length.
///
/// Fails with [`ViewError::DegenerateVector`] when `|v| < EPSILON` or the
/// length is not finite.
pub fn normalize(v: Vec3) -> Result<Vec3, ViewError> {
    let len = v.length();
    if len < EPSILON || !len.is_finite() {
        return Err(ViewError::DegenerateVector);
    }
    Ok(v / len)
}

/// Normalize the xyz part of a homogeneous vector, keeping `w`.
pub fn normalize4(v: Vec4) -> Result<Vec4, ViewError> {
    Ok(normalize(v.truncate())?.extend(v.w))
}

/// Componentwise sum.
#[inline]
#[must_use]
pub fn add<V: Add<Output = V>>(a: V, b: V) -> V {
    a + b
}

/// Multiply every component by `k`.
#[inline]
#[must_use]
pub fn scale<V: Mul<f32, Output = V>>(v: V, k: f32) -> V {
    v * k
}

/// Matrix transpose.
#[inline]
#[must_use]
pub fn transpose(m: Mat4) -> Mat4 {
    m.transpose()
}

/// Matrix product `a · b` (not element-wise).
#[inline]
#[must_use]
pub fn mat_mult(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}

/// Build a matrix from rows, `rows[i][j]` being row `i`, column `j`.
#[inline]
#[must_use]
pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// Translation by `(tx, ty, tz)`.
#[must_use]
pub fn translation_matrix(tx: f32, ty: f32, tz: f32) -> Mat4 {
    from_rows([
        [1.0, 0.0, 0.0, tx],
        [0.0, 1.0, 0.0, ty],
        [0.0, 0.0, 1.0, tz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
