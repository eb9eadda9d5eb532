use std::ops::{Add, Mul};

use glam::{Quat, Vec3};

use super::normalize;
use crate::error::ViewError;

/// Quaternion `scalar + vector·(i, j, k)`.
///
/// Rotations are unit quaternions. Non-unit values are allowed as
/// intermediate algebra results and must be [`normalize`](Self::normalize)d
/// before being treated as a rotation. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// Real part.
    pub scalar: f32,
    /// Imaginary part.
    pub vector: Vec3,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation `(1, (0, 0, 0))`.
    pub const IDENTITY: Self = Self {
        scalar: 1.0,
        vector: Vec3::ZERO,
    };

    /// Create a quaternion from its scalar and vector parts.
    #[inline]
    #[must_use]
    pub const fn new(scalar: f32, vector: Vec3) -> Self {
        Self { scalar, vector }
    }

    /// Hamilton product `self · rhs`. Not commutative.
    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        let (s1, v1) = (self.scalar, self.vector);
        let (s2, v2) = (rhs.scalar, rhs.vector);
        Self {
            scalar: s1 * s2 - v1.dot(v2),
            vector: v2 * s1 + v1 * s2 + v1.cross(v2),
        }
    }

    /// Scale both parts by `k`.
    #[must_use]
    pub fn scale(self, k: f32) -> Self {
        Self {
            scalar: self.scalar * k,
            vector: self.vector * k,
        }
    }

    /// Squared length of the vector part only.
    ///
    /// This is not the quaternion norm; see [`norm_squared`](Self::norm_squared).
    #[inline]
    #[must_use]
    pub fn magnitude_of_vector_part(self) -> f32 {
        self.vector.dot(self.vector)
    }

    /// `scalar² + |vector|²`.
    #[inline]
    #[must_use]
    pub fn norm_squared(self) -> f32 {
        self.scalar * self.scalar + self.magnitude_of_vector_part()
    }

    /// Negate the vector part.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            scalar: self.scalar,
            vector: -self.vector,
        }
    }

    /// Inverse of a quaternion of any non-zero magnitude.
    pub fn inverse_general(self) -> Result<Self, ViewError> {
        let n = self.norm_squared();
        if n < super::EPSILON || !n.is_finite() {
            return Err(ViewError::DegenerateVector);
        }
        Ok(self.conjugate().scale(1.0 / n))
    }

    /// Inverse of a unit quaternion. Only valid when `|self| = 1`.
    #[inline]
    #[must_use]
    pub fn inverse_unit(self) -> Self {
        self.conjugate()
    }

    /// Scale to unit length.
    pub fn normalize(self) -> Result<Self, ViewError> {
        let n = self.norm_squared().sqrt();
        if n < super::EPSILON || !n.is_finite() {
            return Err(ViewError::DegenerateVector);
        }
        Ok(self.scale(1.0 / n))
    }

    /// Rotate by `theta` radians about `axis` with the conjugation
    /// `r · self · r⁻¹`, where `r = (cos θ/2, sin θ/2 · normalize(axis))`.
    ///
    /// Fails with [`ViewError::DegenerateVector`] for a zero axis.
    pub fn rotate_by_angle_axis(
        self,
        theta: f32,
        axis: Vec3,
    ) -> Result<Self, ViewError> {
        let axis = normalize(axis)?;
        let (sin, cos) = (theta * 0.5).sin_cos();
        let r = Self::new(cos, axis * sin);
        Ok(r.multiply(self).multiply(r.inverse_unit()))
    }

    /// Upload-ready `[scalar, x, y, z]`.
    #[inline]
    #[must_use]
    pub fn to_vec4(self) -> [f32; 4] {
        [self.scalar, self.vector.x, self.vector.y, self.vector.z]
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

/// Componentwise sum.
impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            scalar: self.scalar + rhs.scalar,
            vector: self.vector + rhs.vector,
        }
    }
}

impl TryFrom<&[f32]> for Quaternion {
    type Error = ViewError;

    /// Accepts `[scalar, x, y, z]`.
    fn try_from(raw: &[f32]) -> Result<Self, ViewError> {
        match *raw {
            [s, x, y, z] => Ok(Self::new(s, Vec3::new(x, y, z))),
            _ => Err(ViewError::InvalidQuaternionShape { len: raw.len() }),
        }
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.vector.x, q.vector.y, q.vector.z, q.scalar)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.w, Vec3::new(q.x, q.y, q.z))
    }
}
