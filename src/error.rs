//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcview crate.
#[derive(Debug)]
pub enum ViewError {
    /// Attempted to normalize a vector (or quaternion) whose length is
    /// below [`EPSILON`](crate::math::EPSILON).
    DegenerateVector,
    /// Camera forward direction and up hint are colinear, so no right axis
    /// exists.
    DegenerateBasis,
    /// Projection bounds enclose no volume.
    DegenerateFrustum {
        /// Which pair of bounds collapsed.
        reason: &'static str,
    },
    /// A raw float slice did not have the four components of a quaternion.
    InvalidQuaternionShape {
        /// Length of the rejected slice.
        len: usize,
    },
    /// An option value outside its accepted domain.
    InvalidOption {
        /// Dotted path of the rejected field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateVector => {
                write!(f, "cannot normalize a zero-length vector")
            }
            Self::DegenerateBasis => write!(
                f,
                "camera up hint is colinear with the view direction"
            ),
            Self::DegenerateFrustum { reason } => {
                write!(f, "degenerate frustum: {reason}")
            }
            Self::InvalidQuaternionShape { len } => write!(
                f,
                "invalid quaternion shape: expected 4 components, got {len}"
            ),
            Self::InvalidOption { field, value } => {
                write!(f, "invalid option {field} = {value}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
