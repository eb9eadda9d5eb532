use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball", inline)]
#[serde(default)]
/// Arcball rotation parameters.
pub struct TrackballOptions {
    /// Divisor turning the swept sphere chord into a rotation angle.
    /// Larger values rotate more slowly.
    #[schemars(title = "Sensitivity", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub sensitivity: f32,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self { sensitivity: 150.0 }
    }
}

impl TrackballOptions {
    /// Reject a sensitivity that is zero, negative or non-finite.
    pub fn validate(&self) -> Result<(), ViewError> {
        if self.sensitivity > 0.0 && self.sensitivity.is_finite() {
            Ok(())
        } else {
            Err(ViewError::InvalidOption {
                field: "trackball.sensitivity",
                value: self.sensitivity,
            })
        }
    }
}
