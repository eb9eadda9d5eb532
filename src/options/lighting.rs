use glam::{Vec3, Vec4};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Point light and surface material for a Phong-style shader.
///
/// Colors are RGB with an implicit alpha of 1. The shader consumes the
/// light/material products from [`LightingOptions::products`] rather than
/// the raw colors.
pub struct LightingOptions {
    /// World-space light position.
    #[schemars(skip)]
    pub light_position: [f32; 3],
    /// Ambient color of the light.
    #[schemars(skip)]
    pub light_ambient: [f32; 3],
    /// Diffuse color of the light.
    #[schemars(title = "Diffuse Color")]
    pub light_diffuse: [f32; 3],
    /// Specular color of the light.
    #[schemars(title = "Specular Color")]
    pub light_specular: [f32; 3],
    /// Ambient reflectance of the material.
    #[schemars(skip)]
    pub material_ambient: [f32; 3],
    /// Diffuse reflectance of the material.
    #[schemars(skip)]
    pub material_diffuse: [f32; 3],
    /// Specular reflectance of the material.
    #[schemars(skip)]
    pub material_specular: [f32; 3],
    /// Blend weight of the material in the diffuse product.
    #[schemars(title = "Diffuse", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub diffuse_intensity: f32,
    /// Blend weight of the material in the specular product.
    #[schemars(title = "Specular", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub specular_intensity: f32,
    /// Specular exponent.
    #[schemars(title = "Shininess", range(min = 1.0, max = 128.0), extend("step" = 1.0))]
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_position: [-58.0, -60.0, 100.0],
            light_ambient: [1.0, 1.0, 1.0],
            light_diffuse: [1.0, 1.0, 1.0],
            light_specular: [1.0, 1.0, 1.0],
            material_ambient: [0.4, 0.0, 0.2],
            material_diffuse: [0.4, 0.0, 0.4],
            material_specular: [0.4, 0.77, 0.77],
            diffuse_intensity: 2.0,
            specular_intensity: 2.0,
            shininess: 16.0,
        }
    }
}

/// Light/material color products fed to the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightProducts {
    /// Ambient term.
    pub ambient: Vec4,
    /// Diffuse term.
    pub diffuse: Vec4,
    /// Specular term.
    pub specular: Vec4,
}

/// `(1 - t) · light + t · material`, alpha pinned to 1.
fn mix(light: [f32; 3], material: [f32; 3], t: f32) -> Vec4 {
    Vec3::from(light).lerp(Vec3::from(material), t).extend(1.0)
}

impl LightingOptions {
    /// Light position as a homogeneous point.
    #[must_use]
    pub fn light_point(&self) -> Vec4 {
        Vec3::from(self.light_position).extend(1.0)
    }

    /// Blend light and material colors. The ambient product takes the
    /// material color outright; diffuse and specular use their intensity
    /// as the blend weight.
    #[must_use]
    pub fn products(&self) -> LightProducts {
        LightProducts {
            ambient: mix(self.light_ambient, self.material_ambient, 1.0),
            diffuse: mix(
                self.light_diffuse,
                self.material_diffuse,
                self.diffuse_intensity,
            ),
            specular: mix(
                self.light_specular,
                self.material_specular,
                self.specular_intensity,
            ),
        }
    }

    /// Reject non-finite values and a non-positive shininess.
    pub fn validate(&self) -> Result<(), ViewError> {
        let vectors = [
            ("lighting.light_position", self.light_position),
            ("lighting.light_ambient", self.light_ambient),
            ("lighting.light_diffuse", self.light_diffuse),
            ("lighting.light_specular", self.light_specular),
            ("lighting.material_ambient", self.material_ambient),
            ("lighting.material_diffuse", self.material_diffuse),
            ("lighting.material_specular", self.material_specular),
        ];
        for (field, v) in vectors {
            if let Some(&value) = v.iter().find(|c| !c.is_finite()) {
                return Err(ViewError::InvalidOption { field, value });
            }
        }
        let scalars = [
            ("lighting.diffuse_intensity", self.diffuse_intensity),
            ("lighting.specular_intensity", self.specular_intensity),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ViewError::InvalidOption { field, value });
            }
        }
        if self.shininess > 0.0 && self.shininess.is_finite() {
            Ok(())
        } else {
            Err(ViewError::InvalidOption {
                field: "lighting.shininess",
                value: self.shininess,
            })
        }
    }
}
