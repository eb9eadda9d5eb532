//! Phong lighting uniforms derived from [`LightingOptions`] and the camera.

use crate::camera::Camera;
use crate::options::LightingOptions;

/// Lighting block shared by the shaders.
///
/// Layout (std140 compatible, 96 bytes):
///   ambient_product: vec4<f32>   (offset 0)
///   diffuse_product: vec4<f32>   (offset 16)
///   specular_product: vec4<f32>  (offset 32)
///   light_position: vec4<f32>    (offset 48)
///   viewer_position: vec4<f32>   (offset 64)
///   shininess: f32               (offset 80)
///   _pad: vec3<f32>              (offset 84)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniforms {
    /// Light ambient blended with material ambient.
    pub ambient_product: [f32; 4],
    /// Light diffuse blended with material diffuse.
    pub diffuse_product: [f32; 4],
    /// Light specular blended with material specular.
    pub specular_product: [f32; 4],
    /// World-space light position (`w = 1`).
    pub light_position: [f32; 4],
    /// Eye position used for the specular half vector (`w = 1`).
    pub viewer_position: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
    _pad: [f32; 3],
}

impl LightingUniforms {
    /// Compute the products for `options`; the viewer sits at the camera
    /// eye so the highlight follows dolly moves.
    #[must_use]
    pub fn new(options: &LightingOptions, camera: &Camera) -> Self {
        let products = options.products();
        Self {
            ambient_product: products.ambient.to_array(),
            diffuse_product: products.diffuse.to_array(),
            specular_product: products.specular.to_array(),
            light_position: options.light_point().to_array(),
            viewer_position: camera.position().to_array(),
            shininess: options.shininess,
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::options::CameraOptions;

    #[test]
    #[allow(unused_qualifications)]
    fn uniform_layout_is_96_bytes() {
        assert_eq!(std::mem::size_of::<LightingUniforms>(), 96);
    }

    #[test]
    fn viewer_tracks_the_camera_eye() {
        let mut camera_opts = CameraOptions::default();
        camera_opts.position = [0.0, 0.0, 7.0];
        let camera = Camera::from_options(&camera_opts).unwrap();
        let u = LightingUniforms::new(&LightingOptions::default(), &camera);

        assert_eq!(u.viewer_position, [0.0, 0.0, 7.0, 1.0]);
        assert_eq!(u.light_position, [-58.0, -60.0, 100.0, 1.0]);
        assert_eq!(u.shininess, 16.0);
        assert_eq!(
            Vec4::from(u.ambient_product),
            LightingOptions::default().products().ambient
        );
    }
}
