//! Geometry handed in by the mesh generator.

use glam::Vec4;

/// Vertex positions and normals of the displayed object.
///
/// The contents are not interpreted here; the engine only reports the
/// vertex count to the draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (`w = 1`).
    pub vertices: Vec<Vec4>,
    /// Per-vertex normals (`w = 0`).
    pub normals: Vec<Vec4>,
}

impl Mesh {
    /// Wrap a vertex/normal pair.
    #[must_use]
    pub fn new(vertices: Vec<Vec4>, normals: Vec<Vec4>) -> Self {
        Self { vertices, normals }
    }

    /// Number of vertices to draw.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
