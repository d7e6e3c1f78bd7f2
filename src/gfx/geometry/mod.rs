//! # Parametric Geometry Generation
//!
//! This module generates the four parametric primitives used by the scenes:
//! planar quads, UV spheres, tori and flat circle rings. Every generator
//! evaluates a closed-form surface over a regular parameter grid and fills
//! positions, normals, texture coordinates, tangents and binormals as
//! parallel arrays, plus a triangle list over that grid.
//!
//! ## Supported Primitives
//!
//! - **Quad**: tessellated rectangle in the XZ plane, facing +Y
//! - **Sphere**: UV sphere around the origin
//! - **Torus**: ring around the Y axis
//! - **Circle ring**: flat annulus in the XY plane, facing +Z
//!
//! ## Usage
//!
//! ```rust
//! use orrery::gfx::geometry::{generate_sphere, generate_circle_ring};
//!
//! let sphere = generate_sphere(1.0, 32, 16).unwrap();
//! assert!(sphere.check_invariants());
//!
//! let ring = generate_circle_ring(0.675, 0.45, 80, 8).unwrap();
//! assert_eq!(ring.vertex_count(), ring.normals.len());
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Vector3};

use crate::gfx::scene::vertex::Vertex3D;

/// Errors returned by the shape generators
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A size or radius was negative, NaN or infinite.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// The requested tessellation cannot be addressed with `u32` indices.
    #[error("mesh would need {0} vertices, more than a u32 index buffer can address")]
    TooManyVertices(u64),
}

/// Generated geometry, kept as parallel per-vertex arrays
///
/// All attribute arrays have the same length. Texture coordinates are 2D
/// values stored with a zero Z component.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Unit normals, `normalize(cross(tangent, binormal))`
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v, 0)
    pub tex_coords: Vec<[f32; 3]>,
    /// Unit tangents
    pub tangents: Vec<[f32; 3]>,
    /// Unit binormals
    pub binormals: Vec<[f32; 3]>,
    /// Triangles, counter-clockwise seen from the normal side
    pub indices: Vec<[u32; 3]>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            tangents: Vec::new(),
            binormals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create an empty mesh with room for `vertex_count` vertices and `triangle_count` triangles
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tex_coords: Vec::with_capacity(vertex_count),
            tangents: Vec::with_capacity(vertex_count),
            binormals: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of `u32` indices a renderer has to draw
    pub fn index_count(&self) -> usize {
        self.indices.len() * 3
    }

    /// Returns true when every attribute array has one entry per vertex and
    /// every triangle only references existing vertices.
    pub fn check_invariants(&self) -> bool {
        let count = self.vertices.len();
        let parallel = self.normals.len() == count
            && self.tex_coords.len() == count
            && self.tangents.len() == count
            && self.binormals.len() == count;

        parallel
            && self
                .indices
                .iter()
                .flatten()
                .all(|&index| (index as usize) < count)
    }

    /// Interleave the parallel arrays into the vertex format used for GPU upload
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals[i],
                tex_coord: self.tex_coords[i],
                tangent: self.tangents[i],
                binormal: self.binormals[i],
            })
            .collect()
    }

    /// Flattened index list, three entries per triangle
    pub fn flat_indices(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    pub(crate) fn push_vertex(
        &mut self,
        position: [f32; 3],
        tex_coord: [f32; 2],
        tangent: [f32; 3],
        binormal: [f32; 3],
    ) {
        self.vertices.push(position);
        self.tex_coords.push([tex_coord[0], tex_coord[1], 0.0]);
        self.tangents.push(tangent);
        self.binormals.push(binormal);
        self.normals.push(normalized_cross(tangent, binormal));
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}

/// Unit `a x b`; a zero cross product stays zero
fn normalized_cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    let c = Vector3::from(a).cross(Vector3::from(b));
    if c.magnitude2() > 0.0 {
        c.normalize().into()
    } else {
        c.into()
    }
}
