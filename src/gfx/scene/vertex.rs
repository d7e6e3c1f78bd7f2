//! # Vertex Data Structures
//!
//! GPU-compatible interleaved vertex format for meshes produced by
//! [`crate::gfx::geometry`].

/// A 3D vertex carrying the full tangent frame.
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. All fields are
/// `[f32; 3]`, so the struct has no padding and is 60 bytes wide.
///
/// # Examples
///
/// ```no_run
/// use orrery::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coord: [0.5, 0.5, 0.0],
///     tangent: [0.0, 0.0, 1.0],
///     binormal: [1.0, 0.0, 0.0],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Unit normal [nx, ny, nz]
    pub normal: [f32; 3],
    /// Texture coordinates [u, v, 0]
    pub tex_coord: [f32; 3],
    /// Unit tangent
    pub tangent: [f32; 3],
    /// Unit binormal
    pub binormal: [f32; 3],
}

impl Vertex3D {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x3,
        4 => Float32x3
    ];

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Location 0: position
    /// - Location 1: normal
    /// - Location 2: texture coordinates
    /// - Location 3: tangent
    /// - Location 4: binormal
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
