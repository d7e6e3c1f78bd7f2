//! Opaque handles into the asset system.
//!
//! The scene never looks inside these; it only passes them back to the
//! [`BodyRenderer`](super::BodyRenderer) with every draw call.

/// Identifies a mesh owned by a [`MeshLibrary`](crate::gfx::resources::MeshLibrary)
/// or by an external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u32);

/// Identifies a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(pub u32);

/// Identifies a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// The mesh + shader + texture triple a body is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderPayload {
    pub mesh: MeshHandle,
    pub shader: ShaderHandle,
    pub texture: TextureHandle,
}

impl RenderPayload {
    pub fn new(mesh: MeshHandle, shader: ShaderHandle, texture: TextureHandle) -> Self {
        Self {
            mesh,
            shader,
            texture,
        }
    }
}
