//! # Rendering Boundary
//!
//! The scene computes transforms; everything that touches a graphics API
//! lives behind the types in this module.
//!
//! - [`handles`] - opaque mesh/shader/texture handles carried by bodies
//! - [`draw`] - the [`BodyRenderer`] trait bodies submit draw calls to
//! - [`gpu_mesh`] - wgpu upload of generated meshes

pub mod draw;
pub mod gpu_mesh;
pub mod handles;

pub use draw::{BasisCommand, BodyRenderer, DrawCommand, DrawKind, DrawRecorder};
pub use gpu_mesh::{DrawGpuMesh, GpuMesh};
pub use handles::{MeshHandle, RenderPayload, ShaderHandle, TextureHandle};
