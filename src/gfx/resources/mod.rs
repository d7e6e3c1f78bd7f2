//! Shared, immutable assets
//!
//! Meshes are created once at startup and read by every frame afterwards.

pub mod mesh_library;

pub use mesh_library::MeshLibrary;
