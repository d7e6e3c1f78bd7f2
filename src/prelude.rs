//! # Orrery Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let sphere = generate_sphere(1.0, 16, 8).unwrap();
//! assert!(sphere.check_invariants());
//! ```

// Geometry
pub use crate::gfx::geometry::{
    generate_circle_ring, generate_quad, generate_sphere, generate_torus, GeometryError, MeshData,
};

// Scene and frame stepping
pub use crate::gfx::scene::{
    BodyId, CelestialBody, FocusState, FrameClock, FrameContext, FrameReport, OrbitConfiguration,
    Scene, SceneError, SolarSystem, SolarSystemConfig, SpinConfiguration, Vertex3D,
};

// Rendering boundary
pub use crate::gfx::rendering::{
    BodyRenderer, DrawCommand, DrawKind, DrawRecorder, MeshHandle, RenderPayload, ShaderHandle,
    TextureHandle,
};

pub use crate::gfx::camera::{catmull_rom, lerp, CameraFollow};
pub use crate::gfx::resources::MeshLibrary;

// Common external types
pub use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Zero};
pub use std::time::Duration;
