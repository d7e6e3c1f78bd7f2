//! # Graphics Module
//!
//! Everything between generated geometry and a draw call.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - parametric quad, sphere, torus and circle ring meshes
//! - **Scene** ([`scene`]) - celestial body hierarchy, frame stepping and the solar system preset
//! - **Rendering** ([`rendering`]) - handles, draw commands and wgpu mesh upload
//! - **Resources** ([`resources`]) - shared mesh storage
//! - **Camera** ([`camera`]) - interpolation and a follow camera
//!
//! The scene never touches the GPU itself. Each frame it emits
//! [`DrawCommand`](rendering::DrawCommand)s into a
//! [`BodyRenderer`](rendering::BodyRenderer) supplied by the caller.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use camera::CameraFollow;
pub use scene::{Scene, SolarSystem};
