//! Orrery
//!
//! Parametric meshes and an animated hierarchy of orbiting, spinning bodies,
//! built on cgmath and wgpu.

pub mod gfx;
pub mod prelude;
