//! # Scene Module
//!
//! The animated body hierarchy and everything needed to step it one frame at
//! a time.
//!
//! ## Key Components
//!
//! - [`CelestialBody`] - orbit, spin and scale of one body, plus an optional ring
//! - [`Scene`] - arena of bodies linked into parent/child trees
//! - [`FrameContext`] / [`FrameReport`] - inputs and results of one traversal
//! - [`FrameClock`] / [`FocusState`] - pause, time scale and camera focus
//! - [`SolarSystem`] - a ready-made preset
//! - [`Vertex3D`] - the interleaved GPU vertex generated meshes are packed into
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use cgmath::{Matrix4, SquareMatrix};
//! use orrery::gfx::rendering::{DrawRecorder, MeshHandle, RenderPayload, ShaderHandle, TextureHandle};
//! use orrery::gfx::scene::{CelestialBody, FrameContext, OrbitConfiguration, Scene};
//!
//! let payload = RenderPayload::new(MeshHandle(0), ShaderHandle(0), TextureHandle(0));
//! let mut scene = Scene::new();
//! let sun = scene.add_body(CelestialBody::new(payload));
//!
//! let mut planet = CelestialBody::new(payload);
//! planet.set_orbit(OrbitConfiguration { radius: 2.0, inclination: 0.0, speed: 1.0 });
//! let planet = scene.add_body(planet);
//! scene.add_child(sun, planet).unwrap();
//!
//! let mut recorder = DrawRecorder::new();
//! let frame = FrameContext::new(Duration::from_millis(16), Matrix4::identity());
//! let report = scene.traverse(&frame, &mut recorder);
//! assert_eq!(report.visit_order, vec![sun, planet]);
//! ```

pub mod body;
pub mod frame;
pub mod scene;
pub mod solar_system;
pub mod vertex;

pub use body::{
    BodyTransforms, CelestialBody, KinematicState, OrbitConfiguration, Ring, SpinConfiguration,
};
pub use frame::{FocusState, FrameClock, FrameContext, FrameReport};
pub use scene::{BodyId, ChildRejection, Scene, SceneError};
pub use solar_system::{
    BodySpec, RingMeshSpec, RingSpec, SolarSystem, SolarSystemConfig, SolarSystemError,
    SolarSystemShaders, SphereMeshSpec,
};
pub use vertex::Vertex3D;
