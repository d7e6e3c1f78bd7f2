//! # Solar System Preset
//!
//! The Sun, eight planets, Earth's Moon and Saturn's ring, with sizes and
//! speeds picked to look good rather than to be physically accurate.
//! [`SolarSystemConfig::default`] holds the reference table; edit it to build
//! other systems with the same machinery.

use std::collections::HashMap;
use std::f32::consts::TAU;

use cgmath::{vec2, vec3, Deg, Matrix4, Rad, Vector2};
use log::info;
use thiserror::Error;

use crate::gfx::geometry::{generate_circle_ring, generate_sphere, GeometryError};
use crate::gfx::rendering::{RenderPayload, ShaderHandle, TextureHandle};
use crate::gfx::resources::MeshLibrary;

use super::body::{CelestialBody, OrbitConfiguration, SpinConfiguration};
use super::scene::{BodyId, Scene, SceneError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolarSystemError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("body '{0}' is defined twice")]
    DuplicateBody(String),
    #[error("body '{child}' names unknown parent '{parent}'")]
    UnknownParent { child: String, parent: String },
}

/// Decorative ring of one body
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    /// Scale of the ring along its X and Z axes
    pub scale: Vector2<f32>,
    pub texture: String,
}

/// One row of the body table
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    /// Name of the body this one orbits; `None` for roots
    pub parent: Option<String>,
    pub texture: String,
    /// Uniform scale applied to the shared unit sphere
    pub scale: f32,
    pub spin: SpinConfiguration,
    pub orbit: OrbitConfiguration,
    pub ring: Option<RingSpec>,
}

impl BodySpec {
    fn new(name: &str, parent: Option<&str>, scale: f32) -> Self {
        Self {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            texture: format!("2k_{name}.jpg"),
            scale,
            spin: SpinConfiguration::default(),
            orbit: OrbitConfiguration::default(),
            ring: None,
        }
    }

    /// Spin with the tilt in degrees and one turn every `period` seconds;
    /// a negative period spins retrograde
    fn spin(mut self, tilt_degrees: f32, period: f32) -> Self {
        self.spin = SpinConfiguration {
            axial_tilt: Rad::from(Deg(tilt_degrees)).0,
            speed: TAU / period,
        };
        self
    }

    fn orbit(mut self, radius: f32, inclination_degrees: f32, period: f32) -> Self {
        self.orbit = OrbitConfiguration {
            radius,
            inclination: Rad::from(Deg(inclination_degrees)).0,
            speed: TAU / period,
        };
        self
    }

    fn texture(mut self, texture: &str) -> Self {
        self.texture = texture.to_string();
        self
    }

    fn ring(mut self, scale: Vector2<f32>, texture: &str) -> Self {
        self.ring = Some(RingSpec {
            scale,
            texture: texture.to_string(),
        });
        self
    }
}

/// Tessellation of the unit sphere every body is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereMeshSpec {
    pub longitude_split_count: u32,
    pub latitude_split_count: u32,
}

/// Ring mesh dimensions before per-body scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMeshSpec {
    pub radius: f32,
    pub spread_length: f32,
    pub split_count: u32,
    pub spread_split_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystemConfig {
    /// Parent transform of the root bodies
    pub base_transform: Matrix4<f32>,
    pub sphere: SphereMeshSpec,
    pub ring_mesh: RingMeshSpec,
    /// Bodies in creation order; a parent must precede its children
    pub bodies: Vec<BodySpec>,
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        let sun = Some("sun");
        Self {
            base_transform: Matrix4::from_translation(vec3(2.0, 0.0, 0.0)),
            sphere: SphereMeshSpec {
                longitude_split_count: 64,
                latitude_split_count: 32,
            },
            ring_mesh: RingMeshSpec {
                radius: 0.675,
                spread_length: 0.45,
                split_count: 80,
                spread_split_count: 8,
            },
            bodies: vec![
                BodySpec::new("sun", None, 1.0).spin(0.0, 6.0),
                BodySpec::new("uranus", sun, 0.2)
                    .spin(-82.0, -2.0)
                    .orbit(18.0, -6.5, 1680.0),
                BodySpec::new("jupiter", sun, 0.5)
                    .spin(-3.1, 1.0)
                    .orbit(13.0, -6.1, 220.0),
                BodySpec::new("neptune", sun, 0.2)
                    .spin(-28.0, 2.0)
                    .orbit(19.0, -6.4, 3200.0),
                BodySpec::new("saturn", sun, 0.4)
                    .spin(-27.0, 1.2)
                    .orbit(16.0, -5.5, 400.0)
                    .ring(vec2(1.0, 1.25), "2k_saturn_ring_alpha.png"),
                BodySpec::new("mars", sun, 0.03)
                    .spin(-25.0, 3.0)
                    .orbit(5.0, -5.7, 36.0),
                BodySpec::new("venus", sun, 0.05)
                    .spin(-2.6, -600.0)
                    .orbit(3.0, -3.9, 12.0)
                    .texture("2k_venus_atmosphere.jpg"),
                BodySpec::new("mercury", sun, 0.02)
                    .spin(0.0, 180.0)
                    .orbit(2.0, -3.4, 4.0),
                BodySpec::new("earth", sun, 0.05)
                    .spin(-23.0, 3.0)
                    .orbit(4.0, -7.2, 20.0)
                    .texture("2k_earth_daymap.jpg"),
                BodySpec::new("moon", Some("earth"), 0.01)
                    .spin(-6.7, 90.0)
                    .orbit(0.2, 29.0, 1.3),
            ],
        }
    }
}

/// Shader programs used by the preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarSystemShaders {
    pub body: ShaderHandle,
    pub ring: ShaderHandle,
}

/// A scene built from a [`SolarSystemConfig`], with its meshes
#[derive(Debug, Clone)]
pub struct SolarSystem {
    pub scene: Scene,
    pub meshes: MeshLibrary,
    pub base_transform: Matrix4<f32>,
    ids: HashMap<String, BodyId>,
}

impl SolarSystem {
    /// Generate the meshes and link the bodies
    ///
    /// `textures` resolves a texture file name to a handle owned by the
    /// caller's asset system.
    pub fn build(
        config: &SolarSystemConfig,
        shaders: SolarSystemShaders,
        mut textures: impl FnMut(&str) -> TextureHandle,
    ) -> Result<Self, SolarSystemError> {
        let mut meshes = MeshLibrary::new();
        let sphere = meshes.add(
            "sphere",
            generate_sphere(
                1.0,
                config.sphere.longitude_split_count,
                config.sphere.latitude_split_count,
            )?,
        );
        let ring_mesh = &config.ring_mesh;
        let ring = meshes.add(
            "ring",
            generate_circle_ring(
                ring_mesh.radius,
                ring_mesh.spread_length,
                ring_mesh.split_count,
                ring_mesh.spread_split_count,
            )?,
        );

        let mut scene = Scene::new();
        let mut ids = HashMap::new();
        for spec in &config.bodies {
            if ids.contains_key(&spec.name) {
                return Err(SolarSystemError::DuplicateBody(spec.name.clone()));
            }

            let mut body = CelestialBody::new(RenderPayload::new(
                sphere,
                shaders.body,
                textures(&spec.texture),
            ));
            body.set_scale(vec3(spec.scale, spec.scale, spec.scale));
            body.set_spin(spec.spin);
            body.set_orbit(spec.orbit);
            if let Some(ring_spec) = &spec.ring {
                body.set_ring(
                    RenderPayload::new(ring, shaders.ring, textures(&ring_spec.texture)),
                    ring_spec.scale,
                );
            }

            let id = scene.add_body(body);
            if let Some(parent_name) = &spec.parent {
                let parent = ids.get(parent_name).copied().ok_or_else(|| {
                    SolarSystemError::UnknownParent {
                        child: spec.name.clone(),
                        parent: parent_name.clone(),
                    }
                })?;
                scene.add_child(parent, id)?;
            }
            ids.insert(spec.name.clone(), id);
        }

        info!(
            "Built solar system: {} bodies, {} meshes",
            scene.len(),
            meshes.len()
        );

        Ok(Self {
            scene,
            meshes,
            base_transform: config.base_transform,
            ids,
        })
    }

    pub fn id(&self, name: &str) -> Option<BodyId> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.scene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::{DrawKind, DrawRecorder};
    use crate::gfx::scene::FrameContext;
    use cgmath::{InnerSpace, SquareMatrix};
    use std::time::Duration;

    fn shaders() -> SolarSystemShaders {
        SolarSystemShaders {
            body: ShaderHandle(1),
            ring: ShaderHandle(2),
        }
    }

    fn build_default() -> SolarSystem {
        let mut names: Vec<String> = Vec::new();
        SolarSystem::build(&SolarSystemConfig::default(), shaders(), |name| {
            names.push(name.to_string());
            TextureHandle(names.len() as u32)
        })
        .unwrap()
    }

    #[test]
    fn test_default_system_layout() {
        let system = build_default();
        assert_eq!(system.len(), 10);
        assert_eq!(system.meshes.len(), 2);

        let sun = system.id("sun").unwrap();
        let earth = system.id("earth").unwrap();
        let moon = system.id("moon").unwrap();
        assert_eq!(system.scene.roots().collect::<Vec<_>>(), vec![sun]);
        assert_eq!(system.scene.children(sun).unwrap().len(), 8);
        assert_eq!(system.scene.parent(moon).unwrap(), Some(earth));
        assert_eq!(system.scene.children(sun).unwrap()[0], system.id("uranus").unwrap());
    }

    #[test]
    fn test_only_saturn_has_a_ring() {
        let system = build_default();
        let saturn = system.id("saturn").unwrap();
        let ring = system.scene.body(saturn).unwrap().ring().unwrap();
        assert_eq!(ring.scale, vec2(1.0, 1.25));
        assert_eq!(ring.payload.shader, ShaderHandle(2));
        assert_eq!(ring.payload.mesh, system.meshes.handle("ring").unwrap());

        let mut scene = system.scene.clone();
        let mut recorder = DrawRecorder::new();
        scene.traverse(&FrameContext::default(), &mut recorder);
        assert_eq!(recorder.draw_count(), 11);
        assert_eq!(recorder.commands_of(DrawKind::Ring).count(), 1);
    }

    #[test]
    fn test_planets_start_at_their_orbit_radius() {
        let mut system = build_default();
        let frame = FrameContext::default().with_base_transform(system.base_transform);
        system.scene.traverse(&frame, &mut DrawRecorder::new());

        let sun_center = system.base_transform.w.truncate();
        let jupiter = system
            .scene
            .world_transform(system.id("jupiter").unwrap())
            .unwrap();
        let distance = (jupiter.w.truncate() - sun_center).magnitude();
        assert!((distance - 13.0).abs() < 1e-3, "distance {distance}");
    }

    #[test]
    fn test_moon_stays_close_to_earth() {
        let mut system = build_default();
        let earth = system.id("earth").unwrap();
        let moon = system.id("moon").unwrap();
        for _ in 0..30 {
            let frame = FrameContext::new(Duration::from_millis(250), Matrix4::identity())
                .with_base_transform(system.base_transform);
            system.scene.traverse(&frame, &mut DrawRecorder::new());

            let offset = system.scene.world_transform(moon).unwrap().w.truncate()
                - system.scene.world_transform(earth).unwrap().w.truncate();
            assert!((offset.magnitude() - 0.2).abs() < 1e-3);
        }
    }

    #[test]
    fn test_texture_names_are_resolved() {
        let mut names = Vec::new();
        SolarSystem::build(&SolarSystemConfig::default(), shaders(), |name| {
            names.push(name.to_string());
            TextureHandle(0)
        })
        .unwrap();

        assert_eq!(names.len(), 11);
        assert!(names.contains(&"2k_earth_daymap.jpg".to_string()));
        assert!(names.contains(&"2k_saturn_ring_alpha.png".to_string()));
    }

    #[test]
    fn test_rejects_bad_tables() {
        let mut config = SolarSystemConfig::default();
        config.bodies.push(BodySpec::new("moon", Some("earth"), 0.01));
        assert_eq!(
            SolarSystem::build(&config, shaders(), |_| TextureHandle(0)).err(),
            Some(SolarSystemError::DuplicateBody("moon".to_string()))
        );

        let mut config = SolarSystemConfig::default();
        config.bodies.push(BodySpec::new("phobos", Some("mars?"), 0.001));
        assert!(matches!(
            SolarSystem::build(&config, shaders(), |_| TextureHandle(0)),
            Err(SolarSystemError::UnknownParent { .. })
        ));

        let mut config = SolarSystemConfig::default();
        config.ring_mesh.spread_length = 5.0;
        assert!(matches!(
            SolarSystem::build(&config, shaders(), |_| TextureHandle(0)),
            Err(SolarSystemError::Geometry(_))
        ));
    }

    #[test]
    fn test_base_transform_is_identity_when_overridden() {
        let config = SolarSystemConfig {
            base_transform: Matrix4::identity(),
            ..Default::default()
        };
        let system = SolarSystem::build(&config, shaders(), |_| TextureHandle(0)).unwrap();
        assert_eq!(system.base_transform, Matrix4::identity());
    }
}
