//! # Celestial Bodies
//!
//! A [`CelestialBody`] orbits its parent and spins about its own tilted
//! axis. Configuration ([`OrbitConfiguration`], [`SpinConfiguration`], scale,
//! ring) is set once before the frame loop starts; the only thing that changes
//! per frame is the [`KinematicState`] holding the two accumulated angles.
//!
//! Transform chain for one frame, with `P` the parent's returned transform:
//!
//! ```text
//! local  = P * tilt(inclination) * rotate_y(orbit_angle) * translate(radius, 0, 0) * tilt(axial_tilt)
//! render = local * rotate_y(spin_angle) * scale
//! ring   = local * scale(ring.x, 1, ring.y) * rotate_x(90 deg)
//! ```
//!
//! Children receive `local`, never `render`, so a parent's spin and scale do
//! not leak into its children's orbits.

use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cgmath::{vec3, Matrix4, Rad, Vector2, Vector3};

use crate::gfx::rendering::{BodyRenderer, DrawCommand, DrawKind, RenderPayload};

/// Revolution around the parent's origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitConfiguration {
    /// Distance from the parent's origin along the orbital plane's X axis
    pub radius: f32,
    /// Tilt of the orbital plane about Z, in radians
    pub inclination: f32,
    /// Signed angular speed in radians per second
    pub speed: f32,
}

/// Rotation about the body's own axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinConfiguration {
    /// Tilt of the spin axis about Z, in radians
    pub axial_tilt: f32,
    /// Signed angular speed in radians per second
    pub speed: f32,
}

/// Angles accumulated since the matching configuration was last set
///
/// The angles grow without bound; the trigonometry wraps them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    pub spin_angle: f32,
    pub orbit_angle: f32,
}

/// Flat decoration drawn at the body's orbital position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub payload: RenderPayload,
    /// Scale along the ring's X and Z axes
    pub scale: Vector2<f32>,
}

/// Transforms computed for one body in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransforms {
    /// Orbital frame; what children use as their parent transform
    pub local: Matrix4<f32>,
    /// `local` with spin and scale applied; what the body mesh is drawn with
    pub render: Matrix4<f32>,
    /// Ring transform, when the body has a ring
    pub ring: Option<Matrix4<f32>>,
}

impl BodyTransforms {
    /// World-space position of the body's center
    pub fn position(&self) -> Vector3<f32> {
        self.render.w.truncate()
    }
}

/// A node of the animated hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    payload: RenderPayload,
    scale: Vector3<f32>,
    orbit: OrbitConfiguration,
    spin: SpinConfiguration,
    state: KinematicState,
    ring: Option<Ring>,
}

impl CelestialBody {
    /// Create a body drawn with the given mesh/shader/texture triple
    ///
    /// The body starts at unit scale, without orbit, spin or ring.
    pub fn new(payload: RenderPayload) -> Self {
        Self {
            payload,
            scale: vec3(1.0, 1.0, 1.0),
            orbit: OrbitConfiguration::default(),
            spin: SpinConfiguration::default(),
            state: KinematicState::default(),
            ring: None,
        }
    }

    /// Replace the orbit configuration and restart the orbit at angle zero
    pub fn set_orbit(&mut self, orbit: OrbitConfiguration) {
        self.orbit = orbit;
        self.state.orbit_angle = 0.0;
    }

    /// Replace the spin configuration and restart the spin at angle zero
    pub fn set_spin(&mut self, spin: SpinConfiguration) {
        self.spin = spin;
        self.state.spin_angle = 0.0;
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.scale = scale;
    }

    /// Attach a ring drawn with its own payload, scaled in its XZ plane
    pub fn set_ring(&mut self, payload: RenderPayload, scale: Vector2<f32>) {
        self.ring = Some(Ring { payload, scale });
    }

    pub fn clear_ring(&mut self) {
        self.ring = None;
    }

    pub fn payload(&self) -> &RenderPayload {
        &self.payload
    }

    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    pub fn orbit(&self) -> &OrbitConfiguration {
        &self.orbit
    }

    pub fn spin(&self) -> &SpinConfiguration {
        &self.spin
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn ring(&self) -> Option<&Ring> {
        self.ring.as_ref()
    }

    /// Advance the body by `elapsed`, draw it and return the transform its
    /// children must use as their parent transform.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        world_to_clip: &Matrix4<f32>,
        parent_transform: &Matrix4<f32>,
        renderer: &mut dyn BodyRenderer,
    ) -> Matrix4<f32> {
        let transforms = self.step(elapsed, parent_transform);
        self.submit(&transforms, world_to_clip, renderer);
        transforms.local
    }

    /// Accumulate the angles for `elapsed` and compute this frame's transforms
    /// without drawing anything.
    pub fn step(&mut self, elapsed: Duration, parent_transform: &Matrix4<f32>) -> BodyTransforms {
        let elapsed_s = elapsed.as_secs_f32();
        self.state.spin_angle += self.spin.speed * elapsed_s;
        self.state.orbit_angle += self.orbit.speed * elapsed_s;

        self.transforms(parent_transform)
    }

    /// Transforms for the current angles
    pub fn transforms(&self, parent_transform: &Matrix4<f32>) -> BodyTransforms {
        let local = parent_transform
            * Matrix4::from_angle_z(Rad(self.orbit.inclination))
            * Matrix4::from_angle_y(Rad(self.state.orbit_angle))
            * Matrix4::from_translation(vec3(self.orbit.radius, 0.0, 0.0))
            * Matrix4::from_angle_z(Rad(self.spin.axial_tilt));

        let render = local
            * Matrix4::from_angle_y(Rad(self.state.spin_angle))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);

        let ring = self.ring.as_ref().map(|ring| {
            local
                * Matrix4::from_nonuniform_scale(ring.scale.x, 1.0, ring.scale.y)
                * Matrix4::from_angle_x(Rad(FRAC_PI_2))
        });

        BodyTransforms {
            local,
            render,
            ring,
        }
    }

    /// Issue the body's draw calls: the body mesh, then the ring if present
    pub fn submit(
        &self,
        transforms: &BodyTransforms,
        world_to_clip: &Matrix4<f32>,
        renderer: &mut dyn BodyRenderer,
    ) {
        renderer.draw(DrawCommand {
            kind: DrawKind::Body,
            payload: self.payload,
            world: transforms.render,
            world_to_clip: *world_to_clip,
        });

        if let (Some(ring), Some(world)) = (&self.ring, transforms.ring) {
            renderer.draw(DrawCommand {
                kind: DrawKind::Ring,
                payload: ring.payload,
                world,
                world_to_clip: *world_to_clip,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::{DrawRecorder, MeshHandle, ShaderHandle, TextureHandle};
    use cgmath::{vec2, InnerSpace, SquareMatrix, Vector4};
    use float_eq::assert_float_eq;
    use std::f32::consts::PI;

    fn payload(id: u32) -> RenderPayload {
        RenderPayload::new(MeshHandle(id), ShaderHandle(0), TextureHandle(id))
    }

    fn seconds(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn assert_vec_near(got: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (got - expected).magnitude() < 1e-4,
            "got {got:?}, expected {expected:?}"
        );
    }

    #[test]
    fn test_angles_accumulate() {
        let mut body = CelestialBody::new(payload(1));
        body.set_spin(SpinConfiguration {
            axial_tilt: 0.0,
            speed: 2.0,
        });
        body.set_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: 0.0,
            speed: -0.5,
        });

        body.step(seconds(0.25), &Matrix4::identity());
        body.step(seconds(0.25), &Matrix4::identity());

        assert_float_eq!(body.state().spin_angle, 1.0, abs <= 1e-6);
        assert_float_eq!(body.state().orbit_angle, -0.25, abs <= 1e-6);
    }

    #[test]
    fn test_reconfiguring_restarts_phase() {
        let mut body = CelestialBody::new(payload(1));
        body.set_spin(SpinConfiguration {
            axial_tilt: 0.1,
            speed: 1.0,
        });
        body.set_orbit(OrbitConfiguration {
            radius: 3.0,
            inclination: 0.0,
            speed: 1.0,
        });
        body.step(seconds(2.0), &Matrix4::identity());

        body.set_orbit(OrbitConfiguration {
            radius: 4.0,
            inclination: 0.0,
            speed: 2.0,
        });
        assert_eq!(body.state().orbit_angle, 0.0);
        assert_float_eq!(body.state().spin_angle, 2.0, abs <= 1e-6);

        body.set_spin(SpinConfiguration {
            axial_tilt: 0.2,
            speed: 3.0,
        });
        assert_eq!(body.state().spin_angle, 0.0);
        assert_eq!(body.spin().axial_tilt, 0.2);
    }

    #[test]
    fn test_half_orbit_after_one_second() {
        let mut body = CelestialBody::new(payload(1));
        body.set_orbit(OrbitConfiguration {
            radius: 2.0,
            inclination: 0.0,
            speed: PI,
        });

        let start = body.transforms(&Matrix4::identity()).local.w.truncate();
        assert_vec_near(start, vec3(2.0, 0.0, 0.0));

        let mut recorder = DrawRecorder::new();
        let local = body.advance(
            seconds(1.0),
            &Matrix4::identity(),
            &Matrix4::identity(),
            &mut recorder,
        );
        assert_vec_near(local.w.truncate(), vec3(-2.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_orbit_direction() {
        // Rotation about +Y carries +X towards -Z.
        let mut body = CelestialBody::new(payload(1));
        body.set_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: 0.0,
            speed: PI / 2.0,
        });
        let transforms = body.step(seconds(1.0), &Matrix4::identity());
        assert_vec_near(transforms.position(), vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_inclination_tilts_orbital_plane() {
        let mut body = CelestialBody::new(payload(1));
        body.set_orbit(OrbitConfiguration {
            radius: 1.0,
            inclination: PI / 2.0,
            speed: 0.0,
        });
        // The orbital X axis is rotated onto +Y.
        let transforms = body.step(seconds(1.0), &Matrix4::identity());
        assert_vec_near(transforms.position(), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_children_ignore_parent_scale_and_spin() {
        let child_orbit = OrbitConfiguration {
            radius: 0.75,
            inclination: 0.3,
            speed: 1.3,
        };

        let mut distances = Vec::new();
        for parent_scale in [0.1f32, 1.0, 25.0] {
            let mut parent = CelestialBody::new(payload(1));
            parent.set_scale(vec3(parent_scale, parent_scale * 2.0, parent_scale));
            parent.set_spin(SpinConfiguration {
                axial_tilt: 0.4,
                speed: 5.0,
            });
            parent.set_orbit(OrbitConfiguration {
                radius: 4.0,
                inclination: -0.1,
                speed: 0.7,
            });

            let mut child = CelestialBody::new(payload(2));
            child.set_orbit(child_orbit);

            let mut recorder = DrawRecorder::new();
            let parent_local = parent.advance(
                seconds(1.7),
                &Matrix4::identity(),
                &Matrix4::identity(),
                &mut recorder,
            );
            let child_local = child.advance(
                seconds(1.7),
                &Matrix4::identity(),
                &parent_local,
                &mut recorder,
            );

            let offset = child_local.w.truncate() - parent_local.w.truncate();
            distances.push(offset.magnitude());
        }

        for distance in distances {
            assert_float_eq!(distance, 0.75, abs <= 1e-4);
        }
    }

    #[test]
    fn test_render_transform_applies_spin_and_scale() {
        let mut body = CelestialBody::new(payload(1));
        body.set_scale(vec3(2.0, 3.0, 4.0));
        body.set_spin(SpinConfiguration {
            axial_tilt: 0.0,
            speed: PI / 2.0,
        });

        let transforms = body.step(seconds(1.0), &Matrix4::identity());
        // Local +X is scaled by 2, then spun a quarter turn onto -Z.
        let tip = transforms.render * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_vec_near(tip.truncate(), vec3(0.0, 0.0, -2.0));
        assert_eq!(transforms.local, Matrix4::identity());
    }

    #[test]
    fn test_ring_follows_orbit_but_not_spin() {
        let mut body = CelestialBody::new(payload(1));
        body.set_orbit(OrbitConfiguration {
            radius: 5.0,
            inclination: 0.0,
            speed: 0.0,
        });
        body.set_spin(SpinConfiguration {
            axial_tilt: 0.0,
            speed: 3.0,
        });
        body.set_ring(payload(7), vec2(1.0, 1.25));

        let mut recorder = DrawRecorder::new();
        body.advance(
            seconds(0.8),
            &Matrix4::identity(),
            &Matrix4::identity(),
            &mut recorder,
        );

        assert_eq!(recorder.draw_count(), 2);
        let ring = recorder.commands_of(DrawKind::Ring).next().unwrap();
        assert_eq!(ring.payload, payload(7));

        // A point on the ring mesh's +Y axis lands on the ring's +Z axis,
        // scaled by 1.25, around the orbital position; the spin is ignored.
        let point = ring.world * Vector4::new(0.0, 1.0, 0.0, 1.0);
        assert_vec_near(point.truncate(), vec3(5.0, 0.0, 1.25));
    }

    #[test]
    fn test_body_without_ring_draws_once() {
        let mut body = CelestialBody::new(payload(3));
        let camera = Matrix4::from_scale(0.5);
        let mut recorder = DrawRecorder::new();
        body.advance(seconds(0.1), &camera, &Matrix4::identity(), &mut recorder);

        assert_eq!(recorder.draw_count(), 1);
        assert_eq!(recorder.commands[0].kind, DrawKind::Body);
        assert_eq!(recorder.commands[0].world_to_clip, camera);
        assert_eq!(recorder.commands[0].payload, payload(3));
    }

    #[test]
    fn test_zero_elapsed_keeps_pose() {
        let mut body = CelestialBody::new(payload(1));
        body.set_orbit(OrbitConfiguration {
            radius: 2.0,
            inclination: 0.2,
            speed: 1.0,
        });
        let before = body.step(seconds(0.5), &Matrix4::identity());
        let after = body.step(Duration::ZERO, &Matrix4::identity());
        assert_eq!(before, after);
    }
}
