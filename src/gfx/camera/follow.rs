use std::time::Duration;

use cgmath::{InnerSpace, Matrix4, Point3, Vector3, Zero};

use super::interpolation::lerp;

/// Rate at which the look-at point catches up with the target, per second
pub const DEFAULT_LOOK_RATE: f32 = 6.0;
/// Rate at which the eye catches up with the target, per second
pub const DEFAULT_MOVE_RATE: f32 = 2.0;

/// Camera that trails a moving target
///
/// Each step pulls the look-at point and the eye a fraction of the way
/// towards the target, so the view swings quickly and the position lags
/// behind. Fractions are `rate * dt`, capped at 1 so one long frame snaps to
/// the target instead of overshooting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFollow {
    pub eye: Vector3<f32>,
    pub look_at: Vector3<f32>,
    /// Added to the target before the eye chases it
    pub eye_offset: Vector3<f32>,
    pub look_rate: f32,
    pub move_rate: f32,
}

impl CameraFollow {
    pub fn new(eye: Vector3<f32>, look_at: Vector3<f32>) -> Self {
        Self {
            eye,
            look_at,
            eye_offset: Vector3::zero(),
            look_rate: DEFAULT_LOOK_RATE,
            move_rate: DEFAULT_MOVE_RATE,
        }
    }

    pub fn with_eye_offset(mut self, eye_offset: Vector3<f32>) -> Self {
        self.eye_offset = eye_offset;
        self
    }

    pub fn with_rates(mut self, look_rate: f32, move_rate: f32) -> Self {
        self.look_rate = look_rate;
        self.move_rate = move_rate;
        self
    }

    pub fn step(&mut self, target: Vector3<f32>, dt: Duration) {
        let dt = dt.as_secs_f32();
        self.look_at = lerp(self.look_at, target, follow_factor(self.look_rate, dt));
        self.eye = lerp(
            self.eye,
            target + self.eye_offset,
            follow_factor(self.move_rate, dt),
        );
    }

    /// Right-handed view matrix from the eye towards the look-at point
    ///
    /// Falls back to looking down -Z when both points coincide.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let direction = self.look_at - self.eye;
        let direction = if direction.magnitude2() > f32::EPSILON {
            direction.normalize()
        } else {
            -Vector3::unit_z()
        };
        let up = if direction.dot(Vector3::unit_y()).abs() > 0.999 {
            Vector3::unit_z()
        } else {
            Vector3::unit_y()
        };
        Matrix4::look_to_rh(Point3::new(self.eye.x, self.eye.y, self.eye.z), direction, up)
    }
}

fn follow_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{vec3, Vector4};
    use float_eq::assert_float_eq;

    #[test]
    fn test_step_moves_partially_towards_target() {
        let mut follow = CameraFollow::new(vec3(0.0, 0.0, 10.0), Vector3::zero());
        follow.step(vec3(1.0, 0.0, 0.0), Duration::from_millis(100));

        // look: 6 * 0.1 = 0.6 of the way, eye: 2 * 0.1 = 0.2 of the way.
        assert_float_eq!(follow.look_at.x, 0.6, abs <= 1e-5);
        assert_float_eq!(follow.eye.x, 0.2, abs <= 1e-5);
        assert_float_eq!(follow.eye.z, 8.0, abs <= 1e-5);
    }

    #[test]
    fn test_long_frame_snaps_without_overshoot() {
        let mut follow = CameraFollow::new(vec3(0.0, 0.0, 10.0), Vector3::zero())
            .with_eye_offset(vec3(0.0, 2.0, 5.0));
        let target = vec3(4.0, 0.0, 0.0);
        follow.step(target, Duration::from_secs(3));

        assert_eq!(follow.look_at, target);
        assert_eq!(follow.eye, target + vec3(0.0, 2.0, 5.0));
    }

    #[test]
    fn test_zero_dt_does_nothing() {
        let start = CameraFollow::new(vec3(1.0, 2.0, 3.0), vec3(0.0, 0.0, 0.0));
        let mut follow = start;
        follow.step(vec3(9.0, 9.0, 9.0), Duration::ZERO);
        assert_eq!(follow, start);
    }

    #[test]
    fn test_view_matrix_puts_look_at_in_front() {
        let follow = CameraFollow::new(vec3(0.0, 0.0, 5.0), Vector3::zero());
        let view = follow.view_matrix();
        let p = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_float_eq!(p.z, -5.0, abs <= 1e-5);

        let degenerate = CameraFollow::new(Vector3::zero(), Vector3::zero()).view_matrix();
        assert!(degenerate.x.x.is_finite());
    }
}
