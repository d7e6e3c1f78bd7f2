//! Point interpolation for camera paths and animation curves.

use cgmath::VectorSpace;

/// Linear interpolation `(1 - t) * p0 + t * p1`
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
#[inline]
pub fn lerp<V>(p0: V, p1: V, t: f32) -> V
where
    V: VectorSpace<Scalar = f32>,
{
    p0 * (1.0 - t) + p1 * t
}

/// Point on the Catmull-Rom segment between `p1` and `p2`
///
/// `p0` and `p3` only shape the tangents at the segment ends, scaled by
/// `tension` (0.5 gives the classic uniform spline). The curve passes through
/// `p1` at `t = 0` and `p2` at `t = 1`.
pub fn catmull_rom<V>(p0: V, p1: V, p2: V, p3: V, tension: f32, t: f32) -> V
where
    V: VectorSpace<Scalar = f32>,
{
    let t2 = t * t;
    let t3 = t2 * t;
    let s = tension;

    let w0 = -s * t + 2.0 * s * t2 - s * t3;
    let w1 = 1.0 + (s - 3.0) * t2 + (2.0 - s) * t3;
    let w2 = s * t + (3.0 - 2.0 * s) * t2 + (s - 2.0) * t3;
    let w3 = -s * t2 + s * t3;

    p0 * w0 + p1 * w1 + p2 * w2 + p3 * w3
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{vec2, vec3, InnerSpace, Vector3};
    use float_eq::assert_float_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_point(rng: &mut StdRng) -> Vector3<f32> {
        vec3(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        )
    }

    fn assert_near(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_lerp_hits_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let p0 = random_point(&mut rng);
            let p1 = random_point(&mut rng);
            assert_near(lerp(p0, p1, 0.0), p0);
            assert_near(lerp(p0, p1, 1.0), p1);
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        let p0 = vec3(0.0, 0.0, 0.0);
        let p1 = vec3(1.0, 2.0, 0.0);
        assert_near(lerp(p0, p1, 0.5), vec3(0.5, 1.0, 0.0));
        assert_near(lerp(p0, p1, 2.0), vec3(2.0, 4.0, 0.0));
        assert_near(lerp(p0, p1, -1.0), vec3(-1.0, -2.0, 0.0));
    }

    #[test]
    fn test_lerp_works_in_2d() {
        let mid = lerp(vec2(1.0f32, 1.0), vec2(3.0, -1.0), 0.25);
        assert_float_eq!(mid.x, 1.5, abs <= 1e-6);
        assert_float_eq!(mid.y, 0.5, abs <= 1e-6);
    }

    #[test]
    fn test_catmull_rom_hits_inner_points() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let [p0, p1, p2, p3] = std::array::from_fn(|_| random_point(&mut rng));
            let tension = rng.random_range(0.0..1.0);
            assert_near(catmull_rom(p0, p1, p2, p3, tension, 0.0), p1);
            assert_near(catmull_rom(p0, p1, p2, p3, tension, 1.0), p2);
        }
    }

    #[test]
    fn test_catmull_rom_on_a_line_stays_on_the_line() {
        let points = [0.0f32, 1.0, 2.0, 3.0].map(|x| vec3(x, 0.0, 0.0));
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let p = catmull_rom(points[0], points[1], points[2], points[3], 0.5, t);
            assert_float_eq!(p.x, 1.0 + t, abs <= 1e-5);
            assert_float_eq!(p.y, 0.0, abs <= 1e-6);
        }
    }

    #[test]
    fn test_zero_tension_ignores_outer_points() {
        let p1 = vec3(0.0, 0.0, 0.0);
        let p2 = vec3(1.0, 1.0, 1.0);
        let a = catmull_rom(vec3(-5.0, 3.0, 0.0), p1, p2, vec3(9.0, 0.0, 2.0), 0.0, 0.3);
        let b = catmull_rom(vec3(0.0, 0.0, 0.0), p1, p2, vec3(0.0, 0.0, 0.0), 0.0, 0.3);
        assert_near(a, b);
    }
}
