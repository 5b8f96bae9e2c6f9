use glam::Vec3;

// ---------------------------------------------------------------------------
// Lights — three colored directional lights orbiting on fixed schedules
// ---------------------------------------------------------------------------

/// A directional light: unit direction plus an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub direction: Vec3,
    pub color: Vec3,
}

impl Light {
    fn new(direction: Vec3, color: Vec3) -> Self {
        Self {
            direction: direction.normalize(),
            color,
        }
    }
}

/// The scene's light rig at `time` seconds.
///
/// The red light circles in the XY plane once per 2π seconds; the green and
/// blue lights swing on slower sine schedules. Directions are normalized.
pub fn lights_at(time: f32) -> [Light; 3] {
    [
        Light::new(
            Vec3::new(time.cos(), time.sin(), 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ),
        Light::new(
            Vec3::new(5.0 * (0.2 * time).sin(), 3.0, -0.3),
            Vec3::new(0.0, 1.0, 0.0),
        ),
        Light::new(
            Vec3::new(0.0, (0.217 * time).sin(), -(0.217 * time).cos()),
            Vec3::new(0.0, 0.0, 1.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(got: Vec3, want: Vec3) {
        assert!((got - want).length() < EPS, "got {got:?}, want {want:?}");
    }

    #[test]
    fn red_light_at_zero_points_diagonally() {
        // normalize(cos 0, sin 0, 1) = normalize(1, 0, 1)
        let inv_sqrt2 = 1.0 / 2.0f32.sqrt();
        let l = lights_at(0.0)[0];
        assert_vec3_eq(l.direction, Vec3::new(inv_sqrt2, 0.0, inv_sqrt2));
        assert_vec3_eq(l.color, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn red_light_rotates_in_xy_plane() {
        // At t = π/2 the XY component has swung from +x to +y.
        let l = lights_at(std::f32::consts::FRAC_PI_2)[0];
        let inv_sqrt2 = 1.0 / 2.0f32.sqrt();
        assert_vec3_eq(l.direction, Vec3::new(0.0, inv_sqrt2, inv_sqrt2));
    }

    #[test]
    fn green_light_at_zero() {
        // normalize(0, 3, -0.3); |.| = sqrt(9.09)
        let len = 9.09f32.sqrt();
        let l = lights_at(0.0)[1];
        assert_vec3_eq(l.direction, Vec3::new(0.0, 3.0 / len, -0.3 / len));
        assert_vec3_eq(l.color, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn blue_light_at_zero_points_backward() {
        // normalize(0, sin 0, -cos 0) = (0, 0, -1)
        let l = lights_at(0.0)[2];
        assert_vec3_eq(l.direction, Vec3::new(0.0, 0.0, -1.0));
        assert_vec3_eq(l.color, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn directions_stay_normalized_over_time() {
        for i in 0..50 {
            let t = i as f32 * 0.73;
            for l in lights_at(t) {
                assert!(
                    (l.direction.length() - 1.0).abs() < EPS,
                    "t={t}: |d|={}",
                    l.direction.length()
                );
            }
        }
    }
}
