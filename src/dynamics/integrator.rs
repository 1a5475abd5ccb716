//! Force integration and velocity limiting.

use glam::Vec2;

use crate::core::body::Body;

/// Accumulates gravity (when enabled) and converts this tick's forces into a
/// velocity change, then clears the accumulator.
///
/// Mass is coerced positive at the body level, so the division is safe.
pub fn integrate_forces(body: &mut Body, gravity: Vec2, dt: f32) {
    if body.use_gravity {
        let weight = gravity * body.mass();
        body.add_force(weight);
    }
    let acceleration = body.force() / body.mass();
    body.velocity += acceleration * dt;
    body.clear_force();
}

/// Clamps each velocity component to the per-axis maximum magnitude.
pub fn clamp_velocity(velocity: Vec2, max_speed: Vec2) -> Vec2 {
    Vec2::new(
        velocity.x.clamp(-max_speed.x, max_speed.x),
        velocity.y.clamp(-max_speed.y, max_speed.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gravity_cancels_mass() {
        // force = gravity * mass and accel = force / mass, so one tick adds
        // exactly gravity * dt no matter the mass.
        let gravity = Vec2::new(0.0, 980.0);
        for mass in [0.5, 1.0, 80.0] {
            let mut body = Body::new();
            body.set_mass(mass);
            integrate_forces(&mut body, gravity, 0.25);
            assert_relative_eq!(body.velocity.y, 980.0 * 0.25);
            assert_relative_eq!(body.velocity.x, 0.0);
        }
    }

    #[test]
    fn forces_are_cleared_after_integration() {
        let mut body = Body::new();
        body.use_gravity = false;
        body.add_force(Vec2::new(10.0, 0.0));
        integrate_forces(&mut body, Vec2::ZERO, 1.0);
        assert_relative_eq!(body.velocity.x, 10.0);
        assert_eq!(body.force(), Vec2::ZERO);

        // Next tick starts from a clean accumulator.
        integrate_forces(&mut body, Vec2::ZERO, 1.0);
        assert_relative_eq!(body.velocity.x, 10.0);
    }

    #[test]
    fn clamp_limits_each_axis_independently() {
        let max = Vec2::new(500.0, 500.0);
        let clamped = clamp_velocity(Vec2::new(900.0, -120.0), max);
        assert_relative_eq!(clamped.x, 500.0);
        assert_relative_eq!(clamped.y, -120.0);

        let clamped = clamp_velocity(Vec2::new(-30.0, -700.0), max);
        assert_relative_eq!(clamped.x, -30.0);
        assert_relative_eq!(clamped.y, -500.0);
    }
}
