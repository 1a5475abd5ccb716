use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{ContactReport, Transform};
use crate::utils::allocator::EntityId;

/// Kinematic state of a simulated entity: transform, velocity, and the force
/// accumulated for the current tick.
///
/// A body on its own only integrates; collision response requires an attached
/// [`Collider`](crate::core::collider::Collider).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub transform: Transform,
    pub velocity: Vec2,
    force: Vec2,
    mass: f32,
    pub use_gravity: bool,
    pub enabled: bool,
    /// Immovable by convention; overlapping movable bodies are pushed out of
    /// this one instead of being reported as a collision pair.
    pub is_solid: bool,
    /// Handle of the attached collider, [`EntityId::NULL`] when absent.
    pub collider: EntityId,
    /// Contact flags produced by the most recent tick.
    pub contacts: ContactReport,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 1.0,
            use_gravity: true,
            enabled: true,
            is_solid: false,
            collider: EntityId::NULL,
            contacts: ContactReport::default(),
        }
    }
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: Transform) -> Self {
        Self {
            transform,
            ..Self::default()
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass; non-positive values are coerced to 1 so the integrator
    /// never divides by zero.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = if mass > 0.0 { mass } else { 1.0 };
    }

    /// Accumulates a force for this tick. Ignored while the body is disabled.
    pub fn add_force(&mut self, force: Vec2) {
        if self.enabled {
            self.force += force;
        }
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_is_coerced_positive() {
        let mut body = Body::new();
        body.set_mass(-3.0);
        assert_eq!(body.mass(), 1.0);
        body.set_mass(0.0);
        assert_eq!(body.mass(), 1.0);
        body.set_mass(2.5);
        assert_eq!(body.mass(), 2.5);
    }

    #[test]
    fn disabled_body_ignores_forces() {
        let mut body = Body::new();
        body.enabled = false;
        body.add_force(Vec2::new(10.0, 0.0));
        assert_eq!(body.force(), Vec2::ZERO);
    }
}
