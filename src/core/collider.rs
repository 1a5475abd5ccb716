use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, Transform};
use crate::utils::allocator::EntityId;

/// Supported collider geometries.
///
/// Every shape exposes a bounding-box size used uniformly for broad
/// rejection; the exact geometry only matters to the narrow-phase tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Aabb { size: Vec2 },
    Circle { radius: f32 },
}

impl ColliderShape {
    /// Box shape; negative size components are coerced to zero.
    pub fn aabb(size: Vec2) -> Self {
        Self::Aabb {
            size: size.max(Vec2::ZERO),
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius: radius.max(0.0),
        }
    }

    /// Size of the bounding box enclosing the shape.
    pub fn bounding_size(&self) -> Vec2 {
        match self {
            Self::Aabb { size } => *size,
            Self::Circle { radius } => Vec2::splat(radius * 2.0),
        }
    }
}

/// Collision shape attached to a body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collider {
    /// Handle of the owning body.
    pub body: EntityId,
    pub shape: ColliderShape,
    /// Top-left of the bounding box relative to the owner's transform origin.
    pub offset: Vec2,
    /// Triggers report overlap but never receive physical push-back.
    pub is_trigger: bool,
    /// Inactive colliders are ignored by tile and object resolution; the
    /// owning body still integrates freely.
    pub is_active: bool,
}

impl Collider {
    pub fn new(body: EntityId, shape: ColliderShape) -> Self {
        Self {
            body,
            shape,
            offset: Vec2::ZERO,
            is_trigger: false,
            is_active: true,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// World-space bounding box for the given owner transform: position minus
    /// origin, shifted by the local offset, size scaled per axis.
    pub fn world_aabb(&self, transform: &Transform) -> Rect {
        let min = transform.position - transform.origin + self.offset;
        let size = self.shape.bounding_size() * transform.scale;
        Rect::new(min, size)
    }
}
