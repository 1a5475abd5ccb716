use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, scale, and local origin of a simulated entity.
///
/// Rotation is intentionally absent: the engine has no rotational dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
    /// Local point subtracted from `position` when placing the entity's
    /// bounding box in the world.
    pub origin: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

/// Axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Half-open containment test: the top/left edges are inside, the
    /// bottom/right edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Overlapping region of two rectangles, `None` when they merely touch
    /// or are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.min.max(other.min);
        let max = self.max().min(other.max());
        if min.x < max.x && min.y < max.y {
            Some(Rect::new(min, max - min))
        } else {
            None
        }
    }
}

/// Per-tick contact summary for one body: which sides touched blocking tiles
/// and whether the body overlaps climbable tiles.
///
/// Written by the engine during tile resolution, read by gameplay state
/// machines ("am I grounded"). Rebuilt from scratch every tick; never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReport {
    pub below: bool,
    pub above: bool,
    pub left: bool,
    pub right: bool,
    pub on_ladder: bool,
    pub on_ladder_top: bool,
}
