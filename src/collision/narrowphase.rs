//! Narrow-phase overlap predicates between collider shapes.
//!
//! All tests take the shapes' world bounding boxes as computed by
//! [`Collider::world_aabb`](crate::core::collider::Collider::world_aabb); a
//! circle's center and radius derive from its box (radius = half the scaled
//! width, matching the bounding-size convention).

use glam::Vec2;

use crate::core::collider::ColliderShape;
use crate::core::types::Rect;

/// Tests two shapes for overlap given their world bounding boxes.
///
/// The rectangle intersection doubles as the broad rejection; box/box pairs
/// are fully decided by it, circles get an exact secondary test.
pub fn shapes_overlap(a: &ColliderShape, a_rect: &Rect, b: &ColliderShape, b_rect: &Rect) -> bool {
    if a_rect.intersection(b_rect).is_none() {
        return false;
    }

    match (a, b) {
        (ColliderShape::Aabb { .. }, ColliderShape::Aabb { .. }) => true,
        (ColliderShape::Circle { .. }, ColliderShape::Circle { .. }) => circles_overlap(
            a_rect.center(),
            circle_radius(a_rect),
            b_rect.center(),
            circle_radius(b_rect),
        ),
        (ColliderShape::Aabb { .. }, ColliderShape::Circle { .. }) => {
            aabb_circle_overlap(a_rect, b_rect)
        }
        (ColliderShape::Circle { .. }, ColliderShape::Aabb { .. }) => {
            aabb_circle_overlap(b_rect, a_rect)
        }
    }
}

/// Circle/circle overlap by squared center distance against squared radius
/// sum.
pub fn circles_overlap(a_center: Vec2, a_radius: f32, b_center: Vec2, b_radius: f32) -> bool {
    let radius_sum = a_radius + b_radius;
    (a_center - b_center).length_squared() < radius_sum * radius_sum
}

/// Point-in-circle test by squared distance.
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    (point - center).length_squared() < radius * radius
}

fn circle_radius(rect: &Rect) -> f32 {
    0.5 * rect.size.x
}

fn aabb_circle_overlap(rect: &Rect, circle_rect: &Rect) -> bool {
    let center = circle_rect.center();
    if rect.contains(center) {
        return true;
    }
    // Nearest point of the box to the circle center decides the overlap.
    let nearest = center.clamp(rect.min, rect.max());
    point_in_circle(nearest, center, circle_radius(circle_rect))
}
