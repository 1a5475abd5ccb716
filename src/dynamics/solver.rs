//! Minimum-translation push-out between a movable body and a solid one.

use glam::Vec2;

use crate::core::body::Body;
use crate::core::types::Rect;

/// Pushes `body` out of a solid body along the axis of minimum overlap,
/// away from the solid's center. Returns `false` without touching anything
/// when the boxes no longer overlap.
///
/// The velocity component on the resolved axis is zeroed only while the body
/// is still moving toward the solid, so a pair already separating keeps its
/// momentum.
///
/// Both rectangles are post-movement world boxes; a fast body can cross a
/// thin solid within one tick without ever overlapping it here. Solids are
/// static by convention, which keeps the approximation acceptable.
pub fn separate_from_solid(body: &mut Body, moving: Rect, solid: Rect) -> bool {
    let Some(overlap) = moving.intersection(&solid) else {
        return false;
    };

    let moving_center = moving.center();
    let solid_center = solid.center();

    if overlap.size.x < overlap.size.y {
        let push = if moving_center.x < solid_center.x {
            -overlap.size.x
        } else {
            overlap.size.x
        };
        body.transform.translate(Vec2::new(push, 0.0));
        if (push < 0.0 && body.velocity.x > 0.0) || (push > 0.0 && body.velocity.x < 0.0) {
            body.velocity.x = 0.0;
        }
    } else {
        let push = if moving_center.y < solid_center.y {
            -overlap.size.y
        } else {
            overlap.size.y
        };
        body.transform.translate(Vec2::new(0.0, push));
        if (push < 0.0 && body.velocity.y > 0.0) || (push > 0.0 && body.velocity.y < 0.0) {
            body.velocity.y = 0.0;
        }
    }

    true
}
