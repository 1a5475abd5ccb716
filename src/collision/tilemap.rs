//! Axis-separated sweep of a moving bounding box against tile layers.
//!
//! The X axis resolves before the Y axis, each against every registered
//! layer. Solid tiles snap the box flush and zero the blocked velocity
//! component; slope tiles carry the box along their surface; one-way tiles
//! stop descent only. Only the destination cells of a step are sampled, so
//! very large displacements can tunnel — acceptable at tile-sized speeds.

use glam::{IVec2, Vec2};

use crate::config::EDGE_TOLERANCE;
use crate::core::tilemap::{TileKind, TileLayer};
use crate::core::types::{ContactReport, Rect};

/// Result of sweeping one bounding box for a tick.
#[derive(Debug, Clone, Copy)]
pub struct TileSweep {
    /// Resolved top-left corner of the box.
    pub position: Vec2,
    /// Input velocity with the blocked components zeroed.
    pub velocity: Vec2,
    pub contacts: ContactReport,
}

fn blocks_descent(kind: TileKind) -> bool {
    matches!(kind, TileKind::Solid | TileKind::Unisolid)
}

/// Sweeps `aabb` by `velocity * dt` against every layer and reports the
/// resolved position, adjusted velocity, and contact flags.
///
/// Layers with non-positive tile dimensions are skipped; the caller is
/// expected to have warned about them already.
pub fn sweep_aabb(aabb: Rect, velocity: Vec2, dt: f32, layers: &[&TileLayer]) -> TileSweep {
    let size = aabb.size;
    let mut pos = aabb.min;
    let mut vel = velocity;
    let mut contacts = ContactReport::default();
    let ds = velocity * dt;

    // X axis. Ramps adjust Y here as well: walking into a slope lifts the
    // box onto its surface instead of stopping it.
    if ds.x > 0.0 {
        let probe_x = pos.x + size.x + ds.x;
        let mut new_x = pos.x + ds.x;
        for layer in layers {
            let ts = layer.tile_size();
            if ts.x <= 0 || ts.y <= 0 {
                continue;
            }
            let tile = ts.as_vec2();
            let off = layer.offset();
            let tx = ((probe_x - off.x) / tile.x).floor() as i32;
            let row_top = ((pos.y - off.y) / tile.y).floor() as i32;
            let row_bottom = ((pos.y + size.y - EDGE_TOLERANCE - off.y) / tile.y).floor() as i32;
            let kind_top = layer.kind_at(IVec2::new(tx, row_top));
            let kind_bottom = layer.kind_at(IVec2::new(tx, row_bottom));

            if kind_top == TileKind::Solid || kind_bottom == TileKind::Solid {
                // Right edge flush against the tile's left edge.
                let limit = off.x + tx as f32 * tile.x - size.x;
                new_x = new_x.min(limit);
                vel.x = 0.0;
                contacts.right = true;
            } else if let Some(profile) = kind_bottom.slope() {
                let frac = (probe_x - off.x - tx as f32 * tile.x) / tile.x;
                let ground =
                    off.y + (row_bottom + 1) as f32 * tile.y - profile.height_at(frac, tile.y);
                if pos.y + size.y > ground {
                    pos.y = ground - size.y;
                }
            }
        }
        pos.x = new_x;
    } else if ds.x < 0.0 {
        let probe_x = pos.x + ds.x;
        let mut new_x = pos.x + ds.x;
        for layer in layers {
            let ts = layer.tile_size();
            if ts.x <= 0 || ts.y <= 0 {
                continue;
            }
            let tile = ts.as_vec2();
            let off = layer.offset();
            let tx = ((probe_x - off.x) / tile.x).floor() as i32;
            let row_top = ((pos.y - off.y) / tile.y).floor() as i32;
            let row_bottom = ((pos.y + size.y - EDGE_TOLERANCE - off.y) / tile.y).floor() as i32;
            let kind_top = layer.kind_at(IVec2::new(tx, row_top));
            let kind_bottom = layer.kind_at(IVec2::new(tx, row_bottom));

            if kind_top == TileKind::Solid || kind_bottom == TileKind::Solid {
                // Left edge flush against the tile's right edge.
                let limit = off.x + (tx + 1) as f32 * tile.x;
                new_x = new_x.max(limit);
                vel.x = 0.0;
                contacts.left = true;
            } else if let Some(profile) = kind_bottom.slope() {
                let frac = (probe_x - off.x - tx as f32 * tile.x) / tile.x;
                let ground =
                    off.y + (row_bottom + 1) as f32 * tile.y - profile.height_at(frac, tile.y);
                if pos.y + size.y > ground {
                    pos.y = ground - size.y;
                }
            }
        }
        pos.x = new_x;
    }

    // Y axis, with the X result already applied.
    if ds.y > 0.0 {
        let probe_y = pos.y + size.y + ds.y;
        let mut new_y = pos.y + ds.y;
        for layer in layers {
            let ts = layer.tile_size();
            if ts.x <= 0 || ts.y <= 0 {
                continue;
            }
            let tile = ts.as_vec2();
            let off = layer.offset();
            let ty = ((probe_y - off.y) / tile.y).floor() as i32;
            let col_left = ((pos.x - off.x) / tile.x).floor() as i32;
            let col_right = ((pos.x + size.x - EDGE_TOLERANCE - off.x) / tile.x).floor() as i32;
            let kind_left = layer.kind_at(IVec2::new(col_left, ty));
            let kind_right = layer.kind_at(IVec2::new(col_right, ty));

            if blocks_descent(kind_left) || blocks_descent(kind_right) {
                // Bottom edge flush against the tile's top edge.
                let limit = off.y + ty as f32 * tile.y - size.y;
                new_y = new_y.min(limit);
                vel.y = 0.0;
                contacts.below = true;
            } else {
                // The taller ramp surface under either corner wins.
                let frac_left = (pos.x - off.x - col_left as f32 * tile.x) / tile.x;
                let frac_right =
                    (pos.x + size.x - EDGE_TOLERANCE - off.x - col_right as f32 * tile.x) / tile.x;
                let height_left = kind_left
                    .slope()
                    .map(|profile| profile.height_at(frac_left, tile.y))
                    .unwrap_or(0.0);
                let height_right = kind_right
                    .slope()
                    .map(|profile| profile.height_at(frac_right, tile.y))
                    .unwrap_or(0.0);
                let height = height_left.max(height_right);
                if height > 0.0 {
                    let ground = off.y + (ty + 1) as f32 * tile.y - height;
                    if probe_y > ground {
                        new_y = new_y.min(ground - size.y);
                        vel.y = 0.0;
                        contacts.below = true;
                    }
                }
            }
        }
        pos.y = new_y;
    } else if ds.y < 0.0 {
        let probe_y = pos.y + ds.y;
        let mut new_y = pos.y + ds.y;
        for layer in layers {
            let ts = layer.tile_size();
            if ts.x <= 0 || ts.y <= 0 {
                continue;
            }
            let tile = ts.as_vec2();
            let off = layer.offset();
            let ty = ((probe_y - off.y) / tile.y).floor() as i32;
            let col_left = ((pos.x - off.x) / tile.x).floor() as i32;
            let col_right = ((pos.x + size.x - EDGE_TOLERANCE - off.x) / tile.x).floor() as i32;
            let kind_left = layer.kind_at(IVec2::new(col_left, ty));
            let kind_right = layer.kind_at(IVec2::new(col_right, ty));

            // One-way platforms never block ascent.
            if kind_left == TileKind::Solid || kind_right == TileKind::Solid {
                // Top edge flush against the tile's bottom edge.
                let limit = off.y + (ty + 1) as f32 * tile.y;
                new_y = new_y.max(limit);
                vel.y = 0.0;
                contacts.above = true;
            }
        }
        pos.y = new_y;
    }

    TileSweep {
        position: pos,
        velocity: vel,
        contacts,
    }
}

/// Samples gameplay-significant tiles under the resolved box: climbing flags
/// plus the trigger kinds (hazard, ladder) the box center overlaps.
///
/// `triggered` collects each kind at most once per call.
pub fn sample_triggers(
    aabb: Rect,
    layers: &[&TileLayer],
    contacts: &mut ContactReport,
    triggered: &mut Vec<TileKind>,
) {
    let center = aabb.center();
    for layer in layers {
        match layer.kind_at_world(center) {
            TileKind::Ladder => {
                contacts.on_ladder = true;
                if !triggered.contains(&TileKind::Ladder) {
                    triggered.push(TileKind::Ladder);
                }
            }
            TileKind::Hazard => {
                if !triggered.contains(&TileKind::Hazard) {
                    triggered.push(TileKind::Hazard);
                }
            }
            _ => {}
        }
    }

    // Standing on a ladder's top: the feet sample a ladder tile while the
    // body itself is clear of it.
    if !contacts.on_ladder {
        let feet = Vec2::new(center.x, aabb.max().y + EDGE_TOLERANCE);
        for layer in layers {
            if layer.kind_at_world(feet) == TileKind::Ladder {
                contacts.on_ladder_top = true;
                break;
            }
        }
    }
}
