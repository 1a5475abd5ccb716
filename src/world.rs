use glam::Vec2;
use log::{trace, warn};

use crate::collision::narrowphase;
use crate::collision::tilemap::{sample_triggers, sweep_aabb};
use crate::config::{DEFAULT_GRAVITY, DEFAULT_MAX_SPEED};
use crate::core::body::Body;
use crate::core::collider::Collider;
use crate::core::tilemap::{TileKind, TileLayer};
use crate::core::types::{ContactReport, Rect};
use crate::dynamics::{clamp_velocity, integrate_forces, separate_from_solid};
use crate::utils::allocator::{Arena, EntityId};
use crate::utils::logging::ScopedTimer;

/// Central simulation container owning every registered body, collider, and
/// tile layer, stepped once per tick by the owning game loop.
///
/// A tick integrates forces, sweeps bodies through the tile layers, clamps
/// to the world bounds, and finally scans all pairs, pushing movable bodies
/// out of solid ones and publishing the remaining overlaps as collision
/// pairs. The pair and trigger outputs are snapshots valid until the next
/// `update` call.
///
/// Single-threaded and not reentrant: register and unregister outside of
/// `update` only.
pub struct PhysicsWorld {
    bodies: Arena<Body>,
    colliders: Arena<Collider>,
    layers: Arena<TileLayer>,
    gravity: Vec2,
    max_speed: Vec2,
    world_bounds: Option<Rect>,
    collision_pairs: Vec<(EntityId, EntityId)>,
    tile_events: Vec<(EntityId, TileKind)>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            bodies: Arena::new(),
            colliders: Arena::new(),
            layers: Arena::new(),
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            max_speed: Vec2::from_array(DEFAULT_MAX_SPEED),
            world_bounds: None,
            collision_pairs: Vec::new(),
            tile_events: Vec::new(),
        }
    }

    pub fn register_body(&mut self, body: Body) -> EntityId {
        let id = self.bodies.insert(body);
        trace!("body {id:?} registered");
        id
    }

    pub fn unregister_body(&mut self, id: EntityId) -> Option<Body> {
        trace!("body {id:?} unregistered");
        self.bodies.remove(id)
    }

    /// Registers a collider and links it to its owning body.
    ///
    /// A collider pointing at an unknown body is still stored, but nothing
    /// will move or scan it until the handle resolves.
    pub fn register_collider(&mut self, collider: Collider) -> EntityId {
        let body_id = collider.body;
        let id = self.colliders.insert(collider);
        match self.bodies.get_mut(body_id) {
            Some(body) => body.collider = id,
            None => log::error!("collider {id:?} registered for unknown body {body_id:?}"),
        }
        trace!("collider {id:?} registered");
        id
    }

    pub fn unregister_collider(&mut self, id: EntityId) -> Option<Collider> {
        let collider = self.colliders.remove(id)?;
        if let Some(body) = self.bodies.get_mut(collider.body) {
            body.collider = EntityId::NULL;
        }
        trace!("collider {id:?} unregistered");
        Some(collider)
    }

    pub fn register_tile_layer(&mut self, layer: TileLayer) -> EntityId {
        let id = self.layers.insert(layer);
        trace!("tile layer {id:?} registered");
        id
    }

    pub fn unregister_tile_layer(&mut self, id: EntityId) -> Option<TileLayer> {
        trace!("tile layer {id:?} unregistered");
        self.layers.remove(id)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn collider(&self, id: EntityId) -> Option<&Collider> {
        self.colliders.get(id)
    }

    pub fn collider_mut(&mut self, id: EntityId) -> Option<&mut Collider> {
        self.colliders.get_mut(id)
    }

    pub fn tile_layer(&self, id: EntityId) -> Option<&TileLayer> {
        self.layers.get(id)
    }

    pub fn tile_layer_mut(&mut self, id: EntityId) -> Option<&mut TileLayer> {
        self.layers.get_mut(id)
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_max_speed(&mut self, max_speed: Vec2) {
        self.max_speed = max_speed;
    }

    pub fn max_speed(&self) -> Vec2 {
        self.max_speed
    }

    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        self.world_bounds = bounds;
    }

    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Unordered body pairs that overlapped in the most recent tick, solid
    /// push-outs excluded. Cleared at the start of every `update`.
    pub fn collision_pairs(&self) -> &[(EntityId, EntityId)] {
        &self.collision_pairs
    }

    /// Gameplay-significant tiles bodies overlapped in the most recent tick.
    /// Same lifetime as [`collision_pairs`](Self::collision_pairs).
    pub fn tile_trigger_events(&self) -> &[(EntityId, TileKind)] {
        &self.tile_events
    }

    /// Advances the simulation by `dt` seconds. Negative deltas are ignored.
    pub fn update(&mut self, dt: f32) {
        if dt < 0.0 {
            warn!("ignoring update with negative dt {dt}");
            return;
        }
        let _tick = ScopedTimer::new("physics::update");

        self.collision_pairs.clear();
        self.tile_events.clear();

        self.integrate(dt);
        self.move_bodies(dt);
        self.apply_world_bounds();
        self.scan_pairs();
    }

    fn integrate(&mut self, dt: f32) {
        let _timer = ScopedTimer::new("physics::integrate");
        let gravity = self.gravity;
        for (_, body) in self.bodies.iter_mut() {
            if !body.enabled {
                continue;
            }
            integrate_forces(body, gravity, dt);
        }
    }

    fn move_bodies(&mut self, dt: f32) {
        let _timer = ScopedTimer::new("physics::tiles");

        let layers: Vec<&TileLayer> = self
            .layers
            .iter()
            .filter_map(|(id, layer)| {
                let ts = layer.tile_size();
                if ts.x <= 0 || ts.y <= 0 {
                    warn!(
                        "tile layer {id:?} has non-positive tile size {}x{}; skipped this tick",
                        ts.x, ts.y
                    );
                    None
                } else {
                    Some(layer)
                }
            })
            .collect();

        let mut kinds = Vec::new();
        for (body_id, body) in self.bodies.iter_mut() {
            if !body.enabled {
                continue;
            }

            let mut resolved = false;
            if let Some(collider) = self.colliders.get(body.collider) {
                if collider.is_active && !collider.is_trigger && !layers.is_empty() {
                    let aabb = collider.world_aabb(&body.transform);
                    let sweep = sweep_aabb(aabb, body.velocity, dt, &layers);
                    body.transform.translate(sweep.position - aabb.min);
                    body.velocity = sweep.velocity;

                    let mut contacts = sweep.contacts;
                    kinds.clear();
                    sample_triggers(
                        Rect::new(sweep.position, aabb.size),
                        &layers,
                        &mut contacts,
                        &mut kinds,
                    );
                    for kind in kinds.drain(..) {
                        let event = (body_id, kind);
                        if !self.tile_events.contains(&event) {
                            self.tile_events.push(event);
                        }
                    }
                    body.contacts = contacts;
                    resolved = true;
                }
            } else if !body.collider.is_null() {
                trace!("body {body_id:?} references a stale collider handle; skipping");
            }

            if !resolved {
                // No tile interaction: plain position integration.
                body.contacts = ContactReport::default();
                let ds = body.velocity * dt;
                body.transform.translate(ds);
            }

            body.velocity = clamp_velocity(body.velocity, self.max_speed);
        }
    }

    fn apply_world_bounds(&mut self) {
        let Some(bounds) = self.world_bounds else {
            return;
        };
        let _timer = ScopedTimer::new("physics::bounds");

        for (_, body) in self.bodies.iter_mut() {
            if !body.enabled {
                continue;
            }
            let Some(collider) = self.colliders.get(body.collider) else {
                continue;
            };
            if !collider.is_active {
                continue;
            }
            let aabb = collider.world_aabb(&body.transform);

            let mut delta = Vec2::ZERO;
            if aabb.min.x < bounds.min.x {
                delta.x = bounds.min.x - aabb.min.x;
                body.velocity.x = 0.0;
            } else if aabb.max().x > bounds.max().x {
                delta.x = bounds.max().x - aabb.max().x;
                body.velocity.x = 0.0;
            }
            if aabb.min.y < bounds.min.y {
                delta.y = bounds.min.y - aabb.min.y;
                body.velocity.y = 0.0;
            }
            // The bottom edge stays open so bodies can drop out of the world.

            if delta != Vec2::ZERO {
                body.transform.translate(delta);
            }
        }
    }

    fn scan_pairs(&mut self) {
        let _timer = ScopedTimer::new("physics::pairs");

        let candidates: Vec<(EntityId, EntityId)> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.enabled)
            .filter_map(|(id, body)| {
                let collider = self.colliders.get(body.collider)?;
                collider.is_active.then_some((id, body.collider))
            })
            .collect();

        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let (a_id, a_collider_id) = candidates[i];
                let (b_id, b_collider_id) = candidates[j];

                let (Some(body_a), Some(body_b)) = (self.bodies.get(a_id), self.bodies.get(b_id))
                else {
                    trace!("stale body handle in pair scan; skipping");
                    continue;
                };
                let (Some(collider_a), Some(collider_b)) = (
                    self.colliders.get(a_collider_id),
                    self.colliders.get(b_collider_id),
                ) else {
                    trace!("stale collider handle in pair scan; skipping");
                    continue;
                };

                let rect_a = collider_a.world_aabb(&body_a.transform);
                let rect_b = collider_b.world_aabb(&body_b.transform);
                if !narrowphase::shapes_overlap(&collider_a.shape, &rect_a, &collider_b.shape, &rect_b)
                {
                    continue;
                }

                let solid_pair = body_a.is_solid != body_b.is_solid
                    && !collider_a.is_trigger
                    && !collider_b.is_trigger;
                if solid_pair {
                    let (mover_id, mover_rect, solid_rect) = if body_a.is_solid {
                        (b_id, rect_b, rect_a)
                    } else {
                        (a_id, rect_a, rect_b)
                    };
                    if let Some(mover) = self.bodies.get_mut(mover_id) {
                        separate_from_solid(mover, mover_rect, solid_rect);
                    }
                } else {
                    self.collision_pairs.push((a_id, b_id));
                }
            }
        }
    }
}
