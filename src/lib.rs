//! Gravel – tile-grid 2D platformer physics for Rust.
//!
//! The crate simulates simplified 2D kinematics for game entities and
//! resolves them, once per tick, against static tile layers (solid, one-way,
//! six slope profiles, ladders, hazards) and against each other. Rendering,
//! input, and level loading are external collaborators: the engine consumes
//! bodies and already-parsed tile data, and publishes collision pairs, tile
//! trigger events, and per-body contact reports for gameplay code to
//! interpret.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::{IVec2, Vec2};

pub use crate::collision::narrowphase;
pub use crate::core::{
    body::Body,
    collider::{Collider, ColliderShape},
    tilemap::{SlopeProfile, Tile, TileKind, TileLayer},
    types::{ContactReport, Rect, Transform},
};
pub use crate::utils::allocator::{Arena, EntityId};
pub use crate::world::PhysicsWorld;
