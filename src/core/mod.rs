//! Core types describing bodies, colliders, tile layers, and shared data.

pub mod body;
pub mod collider;
pub mod tilemap;
pub mod types;

pub use body::Body;
pub use collider::{Collider, ColliderShape};
pub use tilemap::{SlopeProfile, Tile, TileKind, TileLayer};
pub use types::{ContactReport, Rect, Transform};
