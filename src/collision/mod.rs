//! Collision detection modules: narrow-phase shape tests and the tile sweep.

pub mod narrowphase;
pub mod tilemap;

pub use narrowphase::{circles_overlap, point_in_circle, shapes_overlap};
pub use tilemap::{sample_triggers, sweep_aabb, TileSweep};
