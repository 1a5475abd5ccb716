//! Utility helpers: the generational handle arena and logging support.

pub mod allocator;
pub mod logging;

pub use allocator::{Arena, EntityId};
pub use logging::ScopedTimer;
