//! Global configuration constants for the Gravel engine.

/// Default gravity acceleration in pixels/s² (+Y points down; 100 px ≈ 1 m).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 980.0];

/// Default per-axis speed limit in pixels/s.
pub const DEFAULT_MAX_SPEED: [f32; 2] = [500.0, 500.0];

/// Shrink applied to the trailing edge of a box before corner sampling, in
/// pixels, so a probe flush with a tile boundary does not read the next
/// row or column.
pub const EDGE_TOLERANCE: f32 = 1.0;

/// Default fixed timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;
