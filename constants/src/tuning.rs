/// Step applied to a gain per key press.
pub const GAIN_STEP: f32 = 0.1;

/// Step applied to swimming speed per key press.
pub const SPEED_STEP: f32 = 0.1;

pub const MAX_SPEED: f32 = 10.0;
