use serde::{Deserialize, Serialize};

/// Frame clock sample handed to every update, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Time since the simulation started.
    pub elapsed: f32,
    /// Time since the previous frame.
    pub delta: f32,
}

impl FrameTime {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Advance a fixed-step clock by `delta` and return the new sample.
    pub fn step(self, delta: f32) -> Self {
        Self {
            elapsed: self.elapsed + delta,
            delta,
        }
    }
}

/// One rotational degree of freedom: angle in radians and its rate of change.
///
/// Used both for a controller's live state and for the per-frame target
/// produced by target functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub rotation: f32,
    pub rotation_velocity: f32,
}

impl Rotation {
    pub fn new(rotation: f32, rotation_velocity: f32) -> Self {
        Self {
            rotation,
            rotation_velocity,
        }
    }

    /// A resting rotation at `rotation` radians.
    pub fn at(rotation: f32) -> Self {
        Self::new(rotation, 0.0)
    }

    pub fn with_rotation(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }
}

/// Proportional (`rotation`) and derivative (`rotation_velocity`) feedback gains.
///
/// Negative values are accepted; stability is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gains {
    pub rotation: f32,
    pub rotation_velocity: f32,
}

impl Gains {
    pub fn new(rotation: f32, rotation_velocity: f32) -> Self {
        Self {
            rotation,
            rotation_velocity,
        }
    }

    /// No feedback: the controller coasts on its current velocity.
    pub const ZERO: Gains = Gains {
        rotation: 0.0,
        rotation_velocity: 0.0,
    };
}

impl Default for Gains {
    fn default() -> Self {
        Self::new(0.5, 2.0)
    }
}

/// A value per steering axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation<T> {
    pub yaw: T,
    pub pitch: T,
}

impl<T> Orientation<T> {
    pub fn new(yaw: T, pitch: T) -> Self {
        Self { yaw, pitch }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Orientation<U> {
        Orientation {
            yaw: f(self.yaw),
            pitch: f(self.pitch),
        }
    }
}

impl<T: Clone> Orientation<T> {
    /// Same value on both axes.
    pub fn splat(value: T) -> Self {
        Self {
            yaw: value.clone(),
            pitch: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_step_accumulates_elapsed() {
        let time = FrameTime::default().step(0.5).step(0.25);
        assert_eq!(time.elapsed, 0.75);
        assert_eq!(time.delta, 0.25);
    }

    #[test]
    fn test_orientation_map_applies_to_both_axes() {
        let doubled = Orientation::new(1.0_f32, -2.0).map(|v| v * 2.0);
        assert_eq!(doubled, Orientation::new(2.0, -4.0));
    }

    #[test]
    fn test_default_gains_match_turtle_tuning() {
        assert_eq!(Gains::default(), Gains::new(0.5, 2.0));
    }
}
