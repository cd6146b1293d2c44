/// Axis-aligned bounds of everywhere a swimmer has been
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl TrajectoryBounds {
    /// Create new bounds initialised to infinity values
    pub fn new() -> Self {
        Self {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
            min_z: f32::INFINITY,
            max_z: f32::NEG_INFINITY,
        }
    }

    /// Update bounds with a new position
    pub fn update(&mut self, position: Vec3) {
        self.min_x = self.min_x.min(position.x);
        self.max_x = self.max_x.max(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_y = self.max_y.max(position.y);
        self.min_z = self.min_z.min(position.z);
        self.max_z = self.max_z.max(position.z);
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Extent along each axis, zero before the first update
    pub fn dimensions(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }
}

impl Default for TrajectoryBounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_grow_with_positions() {
        let mut bounds = TrajectoryBounds::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.dimensions(), Vec3::ZERO);

        bounds.update(Vec3::new(1.0, -2.0, 3.0));
        bounds.update(Vec3::new(-1.0, 0.0, 4.0));
        assert!(!bounds.is_empty());
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_z, 4.0);
        assert_eq!(bounds.dimensions(), Vec3::new(2.0, 2.0, 1.0));
    }
}
