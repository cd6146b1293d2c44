use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Error types for containment region construction.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    DegenerateSides(Sides),
    NonFiniteCenter(Vec3),
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::DegenerateSides(sides) => write!(
                f,
                "Boundary sides must be finite and positive, got {}x{}x{}",
                sides.width, sides.height, sides.depth
            ),
            BoundaryError::NonFiniteCenter(center) => {
                write!(f, "Boundary center must be finite, got {}", center)
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Full extents of a box along X (width), Y (height) and Z (depth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Sides {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) * 0.5
    }

    fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0)
    }
}

/// Axis-aligned tank a swimmer should stay inside.
///
/// The faces belong to the box: a position exactly on a face is inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryBox {
    center: Vec3,
    sides: Sides,
}

impl BoundaryBox {
    pub fn new(center: Vec3, sides: Sides) -> Result<Self, BoundaryError> {
        if !sides.is_valid() {
            return Err(BoundaryError::DegenerateSides(sides));
        }
        if !center.is_finite() {
            return Err(BoundaryError::NonFiniteCenter(center));
        }
        Ok(Self { center, sides })
    }

    /// Cube centred on `center` with the given half extent on every axis.
    pub fn cube(center: Vec3, half_extent: f32) -> Result<Self, BoundaryError> {
        let side = half_extent * 2.0;
        Self::new(center, Sides::new(side, side, side))
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }

    pub fn half_extents(&self) -> Vec3 {
        self.sides.half_extents()
    }

    /// True when the horizontal footprint no longer covers `position`.
    pub fn is_outside_xz(&self, position: Vec3) -> bool {
        let half = self.half_extents();
        (position.x - self.center.x).abs() > half.x || (position.z - self.center.z).abs() > half.z
    }

    /// Vertical distance past the top (positive) or bottom (negative) face, zero inside.
    pub fn signed_distance_outside_y(&self, position: Vec3) -> f32 {
        let offset = position.y - self.center.y;
        let half_height = self.sides.height * 0.5;
        if offset.abs() > half_height {
            offset - half_height * offset.signum()
        } else {
            0.0
        }
    }

    pub fn contains(&self, position: Vec3) -> bool {
        !self.is_outside_xz(position) && self.signed_distance_outside_y(position) == 0.0
    }

    /// Largest distance by which `position` lies beyond any face, zero inside.
    pub fn excursion(&self, position: Vec3) -> f32 {
        let outside = ((position - self.center).abs() - self.half_extents()).max(Vec3::ZERO);
        outside.max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tank() -> BoundaryBox {
        BoundaryBox::cube(Vec3::ZERO, 5.0).unwrap()
    }

    #[test]
    fn test_face_counts_as_inside() {
        let tank = unit_tank();
        assert!(!tank.is_outside_xz(Vec3::new(5.0, 0.0, 0.0)));
        assert!(!tank.is_outside_xz(Vec3::new(0.0, 0.0, -5.0)));
        assert_eq!(tank.signed_distance_outside_y(Vec3::new(0.0, 5.0, 0.0)), 0.0);
        assert!(tank.contains(Vec3::new(5.0, -5.0, 5.0)));
    }

    #[test]
    fn test_outside_is_measured_from_center() {
        let tank = BoundaryBox::new(Vec3::new(10.0, 0.0, 0.0), Sides::new(2.0, 2.0, 2.0)).unwrap();
        assert!(!tank.is_outside_xz(Vec3::new(10.5, 0.0, 0.0)));
        assert!(tank.is_outside_xz(Vec3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_signed_distance_uses_offset_sign() {
        let tank = BoundaryBox::new(Vec3::new(0.0, -4.0, 0.0), Sides::new(6.0, 2.0, 20.0)).unwrap();
        // Above the top face at y = -3 while still below the world origin.
        let above = tank.signed_distance_outside_y(Vec3::new(0.0, -2.5, 0.0));
        assert!((above - 0.5).abs() < 1e-6, "got {above}");
        let below = tank.signed_distance_outside_y(Vec3::new(0.0, -6.0, 0.0));
        assert!((below + 1.0).abs() < 1e-6, "got {below}");
    }

    #[test]
    fn test_degenerate_sides_rejected() {
        let err = BoundaryBox::new(Vec3::ZERO, Sides::new(0.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, BoundaryError::DegenerateSides(_)));
        assert!(BoundaryBox::new(Vec3::ZERO, Sides::new(1.0, f32::NAN, 1.0)).is_err());
        assert!(BoundaryBox::new(Vec3::splat(f32::INFINITY), Sides::new(1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_excursion() {
        let tank = unit_tank();
        assert_eq!(tank.excursion(Vec3::new(1.0, 2.0, 3.0)), 0.0);
        assert!((tank.excursion(Vec3::new(-6.5, 5.2, 0.0)) - 1.5).abs() < 1e-6);
    }
}
