/// Flat sea floor grid below the tank
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;
use swim_motion::BoundaryBox;

use constants::render_settings::{GRID_CELL_SIZE, GRID_COLOUR, SEA_FLOOR_GAP, SEA_FLOOR_MARGIN};

#[derive(Component)]
pub struct SeaFloorGrid;

/// Create the sea floor grid under `boundary`
pub fn create_sea_floor_grid(
    commands: &mut Commands,
    boundary: &BoundaryBox,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: GRID_COLOUR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let center = boundary.center();
    let half = boundary.half_extents();
    let floor_y = center.y - half.y - SEA_FLOOR_GAP;
    let min = Vec2::new(center.x - half.x, center.z - half.z) - Vec2::splat(SEA_FLOOR_MARGIN);
    let max = Vec2::new(center.x + half.x, center.z + half.z) + Vec2::splat(SEA_FLOOR_MARGIN);

    let (vertices, indices) = grid_lines(min, max, floor_y, GRID_CELL_SIZE);
    debug!("Sea floor grid: {} lines at y = {floor_y}", indices.len() / 2);

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        SeaFloorGrid,
    ));
}

/// Line-list vertices and indices for a grid covering `min..max` in XZ.
///
/// Line counts round to the nearest whole cell, at least one cell per axis.
fn grid_lines(min: Vec2, max: Vec2, y: f32, cell_size: f32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let size = max - min;
    let cells_x = ((size.x / cell_size).round() as u32).max(1);
    let cells_z = ((size.y / cell_size).round() as u32).max(1);
    let spacing_x = size.x / cells_x as f32;
    let spacing_z = size.y / cells_z as f32;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut push_line = |start: [f32; 3], end: [f32; 3]| {
        let base = vertices.len() as u32;
        vertices.push(start);
        vertices.push(end);
        indices.extend_from_slice(&[base, base + 1]);
    };

    // Lines along Z at fixed X
    for i in 0..=cells_x {
        let x = min.x + i as f32 * spacing_x;
        push_line([x, y, min.y], [x, y, max.y]);
    }
    // Lines along X at fixed Z
    for i in 0..=cells_z {
        let z = min.y + i as f32 * spacing_z;
        push_line([min.x, y, z], [max.x, y, z]);
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_area() {
        let (vertices, indices) = grid_lines(Vec2::new(-2.0, -3.0), Vec2::new(2.0, 3.0), -5.0, 1.0);
        // 5 lines along Z plus 7 along X
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 24);
        assert!(vertices.iter().all(|v| v[1] == -5.0));
        assert_eq!(vertices[0], [-2.0, -5.0, -3.0]);
        assert_eq!(vertices[23], [2.0, -5.0, 3.0]);
    }

    #[test]
    fn test_tiny_area_still_gets_one_cell() {
        let (vertices, _) = grid_lines(Vec2::ZERO, Vec2::splat(0.2), 0.0, 1.0);
        assert_eq!(vertices.len(), 8);
    }
}
