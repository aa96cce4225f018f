//! Fixed-step ray marching with wall-seam detection.
//!
//! One ray is cast per screen column. The march steps the sample point
//! outward in [`MARCH_STEP`] increments until it lands in a wall cell,
//! leaves the grid, or reaches the depth limit. Distance is therefore
//! strictly positive (at least one step) and capped at `max_depth`.

use crate::sim::{MovementConfig, Pose};
use crate::types::{EDGE_EPSILON, MARCH_STEP};
use crate::world::WorldGrid;

/// Outcome of one ray march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResult {
    /// Distance to the obstruction, in `(0, max_depth]`.
    pub distance: f32,
    /// True when the ray grazes a vertical seam between wall faces.
    pub hit_edge: bool,
}

/// Direction of the ray for `column` out of `screen_width` columns.
///
/// Column 0 is the leftmost visual ray (`heading + fov/2`); the fan sweeps
/// right across the cone as the column index grows.
pub fn ray_angle(heading: f32, fov: f32, column: u16, screen_width: u16) -> f32 {
    heading + fov / 2.0 - (column as f32 / screen_width as f32) * fov
}

/// Cast the ray for one screen column from the player's pose.
pub fn cast_ray(
    grid: &WorldGrid,
    pose: &Pose,
    config: &MovementConfig,
    column: u16,
    screen_width: u16,
) -> RayResult {
    let angle = ray_angle(pose.heading, config.fov, column, screen_width);
    cast(grid, pose.x, pose.y, angle, config.max_depth)
}

/// March a single ray from `(origin_x, origin_y)` along `angle`.
///
/// Leaving the grid counts as a hit at `max_depth` (the void boundary) and
/// never sets the edge flag; edge detection runs only on real wall hits.
pub fn cast(grid: &WorldGrid, origin_x: f32, origin_y: f32, angle: f32, max_depth: f32) -> RayResult {
    let dir_x = angle.sin();
    let dir_y = angle.cos();

    let mut distance = 0.0f32;
    loop {
        distance += MARCH_STEP;
        if distance >= max_depth {
            return RayResult { distance: max_depth, hit_edge: false };
        }

        let cell_x = (origin_x + dir_x * distance).floor() as i32;
        let cell_y = (origin_y + dir_y * distance).floor() as i32;

        if !grid.in_bounds(cell_x, cell_y) {
            return RayResult { distance: max_depth, hit_edge: false };
        }
        if grid.is_wall(cell_x, cell_y) {
            let hit_edge = grazes_corner(origin_x, origin_y, dir_x, dir_y, cell_x, cell_y);
            return RayResult { distance, hit_edge };
        }
    }
}

/// Does the ray pass within [`EDGE_EPSILON`] radians of one of the two
/// nearest corners of the hit cell?
///
/// Only the two nearest corners are considered: the far pair is occluded by
/// the wall itself and would produce false seams.
fn grazes_corner(
    origin_x: f32,
    origin_y: f32,
    dir_x: f32,
    dir_y: f32,
    cell_x: i32,
    cell_y: i32,
) -> bool {
    // (distance to corner, cosine of ray/corner angle) for the 4 cell corners.
    let mut corners = [(0.0f32, 0.0f32); 4];
    let mut n = 0;
    for dy in 0..=1 {
        for dx in 0..=1 {
            let vx = (cell_x + dx) as f32 - origin_x;
            let vy = (cell_y + dy) as f32 - origin_y;
            let dist = (vx * vx + vy * vy).sqrt();
            // Standing exactly on a corner leaves the angle undefined; treat
            // it as aligned.
            let cos = if dist <= f32::EPSILON {
                1.0
            } else {
                (vx * dir_x + vy * dir_y) / dist
            };
            corners[n] = (dist, cos);
            n += 1;
        }
    }

    corners.sort_by(|a, b| a.0.total_cmp(&b.0));
    corners
        .iter()
        .take(2)
        .any(|&(_, cos)| cos.clamp(-1.0, 1.0).acos() < EDGE_EPSILON)
}
