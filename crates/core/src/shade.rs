//! Distance and row to glyph mapping.
//!
//! The classic inverse-distance projection: a wall at distance `d` spans the
//! rows between `h/2 - h/d` and `h/2 + h/d`. Rows above are ceiling, rows
//! below are floor, both shaded by how far they sit from the horizon.

use crate::raycast::RayResult;
use crate::types::{Surface, FLAT_GRADIENT, GRADIENT_LEN, WALL_GRADIENT};

/// Ordered glyph palette indexed by a normalized intensity in `[0, 1]`.
///
/// Index 0 is minimal intensity (near/bright), the last index maximal
/// (far/dim); out-of-range intensities clamp to the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeGradient {
    glyphs: [char; GRADIENT_LEN],
}

/// Wall-face palette, dense up close and fading to blank at max depth.
pub const WALL_SHADES: ShadeGradient = ShadeGradient::new(WALL_GRADIENT);

/// Ceiling/floor palette, dense near the viewer and blank at the horizon.
pub const FLAT_SHADES: ShadeGradient = ShadeGradient::new(FLAT_GRADIENT);

impl ShadeGradient {
    pub const fn new(glyphs: [char; GRADIENT_LEN]) -> Self {
        Self { glyphs }
    }

    /// Glyph for intensity `d`, clamped into the table.
    pub fn glyph(&self, d: f32) -> char {
        let idx = ((d * GRADIENT_LEN as f32) as i32).clamp(0, GRADIENT_LEN as i32 - 1);
        self.glyphs[idx as usize]
    }
}

/// Shade one screen cell of a column from its ray result.
///
/// `ray.distance` is strictly positive by construction (the march starts at
/// one step), so the band bounds never divide by zero.
pub fn shade_cell(ray: RayResult, row: u16, screen_height: u16, max_depth: f32) -> (char, Surface) {
    let h = screen_height as f32;
    let half = h / 2.0;
    let ceiling_bound = half - h / ray.distance;
    let floor_bound = half + h / ray.distance;
    let y = row as f32;

    if y < ceiling_bound {
        let d = 1.0 + (y - half) / half;
        (FLAT_SHADES.glyph(d), Surface::Ceiling)
    } else if y <= floor_bound {
        // A grazed seam renders blank regardless of distance shading.
        if ray.hit_edge {
            (' ', Surface::Wall)
        } else {
            (WALL_SHADES.glyph(ray.distance / max_depth), Surface::Wall)
        }
    } else {
        let d = 1.0 - (y - half) / half;
        (FLAT_SHADES.glyph(d), Surface::Floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: u16 = 30;
    const DEPTH: f32 = 30.0;

    fn ray(distance: f32) -> RayResult {
        RayResult { distance, hit_edge: false }
    }

    #[test]
    fn test_gradient_clamps_at_both_ends() {
        let g = ShadeGradient::new(WALL_GRADIENT);
        assert_eq!(g.glyph(-1.0), WALL_GRADIENT[0]);
        assert_eq!(g.glyph(0.0), WALL_GRADIENT[0]);
        assert_eq!(g.glyph(1.0), WALL_GRADIENT[GRADIENT_LEN - 1]);
        assert_eq!(g.glyph(5.0), WALL_GRADIENT[GRADIENT_LEN - 1]);
    }

    #[test]
    fn test_band_order_is_ceiling_wall_floor() {
        // distance 3 on a 30-row screen: bounds at 15 -/+ 10.
        let r = ray(3.0);
        assert_eq!(shade_cell(r, 0, H, DEPTH).1, Surface::Ceiling);
        assert_eq!(shade_cell(r, 4, H, DEPTH).1, Surface::Ceiling);
        assert_eq!(shade_cell(r, 5, H, DEPTH).1, Surface::Wall);
        assert_eq!(shade_cell(r, 15, H, DEPTH).1, Surface::Wall);
        assert_eq!(shade_cell(r, 25, H, DEPTH).1, Surface::Wall);
        assert_eq!(shade_cell(r, 26, H, DEPTH).1, Surface::Floor);
        assert_eq!(shade_cell(r, H - 1, H, DEPTH).1, Surface::Floor);
    }

    #[test]
    fn test_very_near_wall_fills_the_whole_column() {
        let r = ray(crate::types::MARCH_STEP);
        for row in 0..H {
            assert_eq!(shade_cell(r, row, H, DEPTH).1, Surface::Wall);
        }
    }

    #[test]
    fn test_near_walls_shade_denser_than_far_walls() {
        let (near, _) = shade_cell(ray(0.5), 15, H, DEPTH);
        let (far, _) = shade_cell(ray(DEPTH), 15, H, DEPTH);
        assert_eq!(near, WALL_GRADIENT[0]);
        assert_eq!(far, WALL_GRADIENT[GRADIENT_LEN - 1]);
    }

    #[test]
    fn test_edge_hits_render_as_blank_seams() {
        let r = RayResult { distance: 2.0, hit_edge: true };
        let (glyph, surface) = shade_cell(r, 15, H, DEPTH);
        assert_eq!(glyph, ' ');
        assert_eq!(surface, Surface::Wall);
    }

    #[test]
    fn test_extreme_rows_stay_inside_the_gradient() {
        // Distance at max depth keeps the ceiling/floor bands widest; the
        // extreme rows must still index safely into the gradient.
        let r = ray(DEPTH);
        for row in [0, H - 1] {
            let (glyph, _) = shade_cell(r, row, H, DEPTH);
            assert!(FLAT_GRADIENT.contains(&glyph) || WALL_GRADIENT.contains(&glyph));
        }
    }
}
