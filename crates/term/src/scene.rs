//! SceneView: renders the simulation into a terminal framebuffer.
//!
//! This module is pure (no I/O). One ray is cast per column, every cell of
//! the column is shaded from that ray, and the status line and minimap are
//! overlaid on top. The world grid itself is never mutated; the player
//! marker exists only in the rendered frame.

use crate::core::{cast_ray, shade_cell, Pose, Simulation, Tile, WorldGrid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Surface, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Composes full frames from the simulation state.
pub struct SceneView {
    width: u16,
    height: u16,
    wall: CellStyle,
    ceiling: CellStyle,
    floor: CellStyle,
    status: CellStyle,
    minimap: CellStyle,
    marker: CellStyle,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl SceneView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            wall: CellStyle::fg(Rgb::new(200, 200, 200)),
            ceiling: CellStyle {
                dim: true,
                ..CellStyle::fg(Rgb::new(110, 110, 150))
            },
            floor: CellStyle::fg(Rgb::new(140, 120, 90)),
            status: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(255, 255, 255))
            },
            minimap: CellStyle::fg(Rgb::new(120, 200, 120)),
            marker: CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(255, 220, 80))
            },
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `dt` is the measured time of the previous frame in seconds; it only
    /// feeds the fps readout here. Callers reuse the framebuffer across
    /// frames, so the hot path allocates nothing.
    pub fn render_into(&self, sim: &Simulation, dt: f32, fb: &mut FrameBuffer) {
        fb.resize(self.width, self.height);

        let grid = sim.grid();
        let pose = sim.pose();
        let config = sim.config();

        for column in 0..self.width {
            let ray = cast_ray(grid, pose, config, column, self.width);
            for row in 0..self.height {
                let (glyph, surface) = shade_cell(ray, row, self.height, config.max_depth);
                let style = match surface {
                    Surface::Ceiling => self.ceiling,
                    Surface::Wall => self.wall,
                    Surface::Floor => self.floor,
                };
                fb.put_char(column, row, glyph, style);
            }
        }

        self.draw_status(pose, dt, fb);
        self.draw_minimap(grid, pose, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation, dt: f32) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        self.render_into(sim, dt, &mut fb);
        fb
    }

    fn draw_status(&self, pose: &Pose, dt: f32, fb: &mut FrameBuffer) {
        // 1/dt is meaningless on the very first frame; show inf rather than
        // divide by zero.
        let fps = if dt > 0.0 { 1.0 / dt } else { f32::INFINITY };
        let line = format!(
            "x = {:.2}, y = {:.2}, direction = {:.2}, fps = {:.2}",
            pose.x, pose.y, pose.heading, fps
        );
        fb.put_str(0, 0, &line, self.status);
    }

    /// Minimap in the bottom-left corner, grid glyphs verbatim with the
    /// player's cell overwritten at render time.
    fn draw_minimap(&self, grid: &WorldGrid, pose: &Pose, fb: &mut FrameBuffer) {
        let top = self.height.saturating_sub(grid.height() as u16);
        let (player_x, player_y) = pose.cell();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let sx = x as u16;
                let sy = top.saturating_add(y as u16);
                if (x as i32, y as i32) == (player_x, player_y) {
                    fb.put_char(sx, sy, 'P', self.marker);
                    continue;
                }
                let glyph = match grid.tile(x as i32, y as i32) {
                    Some(Tile::Wall) => '#',
                    _ => '.',
                };
                fb.put_char(sx, sy, glyph, self.minimap);
            }
        }
    }
}
