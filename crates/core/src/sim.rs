//! Player pose and per-frame movement.
//!
//! `Simulation` is the explicit context object passed through the frame:
//! the immutable grid and config plus the one piece of mutable state, the
//! player's pose.

use crate::types::{
    Intent, FOV, MAX_DEPTH, MOVE_SPEED, PLAYER_START_HEADING, PLAYER_START_X, PLAYER_START_Y,
    TURN_SCALE, TURN_SPEED,
};
use crate::world::WorldGrid;

/// Continuous player position (grid-cell units) and heading (radians).
///
/// The heading is left unnormalized; only `sin`/`cos` consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// The default starting pose for the built-in map.
    pub fn starting() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_HEADING)
    }

    /// Cell the pose currently occupies.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Immutable movement and projection tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Walking speed, grid units per second.
    pub move_speed: f32,
    /// Raw turning speed, radians per second (scaled by [`TURN_SCALE`]).
    pub turn_speed: f32,
    /// Field of view, radians.
    pub fov: f32,
    /// Maximum viewing distance, grid units.
    pub max_depth: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            fov: FOV,
            max_depth: MAX_DEPTH,
        }
    }
}

/// The per-frame simulation context: grid + config + the player's pose.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: WorldGrid,
    pose: Pose,
    config: MovementConfig,
}

impl Simulation {
    /// The caller must supply a starting pose inside the grid and not inside
    /// a wall cell; collision handling assumes the current pose is valid.
    pub fn new(grid: WorldGrid, pose: Pose, config: MovementConfig) -> Self {
        Self { grid, pose, config }
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Apply one frame of held intents over `dt` seconds.
    ///
    /// Turning and translation scale with `dt` so motion is frame-rate
    /// independent. Each translation is accepted or reverted whole: if the
    /// proposed cell is a wall (or outside the grid), the pose is unchanged
    /// for that intent. No sliding along walls.
    pub fn step(&mut self, dt: f32, intents: &[Intent]) {
        if dt <= 0.0 {
            return;
        }

        for &intent in intents {
            match intent {
                Intent::TurnLeft => {
                    self.pose.heading -= self.config.turn_speed * TURN_SCALE * dt;
                }
                Intent::TurnRight => {
                    self.pose.heading += self.config.turn_speed * TURN_SCALE * dt;
                }
                Intent::MoveForward => self.translate(dt, 1.0),
                Intent::MoveBackward => self.translate(dt, -1.0),
            }
        }
    }

    fn translate(&mut self, dt: f32, sign: f32) {
        let step = self.config.move_speed * dt * sign;
        let nx = self.pose.x + self.pose.heading.sin() * step;
        let ny = self.pose.y + self.pose.heading.cos() * step;

        let cell_x = nx.floor() as i32;
        let cell_y = ny.floor() as i32;
        if self.grid.in_bounds(cell_x, cell_y) && !self.grid.is_wall(cell_x, cell_y) {
            self.pose.x = nx;
            self.pose.y = ny;
        }
    }
}
