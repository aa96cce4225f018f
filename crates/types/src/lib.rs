//! Shared types and tuning constants
//! This crate contains pure data types with no external dependencies

/// Screen dimensions (character cells)
pub const SCREEN_WIDTH: u16 = 120;
pub const SCREEN_HEIGHT: u16 = 30;

/// World dimensions (grid cells)
pub const MAP_WIDTH: usize = 16;
pub const MAP_HEIGHT: usize = 16;

/// Default world layout: '#' = wall, '.' = empty.
pub const DEFAULT_MAP: [&str; MAP_HEIGHT] = [
    "################",
    "#..#...........#",
    "#..#....########",
    "#..#...........#",
    "#..#...#.......#",
    "#......#.......#",
    "#..............#",
    "###............#",
    "#..............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#.....########.#",
    "#..............#",
    "################",
];

/// Starting pose (cell center of an empty interior cell)
pub const PLAYER_START_X: f32 = 1.5;
pub const PLAYER_START_Y: f32 = 1.5;
pub const PLAYER_START_HEADING: f32 = 0.0;

/// Movement tuning
pub const MOVE_SPEED: f32 = 5.0;
pub const TURN_SPEED: f32 = 5.0;
/// Turning is scaled down relative to the raw turn speed.
pub const TURN_SCALE: f32 = 0.75;

/// Projection tuning
pub const FOV: f32 = std::f32::consts::PI / 3.0;
pub const MAX_DEPTH: f32 = 30.0;

/// Ray-march step in grid units. Strictly positive and well below one cell;
/// smaller steps catch thinner walls at the cost of more iterations.
pub const MARCH_STEP: f32 = 0.1;

/// Angular proximity (radians) between a ray and a wall-cell corner below
/// which the ray is treated as grazing a vertical seam.
pub const EDGE_EPSILON: f32 = 0.004;

/// Shade gradient length (both gradients)
pub const GRADIENT_LEN: usize = 10;

/// Wall glyphs, index 0 = nearest (densest), index 9 = at max depth.
pub const WALL_GRADIENT: [char; GRADIENT_LEN] =
    ['@', '%', '#', '*', '+', '=', '~', ':', '.', ' '];

/// Ceiling/floor glyphs, index 0 = nearest to the viewer, index 9 = horizon.
pub const FLAT_GRADIENT: [char; GRADIENT_LEN] =
    ['#', '#', 'x', 'x', '=', '~', '-', ':', '.', ' '];

/// Directional intents held by the player for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::TurnLeft,
        Intent::TurnRight,
        Intent::MoveForward,
        Intent::MoveBackward,
    ];

    /// Dense index for per-intent state tables.
    pub fn index(self) -> usize {
        match self {
            Intent::TurnLeft => 0,
            Intent::TurnRight => 1,
            Intent::MoveForward => 2,
            Intent::MoveBackward => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::TurnLeft => "turnLeft",
            Intent::TurnRight => "turnRight",
            Intent::MoveForward => "moveForward",
            Intent::MoveBackward => "moveBackward",
        }
    }
}

/// Which band of the projected scene a rendered cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Ceiling,
    Wall,
    Floor,
}
