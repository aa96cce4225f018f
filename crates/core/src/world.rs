//! Immutable world grid.
//!
//! The grid is parsed once at startup and never mutated afterwards. The
//! minimap player marker is a render-time overlay, not grid state.

use std::fmt;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

/// Rectangular wall/empty tile grid, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

/// Errors raised while parsing a map layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridParseError {
    /// The layout had no rows or no columns.
    Empty,
    /// A row's length differed from the first row's.
    RaggedRow { row: usize },
    /// A glyph other than '#' or '.' appeared.
    UnknownGlyph { row: usize, glyph: char },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::Empty => write!(f, "map layout is empty"),
            GridParseError::RaggedRow { row } => {
                write!(f, "map row {} has a different length than row 0", row)
            }
            GridParseError::UnknownGlyph { row, glyph } => {
                write!(f, "map row {} contains unknown glyph {:?}", row, glyph)
            }
        }
    }
}

impl std::error::Error for GridParseError {}

impl WorldGrid {
    /// Parse a map from text rows: '#' = wall, '.' = empty.
    pub fn parse(rows: &[&str]) -> Result<Self, GridParseError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridParseError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(GridParseError::RaggedRow { row: y });
            }
            for glyph in row.chars() {
                match glyph {
                    '#' => tiles.push(Tile::Wall),
                    '.' => tiles.push(Tile::Empty),
                    other => {
                        return Err(GridParseError::UnknownGlyph { row: y, glyph: other })
                    }
                }
            }
        }

        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at cell coordinates, `None` when out of bounds.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[(y as usize) * self.width + (x as usize)])
    }

    /// True only for an in-bounds wall cell; out-of-range queries never panic.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        matches!(self.tile(x, y), Some(Tile::Wall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_grid() {
        let grid = WorldGrid::parse(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.tile(1, 1), Some(Tile::Empty));
        assert_eq!(grid.tile(0, 0), Some(Tile::Wall));
        assert!(grid.is_wall(2, 1));
        assert!(!grid.is_wall(1, 1));
    }

    #[test]
    fn test_parse_rejects_empty_layouts() {
        assert_eq!(WorldGrid::parse(&[]), Err(GridParseError::Empty));
        assert_eq!(WorldGrid::parse(&[""]), Err(GridParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            WorldGrid::parse(&["###", "##"]),
            Err(GridParseError::RaggedRow { row: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_glyphs() {
        assert_eq!(
            WorldGrid::parse(&["###", "#P#", "###"]),
            Err(GridParseError::UnknownGlyph { row: 1, glyph: 'P' })
        );
    }

    #[test]
    fn test_out_of_bounds_sampling_is_safe() {
        let grid = WorldGrid::parse(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.tile(-1, 0), None);
        assert_eq!(grid.tile(0, -1), None);
        assert_eq!(grid.tile(3, 0), None);
        assert_eq!(grid.tile(0, 3), None);
        assert!(!grid.is_wall(-1, -1));
        assert!(!grid.is_wall(100, 100));
    }
}
