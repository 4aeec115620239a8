//! Tile codes and the static level grid
//!
//! The grid answers "what is at this world-space point". Everything outside
//! the stored cells resolves deterministically: the left, right and top edges
//! of the world behave as walls, the bottom is open so bodies can fall out.

use serde::{Deserialize, Serialize};

use crate::consts::TILE;

/// Tile types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileCode {
    #[default]
    Empty,
    Ground,
    Spike,
    /// Solid ledge tile (blocks on every side, like Ground)
    Platform,
    /// Goal
    Flag,
}

impl TileCode {
    /// Numeric level code: 0 Empty, 1 Ground, 2 Spike, 3 Flag, 4 Platform
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileCode::Empty),
            1 => Some(TileCode::Ground),
            2 => Some(TileCode::Spike),
            3 => Some(TileCode::Flag),
            4 => Some(TileCode::Platform),
            _ => None,
        }
    }

    /// Character used in level rows, either a symbol or a numeric code digit
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(TileCode::Empty),
            '#' => Some(TileCode::Ground),
            '^' => Some(TileCode::Spike),
            '=' => Some(TileCode::Platform),
            'F' => Some(TileCode::Flag),
            _ => c.to_digit(10).and_then(|d| Self::from_code(d as u8)),
        }
    }

    /// Whether bodies collide with this tile
    pub fn is_solid(self) -> bool {
        matches!(self, TileCode::Ground | TileCode::Platform)
    }
}

/// Immutable tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    cells: Vec<Vec<TileCode>>,
    rows: usize,
    cols: usize,
}

impl TileGrid {
    /// Build a grid from rows of cells.
    ///
    /// The column count comes from the first row. Shorter rows are allowed; their
    /// missing cells read as Empty, and cells past `cols` are never reached.
    pub fn new(cells: Vec<Vec<TileCode>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        Self { cells, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// World width in pixels
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * TILE
    }

    /// World height in pixels
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * TILE
    }

    /// Stored cell at (col, row), Empty when outside the stored data
    pub fn cell(&self, col: usize, row: usize) -> TileCode {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Classify a world-space point
    pub fn tile_at(&self, x: f32, y: f32) -> TileCode {
        if x < 0.0 || x >= self.world_width() || y < 0.0 {
            return TileCode::Ground;
        }
        if y >= self.world_height() {
            return TileCode::Empty;
        }
        let col = (x / TILE).floor() as usize;
        let row = (y / TILE).floor() as usize;
        self.cell(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> TileGrid {
        TileGrid::new(vec![
            vec![TileCode::Empty, TileCode::Empty, TileCode::Flag],
            vec![TileCode::Spike, TileCode::Platform, TileCode::Empty],
            vec![TileCode::Ground, TileCode::Ground, TileCode::Ground],
        ])
    }

    #[test]
    fn test_world_dimensions() {
        let g = grid();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.world_width(), 3.0 * TILE);
        assert_eq!(g.world_height(), 3.0 * TILE);
    }

    #[test]
    fn test_tile_at_inside() {
        let g = grid();
        assert_eq!(g.tile_at(0.0, 0.0), TileCode::Empty);
        assert_eq!(g.tile_at(2.0 * TILE + 1.0, 10.0), TileCode::Flag);
        assert_eq!(g.tile_at(10.0, TILE), TileCode::Spike);
        assert_eq!(g.tile_at(TILE + TILE - 0.5, TILE + 3.0), TileCode::Platform);
        assert_eq!(g.tile_at(TILE * 1.5, TILE * 2.5), TileCode::Ground);
    }

    #[test]
    fn test_tile_at_edges() {
        let g = grid();
        assert_eq!(g.tile_at(-0.01, 10.0), TileCode::Ground);
        assert_eq!(g.tile_at(g.world_width(), 10.0), TileCode::Ground);
        assert_eq!(g.tile_at(10.0, -0.01), TileCode::Ground);
        assert_eq!(g.tile_at(10.0, g.world_height()), TileCode::Empty);
        // Side walls win over the open bottom
        assert_eq!(g.tile_at(-1.0, g.world_height() + 100.0), TileCode::Ground);
    }

    #[test]
    fn test_ragged_rows_read_empty() {
        let g = TileGrid::new(vec![
            vec![TileCode::Ground, TileCode::Ground, TileCode::Ground],
            vec![TileCode::Ground],
        ]);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.tile_at(2.5 * TILE, 1.5 * TILE), TileCode::Empty);
        assert_eq!(g.cell(7, 9), TileCode::Empty);
    }

    #[test]
    fn test_codes_and_chars() {
        let pairs = [('0', '.'), ('1', '#'), ('2', '^'), ('3', 'F'), ('4', '=')];
        for (digit, symbol) in pairs {
            assert_eq!(TileCode::from_char(digit), TileCode::from_char(symbol));
            assert!(TileCode::from_char(digit).is_some());
        }
        assert_eq!(TileCode::from_code(9), None);
        assert_eq!(TileCode::from_char('5'), None);
        assert_eq!(TileCode::from_char('?'), None);
        assert!(TileCode::Ground.is_solid());
        assert!(TileCode::Platform.is_solid());
        assert!(!TileCode::Spike.is_solid());
        assert!(!TileCode::Flag.is_solid());
    }

    proptest! {
        #[test]
        fn outside_left_right_top_is_solid(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
        ) {
            let g = grid();
            let outside_sides = x < 0.0 || x >= g.world_width() || y < 0.0;
            if outside_sides {
                prop_assert_eq!(g.tile_at(x, y), TileCode::Ground);
            } else if y >= g.world_height() {
                prop_assert_eq!(g.tile_at(x, y), TileCode::Empty);
            }
        }

        #[test]
        fn below_world_is_empty(
            x in 0.0f32..(3.0 * TILE - 0.01),
            depth in 0.0f32..10_000.0,
        ) {
            let g = grid();
            prop_assert_eq!(g.tile_at(x, g.world_height() + depth), TileCode::Empty);
        }
    }
}
