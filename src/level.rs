//! Level description and the built-in stage
//!
//! A level is rows of tile characters plus the starting enemies and moving
//! platforms. Level data is read-only: building a `World` copies everything
//! the simulation mutates.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Body, Enemy, MovingPlatform, Patrol, TileCode, TileGrid, World};
use crate::tiles;
use crate::tuning::Tuning;

/// Tile rows of the built-in long stage
const BUILTIN_ROWS: [&str; 12] = [
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "....................................................................................................",
    "..........===.....................===.........................==.........................##.........",
    "...............^^.......................................^^............................#####..^..F...",
    "####################....#####################......####################....#########################",
    "####################....#####################......####################....#########################",
];

/// Errors from loading level data
#[derive(Debug)]
pub enum LevelError {
    /// No rows, or a zero-width first row
    Empty,
    /// Character that is not a tile symbol
    UnknownTile { row: usize, col: usize, ch: char },
    Json(serde_json::Error),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level has no tiles"),
            LevelError::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            }
            LevelError::Json(e) => write!(f, "invalid level JSON: {e}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e)
    }
}

/// Starting state of one enemy (world pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    /// Patrol bounds
    pub left: f32,
    pub right: f32,
}

impl EnemySpec {
    pub fn to_enemy(&self) -> Enemy {
        Enemy::new(
            Body::new(Vec2::new(self.x, self.y), Vec2::new(self.w, self.h))
                .with_vel(Vec2::new(self.vx, 0.0)),
            Patrol::new(self.left, self.right),
        )
    }
}

fn default_platform_h() -> f32 {
    PLATFORM_THICKNESS
}

/// Starting state of one moving platform (world pixels, `y` is the top surface)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    #[serde(default = "default_platform_h")]
    pub h: f32,
    pub vx: f32,
    pub left: f32,
    pub right: f32,
}

impl PlatformSpec {
    pub fn to_platform(&self) -> MovingPlatform {
        MovingPlatform::new(
            Body::new(Vec2::new(self.x, self.y), Vec2::new(self.w, self.h))
                .with_vel(Vec2::new(self.vx, 0.0)),
            Patrol::new(self.left, self.right),
        )
    }
}

fn default_spawn() -> (u32, u32) {
    SPAWN_TILE
}

/// A complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Tile rows, top to bottom: `.` empty, `#` ground, `^` spike, `=` ledge, `F` flag
    pub rows: Vec<String>,
    /// Player spawn as (column, row)
    #[serde(default = "default_spawn")]
    pub spawn_tile: (u32, u32),
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub platforms: Vec<PlatformSpec>,
}

impl LevelData {
    /// The long built-in stage
    pub fn builtin() -> Self {
        let ground_enemy = |col: f32, vx: f32, left_col: f32, right_col: f32| EnemySpec {
            x: tiles(col),
            y: tiles(10.0) - 36.0,
            w: 36.0,
            h: 36.0,
            vx,
            left: tiles(left_col),
            right: tiles(right_col),
        };
        let pit_platform = |x: f32, w: f32, vx: f32, left: f32, right: f32| PlatformSpec {
            x,
            y: tiles(9.0),
            w,
            h: PLATFORM_THICKNESS,
            vx,
            left,
            right,
        };

        Self {
            rows: BUILTIN_ROWS.iter().map(|r| r.to_string()).collect(),
            spawn_tile: SPAWN_TILE,
            enemies: vec![
                ground_enemy(28.0, -1.5, 24.0, 45.0),
                ground_enemy(55.0, 1.2, 51.0, 71.0),
                ground_enemy(66.0, -2.0, 51.0, 71.0),
                ground_enemy(80.0, 1.5, 75.0, 86.0),
            ],
            platforms: vec![
                pit_platform(tiles(20.0), 96.0, 1.5, tiles(19.0), tiles(25.0)),
                pit_platform(tiles(45.0), 120.0, 2.0, tiles(45.0), tiles(51.0)),
                pit_platform(tiles(71.25), 96.0, -1.5, tiles(71.0), tiles(75.0)),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the tile rows
    pub fn grid(&self) -> Result<TileGrid, LevelError> {
        let cells = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| {
                        TileCode::from_char(ch).ok_or(LevelError::UnknownTile { row, col, ch })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let grid = TileGrid::new(cells);
        if grid.rows() == 0 || grid.cols() == 0 {
            return Err(LevelError::Empty);
        }
        Ok(grid)
    }

    /// Spawn point in world pixels
    pub fn spawn(&self) -> Vec2 {
        let (col, row) = self.spawn_tile;
        Vec2::new(tiles(col as f32), tiles(row as f32))
    }

    /// Build a fresh simulation world from this level
    pub fn build_world(&self, tuning: Tuning) -> Result<World, LevelError> {
        Ok(World::new(
            self.grid()?,
            self.spawn(),
            self.enemies.iter().map(EnemySpec::to_enemy).collect(),
            self.platforms.iter().map(PlatformSpec::to_platform).collect(),
            tuning,
        ))
    }
}
