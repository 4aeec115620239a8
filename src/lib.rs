//! Jump Scroller - A tile-based side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tiles, collisions, entities, camera)
//! - `level`: Level description and the built-in stage
//! - `tuning`: Data-driven physics parameters
//! - `platform`: Host-independent input mapping
//! - `renderer`: Drawing surface abstraction and scene painter

pub mod level;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use level::{LevelData, LevelError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Edge length of one level tile, in world pixels
    pub const TILE: f32 = 48.0;

    /// Logical size of the drawing surface
    pub const VIEW_W: f32 = 960.0;
    pub const VIEW_H: f32 = 540.0;

    /// Physics, tuned for one step per display frame at ~60 Hz
    pub const GRAVITY: f32 = 0.9;
    /// Horizontal acceleration while grounded
    pub const MOVE_SPEED: f32 = 0.7;
    /// Horizontal acceleration while airborne
    pub const AIR_SPEED: f32 = 0.5;
    pub const MAX_RUN: f32 = 5.0;
    pub const JUMP_VY: f32 = -15.5;
    /// Ground friction multiplier applied when no direction is held
    pub const FRICTION: f32 = 0.85;
    /// Fraction of the jump impulse given back after stomping an enemy
    pub const STOMP_BOUNCE: f32 = 0.6;

    /// Player defaults
    pub const PLAYER_W: f32 = 34.0 * 2.0;
    pub const PLAYER_H: f32 = 44.0 * 2.0;
    pub const SPAWN_TILE: (u32, u32) = (3, 6);

    /// Max distance between feet and a platform top that still counts as standing
    pub const PLATFORM_SNAP: f32 = 4.0;
    /// Max distance between feet and an enemy top that still counts as a stomp
    pub const STOMP_TOLERANCE: f32 = 16.0;
    /// Gap left between a resolved body and the tile it touched
    pub const COLLISION_EPSILON: f32 = 0.01;
    /// Row whose top edge is the death line
    pub const DEATH_LINE_ROW: f32 = 11.0;
    /// Where defeated enemies are parked
    pub const OFF_WORLD_X: f32 = -9999.0;

    /// Moving platforms are drawn this tall
    pub const PLATFORM_THICKNESS: f32 = TILE / 3.0;
}

/// Convert a tile count to world pixels
#[inline]
pub fn tiles(n: f32) -> f32 {
    n * consts::TILE
}
