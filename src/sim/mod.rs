//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame
//! - Stable iteration order (by storage index)
//! - No rendering, logging or platform dependencies

pub mod camera;
pub mod collision;
pub mod state;
pub mod tick;
pub mod tile;

pub use camera::Camera;
pub use collision::{CollisionResult, resolve_tiles};
pub use state::{Body, Enemy, EnemyState, GameEvent, MovingPlatform, Patrol, Player, World};
pub use tick::{TickInput, tick};
pub use tile::{TileCode, TileGrid};
