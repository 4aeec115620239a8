//! Collision resolution against the tile grid
//!
//! Axis-separated and point-sampled: five points of the body's box (four
//! corners, then the center) are probed one velocity step ahead, X first and
//! then Y. The first sample that lands in a solid tile snaps the body flush
//! against that tile and zeroes the velocity on that axis.
//!
//! Samples are taken once from the pre-move position and reused for both
//! axes. An axis with zero velocity is not tested at all, so a body already
//! resting inside a wall is not pushed out.

use glam::Vec2;

use super::state::Body;
use super::tile::TileGrid;
use crate::consts::{COLLISION_EPSILON, TILE};

/// Result of resolving one body against the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// A downward move was stopped by a solid tile
    pub on_ground: bool,
}

/// Probe points in tie-break order: top-left, top-right, bottom-left,
/// bottom-right, center
fn sample_points(body: &Body) -> [Vec2; 5] {
    let Body { pos, size, .. } = *body;
    [
        pos,
        Vec2::new(pos.x + size.x, pos.y),
        Vec2::new(pos.x, pos.y + size.y),
        pos + size,
        pos + size / 2.0,
    ]
}

/// World coordinate of the tile edge a moving body should stop against
fn snap_to_edge(probe: f32, vel: f32, extent: f32) -> f32 {
    let cell = (probe / TILE).floor();
    if vel > 0.0 {
        cell * TILE - extent - COLLISION_EPSILON
    } else {
        (cell + 1.0) * TILE + COLLISION_EPSILON
    }
}

/// Move `body` by its velocity, stopping at solid tiles
pub fn resolve_tiles(body: &mut Body, grid: &TileGrid) -> CollisionResult {
    let samples = sample_points(body);
    let mut result = CollisionResult::default();

    if body.vel.x != 0.0 {
        let vx = body.vel.x;
        let mut x = body.pos.x + vx;
        if let Some(s) = samples
            .iter()
            .find(|s| grid.tile_at(s.x + vx, s.y).is_solid())
        {
            x = snap_to_edge(s.x + vx, vx, body.size.x);
            body.vel.x = 0.0;
        }
        body.pos.x = x;
    }

    if body.vel.y != 0.0 {
        let vy = body.vel.y;
        let mut y = body.pos.y + vy;
        if let Some(s) = samples
            .iter()
            .find(|s| grid.tile_at(s.x, s.y + vy).is_solid())
        {
            y = snap_to_edge(s.y + vy, vy, body.size.y);
            if vy > 0.0 {
                result.on_ground = true;
            }
            body.vel.y = 0.0;
        }
        body.pos.y = y;
    }

    result
}
