//! Game state and core simulation types
//!
//! `World` owns every mutable entity for one session plus the snapshot used
//! to restore them on restart.

use glam::Vec2;

use super::camera::Camera;
use super::tile::TileGrid;
use crate::consts::*;
use crate::tuning::Tuning;

/// An axis-aligned moving box: top-left position, size and per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Horizontal patrol range. The body's left edge stays in `[left, right - width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub left: f32,
    pub right: f32,
}

impl Patrol {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Move one frame and reflect velocity at either bound
    pub fn advance(&self, body: &mut Body) {
        body.pos.x += body.vel.x;
        if body.pos.x < self.left {
            body.pos.x = self.left;
            body.vel.x = -body.vel.x;
        }
        if body.right() > self.right {
            body.pos.x = self.right - body.size.x;
            body.vel.x = -body.vel.x;
        }
    }
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: Body,
    pub on_ground: bool,
    /// false = game over
    pub alive: bool,
    /// true = level complete
    pub win: bool,
}

impl Player {
    pub fn spawned_at(spawn: Vec2) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(PLAYER_W, PLAYER_H)),
            on_ground: false,
            alive: true,
            win: false,
        }
    }

    /// Input and physics only apply while this holds
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.alive && !self.win
    }
}

/// Enemy lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Alive,
    /// Stomped. Kept in storage so indices stay stable for restart.
    Defeated,
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub patrol: Patrol,
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(body: Body, patrol: Patrol) -> Self {
        Self {
            body,
            patrol,
            state: EnemyState::Alive,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Alive
    }

    /// Mark defeated, collapse to zero size and park off-world
    pub fn defeat(&mut self) {
        self.state = EnemyState::Defeated;
        self.body.pos.x = OFF_WORLD_X;
        self.body.size = Vec2::ZERO;
    }
}

/// A horizontally patrolling platform the player can ride
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingPlatform {
    pub body: Body,
    pub patrol: Patrol,
}

impl MovingPlatform {
    pub fn new(body: Body, patrol: Patrol) -> Self {
        Self { body, patrol }
    }

    /// Top surface y
    #[inline]
    pub fn top(&self) -> f32 {
        self.body.pos.y
    }
}

/// Something that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    /// Enemy at this storage index was stomped
    EnemyDefeated { index: usize },
    PlayerKilled,
    LevelCleared,
    Restarted,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct World {
    pub grid: TileGrid,
    pub tuning: Tuning,
    /// Player spawn point (top-left, world pixels)
    pub spawn: Vec2,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<MovingPlatform>,
    pub camera: Camera,
    /// Frames simulated since the last restart
    pub frame: u64,
    initial_enemies: Vec<Enemy>,
    initial_platforms: Vec<MovingPlatform>,
}

impl World {
    /// Create a world. The given entities are captured as the restart snapshot.
    pub fn new(
        grid: TileGrid,
        spawn: Vec2,
        enemies: Vec<Enemy>,
        platforms: Vec<MovingPlatform>,
        tuning: Tuning,
    ) -> Self {
        Self {
            grid,
            tuning,
            spawn,
            player: Player::spawned_at(spawn),
            initial_enemies: enemies.clone(),
            initial_platforms: platforms.clone(),
            enemies,
            platforms,
            camera: Camera::default(),
            frame: 0,
        }
    }

    /// Restore every mutable entity to its starting state.
    ///
    /// Entity storage is overwritten in place; indices stay valid.
    pub fn reset(&mut self) {
        self.player = Player::spawned_at(self.spawn);
        for (enemy, initial) in self.enemies.iter_mut().zip(&self.initial_enemies) {
            *enemy = *initial;
        }
        for (platform, initial) in self.platforms.iter_mut().zip(&self.initial_platforms) {
            *platform = *initial;
        }
        self.camera = Camera::default();
        self.frame = 0;
    }

    #[inline]
    pub fn world_width(&self) -> f32 {
        self.grid.world_width()
    }

    #[inline]
    pub fn world_height(&self) -> f32 {
        self.grid.world_height()
    }

    /// Number of enemies not yet defeated
    pub fn enemies_remaining(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }
}
