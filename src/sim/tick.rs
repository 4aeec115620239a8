//! Per-frame simulation step
//!
//! One call advances the world by one display frame. Physics constants are
//! tuned for ~60 Hz; at other refresh rates the game runs faster or slower.

use super::collision::resolve_tiles;
use super::state::{GameEvent, MovingPlatform, Player, World};
use super::tile::TileCode;
use crate::consts::{COLLISION_EPSILON, VIEW_W};
use crate::tuning::Tuning;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl TickInput {
    /// Exactly one horizontal direction is held
    #[inline]
    pub fn steering(&self) -> bool {
        self.left != self.right
    }
}

/// Advance the world by one frame, returning what happened
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        world.reset();
        events.push(GameEvent::Restarted);
    }

    if world.player.is_playing() {
        update_player(world, input, &mut events);
        world.frame += 1;
    }

    let target_x = world.player.body.center().x;
    let world_w = world.world_width();
    world.camera.follow(target_x, world_w, VIEW_W);

    events
}

/// Player physics plus every interaction it drives (platforms, tiles,
/// enemies, hazards, goal), in that order
fn update_player(world: &mut World, input: &TickInput, events: &mut Vec<GameEvent>) {
    let World {
        grid,
        tuning,
        player,
        enemies,
        platforms,
        ..
    } = world;

    run_and_jump(player, input, tuning, events);
    player.body.vel.y += tuning.gravity;

    for platform in platforms.iter_mut() {
        platform.patrol.advance(&mut platform.body);
        if stands_on(player, platform, tuning.platform_snap) {
            player.body.pos.y = platform.top() - player.body.size.y - COLLISION_EPSILON;
            player.body.vel.y = 0.0;
            player.on_ground = true;
            if !input.steering() {
                player.body.pos.x += platform.body.vel.x;
            }
        }
    }

    let col = resolve_tiles(&mut player.body, grid);
    // Never cleared here: only a jump or a reset drops the flag
    player.on_ground = col.on_ground || player.on_ground;

    for (index, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.is_alive() {
            continue;
        }
        enemy.patrol.advance(&mut enemy.body);
        if !player.body.overlaps(&enemy.body) {
            continue;
        }
        let falling = player.body.vel.y > 0.0;
        let feet_on_top = player.body.bottom() - enemy.body.pos.y < tuning.stomp_tolerance;
        if falling && feet_on_top {
            enemy.defeat();
            player.body.vel.y = tuning.stomp_vy();
            events.push(GameEvent::EnemyDefeated { index });
        } else {
            kill(player, events);
        }
    }

    let center = player.body.center();
    match grid.tile_at(center.x, center.y) {
        TileCode::Spike => hazard(player, tuning, events),
        TileCode::Flag if !player.win => {
            player.win = true;
            events.push(GameEvent::LevelCleared);
        }
        _ => {}
    }
    if player.body.pos.y > tuning.death_line_y {
        hazard(player, tuning, events);
    }
}

fn run_and_jump(player: &mut Player, input: &TickInput, t: &Tuning, events: &mut Vec<GameEvent>) {
    let vel = &mut player.body.vel;
    let accel = if player.on_ground {
        t.move_speed
    } else {
        t.air_speed
    };
    if input.left {
        vel.x = (vel.x - accel).max(-t.max_run);
    }
    if input.right {
        vel.x = (vel.x + accel).min(t.max_run);
    }
    if !input.left && !input.right && player.on_ground {
        vel.x *= t.friction;
    }

    if input.jump && player.on_ground {
        vel.y = t.jump_vy;
        player.on_ground = false;
        events.push(GameEvent::Jumped);
    }
}

/// Feet resting on the platform top while not moving upward
fn stands_on(player: &Player, platform: &MovingPlatform, snap: f32) -> bool {
    let b = &player.body;
    let p = &platform.body;
    b.vel.y >= 0.0
        && b.right() > p.pos.x
        && b.pos.x < p.right()
        && (b.bottom() - platform.top()).abs() < snap
}

fn kill(player: &mut Player, events: &mut Vec<GameEvent>) {
    if player.alive {
        player.alive = false;
        events.push(GameEvent::PlayerKilled);
    }
}

/// Spike tile or death line.
///
/// Non-lethal mode keeps the observed rule of assigning `alive = true`, which
/// also revives a player killed earlier in the same frame.
fn hazard(player: &mut Player, t: &Tuning, events: &mut Vec<GameEvent>) {
    if t.lethal_hazards {
        kill(player, events);
    } else {
        player.alive = true;
    }
}
