//! Scene painter: draws one frame of the world onto a `Surface`
//!
//! Draw order: sky, visible tiles, moving platforms, enemies, player, HUD.

use glam::Vec2;

use super::surface::{Rect, Sprite, Surface, TextAlign};
use crate::consts::{TILE, VIEW_H, VIEW_W};
use crate::sim::{TileCode, TileGrid, World};

const SKY: &str = "#87CEFA";
const DIRT: &str = "#654321";
const GRASS: &str = "#2e8b57";
const SPIKE: &str = "#cc0000";
const POLE: &str = "#333";
const PENNANT: &str = "#ffd700";
const PLATFORM: &str = "#444";
const ENEMY: &str = "#8a2be2";
const EYE_WHITE: &str = "#fff";
const PUPIL: &str = "#000";
const PLAYER_FALLBACK: &str = "#1e90ff";
const PANEL: &str = "rgba(0,0,0,0.5)";
const BANNER: &str = "rgba(0,0,0,0.6)";
const TEXT: &str = "#fff";

const CONTROLS_TEXT: &str = "←/→ or A/D: move | Z/↑/Space/W: jump | R: restart";
pub const GAME_OVER_TEXT: &str = "GAME OVER - Press R";
pub const WIN_TEXT: &str = "YOU WIN! - Press R";

/// Draw a full frame
pub fn draw_frame<S: Surface>(surface: &mut S, world: &World, sprite: &Sprite<S::Image>) {
    let cam = Vec2::new(world.camera.x, world.camera.y);

    surface.clear(VIEW_W, VIEW_H);
    surface.fill_rect(Rect::new(0.0, 0.0, VIEW_W, VIEW_H), SKY);

    draw_tiles(surface, &world.grid, cam);

    for platform in &world.platforms {
        surface.fill_rect(Rect::at(platform.body.pos - cam, platform.body.size), PLATFORM);
    }

    for enemy in world.enemies.iter().filter(|e| e.is_alive()) {
        draw_enemy(surface, enemy.body.pos - cam, enemy.body.size);
    }

    let player = Rect::at(world.player.body.pos - cam, world.player.body.size);
    match sprite {
        Sprite::Ready(image) => surface.draw_image(image, player),
        Sprite::Loading => surface.fill_rect(player, PLAYER_FALLBACK),
    }

    draw_hud(surface, world);
}

/// Tiles in the columns the viewport touches
fn draw_tiles<S: Surface>(surface: &mut S, grid: &TileGrid, cam: Vec2) {
    let start_col = (cam.x / TILE).floor().max(0.0) as usize;
    let end_col = (((cam.x + VIEW_W) / TILE).ceil().max(0.0) as usize).min(grid.cols());

    for row in 0..grid.rows() {
        for col in start_col..end_col {
            let origin = Vec2::new(col as f32 * TILE, row as f32 * TILE) - cam;
            match grid.cell(col, row) {
                TileCode::Ground => {
                    surface.fill_rect(Rect::at(origin, Vec2::splat(TILE)), DIRT);
                    surface.fill_rect(Rect::new(origin.x, origin.y, TILE, 10.0), GRASS);
                }
                TileCode::Spike => surface.fill_triangle(
                    origin + Vec2::new(0.0, TILE),
                    origin + Vec2::new(TILE / 2.0, 12.0),
                    origin + Vec2::new(TILE, TILE),
                    SPIKE,
                ),
                TileCode::Flag => {
                    let mid = origin.x + TILE / 2.0;
                    surface.fill_rect(Rect::new(mid - 3.0, origin.y, 6.0, TILE), POLE);
                    surface.fill_triangle(
                        Vec2::new(mid + 3.0, origin.y + 6.0),
                        Vec2::new(mid + 3.0, origin.y + 24.0),
                        Vec2::new(mid + 28.0, origin.y + 15.0),
                        PENNANT,
                    );
                }
                // Ledge tiles collide but have no artwork
                TileCode::Platform | TileCode::Empty => {}
            }
        }
    }
}

fn draw_enemy<S: Surface>(surface: &mut S, pos: Vec2, size: Vec2) {
    surface.fill_rect(Rect::at(pos, size), ENEMY);
    for eye_x in [6.0, 22.0] {
        surface.fill_rect(Rect::new(pos.x + eye_x, pos.y + 8.0, 8.0, 8.0), EYE_WHITE);
        surface.fill_rect(Rect::new(pos.x + eye_x + 3.0, pos.y + 11.0, 3.0, 3.0), PUPIL);
    }
}

/// Debug readout of the player's state
pub fn debug_lines(world: &World) -> [String; 3] {
    let p = &world.player;
    let pos = p.body.pos;
    let vel = p.body.vel;
    [
        CONTROLS_TEXT.to_string(),
        format!(
            "X: {:.1} (Tile: {}) | Y: {:.1} (Tile: {})",
            pos.x,
            (pos.x / TILE).floor() as i64,
            pos.y,
            (pos.y / TILE).floor() as i64
        ),
        format!(
            "VX: {:.2} | VY: {:.2} | Ground: {}",
            vel.x,
            vel.y,
            if p.on_ground { "YES" } else { "NO" }
        ),
    ]
}

fn draw_hud<S: Surface>(surface: &mut S, world: &World) {
    surface.fill_rect(Rect::new(12.0, 12.0, 400.0, 100.0), PANEL);
    for (i, line) in debug_lines(world).iter().enumerate() {
        let pos = Vec2::new(24.0, 40.0 + 22.0 * i as f32);
        surface.fill_text(line, pos, 16, TextAlign::Start, TEXT);
    }

    if !world.player.alive {
        draw_banner(surface, GAME_OVER_TEXT);
    } else if world.player.win {
        draw_banner(surface, WIN_TEXT);
    }
}

fn draw_banner<S: Surface>(surface: &mut S, text: &str) {
    let rect = Rect::new(VIEW_W / 2.0 - 220.0, VIEW_H / 2.0 - 40.0, 440.0, 80.0);
    surface.fill_rect(rect, BANNER);
    surface.stroke_rect(rect, TEXT);
    surface.fill_text(
        text,
        Vec2::new(VIEW_W / 2.0, VIEW_H / 2.0 + 8.0),
        24,
        TextAlign::Center,
        TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;
    use crate::tuning::Tuning;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Rect(Rect, String),
        Stroke(Rect),
        Triangle(String),
        Image(Rect),
        Text(String, TextAlign),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Recorder {
        fn rects_of(&self, color: &str) -> Vec<Rect> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Rect(r, col) if col == color => Some(*r),
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.cmds
                .iter()
                .filter_map(|c| match c {
                    Cmd::Text(t, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for Recorder {
        type Image = ();

        fn clear(&mut self, _w: f32, _h: f32) {
            self.cmds.push(Cmd::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.cmds.push(Cmd::Rect(rect, color.to_string()));
        }
        fn stroke_rect(&mut self, rect: Rect, _color: &str) {
            self.cmds.push(Cmd::Stroke(rect));
        }
        fn fill_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, color: &str) {
            self.cmds.push(Cmd::Triangle(color.to_string()));
        }
        fn draw_image(&mut self, _image: &(), rect: Rect) {
            self.cmds.push(Cmd::Image(rect));
        }
        fn fill_text(&mut self, text: &str, _pos: Vec2, _size: u32, align: TextAlign, _c: &str) {
            self.cmds.push(Cmd::Text(text.to_string(), align));
        }
    }

    fn world() -> World {
        LevelData::builtin().build_world(Tuning::default()).unwrap()
    }

    #[test]
    fn test_frame_starts_with_clear_and_sky() {
        let mut r = Recorder::default();
        draw_frame(&mut r, &world(), &Sprite::Loading);
        assert_eq!(r.cmds[0], Cmd::Clear);
        assert_eq!(r.cmds[1], Cmd::Rect(Rect::new(0.0, 0.0, VIEW_W, VIEW_H), SKY.into()));
    }

    #[test]
    fn test_player_fallback_until_ready() {
        let w = world();
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        let expected = Rect::at(w.player.body.pos, w.player.body.size);
        assert_eq!(r.rects_of(PLAYER_FALLBACK), vec![expected]);
        assert!(!r.cmds.iter().any(|c| matches!(c, Cmd::Image(_))));

        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Ready(()));
        assert!(r.rects_of(PLAYER_FALLBACK).is_empty());
        assert!(r.cmds.contains(&Cmd::Image(expected)));
    }

    #[test]
    fn test_only_visible_columns_drawn() {
        let mut w = world();
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        // Columns 0..20 visible: all ground, two rows
        assert_eq!(r.rects_of(DIRT).len(), 20 * 2);
        // Spikes at columns 15 and 16
        assert_eq!(r.cmds.iter().filter(|c| **c == Cmd::Triangle(SPIKE.into())).count(), 2);

        // Half-tile offset over the solid run at columns 24..45
        w.camera.x = 24.0 * TILE + 24.0;
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        // Partial columns on both edges are included
        assert_eq!(r.rects_of(DIRT).len(), 21 * 2);
        assert!(r.rects_of(DIRT).iter().all(|d| d.x > -TILE && d.x < VIEW_W));
    }

    #[test]
    fn test_flag_drawn_at_world_end() {
        let mut w = world();
        w.camera.x = w.world_width() - VIEW_W;
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        assert_eq!(r.rects_of(POLE).len(), 1);
        assert!(r.cmds.contains(&Cmd::Triangle(PENNANT.into())));
    }

    #[test]
    fn test_defeated_enemies_not_drawn() {
        let mut w = world();
        w.camera.x = 1000.0;
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        let before = r.rects_of(ENEMY).len();
        assert!(before >= 1);

        w.enemies[0].defeat();
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        assert_eq!(r.rects_of(ENEMY).len(), before - 1);
    }

    #[test]
    fn test_debug_text() {
        let mut w = world();
        w.player.body.vel.x = 1.234;
        w.player.on_ground = true;
        let lines = debug_lines(&w);
        assert_eq!(lines[0], CONTROLS_TEXT);
        assert_eq!(lines[1], "X: 144.0 (Tile: 3) | Y: 288.0 (Tile: 6)");
        assert_eq!(lines[2], "VX: 1.23 | VY: 0.00 | Ground: YES");
    }

    #[test]
    fn test_banners() {
        let mut w = world();
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        assert!(!r.texts().contains(&GAME_OVER_TEXT));
        assert!(!r.texts().contains(&WIN_TEXT));

        w.player.alive = false;
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        assert!(r.cmds.contains(&Cmd::Text(GAME_OVER_TEXT.into(), TextAlign::Center)));
        assert_eq!(r.cmds.iter().filter(|c| matches!(c, Cmd::Stroke(_))).count(), 1);

        w.player.alive = true;
        w.player.win = true;
        let mut r = Recorder::default();
        draw_frame(&mut r, &w, &Sprite::Loading);
        assert!(r.texts().contains(&WIN_TEXT));
    }
}
