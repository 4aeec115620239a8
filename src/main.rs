//! Jump Scroller entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use jump_scroller::sim::{GameEvent, World};

/// Log what happened during one tick
fn log_events(events: &[GameEvent], world: &World) {
    for event in events {
        match event {
            GameEvent::Jumped => log::debug!("Jump at x={:.1}", world.player.body.pos.x),
            GameEvent::EnemyDefeated { index } => log::info!(
                "Enemy {} defeated ({} remaining)",
                index,
                world.enemies_remaining()
            ),
            GameEvent::PlayerKilled => log::info!("Player killed at frame {}", world.frame),
            GameEvent::LevelCleared => log::info!("Level cleared in {} frames", world.frame),
            GameEvent::Restarted => log::info!("Level restarted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, FocusEvent, HtmlCanvasElement, HtmlImageElement,
        KeyboardEvent, Window,
    };

    use jump_scroller::consts::{VIEW_H, VIEW_W};
    use jump_scroller::platform::KeySet;
    use jump_scroller::renderer::{Canvas2d, Sprite, draw_frame};
    use jump_scroller::sim::{World, tick};
    use jump_scroller::{LevelData, Tuning};

    const PLAYER_SPRITE_URL: &str = "player.jpg";

    /// Game instance holding all state
    struct Game {
        world: World,
        keys: KeySet,
        sprite: Sprite<HtmlImageElement>,
        surface: Canvas2d,
        /// Pending requestAnimationFrame handle
        frame_handle: Option<i32>,
        stopped: bool,
    }

    impl Game {
        /// One frame: input snapshot, simulation, render
        fn step(&mut self) {
            let input = self.keys.tick_input();
            let events = tick(&mut self.world, &input);
            super::log_events(&events, &self.world);
            draw_frame(&mut self.surface, &self.world, &self.sprite);
        }
    }

    /// The loop closure, kept alive across frames and dropped on teardown
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Keyboard and focus listeners, kept so they can be removed again
    struct Listeners {
        keydown: Closure<dyn FnMut(KeyboardEvent)>,
        keyup: Closure<dyn FnMut(KeyboardEvent)>,
        blur: Closure<dyn FnMut(FocusEvent)>,
    }

    impl Listeners {
        fn remove(&self, window: &Window) {
            let callbacks: [(&str, &JsValue); 3] = [
                ("keydown", self.keydown.as_ref()),
                ("keyup", self.keyup.as_ref()),
                ("blur", self.blur.as_ref()),
            ];
            for (event, callback) in callbacks {
                let _ = window.remove_event_listener_with_callback(event, callback.unchecked_ref());
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Jump Scroller starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(VIEW_W as u32);
        canvas.set_height(VIEW_H as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let world = load_world(&document)?;
        log::info!(
            "Level loaded: {}x{} tiles, {} enemies, {} platforms",
            world.grid.cols(),
            world.grid.rows(),
            world.enemies.len(),
            world.platforms.len()
        );

        let game = Rc::new(RefCell::new(Game {
            world,
            keys: KeySet::new(),
            sprite: Sprite::Loading,
            surface: Canvas2d::new(ctx),
            frame_handle: None,
            stopped: false,
        }));

        load_sprite(game.clone())?;
        let listeners = setup_input_handlers(&window, &game)?;
        let frame = start_loop(&window, &game)?;
        setup_teardown(&window, game, frame, listeners)?;

        log::info!("Jump Scroller running!");
        Ok(())
    }

    /// Text of an inline `<script type="application/json">` block, if present
    fn inline_json(document: &Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty())
    }

    /// Build the world from page overrides, falling back to the built-ins
    fn load_world(document: &Document) -> Result<World, JsValue> {
        let tuning = match inline_json(document, "tuning") {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        if tuning.lethal_hazards {
            log::info!("Lethal hazards enabled");
        }

        let level = match inline_json(document, "level").map(|json| LevelData::from_json(&json)) {
            Some(Ok(level)) => {
                log::info!("Using level override");
                level
            }
            Some(Err(e)) => {
                log::warn!("Ignoring level override: {}", e);
                LevelData::builtin()
            }
            None => LevelData::builtin(),
        };

        match level.build_world(tuning.clone()) {
            Ok(world) => Ok(world),
            Err(e) => {
                log::warn!("Level rejected ({}), using built-in stage", e);
                LevelData::builtin()
                    .build_world(tuning)
                    .map_err(|e| JsValue::from_str(&e.to_string()))
            }
        }
    }

    /// Start loading the player image; the fallback rectangle is drawn until it decodes
    fn load_sprite(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(PLAYER_SPRITE_URL);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(image.decode()).await {
                Ok(_) => {
                    log::info!("Player sprite ready");
                    game.borrow_mut().sprite = Sprite::Ready(image);
                }
                Err(e) => log::warn!("Player sprite unavailable, keeping placeholder: {:?}", e),
            }
        });
        Ok(())
    }

    fn setup_input_handlers(
        window: &Window,
        game: &Rc<RefCell<Game>>,
    ) -> Result<Listeners, JsValue> {
        let keydown = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                // Keep arrows and space from scrolling the page
                if KeySet::is_mapped(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().keys.press(&key);
            })
        };
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

        let keyup = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            })
        };
        window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;

        // Keyups are lost while unfocused
        let blur = {
            let game = game.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().keys.clear();
            })
        };
        window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;

        Ok(Listeners {
            keydown,
            keyup,
            blur,
        })
    }

    /// Register the frame callback; it re-arms itself after every step
    fn start_loop(window: &Window, game: &Rc<RefCell<Game>>) -> Result<FrameCallback, JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let rearm = callback.clone();
        let loop_window = window.clone();
        let loop_game = game.clone();

        *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
            let mut g = loop_game.borrow_mut();
            if g.stopped {
                return;
            }
            g.step();
            if let Some(cb) = rearm.borrow().as_ref() {
                match loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => g.frame_handle = Some(handle),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }));

        if let Some(cb) = callback.borrow().as_ref() {
            let handle = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            game.borrow_mut().frame_handle = Some(handle);
        }
        Ok(callback)
    }

    /// On page hide: cancel the pending frame, drop the loop and remove listeners
    fn setup_teardown(
        window: &Window,
        game: Rc<RefCell<Game>>,
        frame: FrameCallback,
        listeners: Listeners,
    ) -> Result<(), JsValue> {
        let win = window.clone();
        let mut listeners = Some(listeners);
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            {
                let mut g = game.borrow_mut();
                if g.stopped {
                    return;
                }
                g.stopped = true;
                if let Some(handle) = g.frame_handle.take() {
                    let _ = win.cancel_animation_frame(handle);
                }
                log::info!("Game loop stopped after {} frames", g.world.frame);
            }
            if let Some(listeners) = listeners.take() {
                listeners.remove(&win);
            }
            frame.borrow_mut().take();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Jump Scroller (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    if let Err(e) = headless::run(headless::MAX_FRAMES) {
        log::error!("Headless session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session without a window: hold right, hop at a fixed cadence
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use jump_scroller::sim::{TickInput, tick};
    use jump_scroller::{LevelData, LevelError, Tuning};

    /// One minute at 60 Hz
    pub const MAX_FRAMES: u64 = 3600;
    const HOP_EVERY: u64 = 40;

    pub fn run(max_frames: u64) -> Result<(), LevelError> {
        let level = LevelData::builtin();
        let mut world = level.build_world(Tuning::default())?;
        log::info!(
            "Level loaded: {}x{} tiles, world {}x{} px",
            world.grid.cols(),
            world.grid.rows(),
            world.world_width(),
            world.world_height()
        );

        for frame in 0..max_frames {
            let input = TickInput {
                right: true,
                jump: frame % HOP_EVERY < 2,
                ..Default::default()
            };
            let events = tick(&mut world, &input);
            super::log_events(&events, &world);
            if !world.player.is_playing() {
                break;
            }
        }

        let p = &world.player;
        log::info!(
            "Session over after {} frames: x={:.1} y={:.1} alive={} win={} enemies left={}",
            world.frame,
            p.body.pos.x,
            p.body.pos.y,
            p.alive,
            p.win,
            world.enemies_remaining()
        );
        Ok(())
    }
}
