//! Rendering module
//!
//! The scene painter only talks to a `Surface`, so it runs (and is tested)
//! without a browser. `Canvas2d` is the browser implementation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2d;
pub use scene::draw_frame;
pub use surface::{Rect, Sprite, Surface, TextAlign};
