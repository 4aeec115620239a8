//! Platform abstraction layer
//!
//! Host-independent pieces of the browser glue:
//! - Held-key tracking and key-to-action mapping

pub mod input;

pub use input::KeySet;
