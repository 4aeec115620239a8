//! Keyboard state
//!
//! Key events only update the held set; the frame loop reads it once per
//! step. A press and release between two frames is not seen.

use std::collections::HashSet;

use crate::sim::TickInput;

const LEFT: &[&str] = &["arrowleft", "a"];
const RIGHT: &[&str] = &["arrowright", "d"];
const JUMP: &[&str] = &[" ", "arrowup", "w", "z"];
const RESTART: &[&str] = &["r"];

/// Currently held keys, by lowercased `KeyboardEvent.key`
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    held: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    /// Drop everything (focus lost, keyups will not arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(&key.to_lowercase())
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    /// Resolve held keys into this frame's actions
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.any_held(LEFT),
            right: self.any_held(RIGHT),
            jump: self.any_held(JUMP),
            restart: self.any_held(RESTART),
        }
    }

    /// Whether the key drives any action
    pub fn is_mapped(key: &str) -> bool {
        let key = key.to_lowercase();
        [LEFT, RIGHT, JUMP, RESTART]
            .iter()
            .any(|group| group.contains(&key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let mut keys = KeySet::new();
        keys.press("ArrowLeft");
        keys.press("D");
        assert!(keys.is_held("arrowleft"));
        let input = keys.tick_input();
        assert!(input.left);
        assert!(input.right);
        assert!(!input.steering());

        keys.release("ARROWLEFT");
        assert!(!keys.tick_input().left);
    }

    #[test]
    fn test_jump_and_restart_keys() {
        for key in [" ", "ArrowUp", "w", "Z"] {
            let mut keys = KeySet::new();
            keys.press(key);
            assert!(keys.tick_input().jump, "{key:?}");
        }
        let mut keys = KeySet::new();
        keys.press("R");
        assert_eq!(
            keys.tick_input(),
            TickInput {
                restart: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unmapped_and_clear() {
        let mut keys = KeySet::new();
        keys.press("q");
        assert_eq!(keys.tick_input(), TickInput::default());
        assert!(!KeySet::is_mapped("q"));
        assert!(KeySet::is_mapped("ArrowRight"));

        keys.press("a");
        keys.clear();
        assert_eq!(keys.tick_input(), TickInput::default());
    }
}
