//! Data-driven physics parameters
//!
//! Defaults come from `consts`. A JSON document may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and rule parameters for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub move_speed: f32,
    pub air_speed: f32,
    pub max_run: f32,
    pub jump_vy: f32,
    pub friction: f32,
    pub stomp_bounce: f32,
    pub platform_snap: f32,
    pub stomp_tolerance: f32,
    /// Falling past this y (player top edge) triggers the death-line rule
    pub death_line_y: f32,
    /// When false (the default), spikes and the death line assign
    /// `alive = true` instead of killing. Set to true for lethal hazards.
    pub lethal_hazards: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            air_speed: AIR_SPEED,
            max_run: MAX_RUN,
            jump_vy: JUMP_VY,
            friction: FRICTION,
            stomp_bounce: STOMP_BOUNCE,
            platform_snap: PLATFORM_SNAP,
            stomp_tolerance: STOMP_TOLERANCE,
            death_line_y: crate::tiles(DEATH_LINE_ROW),
            lethal_hazards: false,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Vertical velocity given to the player after a stomp
    #[inline]
    pub fn stomp_vy(&self) -> f32 {
        self.jump_vy * self.stomp_bounce
    }
}
