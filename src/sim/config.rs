//! Game configuration
//!
//! Every field is optional when deserialized; missing fields fall back to the
//! defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Shape of the actor's collision box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitboxMode {
    /// The full drawn square
    #[default]
    Full,
    /// A centered box covering 80% of each axis (more forgiving)
    Inset,
}

/// Tuning values for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Surface width (pixels)
    pub width: f32,
    /// Surface height (pixels)
    pub height: f32,
    /// Side length of the square actor (pixels)
    pub actor_size: f32,
    /// Barrier width (pixels)
    pub obstacle_width: f32,
    /// Maximum height of one heart tile when drawing a barrier (pixels)
    pub obstacle_height: f32,
    /// Vertical opening between top and bottom barrier (pixels)
    pub gap_size: f32,
    /// Horizontal distance between consecutive spawns (pixels)
    pub gap_spacing: f32,
    /// Downward acceleration (pixels/frame²)
    pub gravity: f32,
    /// Upward speed set by a jump (pixels/frame)
    pub jump_strength: f32,
    /// Leftward obstacle speed (pixels/frame)
    pub scroll_speed: f32,
    pub hitbox: HitboxMode,
    /// RNG seed for gap placement; the host picks one when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            actor_size: ACTOR_SIZE,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            gap_size: GAP_SIZE,
            gap_spacing: GAP_SPACING,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            scroll_speed: SCROLL_SPEED,
            hitbox: HitboxMode::Full,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Vertical center for a freshly spawned actor
    pub fn actor_start_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Largest valid actor `y` before the session ends
    pub fn actor_max_y(&self) -> f32 {
        self.height - self.actor_size
    }

    /// Range of random gap offsets: `(min, span)`
    pub fn gap_start_range(&self) -> (f32, f32) {
        (GAP_MARGIN, self.height - self.gap_size - 2.0 * GAP_MARGIN)
    }
}
