//! Demo autopilot
//!
//! Steers toward the opening of the nearest obstacle the actor has not yet
//! cleared. Used by the native demo run.

use super::config::GameConfig;
use super::state::GameState;
use crate::consts::ACTOR_X;

/// Distance kept between the actor and the lower edge of the opening
const FLOOR_MARGIN: f32 = 20.0;

/// Decide whether to jump before the next tick
pub fn should_jump(state: &GameState, config: &GameConfig) -> bool {
    if !state.is_active() {
        return false;
    }

    // Lowest acceptable actor bottom edge
    let floor = state
        .obstacles
        .iter()
        .find(|o| o.x + config.obstacle_width > ACTOR_X)
        .map(|o| o.gap_start + config.gap_size - FLOOR_MARGIN)
        .unwrap_or(config.height * 0.6);

    // Where the bottom edge lands after the next integration step
    let next_bottom =
        state.actor.y + state.actor.velocity + config.gravity + config.actor_size;
    next_bottom > floor
}
