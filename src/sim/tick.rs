//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame. There is no
//! delta-time scaling: physics constants are expressed per frame.

use rand::Rng;

use super::config::{GameConfig, HitboxMode};
use super::rect::Rect;
use super::state::{GameState, Obstacle, Phase};
use crate::consts::{ACTOR_X, INSET_HITBOX_FRACTION};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    /// Actor touched a barrier
    Collision,
    /// Actor left the top or bottom of the surface
    OutOfBounds,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not running, nothing changed
    Inactive,
    /// Frame survived; score was incremented
    Survived,
    /// Terminal condition detected this frame
    Ended(EndCause),
}

/// Advance the game state by one frame
///
/// Order matters: physics, scroll, cull, spawn, collision, then score. On a
/// terminal frame the score is left untouched.
pub fn tick(state: &mut GameState, config: &GameConfig) -> TickOutcome {
    if state.phase != Phase::Running {
        return TickOutcome::Inactive;
    }

    // Semi-implicit Euler
    state.actor.velocity += config.gravity;
    state.actor.y += state.actor.velocity;

    for obstacle in &mut state.obstacles {
        obstacle.x -= config.scroll_speed;
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.x > -config.obstacle_width);
    if state.obstacles.len() != before {
        log::debug!("Culled {} obstacle(s)", before - state.obstacles.len());
    }

    let needs_spawn = state
        .obstacles
        .last()
        .is_none_or(|last| last.x < config.width - config.gap_spacing);
    if needs_spawn {
        spawn_obstacle(state, config);
    }

    if let Some(cause) = check_terminal(state, config) {
        state.phase = Phase::GameOver;
        log::info!("Game over ({:?}) with score {}", cause, state.score);
        return TickOutcome::Ended(cause);
    }

    state.score += 1;
    TickOutcome::Survived
}

/// Append an obstacle at the right edge with a random opening
pub fn spawn_obstacle(state: &mut GameState, config: &GameConfig) {
    let (min, span) = config.gap_start_range();
    let gap_start = state.rng_state.rng().random::<f32>() * span + min;
    log::debug!("Spawn obstacle at x={} gap_start={:.1}", config.width, gap_start);
    state.obstacles.push(Obstacle {
        x: config.width,
        gap_start,
    });
}

/// Collision box for the actor at its current position
pub fn actor_hitbox(state: &GameState, config: &GameConfig) -> Rect {
    let full = Rect::new(ACTOR_X, state.actor.y, config.actor_size, config.actor_size);
    match config.hitbox {
        HitboxMode::Full => full,
        HitboxMode::Inset => full.inset(INSET_HITBOX_FRACTION),
    }
}

/// Top and bottom barrier boxes for an obstacle
pub fn obstacle_hitboxes(obstacle: &Obstacle, config: &GameConfig) -> (Rect, Rect) {
    let gap_end = obstacle.gap_start + config.gap_size;
    let top = Rect::new(obstacle.x, 0.0, config.obstacle_width, obstacle.gap_start);
    let bottom = Rect::new(
        obstacle.x,
        gap_end,
        config.obstacle_width,
        config.height - gap_end,
    );
    (top, bottom)
}

fn check_terminal(state: &GameState, config: &GameConfig) -> Option<EndCause> {
    let y = state.actor.y;
    if y < 0.0 || y > config.actor_max_y() {
        return Some(EndCause::OutOfBounds);
    }

    let hitbox = actor_hitbox(state, config);
    let hit = state.obstacles.iter().any(|obstacle| {
        let (top, bottom) = obstacle_hitboxes(obstacle, config);
        hitbox.intersects(&top) || hitbox.intersects(&bottom)
    });
    hit.then_some(EndCause::Collision)
}
