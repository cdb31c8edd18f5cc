//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per display frame
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod config;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::should_jump;
pub use config::{GameConfig, HitboxMode};
pub use rect::Rect;
pub use state::{Actor, GameState, Obstacle, Phase};
pub use tick::{EndCause, TickOutcome, actor_hitbox, obstacle_hitboxes, spawn_obstacle, tick};
