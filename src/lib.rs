//! Cupid Flight - a side-scrolling avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `engine`: Session lifecycle and frame-loop driver
//! - `renderer`: Surface abstraction and heart-shaped barrier drawing
//! - `platform`: Browser/headless host abstraction (frame scheduling, timers)

pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use engine::{Driver, FrameOutcome, Session};
pub use sim::{GameConfig, HitboxMode};

/// Game configuration constants
pub mod consts {
    /// Default surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 400.0;
    pub const SURFACE_HEIGHT: f32 = 700.0;

    /// Actor (Cupid) defaults
    pub const ACTOR_SIZE: f32 = 30.0;
    /// Fixed horizontal position of the actor's left edge
    pub const ACTOR_X: f32 = 50.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;
    /// Vertical opening between top and bottom barrier
    pub const GAP_SIZE: f32 = 200.0;
    /// Horizontal distance between consecutive obstacle spawns
    pub const GAP_SPACING: f32 = 200.0;
    /// Minimum visible height of each barrier segment
    pub const GAP_MARGIN: f32 = 50.0;

    /// Physics (per frame, no delta-time normalization)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_STRENGTH: f32 = 8.0;
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Inset hitbox covers this fraction of each axis
    pub const INSET_HITBOX_FRACTION: f32 = 0.8;

    /// Countdown before a session goes live
    pub const COUNTDOWN_START: u32 = 3;
    pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
}
