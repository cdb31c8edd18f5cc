//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::consts::COUNTDOWN_START;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No session started yet
    #[default]
    Idle,
    /// Waiting to go live, seconds remaining
    Countdown(u32),
    /// Simulation advancing every frame
    Running,
    /// Session ended by collision or leaving the surface
    GameOver,
}

/// The player-controlled Cupid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top edge (pixels, y down)
    pub y: f32,
    /// Pixels per frame, positive is downward
    pub velocity: f32,
}

impl Actor {
    /// Actor at rest in the vertical center of the surface
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            y: config.actor_start_y(),
            velocity: 0.0,
        }
    }
}

/// A top/bottom barrier pair with an opening between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (pixels)
    pub x: f32,
    /// Height of the top barrier, where the opening begins
    pub gap_start: f32,
}

/// Seeded gap-placement RNG, serialized with its stream position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    rng: Pcg32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub actor: Actor,
    /// Obstacles in spawn order (ascending spawn x)
    pub obstacles: Vec<Obstacle>,
    /// Frames survived in the current session
    pub score: u64,
    pub phase: Phase,
    pub rng_state: RngState,
}

impl GameState {
    /// Create an idle state; call [`GameState::reset`] to begin a session
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            actor: Actor::centered(config),
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::Idle,
            rng_state: RngState::new(seed),
        }
    }

    /// Start a fresh session: clear obstacles, center the actor, zero the
    /// score and enter the countdown
    pub fn reset(&mut self, config: &GameConfig) {
        self.actor = Actor::centered(config);
        self.obstacles.clear();
        self.score = 0;
        self.phase = Phase::Countdown(COUNTDOWN_START);
    }

    /// Set the actor's velocity to the jump impulse (only while running)
    ///
    /// Jumps replace the current velocity rather than adding to it.
    pub fn jump(&mut self, config: &GameConfig) -> bool {
        if self.is_active() {
            self.actor.velocity = -config.jump_strength;
            true
        } else {
            false
        }
    }

    /// One countdown second elapsed. Returns the new phase.
    pub fn countdown_step(&mut self) -> Phase {
        if let Phase::Countdown(n) = self.phase {
            self.phase = if n > 1 {
                Phase::Countdown(n - 1)
            } else {
                Phase::Running
            };
        }
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Running
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Seconds left before the session goes live (0 once running)
    pub fn countdown(&self) -> u32 {
        match self.phase {
            Phase::Countdown(n) => n,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 1);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.actor.y, 350.0);
        assert!(!state.is_active());
    }

    #[test]
    fn test_reset_enters_countdown() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        state.score = 42;
        state.actor = Actor { y: 10.0, velocity: 3.0 };
        state.obstacles.push(Obstacle { x: 100.0, gap_start: 60.0 });
        state.phase = Phase::GameOver;

        state.reset(&config);
        assert_eq!(state.phase, Phase::Countdown(3));
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.actor, Actor::centered(&config));
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_countdown_reaches_running() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        state.reset(&config);
        assert_eq!(state.countdown(), 3);
        assert_eq!(state.countdown_step(), Phase::Countdown(2));
        assert_eq!(state.countdown_step(), Phase::Countdown(1));
        assert_eq!(state.countdown_step(), Phase::Running);
        assert_eq!(state.countdown(), 0);
        // Further steps are ignored
        assert_eq!(state.countdown_step(), Phase::Running);
    }

    #[test]
    fn test_jump_only_while_running() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 1);
        state.reset(&config);
        assert!(!state.jump(&config));
        assert_eq!(state.actor.velocity, 0.0);

        state.phase = Phase::Running;
        state.actor.velocity = 12.0;
        assert!(state.jump(&config));
        assert_eq!(state.actor.velocity, -8.0);
        // Jumps do not stack
        assert!(state.jump(&config));
        assert_eq!(state.actor.velocity, -8.0);

        state.phase = Phase::GameOver;
        state.actor.velocity = 1.0;
        assert!(!state.jump(&config));
        assert_eq!(state.actor.velocity, 1.0);
    }
}
