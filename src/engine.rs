//! Session lifecycle and frame-loop driver
//!
//! [`Session`] owns the simulation and decides what a frame does.
//! [`Driver`] owns the scheduling handles for one host: at most one pending
//! frame callback and one countdown timer exist at any time, and both are
//! cancelled before a new session starts or when the shell goes away.

use crate::platform::Host;
use crate::renderer::{Surface, render};
use crate::sim::{GameConfig, GameState, Phase, TickOutcome, tick};

/// What the driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Session was not running; nothing was simulated or drawn
    Inactive,
    /// Frame simulated and drawn; schedule another
    Continue,
    /// The session just ended
    GameOver,
}

/// One game's simulation state plus its configuration
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    state: GameState,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        Self { config, state }
    }

    /// Clear the field and enter the countdown, keeping the current config
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        log::info!("New session, going live in {}", self.state.countdown());
    }

    /// Replace the config, then [`Session::reset`]
    ///
    /// The RNG stream carries on from where the previous session left it.
    pub fn reset_with(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    /// Jump input; ignored unless the session is running
    pub fn jump(&mut self) -> bool {
        self.state.jump(&self.config)
    }

    /// One countdown second elapsed
    pub fn countdown_step(&mut self) -> Phase {
        let phase = self.state.countdown_step();
        if phase == Phase::Running {
            log::info!("Session live");
        }
        phase
    }

    /// Simulate one frame, and draw it unless the session ended on it
    pub fn frame(&mut self, surface: &mut impl Surface) -> FrameOutcome {
        match tick(&mut self.state, &self.config) {
            TickOutcome::Inactive => FrameOutcome::Inactive,
            TickOutcome::Ended(_) => FrameOutcome::GameOver,
            TickOutcome::Survived => {
                render(&self.state, &self.config, surface);
                FrameOutcome::Continue
            }
        }
    }

    /// Stop advancing without ending the game (shell teardown)
    pub fn halt(&mut self) {
        if matches!(self.state.phase, Phase::Countdown(_) | Phase::Running) {
            self.state.phase = Phase::Idle;
        }
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn countdown(&self) -> u32 {
        self.state.countdown()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Runs a [`Session`] on a host's frame and timer callbacks
pub struct Driver<H: Host> {
    session: Session,
    host: H,
    frame: Option<H::FrameHandle>,
    timer: Option<H::TimerHandle>,
}

impl<H: Host> Driver<H> {
    pub fn new(session: Session, host: H) -> Self {
        Self {
            session,
            host,
            frame: None,
            timer: None,
        }
    }

    /// Start (or restart) a session from any state
    pub fn reset_game(&mut self) {
        self.cancel_pending();
        self.session.reset();
        self.start_countdown();
    }

    /// Like [`Driver::reset_game`], with new tuning for the next session
    pub fn reset_game_with(&mut self, config: GameConfig) {
        self.cancel_pending();
        self.session.reset_with(config);
        self.start_countdown();
    }

    pub fn jump(&mut self) -> bool {
        self.session.jump()
    }

    /// Countdown timer fired
    pub fn on_countdown(&mut self) {
        if !matches!(self.session.phase(), Phase::Countdown(_)) {
            // Stray tick from a timer that should be gone
            self.cancel_timer();
            return;
        }
        if self.session.countdown_step() == Phase::Running {
            self.cancel_timer();
            self.start_loop();
        }
    }

    /// Frame callback fired
    pub fn on_frame(&mut self) -> FrameOutcome {
        // The callback that got us here is spent
        self.frame = None;

        let Some(surface) = self.host.surface() else {
            return FrameOutcome::Inactive;
        };
        let outcome = self.session.frame(surface);
        if outcome == FrameOutcome::Continue {
            self.frame = self.host.request_frame();
        }
        outcome
    }

    /// The owning shell is going away: stop every callback
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.session.halt();
        log::info!("Driver torn down");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// True while a frame callback is scheduled
    pub fn frame_pending(&self) -> bool {
        self.frame.is_some()
    }

    /// True while the countdown timer is running
    pub fn timer_pending(&self) -> bool {
        self.timer.is_some()
    }

    fn start_countdown(&mut self) {
        self.timer = self.host.start_countdown();
        if self.timer.is_none() {
            log::warn!("Host refused countdown timer; session stays in countdown");
        }
    }

    fn start_loop(&mut self) {
        if self.host.surface().is_none() {
            log::warn!("No drawing surface available, frame loop not started");
            return;
        }
        self.frame = self.host.request_frame();
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.host.cancel_countdown(handle);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};

    #[test]
    fn test_frame_draws_only_while_running() {
        let mut session = Session::new(GameConfig::default(), 3);
        let mut list = DrawList::new();
        session.reset();
        assert_eq!(session.frame(&mut list), FrameOutcome::Inactive);
        assert!(list.0.is_empty());

        for _ in 0..3 {
            session.countdown_step();
        }
        assert_eq!(session.frame(&mut list), FrameOutcome::Continue);
        assert_eq!(list.0[0], DrawCommand::Clear);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_terminal_frame_is_not_drawn() {
        let mut config = GameConfig::default();
        config.gravity = 400.0;
        let mut session = Session::new(config, 3);
        session.reset();
        for _ in 0..3 {
            session.countdown_step();
        }
        let mut list = DrawList::new();
        assert_eq!(session.frame(&mut list), FrameOutcome::GameOver);
        assert!(list.0.is_empty());
        assert!(session.is_game_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_halt_keeps_game_over() {
        let mut session = Session::new(GameConfig::default(), 3);
        session.reset();
        session.halt();
        assert_eq!(session.phase(), Phase::Idle);

        let mut state_over = Session::new(GameConfig::default(), 3);
        state_over.state.phase = Phase::GameOver;
        state_over.halt();
        assert!(state_over.is_game_over());
    }

    #[test]
    fn test_reset_with_replaces_config() {
        let mut session = Session::new(GameConfig::default(), 3);
        session.reset();
        for _ in 0..3 {
            session.countdown_step();
        }
        let mut list = DrawList::new();
        session.frame(&mut list);

        let mut config = GameConfig::default();
        config.height = 300.0;
        config.hitbox = crate::sim::HitboxMode::Inset;
        session.reset_with(config.clone());
        assert_eq!(session.config(), &config);
        assert_eq!(session.phase(), Phase::Countdown(3));
        assert_eq!(session.score(), 0);
        assert!(session.state().obstacles.is_empty());
        assert_eq!(session.state().actor.y, 150.0);
    }
}
