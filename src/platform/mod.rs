//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Per-frame scheduling (requestAnimationFrame on web)
//! - The one-second countdown timer
//! - Access to the drawing surface

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessHost;

use crate::renderer::Surface;

/// Services a [`crate::Driver`] needs from its environment
///
/// Handles returned by `request_frame`/`start_countdown` identify one
/// scheduled callback each and are handed back for cancellation.
pub trait Host {
    type Surface: Surface;
    type FrameHandle;
    type TimerHandle;

    /// The drawing surface, if one could be acquired
    fn surface(&mut self) -> Option<&mut Self::Surface>;

    /// Ask for exactly one callback on the next display refresh
    fn request_frame(&mut self) -> Option<Self::FrameHandle>;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);

    /// Start a repeating one-second timer for the countdown
    fn start_countdown(&mut self) -> Option<Self::TimerHandle>;
    fn cancel_countdown(&mut self, handle: Self::TimerHandle);
}
