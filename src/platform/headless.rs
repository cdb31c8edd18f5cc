//! Headless host
//!
//! Callbacks are queued instead of scheduled; the caller pumps them with
//! [`Driver::advance_frame`] and [`Driver::advance_second`]. Used by the
//! native demo and the test suite.

use std::collections::VecDeque;

use super::Host;
use crate::engine::{Driver, FrameOutcome};
use crate::renderer::DrawList;

#[derive(Debug, Default)]
pub struct HeadlessHost {
    surface: Option<DrawList>,
    next_handle: u32,
    /// Scheduled frame callbacks not yet delivered
    pending_frames: VecDeque<u32>,
    /// Running countdown timers
    timers: Vec<u32>,
    /// Total frame callbacks ever requested
    pub frames_requested: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            surface: Some(DrawList::new()),
            ..Default::default()
        }
    }

    /// A host whose drawing surface cannot be acquired
    pub fn without_surface() -> Self {
        Self::default()
    }

    /// Last frame drawn, if any
    pub fn draw_list(&self) -> Option<&DrawList> {
        self.surface.as_ref()
    }

    pub fn pending_frames(&self) -> usize {
        self.pending_frames.len()
    }

    pub fn running_timers(&self) -> usize {
        self.timers.len()
    }

    fn allocate(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Deliver the oldest scheduled frame, as a browser would on refresh
    fn take_frame(&mut self) -> Option<u32> {
        self.pending_frames.pop_front()
    }
}

impl Host for HeadlessHost {
    type Surface = DrawList;
    type FrameHandle = u32;
    type TimerHandle = u32;

    fn surface(&mut self) -> Option<&mut DrawList> {
        self.surface.as_mut()
    }

    fn request_frame(&mut self) -> Option<u32> {
        let handle = self.allocate();
        self.pending_frames.push_back(handle);
        self.frames_requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.pending_frames.retain(|&h| h != handle);
    }

    fn start_countdown(&mut self) -> Option<u32> {
        let handle = self.allocate();
        self.timers.push(handle);
        Some(handle)
    }

    fn cancel_countdown(&mut self, handle: u32) {
        self.timers.retain(|&h| h != handle);
    }
}

impl Driver<HeadlessHost> {
    /// Fire the next scheduled frame callback, if any
    pub fn advance_frame(&mut self) -> Option<FrameOutcome> {
        self.host_mut().take_frame()?;
        Some(self.on_frame())
    }

    /// Let one second pass; fires the countdown timer if it is running
    pub fn advance_second(&mut self) -> bool {
        if self.host().running_timers() == 0 {
            return false;
        }
        self.on_countdown();
        true
    }
}
