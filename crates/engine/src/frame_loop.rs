//! Cancellable per-frame gravity driver.
//!
//! The host calls [`FrameLoop::on_frame`] once per display refresh. While the
//! loop is armed, each call feeds the time since the previous frame into
//! [`GameState::tick`]. Pausing or ending the game cancels the loop outright:
//! later frames do nothing, and re-arming sets a fresh baseline so the time
//! spent paused is never replayed as gravity.

use blockfall_core::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLoop {
    /// Timestamp of the previous frame; `None` while cancelled.
    last_frame_ms: Option<u64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the loop with `now_ms` as the elapsed-time baseline.
    pub fn arm(&mut self, now_ms: u64) {
        self.last_frame_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.last_frame_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.last_frame_ms.is_some()
    }

    /// Run one frame. Returns true if gravity moved or locked the piece.
    ///
    /// A cancelled loop ignores the frame. An armed loop whose game no longer
    /// accepts input cancels itself instead of ticking.
    pub fn on_frame(&mut self, now_ms: u64, state: &mut GameState) -> bool {
        let Some(last) = self.last_frame_ms else {
            return false;
        };
        if !state.accepts_input() {
            self.cancel();
            return false;
        }

        let elapsed = now_ms.saturating_sub(last).min(u32::MAX as u64) as u32;
        self.last_frame_ms = Some(now_ms);
        let dropped = state.tick(elapsed);

        if !state.accepts_input() {
            self.cancel();
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameState {
        let mut state = GameState::new(42);
        state.start();
        state
    }

    #[test]
    fn new_loop_is_cancelled() {
        let mut state = started();
        let mut frames = FrameLoop::new();
        assert!(!frames.is_armed());
        assert!(!frames.on_frame(5000, &mut state));
        assert_eq!(state.drop_counter_ms(), 0);
    }

    #[test]
    fn armed_loop_accumulates_deltas() {
        let mut state = started();
        let mut frames = FrameLoop::new();
        frames.arm(1000);
        assert!(!frames.on_frame(1016, &mut state));
        assert!(!frames.on_frame(1032, &mut state));
        assert_eq!(state.drop_counter_ms(), 32);
    }

    #[test]
    fn gravity_fires_after_interval() {
        let mut state = started();
        let y = state.active().unwrap().y;
        let mut frames = FrameLoop::new();
        frames.arm(0);
        let mut now = 0;
        let mut dropped = false;
        while now <= 1100 && !dropped {
            now += 16;
            dropped = frames.on_frame(now, &mut state);
        }
        assert!(dropped);
        assert_eq!(state.active().unwrap().y, y + 1);
    }

    #[test]
    fn loop_cancels_itself_when_paused() {
        let mut state = started();
        let mut frames = FrameLoop::new();
        frames.arm(0);
        state.toggle_pause();
        assert!(!frames.on_frame(16, &mut state));
        assert!(!frames.is_armed());
    }

    #[test]
    fn rearming_discards_backlog() {
        let mut state = started();
        let mut frames = FrameLoop::new();
        frames.arm(0);
        frames.on_frame(500, &mut state);
        frames.cancel();
        frames.arm(60_000);
        frames.on_frame(60_016, &mut state);
        assert_eq!(state.drop_counter_ms(), 516);
    }
}
