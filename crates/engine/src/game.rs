//! Session controller: one [`GameState`] plus the [`FrameLoop`] that drives it.
//!
//! All inputs (keys, gestures, buttons) and all frames go through [`Game`] on
//! the same thread, so the loop's armed/cancelled state always matches the
//! session phase: armed while Playing, cancelled otherwise.

use log::{debug, info};

use blockfall_core::{GameSnapshot, GameState, LockEvent};
use blockfall_types::{GameAction, GamePhase};

use crate::frame_loop::FrameLoop;

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    frames: FrameLoop,
}

impl Game {
    /// An idle game; the loop stays cancelled until the first start.
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(seed),
            frames: FrameLoop::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Whether frames currently advance gravity.
    pub fn is_running(&self) -> bool {
        self.frames.is_armed()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Apply an input at host time `now_ms`. Returns true if it changed anything.
    pub fn apply(&mut self, action: GameAction, now_ms: u64) -> bool {
        let before = self.state.phase();
        let changed = self.state.apply_action(action);
        if !changed {
            return false;
        }
        debug!("{}", action.as_str());

        let after = self.state.phase();
        match (action, after) {
            (GameAction::Start | GameAction::Restart, _) => {
                self.frames.arm(now_ms);
            }
            (GameAction::Pause, GamePhase::Playing) => {
                // Resume from a fresh baseline.
                self.frames.arm(now_ms);
            }
            (GameAction::Pause, _) => self.frames.cancel(),
            (_, GamePhase::GameOver) => self.frames.cancel(),
            _ => {}
        }

        if before != after {
            info!("{} -> {}", before.as_str(), after.as_str());
        }
        true
    }

    /// Run one host frame at `now_ms`. Returns true if gravity acted.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        let before = self.state.phase();
        let dropped = self.frames.on_frame(now_ms, &mut self.state);
        let after = self.state.phase();
        if before != after {
            info!("{} -> {}", before.as_str(), after.as_str());
        }
        dropped
    }

    /// Take and clear the last lock event (line clears, top-out).
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.state.take_last_event()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
