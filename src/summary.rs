//! End-of-session report printed after the terminal is restored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::types::GamePhase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub phase: String,
}

impl SessionSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            seed: state.seed(),
            score: state.score(),
            lines: state.lines(),
            level: state.level(),
            phase: state.phase().as_str().to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn finished(&self) -> bool {
        self.phase == GamePhase::GameOver.as_str()
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.finished() { "game over" } else { "quit" };
        write!(
            f,
            "{status}: score {} | lines {} | level {} | seed {}",
            self.score, self.lines, self.level, self.seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    #[test]
    fn summary_reflects_state() {
        let mut state = GameState::new(99);
        state.start();
        state.apply_action(GameAction::HardDrop);
        let summary = SessionSummary::from_state(&state);
        assert_eq!(summary.seed, 99);
        assert_eq!(summary.score, state.score());
        assert_eq!(summary.phase, "playing");
        assert!(summary.to_string().starts_with("quit: score "));
    }

    #[test]
    fn json_uses_field_names() {
        let summary = SessionSummary {
            seed: 1,
            score: 300,
            lines: 2,
            level: 1,
            phase: "game_over".to_string(),
        };
        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 300);
        assert_eq!(value["phase"], "game_over");
        let back: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
        assert!(summary.to_string().starts_with("game over"));
    }
}
