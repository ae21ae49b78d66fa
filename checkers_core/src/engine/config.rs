use crate::engine::eval_constants::{
    ADVANCE_BONUS, DEPTH_EASY, DEPTH_HARD, DEPTH_MEDIUM, SCORE_INFINITY, TERMINAL_SCORE,
    VAL_KING, VAL_MAN,
};
use crate::engine::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation Parameters
    pub val_man: i32,
    pub val_king: i32,
    pub advance_bonus: i32,
    pub terminal_score: i32,

    // Search depth (plies) per difficulty
    pub depth_easy: u8,
    pub depth_medium: u8,
    pub depth_hard: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_man: VAL_MAN,
            val_king: VAL_KING,
            advance_bonus: ADVANCE_BONUS,
            terminal_score: TERMINAL_SCORE,

            depth_easy: DEPTH_EASY,
            depth_medium: DEPTH_MEDIUM,
            depth_hard: DEPTH_HARD,
        }
    }
}

impl EngineConfig {
    /// Missing fields keep their default values.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str).map(Self::clamped)
    }

    /// Pulls `terminal_score` into `0..SCORE_INFINITY`.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.terminal_score = self.terminal_score.clamp(0, SCORE_INFINITY - 1);
        self
    }

    pub fn is_clamped(&self) -> bool {
        (0..SCORE_INFINITY).contains(&self.terminal_score)
    }

    /// Never less than one ply.
    pub fn depth_for(&self, difficulty: Difficulty) -> u8 {
        let depth = match difficulty {
            Difficulty::Easy => self.depth_easy,
            Difficulty::Medium => self.depth_medium,
            Difficulty::Hard => self.depth_hard,
        };
        depth.max(1)
    }
}
