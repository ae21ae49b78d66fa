use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color, Piece, BOARD_SIZE};
use std::sync::Arc;

/// Material plus a small bonus for every row a piece has advanced.
pub struct SimpleEvaluator {
    config: Arc<EngineConfig>,
}

impl SimpleEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    fn piece_value(&self, piece: Piece) -> i32 {
        if piece.is_king() {
            self.config.val_king
        } else {
            self.config.val_man
        }
    }
}

impl Evaluator for SimpleEvaluator {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn evaluate(&self, board: &Board) -> i32 {
        let last_row = (BOARD_SIZE - 1) as i32;
        let bonus = self.config.advance_bonus;

        let red: i32 = board
            .pieces(Color::Red)
            .map(|(pos, piece)| self.piece_value(piece) + bonus * (last_row - pos.row as i32))
            .sum();
        let black: i32 = board
            .pieces(Color::Black)
            .map(|(pos, piece)| self.piece_value(piece) + bonus * pos.row as i32)
            .sum();

        red - black
    }
}
