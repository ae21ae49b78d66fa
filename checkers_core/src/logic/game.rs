use crate::engine::config::EngineConfig;
use crate::engine::hint::random_move;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Difficulty, Move, SearchStats, COMPUTER_SIDE};
use crate::logic::board::{Board, BoardCoordinate, Color};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{validate_move, MoveError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    RedWins,
    BlackWins,
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::RedWins => Some(Color::Red),
            Self::BlackWins => Some(Color::Black),
            Self::Ongoing | Self::Draw => None,
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// One history entry: the whole board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Red,
            last_move: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    // Top of the undo stack always equals `state`
    undo_stack: Vec<GameState>,
    redo_stack: Vec<GameState>,
    difficulty: Difficulty,
    generator: MoveGenerator,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Starts a game from an arbitrary position. The position becomes the
    /// bottom of the undo history.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            undo_stack: vec![state.clone()],
            redo_stack: Vec::new(),
            state,
            difficulty: Difficulty::default(),
            generator: MoveGenerator::new(),
        }
    }

    /// Back to the opening position. The difficulty setting survives.
    pub fn reset(&mut self) {
        let difficulty = self.difficulty;
        *self = Self::new();
        self.difficulty = difficulty;
        log::debug!("new game, difficulty {difficulty}");
    }

    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub const fn board(&self) -> &Board {
        &self.state.board
    }

    pub const fn turn(&self) -> Color {
        self.state.turn
    }

    pub const fn last_move(&self) -> Option<Move> {
        self.state.last_move
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Legal moves for the piece on `pos`, or nothing if that square does not
    /// hold a piece of the side to move.
    pub fn legal_moves_at(&self, pos: BoardCoordinate) -> Vec<Move> {
        match self.state.board.get_piece(pos) {
            Some(piece) if piece.color == self.state.turn => {
                self.generator.moves_for(&self.state.board, pos)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move for `color`, whether or not it is that side's turn.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.generator.generate_moves(&self.state.board, color)
    }

    /// Plays any legal move, records the new position and hands the turn to
    /// the mover's opponent. On error nothing changes.
    pub fn apply_move(
        &mut self,
        from: BoardCoordinate,
        to: BoardCoordinate,
    ) -> Result<Move, MoveError> {
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self
            .state
            .board
            .get_piece(from)
            .ok_or(MoveError::NoPieceAtSource)?;

        let mv = validate_move(&self.state.board, from, to)?;
        let undo = self
            .state
            .board
            .apply_move(&mv)
            .ok_or(MoveError::NoPieceAtSource)?;

        self.state.turn = piece.color.opposite();
        self.state.last_move = Some(mv);
        self.undo_stack.push(self.state.clone());
        self.redo_stack.clear();

        log::debug!(
            "{} played {mv}{}",
            piece.color,
            if undo.captured.is_some() { ", capture" } else { "" }
        );
        Ok(mv)
    }

    /// Same as [`Game::apply_move`] for raw coordinates.
    pub fn try_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<Move, MoveError> {
        let from = BoardCoordinate::new(from_row, from_col).ok_or(MoveError::OutOfBounds)?;
        let to = BoardCoordinate::new(to_row, to_col).ok_or(MoveError::OutOfBounds)?;
        self.apply_move(from, to)
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        if let Some(undone) = self.undo_stack.pop() {
            self.redo_stack.push(undone);
        }
        if let Some(previous) = self.undo_stack.last() {
            self.state = previous.clone();
        }
        log::debug!("undo, {} to move", self.state.turn);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.state = next.clone();
        self.undo_stack.push(next);
        log::debug!("redo, {} to move", self.state.turn);
        true
    }

    pub fn outcome(&self) -> Outcome {
        let board = &self.state.board;

        if board.count_pieces(Color::Red) == 0 {
            return Outcome::BlackWins;
        }
        if board.count_pieces(Color::Black) == 0 {
            return Outcome::RedWins;
        }

        let red_can_move = self.generator.has_legal_moves(board, Color::Red);
        let black_can_move = self.generator.has_legal_moves(board, Color::Black);

        match (red_can_move, black_can_move) {
            (false, false) => Outcome::Draw,
            (false, true) if self.state.turn == Color::Red => Outcome::BlackWins,
            (true, false) if self.state.turn == Color::Black => Outcome::RedWins,
            _ => Outcome::Ongoing,
        }
    }

    /// The computer's move at the stored difficulty.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move_at(self.difficulty)
    }

    pub fn best_move_at(&self, difficulty: Difficulty) -> Option<Move> {
        self.best_move_with_config(difficulty, Arc::new(EngineConfig::default()))
            .map(|(mv, _)| mv)
    }

    /// Searches a private copy of the board. The game itself is never touched.
    pub fn best_move_with_config(
        &self,
        difficulty: Difficulty,
        config: Arc<EngineConfig>,
    ) -> Option<(Move, SearchStats)> {
        let mut engine = AlphaBetaEngine::new(config);
        engine.best_move(&self.state.board, difficulty)
    }

    /// Searches and plays the computer's reply. Does nothing unless it is the
    /// computer's turn.
    pub fn play_computer_move(&mut self) -> Option<Move> {
        if self.state.turn != COMPUTER_SIDE {
            return None;
        }
        let mv = self.best_move()?;
        self.apply_move(mv.from, mv.to).ok()
    }

    /// A uniformly random legal move for the side to move.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        random_move(&self.state.board, self.state.turn, rng)
    }
}
