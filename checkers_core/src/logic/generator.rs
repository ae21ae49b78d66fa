use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Color, Piece};
use crate::logic::rules::{is_legal, validate_move};

const COL_DIRECTIONS: [isize; 2] = [-1, 1];

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub const fn new() -> Self {
        Self
    }

    /// Legal moves of the piece on `from`, regardless of whose turn it is.
    ///
    /// Order: each allowed row direction, then left before right, the step
    /// before the jump.
    pub fn moves_for(&self, board: &Board, from: BoardCoordinate) -> Vec<Move> {
        let mut moves = Vec::with_capacity(8);
        if let Some(piece) = board.get_piece(from) {
            self.generate_piece_moves(board, from, piece, &mut moves);
        }
        moves
    }

    /// All legal moves for `color`, scanning the board row by row.
    pub fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(32);
        for (from, piece) in board.pieces(color) {
            self.generate_piece_moves(board, from, piece, &mut moves);
        }
        moves
    }

    /// Returns `true` as soon as any legal move is found.
    pub fn has_legal_moves(&self, board: &Board, color: Color) -> bool {
        board.pieces(color).any(|(from, piece)| {
            Self::candidates(from, piece).any(|to| is_legal(board, from, to))
        })
    }

    fn generate_piece_moves(
        &self,
        board: &Board,
        from: BoardCoordinate,
        piece: Piece,
        moves: &mut Vec<Move>,
    ) {
        moves.extend(
            Self::candidates(from, piece).filter_map(|to| validate_move(board, from, to).ok()),
        );
    }

    // Off-board destinations are dropped here rather than rejected later.
    fn candidates(from: BoardCoordinate, piece: Piece) -> impl Iterator<Item = BoardCoordinate> {
        piece.row_directions().iter().copied().flat_map(move |d_row| {
            COL_DIRECTIONS.into_iter().flat_map(move |d_col| {
                [1, 2]
                    .into_iter()
                    .filter_map(move |dist| from.offset(d_row * dist, d_col * dist))
            })
        })
    }
}
