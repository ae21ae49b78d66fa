use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NoPieceAtSource,
    DestinationOccupied,
    WrongDirection,
    NothingToJump,
    InvalidMovePattern,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfBounds => "square is off the board",
            Self::NoPieceAtSource => "no piece on the starting square",
            Self::DestinationOccupied => "destination square is occupied",
            Self::WrongDirection => "men cannot move backwards",
            Self::NothingToJump => "a jump must pass over an opposing piece",
            Self::InvalidMovePattern => "pieces move one or two squares diagonally",
        })
    }
}

impl std::error::Error for MoveError {}

/// Checks a move against the board geometry only; whose turn it is does not matter.
///
/// Jumps are never forced, and a jump always ends the move.
pub fn validate_move(
    board: &Board,
    from: BoardCoordinate,
    to: BoardCoordinate,
) -> Result<Move, MoveError> {
    if !from.is_on_board() || !to.is_on_board() {
        return Err(MoveError::OutOfBounds);
    }

    let piece = board.get_piece(from).ok_or(MoveError::NoPieceAtSource)?;

    if !board.is_empty_at(to) {
        return Err(MoveError::DestinationOccupied);
    }

    #[allow(clippy::cast_possible_wrap)]
    let d_row = to.row as isize - from.row as isize;
    let d_col = to.col.abs_diff(from.col);
    let distance = d_row.unsigned_abs();

    if distance != d_col || !(1..=2).contains(&distance) {
        return Err(MoveError::InvalidMovePattern);
    }

    if !piece.can_move_towards(d_row) {
        return Err(MoveError::WrongDirection);
    }

    let is_jump = distance == 2;
    if is_jump {
        let jumped = board.get_piece(from.midpoint(to));
        if !jumped.is_some_and(|p| p.color != piece.color) {
            return Err(MoveError::NothingToJump);
        }
    }

    Ok(Move::new(from, to, is_jump))
}

pub fn is_legal(board: &Board, from: BoardCoordinate, to: BoardCoordinate) -> bool {
    validate_move(board, from, to).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{Color, Piece};

    fn at(row: usize, col: usize) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_simple_steps() {
        let board = Board::new();
        // Red man steps up
        assert_eq!(
            validate_move(&board, at(5, 2), at(4, 3)),
            Ok(Move::new(at(5, 2), at(4, 3), false))
        );
        // Black man steps down
        assert!(is_legal(&board, at(2, 1), at(3, 0)));
    }

    #[test]
    fn test_men_cannot_retreat() {
        let mut board = Board::empty();
        board.add_piece(at(4, 3), Piece::man(Color::Red));
        board.add_piece(at(3, 4), Piece::man(Color::Black));

        assert_eq!(
            validate_move(&board, at(4, 3), at(5, 2)),
            Err(MoveError::WrongDirection)
        );
        assert_eq!(
            validate_move(&board, at(3, 4), at(2, 5)),
            Err(MoveError::WrongDirection)
        );
    }

    #[test]
    fn test_kings_move_both_ways() {
        let mut board = Board::empty();
        board.add_piece(at(4, 3), Piece::king(Color::Red));
        assert!(is_legal(&board, at(4, 3), at(5, 2)));
        assert!(is_legal(&board, at(4, 3), at(3, 2)));
    }

    #[test]
    fn test_destination_occupied() {
        let board = Board::new();
        assert_eq!(
            validate_move(&board, at(6, 1), at(5, 0)),
            Err(MoveError::DestinationOccupied)
        );
    }

    #[test]
    fn test_invalid_geometry() {
        let mut board = Board::empty();
        board.add_piece(at(4, 3), Piece::king(Color::Red));
        for to in [at(4, 5), at(2, 3), at(1, 0), at(3, 1)] {
            assert_eq!(
                validate_move(&board, at(4, 3), to),
                Err(MoveError::InvalidMovePattern),
                "{to}"
            );
        }
    }

    #[test]
    fn test_jump_needs_opponent() {
        let mut board = Board::empty();
        board.add_piece(at(5, 2), Piece::man(Color::Red));
        assert_eq!(
            validate_move(&board, at(5, 2), at(3, 4)),
            Err(MoveError::NothingToJump)
        );

        board.add_piece(at(4, 3), Piece::man(Color::Red));
        assert_eq!(
            validate_move(&board, at(5, 2), at(3, 4)),
            Err(MoveError::NothingToJump)
        );

        board.add_piece(at(4, 3), Piece::man(Color::Black));
        assert_eq!(
            validate_move(&board, at(5, 2), at(3, 4)),
            Ok(Move::new(at(5, 2), at(3, 4), true))
        );
    }

    #[test]
    fn test_missing_piece_and_bounds() {
        let board = Board::new();
        assert_eq!(
            validate_move(&board, at(4, 1), at(3, 0)),
            Err(MoveError::NoPieceAtSource)
        );

        let off_board = BoardCoordinate { row: 8, col: 1 };
        assert_eq!(
            validate_move(&board, at(7, 0), off_board),
            Err(MoveError::OutOfBounds)
        );
        assert!(!is_legal(&board, off_board, at(4, 1)));
    }
}
