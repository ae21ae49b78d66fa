use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use rand::seq::SliceRandom;
use rand::Rng;

/// Any legal move for `side`, chosen uniformly.
pub fn random_move<R: Rng + ?Sized>(board: &Board, side: Color, rng: &mut R) -> Option<Move> {
    MoveGenerator::new()
        .generate_moves(board, side)
        .choose(rng)
        .copied()
}
