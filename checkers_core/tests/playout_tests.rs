#[cfg(test)]
mod tests {
    use checkers_core::engine::Move;
    use checkers_core::logic::board::{Board, Color};
    use checkers_core::logic::game::{Game, GameState, Outcome};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    const MAX_PLIES: usize = 200;

    fn check_move_shape(board: &Board, color: Color, mv: &Move) {
        assert!(mv.to.is_on_board(), "{mv} leaves the board");
        assert!(mv.to.is_dark(), "{mv} lands on a light square");
        assert!(board.is_empty_at(mv.to), "{mv} lands on a piece");

        let piece = board.get_piece(mv.from).unwrap();
        assert_eq!(piece.color, color);
        if !piece.is_king() {
            match color {
                Color::Red => assert!(mv.to.row < mv.from.row, "red man {mv} retreats"),
                Color::Black => assert!(mv.to.row > mv.from.row, "black man {mv} retreats"),
            }
        }
        assert_eq!(mv.is_jump, mv.from.row.abs_diff(mv.to.row) == 2);
    }

    fn play_out(seed: u64) -> Outcome {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();

        for _ in 0..MAX_PLIES {
            if game.outcome().is_over() {
                break;
            }
            let side = game.turn();
            let board = game.board().clone();
            let moves = game.legal_moves(side);
            assert!(!moves.is_empty());
            for mv in &moves {
                check_move_shape(&board, side, mv);
            }

            let mv = *moves.choose(&mut rng).unwrap();
            let mover = board.get_piece(mv.from).unwrap();
            let own_before = board.count_pieces(side);
            let theirs_before = board.count_pieces(side.opposite());

            assert_eq!(game.apply_move(mv.from, mv.to), Ok(mv));
            let after = game.board();

            assert_eq!(after.count_pieces(side), own_before);
            let captured = usize::from(mv.is_jump);
            assert_eq!(after.count_pieces(side.opposite()), theirs_before - captured);
            if mv.is_jump {
                assert!(after.get_piece(mv.from.midpoint(mv.to)).is_none());
            }

            let landed = after.get_piece(mv.to).unwrap();
            if mover.is_king() || mv.to.row == side.promotion_row() {
                assert!(landed.is_king(), "{mv} lost or missed its crown");
            } else {
                assert!(!landed.is_king());
            }
            assert_eq!(game.turn(), side.opposite());
        }
        game.outcome()
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        for seed in 0..20 {
            play_out(seed);
        }
    }

    #[test]
    fn test_playouts_are_reproducible() {
        assert_eq!(play_out(7), play_out(7));
    }

    #[test]
    fn test_full_undo_returns_to_start() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = Game::new();
        let mut history = vec![game.state().clone()];

        for _ in 0..30 {
            let moves = game.legal_moves(game.turn());
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            game.apply_move(mv.from, mv.to).unwrap();
            history.push(game.state().clone());
        }

        while let Some(expected) = history.pop() {
            assert_eq!(game.state(), &expected);
            if history.is_empty() {
                assert!(!game.undo());
            } else {
                assert!(game.undo());
            }
        }
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_hint_is_legal_for_side_to_move() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new();

        for _ in 0..40 {
            if game.outcome().is_over() {
                break;
            }
            let hint = game.hint(&mut rng).unwrap();
            assert!(game.legal_moves(game.turn()).contains(&hint));
            game.apply_move(hint.from, hint.to).unwrap();
        }
    }
}
