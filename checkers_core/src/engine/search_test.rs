use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Difficulty, Move, Searcher};
use crate::logic::board::{Board, BoardCoordinate, Color};
use std::sync::Arc;

fn engine() -> AlphaBetaEngine {
    AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
}

fn at(row: usize, col: usize) -> BoardCoordinate {
    BoardCoordinate::new(row, col).unwrap()
}

fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}

#[test]
fn test_black_takes_free_piece() {
    let board = board(
        "........
         ........
         .b......
         ..r.....
         ........
         ........
         ........
         ......r.",
    );

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let (mv, _) = engine().best_move(&board, difficulty).unwrap();
        assert_eq!(mv, Move::new(at(2, 1), at(4, 3), true), "{difficulty}");
    }
}

#[test]
fn test_black_does_not_hang_its_last_piece() {
    // (1,2)-(2,3) walks into a jump from (3,4); (1,2)-(2,1) is safe
    let board = board(
        "........
         ..b.....
         ........
         ....r...
         ........
         ........
         ........
         ........",
    );

    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let (mv, stats) = engine().best_move(&board, difficulty).unwrap();
        assert_eq!(mv, Move::new(at(1, 2), at(2, 1), false), "{difficulty}");
        assert!(stats.score < engine().config().terminal_score);
    }
}

#[test]
fn test_easy_scores_match_hand_evaluation() {
    let board = board(
        "........
         ..b.....
         ........
         ....r...
         ........
         ........
         ........
         ........",
    );
    // Red's best reply after (1,2)-(2,1) is a step to row 2: (10 + 5) - (10 + 2)
    let (_, stats) = engine().search(&board, Color::Black, 2).unwrap();
    assert_eq!(stats.score, 3);
}

#[test]
fn test_red_side_search_takes_jump() {
    let board = board(
        "........
         ........
         ........
         ........
         ...b....
         ..r.....
         ........
         b.......",
    );
    let (mv, _) = engine().search(&board, Color::Red, 2).unwrap();
    assert_eq!(mv, Move::new(at(5, 2), at(3, 4), true));
}

#[test]
fn test_ties_keep_first_move() {
    // Both steps score the same; the left one is generated first
    let board = board(
        ".b......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    );
    let (mv, stats) = engine().search(&board, Color::Black, 1).unwrap();
    assert_eq!(mv, Move::new(at(0, 1), at(1, 0), false));
    assert_eq!(stats.score, -11);
}

#[test]
fn test_search_does_not_modify_input() {
    let board = Board::new();
    let before = board.clone();
    let mut engine = engine();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert!(engine.best_move(&board, difficulty).is_some());
    }
    assert_eq!(board, before);
}

#[test]
fn test_configured_depths_are_used() {
    let config = EngineConfig {
        depth_hard: 1,
        ..EngineConfig::default()
    };
    let mut engine = AlphaBetaEngine::new(Arc::new(config));
    let (_, stats) = engine.best_move(&Board::new(), Difficulty::Hard).unwrap();
    assert_eq!(stats.depth, 1);
    // One node per root move at depth one
    assert_eq!(stats.nodes, 7);
}
