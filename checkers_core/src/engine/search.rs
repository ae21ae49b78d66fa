use crate::engine::config::EngineConfig;
use crate::engine::eval::SimpleEvaluator;
use crate::engine::eval_constants::SCORE_INFINITY;
use crate::engine::{Difficulty, Evaluator, Move, SearchStats, Searcher, COMPUTER_SIDE};
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use std::sync::Arc;

const INFINITY: i32 = SCORE_INFINITY;

// Configs arriving through the worker skip `load_from_json`.
fn clamp_config(config: Arc<EngineConfig>) -> Arc<EngineConfig> {
    if config.is_clamped() {
        config
    } else {
        Arc::new(EngineConfig::clone(&config).clamped())
    }
}

/// Fixed-depth minimax with alpha-beta pruning. Red maximizes, black minimizes.
///
/// Every search runs on its own copy of the board, and each node takes its
/// move back before returning.
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: SimpleEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        let config = clamp_config(config);
        Self {
            evaluator: SimpleEvaluator::new(config.clone()),
            config,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        let config = clamp_config(config);
        self.evaluator = SimpleEvaluator::new(config.clone());
        self.config = config;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Picks the computer's move at the depth configured for `difficulty`.
    pub fn best_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
    ) -> Option<(Move, SearchStats)> {
        let depth = self.config.depth_for(difficulty);
        self.search(board, COMPUTER_SIDE, depth)
    }

    fn now() -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            if let Some(window) = web_sys::window() {
                return window.performance().map(|p| p.now()).unwrap_or(0.0);
            }
            let global = js_sys::global();
            if let Ok(worker) = global.dyn_into::<web_sys::WorkerGlobalScope>() {
                return worker.performance().map(|p| p.now()).unwrap_or(0.0);
            }
            0.0
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            let since_the_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            since_the_epoch.as_secs_f64() * 1000.0
        }
    }

    /// Scores `board` from red's point of view, looking `depth` plies ahead.
    ///
    /// A side with no legal moves scores as lost (`terminal_score`), even when
    /// its opponent could not move either.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let side = if maximizing { Color::Red } else { Color::Black };
        let moves = self.generator.generate_moves(board, side);
        if moves.is_empty() {
            return if maximizing {
                -self.config.terminal_score
            } else {
                self.config.terminal_score
            };
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in &moves {
            let Some(undo) = board.apply_move(mv) else {
                continue;
            };
            let score = self.minimax(board, depth - 1, alpha, beta, !maximizing);
            board.undo_move(&undo);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Searcher for AlphaBetaEngine {
    /// Ties keep the earliest move in generation order.
    fn search(&mut self, board: &Board, side: Color, depth: u8) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start_time = Self::now();
        let depth = depth.max(1);

        let mut scratch = board.clone();
        let moves = self.generator.generate_moves(&scratch, side);
        let reply_maximizes = side.opposite() == Color::Red;

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let Some(undo) = scratch.apply_move(&mv) else {
                continue;
            };
            let score =
                self.minimax(&mut scratch, depth - 1, -INFINITY, INFINITY, reply_maximizes);
            scratch.undo_move(&undo);
            log::trace!("{side} candidate {mv}: {score}");

            let improves = best.map_or(true, |(_, best_score)| match side {
                Color::Red => score > best_score,
                Color::Black => score < best_score,
            });
            if improves {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let time_ms = (Self::now() - start_time).max(0.0) as u64;
        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            score,
            time_ms,
        };
        log::info!(
            "{side} plays {mv} (depth {depth}, score {score}, {} nodes, {time_ms} ms)",
            stats.nodes
        );
        Some((mv, stats))
    }
}
