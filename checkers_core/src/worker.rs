use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Difficulty, Move, SearchStats, Searcher};
use crate::logic::game::GameState;
use gloo_worker::{HandlerId, Worker, WorkerScope};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Input {
    ComputeMove(GameState, Difficulty, EngineConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    MoveFound(Move, SearchStats),
    /// The side to move has no legal move.
    NoMove,
}

/// Runs the search off the UI thread. The engine is created on the first
/// request and reused afterwards.
#[derive(Default)]
pub struct CheckersWorker {
    engine: Option<AlphaBetaEngine>,
}

impl CheckersWorker {
    pub fn compute(&mut self, msg: Input) -> Output {
        match msg {
            Input::ComputeMove(state, difficulty, config) => {
                let depth = config.depth_for(difficulty);
                let config = Arc::new(config);

                if let Some(engine) = self.engine.as_mut() {
                    engine.update_config(Arc::clone(&config));
                }
                let engine = self
                    .engine
                    .get_or_insert_with(|| AlphaBetaEngine::new(config));

                match engine.search(&state.board, state.turn, depth) {
                    Some((mv, stats)) => Output::MoveFound(mv, stats),
                    None => {
                        log::warn!("no legal move for {}", state.turn);
                        Output::NoMove
                    }
                }
            }
        }
    }
}

impl Worker for CheckersWorker {
    type Input = Input;
    type Message = ();
    type Output = Output;

    fn create(_scope: &WorkerScope<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _scope: &WorkerScope<Self>, _msg: Self::Message) {}

    fn received(&mut self, scope: &WorkerScope<Self>, msg: Self::Input, id: HandlerId) {
        let output = self.compute(msg);
        scope.respond(id, output);
    }
}
