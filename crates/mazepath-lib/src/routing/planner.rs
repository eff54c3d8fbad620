//! Search strategies implementing the Strategy pattern.
//!
//! Each [`SearchMethod`] with an implementation maps to a [`SearchPlanner`].
//! New methods are added by implementing the trait and extending
//! [`select_planner`].

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::heuristic::HeuristicEvaluator;
use crate::path::{find_path_a_star, SearchReport};

use super::{SearchConfig, SearchMethod};

/// Trait for search strategies.
pub trait SearchPlanner {
    /// The method identifier for this planner.
    fn method(&self) -> SearchMethod;

    /// Search `grid` from its start to the first objective reached.
    fn find_path(&self, grid: &dyn Grid, config: &SearchConfig) -> Result<SearchReport>;
}

/// A* planner guided by the configured heuristic.
///
/// The distance matrix used by the precomputed heuristic is built once per
/// call and dropped with the evaluator when the search returns.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl SearchPlanner for AStarPlanner {
    fn method(&self) -> SearchMethod {
        SearchMethod::AStar
    }

    fn find_path(&self, grid: &dyn Grid, config: &SearchConfig) -> Result<SearchReport> {
        if !config.heuristic.is_admissible() {
            tracing::warn!(
                heuristic = %config.heuristic,
                "heuristic is inadmissible; the returned path may not be the shortest"
            );
        }

        let objectives = grid.objectives().into_iter().collect();
        let evaluator = HeuristicEvaluator::new(
            config.heuristic,
            grid,
            objectives,
            config.pairwise,
        );
        find_path_a_star(grid, &evaluator, &config.to_limits())
    }
}

/// Select the planner for `method`.
pub fn select_planner(method: SearchMethod) -> Result<Box<dyn SearchPlanner>> {
    match method {
        SearchMethod::AStar => Ok(Box::new(AStarPlanner)),
        SearchMethod::Bfs | SearchMethod::Dfs | SearchMethod::Greedy => {
            Err(Error::UnsupportedMethod {
                method: method.to_string(),
            })
        }
    }
}
