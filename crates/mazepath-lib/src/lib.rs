//! mazepath library entry points.
//!
//! This crate exposes an A* search engine over abstract grids, the
//! heuristics that guide it, and a text maze format to run it against.
//! Higher-level consumers (the CLI, benchmarks) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod distance;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod maze;
pub mod output;
pub mod path;
pub mod routing;
pub mod state;

pub use distance::{bfs_distances, DistanceMatrix, PairwiseDistance, RelaxedCosts};
pub use error::{Error, Result};
pub use frontier::Frontier;
pub use grid::{Grid, ObjectiveSet};
pub use heuristic::{Heuristic, HeuristicEvaluator};
pub use maze::{load_maze, Maze};
pub use output::{PathStep, SearchSummary};
pub use path::{
    find_path_a_star, reconstruct_path, ExhaustionReason, SearchLimits, SearchOutcome, SearchReport,
};
pub use routing::{
    astar, plan_search, search, select_planner, SearchConfig, SearchMethod, SearchPlanner,
    SearchRequest,
};
pub use state::{Cost, Node, State};
