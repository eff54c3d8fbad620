//! Search planning for mazepath.
//!
//! This module provides:
//! - [`SearchMethod`] - Selectable search methods (only A* is implemented)
//! - [`SearchConfig`] - Heuristic choice and search limits, loadable from JSON
//! - [`SearchRequest`] - Method plus configuration
//! - [`plan_search`] - Main entry point for running a search on a grid
//!
//! # Strategy Pattern
//!
//! Methods are resolved to a [`SearchPlanner`] by [`select_planner`]. Methods
//! without a planner are rejected with [`Error::UnsupportedMethod`] instead of
//! silently returning an empty path.
//!
//! # Example
//!
//! ```ignore
//! use mazepath_lib::{load_maze, plan_search, SearchRequest, Heuristic};
//!
//! let maze = load_maze(Path::new("mazes/tiny.txt"))?;
//! let report = plan_search(&maze, &SearchRequest::astar(Heuristic::MinManhattan))?;
//! println!("{} moves, {} states explored", report.moves(), report.explored);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, SearchPlanner};

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::distance::PairwiseDistance;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::path::{SearchLimits, SearchReport};

/// Selectable search methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Breadth-first search. Not implemented.
    Bfs,
    /// Depth-first search. Not implemented.
    Dfs,
    /// Greedy best-first search. Not implemented.
    Greedy,
    /// A* search (heuristic guided).
    #[default]
    #[serde(rename = "astar")]
    AStar,
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchMethod::Bfs => "bfs",
            SearchMethod::Dfs => "dfs",
            SearchMethod::Greedy => "greedy",
            SearchMethod::AStar => "astar",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bfs" => Ok(SearchMethod::Bfs),
            "dfs" => Ok(SearchMethod::Dfs),
            "greedy" => Ok(SearchMethod::Greedy),
            "astar" => Ok(SearchMethod::AStar),
            other => Err(Error::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Tunables for a single search.
///
/// Every field has a default so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Base distance between objectives for [`Heuristic::PrecomputedDijkstra`].
    pub pairwise: PairwiseDistance,
    /// Stop after this many expanded states.
    pub max_expansions: Option<usize>,
    /// Stop after this many milliseconds.
    pub timeout_ms: Option<u64>,
}

impl SearchConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    fn to_limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// High-level search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub method: SearchMethod,
    pub config: SearchConfig,
}

impl SearchRequest {
    /// Convenience constructor for an unbounded A* search.
    pub fn astar(heuristic: Heuristic) -> Self {
        Self {
            method: SearchMethod::AStar,
            config: SearchConfig {
                heuristic,
                ..SearchConfig::default()
            },
        }
    }
}

/// Run the requested search on `grid`.
///
/// An exhausted search is returned as a report with an empty path; only
/// unsupported methods and internal inconsistencies are errors.
pub fn plan_search(grid: &dyn Grid, request: &SearchRequest) -> Result<SearchReport> {
    search(grid, request.method, &request.config)
}

/// Resolve `method` to a planner and run it with `config`.
pub fn search(
    grid: &dyn Grid,
    method: SearchMethod,
    config: &SearchConfig,
) -> Result<SearchReport> {
    let planner = select_planner(method)?;
    planner.find_path(grid, config)
}

/// Run A* on `grid` with `config`.
pub fn astar(grid: &dyn Grid, config: &SearchConfig) -> Result<SearchReport> {
    AStarPlanner.find_path(grid, config)
}
