use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::HeuristicEvaluator;
use crate::state::{Cost, Node, State};

/// Bounds that stop a search before the frontier is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states to expand.
    pub max_expansions: Option<usize>,
    /// Wall-clock budget measured from the start of the search.
    pub timeout: Option<Duration>,
}

impl SearchLimits {
    fn exceeded(&self, explored: usize, started: Instant) -> bool {
        if let Some(limit) = self.max_expansions {
            if explored >= limit {
                return true;
            }
        }

        if let Some(timeout) = self.timeout {
            if started.elapsed() >= timeout {
                return true;
            }
        }

        false
    }
}

/// Why a search ended without reaching an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionReason {
    /// Every reachable state was expanded.
    NoSolutionFound,
    /// The expansion budget or the deadline ran out first.
    BudgetExceeded,
}

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Succeeded { goal: State },
    Exhausted { reason: ExhaustionReason },
}

/// Path and bookkeeping returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Cells from the start to the goal, both included. Empty when exhausted.
    pub path: Vec<State>,
    /// Number of states expanded.
    pub explored: usize,
    pub outcome: SearchOutcome,
}

impl SearchReport {
    fn exhausted(explored: usize, reason: ExhaustionReason) -> Self {
        Self {
            path: Vec::new(),
            explored,
            outcome: SearchOutcome::Exhausted { reason },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Succeeded { .. })
    }

    /// Objective that ended the search, if any.
    pub fn goal(&self) -> Option<State> {
        match self.outcome {
            SearchOutcome::Succeeded { goal } => Some(goal),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    /// Number of moves along the path.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run A* from the grid's start until the first objective is expanded.
///
/// States are settled once; a state popped again is discarded. The
/// predecessor of a state is recorded when it is settled, so the
/// reconstructed path always matches the cost that ordered it.
pub fn find_path_a_star<G: Grid + ?Sized>(
    grid: &G,
    evaluator: &HeuristicEvaluator,
    limits: &SearchLimits,
) -> Result<SearchReport> {
    let started = Instant::now();
    let start = grid.start();
    let objectives: HashSet<State> = evaluator.objectives().iter().copied().collect();

    let mut frontier = Frontier::new();
    let mut visited: HashSet<State> = HashSet::new();
    let mut predecessors: HashMap<State, State> = HashMap::new();
    let mut best_cost: HashMap<State, Cost> = HashMap::new();
    let mut explored = 0usize;

    debug!(
        start = %start,
        objectives = objectives.len(),
        heuristic = %evaluator.heuristic(),
        "starting a* search"
    );

    best_cost.insert(start, 0);
    frontier.push(Node::new(start, evaluator.estimate(start)));

    while !frontier.is_empty() {
        let node = frontier.pop()?;
        if visited.contains(&node.state) {
            continue;
        }

        if limits.exceeded(explored, started) {
            debug!(explored, "search budget exceeded");
            return Ok(SearchReport::exhausted(
                explored,
                ExhaustionReason::BudgetExceeded,
            ));
        }

        visited.insert(node.state);
        if let Some(parent) = node.parent {
            predecessors.entry(node.state).or_insert(parent);
        }
        explored += 1;
        trace!(
            state = %node.state,
            cost = node.cost,
            priority = node.priority,
            frontier = frontier.len(),
            "expanding state"
        );

        if objectives.contains(&node.state) {
            let path = reconstruct_path(&predecessors, start, node.state)?;
            debug!(goal = %node.state, explored, moves = node.cost, "objective reached");
            return Ok(SearchReport {
                path,
                explored,
                outcome: SearchOutcome::Succeeded { goal: node.state },
            });
        }

        let next_cost = node.cost + 1;
        for next in grid.neighbors(node.state) {
            if visited.contains(&next) || !grid.is_valid_move(next) {
                continue;
            }
            if best_cost.get(&next).is_some_and(|&c| c <= next_cost) {
                continue;
            }
            best_cost.insert(next, next_cost);
            let estimate = evaluator.estimate(next);
            frontier.push(Node::reached(next, node.state, next_cost, estimate));
        }
    }

    debug!(explored, "frontier exhausted without reaching an objective");
    Ok(SearchReport::exhausted(
        explored,
        ExhaustionReason::NoSolutionFound,
    ))
}

/// Rebuild the path from `start` to `terminal` by following predecessor links.
pub fn reconstruct_path(
    predecessors: &HashMap<State, State>,
    start: State,
    terminal: State,
) -> Result<Vec<State>> {
    let mut path = vec![terminal];
    let mut current = terminal;
    while current != start {
        current = *predecessors
            .get(&current)
            .ok_or(Error::MissingPredecessor { state: current })?;
        path.push(current);
    }
    path.reverse();
    Ok(path)
}
