//! Distance estimators used to guide the search.
//!
//! Only [`Heuristic::MinManhattan`] never overestimates the remaining cost
//! to the nearest objective. The other strategies trade that guarantee for
//! faster convergence on mazes with several objectives, so a search that
//! uses them may return a longer path than necessary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::{relaxed_costs, DistanceMatrix, PairwiseDistance, RelaxedCosts};
use crate::error::Error;
use crate::grid::Grid;
use crate::state::{Cost, State};

/// Objective count above which [`Heuristic::WeightedMinManhattan`] doubles its estimate.
const WEIGHTING_THRESHOLD: usize = 2;
const WEIGHT: Cost = 2;

/// Supported distance estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Manhattan distance to the nearest objective.
    #[default]
    MinManhattan,
    /// Nearest-objective Manhattan distance, doubled while more than two
    /// objectives remain. Inadmissible.
    WeightedMinManhattan,
    /// Sum of Manhattan distances to every objective. Inadmissible.
    SumOfAllGoals,
    /// Greedy nearest-neighbour chain through all objectives. Inadmissible.
    SumOfMinimumConnectedGoals,
    /// Distance to the nearest objective plus the relaxed distances from it
    /// to all other objectives. Inadmissible with more than one objective.
    PrecomputedDijkstra,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::MinManhattan,
        Heuristic::WeightedMinManhattan,
        Heuristic::SumOfAllGoals,
        Heuristic::SumOfMinimumConnectedGoals,
        Heuristic::PrecomputedDijkstra,
    ];

    /// Whether the estimate never exceeds the true distance to the nearest
    /// objective, which keeps A* results optimal.
    pub fn is_admissible(self) -> bool {
        matches!(self, Heuristic::MinManhattan)
    }

    /// Whether [`Heuristic::estimate`] reads relaxed objective costs.
    pub fn requires_distance_matrix(self) -> bool {
        matches!(self, Heuristic::PrecomputedDijkstra)
    }

    /// Estimate the remaining cost from `state`. Returns 0 when there are no objectives.
    pub fn estimate(self, state: State, objectives: &[State], relaxed: &RelaxedCosts) -> Cost {
        match self {
            Heuristic::MinManhattan => min_manhattan(state, objectives),
            Heuristic::WeightedMinManhattan => weighted_min_manhattan(state, objectives),
            Heuristic::SumOfAllGoals => sum_of_all_goals(state, objectives),
            Heuristic::SumOfMinimumConnectedGoals => {
                sum_of_minimum_connected_goals(state, objectives)
            }
            Heuristic::PrecomputedDijkstra => precomputed_dijkstra(state, objectives, relaxed),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::MinManhattan => "min-manhattan",
            Heuristic::WeightedMinManhattan => "weighted-min-manhattan",
            Heuristic::SumOfAllGoals => "sum-of-all-goals",
            Heuristic::SumOfMinimumConnectedGoals => "sum-of-minimum-connected-goals",
            Heuristic::PrecomputedDijkstra => "precomputed-dijkstra",
        };
        f.write_str(value)
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|heuristic| heuristic.to_string() == s)
            .ok_or_else(|| Error::UnknownHeuristic {
                name: s.to_string(),
            })
    }
}

/// Heuristic bound to one search: the objectives and, when needed, the
/// relaxed cost from each of them, computed once from the distance matrix.
#[derive(Debug, Clone)]
pub struct HeuristicEvaluator {
    heuristic: Heuristic,
    objectives: Vec<State>,
    relaxed: RelaxedCosts,
}

impl HeuristicEvaluator {
    pub fn new<G: Grid + ?Sized>(
        heuristic: Heuristic,
        grid: &G,
        objectives: Vec<State>,
        pairwise: PairwiseDistance,
    ) -> Self {
        let relaxed = if heuristic.requires_distance_matrix() {
            let matrix = DistanceMatrix::build(pairwise, grid, &objectives);
            relaxed_costs(&objectives, &matrix)
        } else {
            RelaxedCosts::new()
        };
        Self {
            heuristic,
            objectives,
            relaxed,
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn objectives(&self) -> &[State] {
        &self.objectives
    }

    pub fn estimate(&self, state: State) -> Cost {
        let objectives = &self.objectives;
        self.heuristic.estimate(state, objectives, &self.relaxed)
    }
}

fn nearest(state: State, objectives: &[State]) -> Option<(usize, State, Cost)> {
    objectives
        .iter()
        .enumerate()
        .map(|(index, objective)| (index, *objective, state.manhattan(objective)))
        .min_by_key(|&(_, _, distance)| distance)
}

pub fn min_manhattan(state: State, objectives: &[State]) -> Cost {
    nearest(state, objectives).map_or(0, |(_, _, distance)| distance)
}

pub fn weighted_min_manhattan(state: State, objectives: &[State]) -> Cost {
    let estimate = min_manhattan(state, objectives);
    if objectives.len() > WEIGHTING_THRESHOLD {
        estimate.saturating_mul(WEIGHT)
    } else {
        estimate
    }
}

pub fn sum_of_all_goals(state: State, objectives: &[State]) -> Cost {
    objectives
        .iter()
        .map(|objective| state.manhattan(objective))
        .fold(0, Cost::saturating_add)
}

/// Walk to the nearest objective, then recurse from it over the objectives
/// that remain. Each step works on its own copy of the remainder.
pub fn sum_of_minimum_connected_goals(state: State, objectives: &[State]) -> Cost {
    let Some((index, closest, distance)) = nearest(state, objectives) else {
        return 0;
    };
    let remaining: Vec<State> = objectives
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != index)
        .map(|(_, objective)| *objective)
        .collect();
    distance.saturating_add(sum_of_minimum_connected_goals(closest, &remaining))
}

/// Distance to the nearest objective plus its precomputed relaxed cost.
pub fn precomputed_dijkstra(state: State, objectives: &[State], relaxed: &RelaxedCosts) -> Cost {
    let Some((_, closest, distance)) = nearest(state, objectives) else {
        return 0;
    };
    let tail = relaxed.get(&closest).copied().unwrap_or(0);
    distance.saturating_add(tail)
}
