//! Pairwise distances between objectives and single-source relaxation over them.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::Grid;
use crate::state::{Cost, State};

/// Source of the base distance between two objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PairwiseDistance {
    /// Manhattan distance, ignoring walls.
    #[default]
    Manhattan,
    /// Shortest walkable distance through the grid.
    Grid,
}

impl fmt::Display for PairwiseDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PairwiseDistance::Manhattan => "manhattan",
            PairwiseDistance::Grid => "grid",
        };
        f.write_str(value)
    }
}

impl FromStr for PairwiseDistance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(PairwiseDistance::Manhattan),
            "grid" => Ok(PairwiseDistance::Grid),
            other => Err(Error::UnknownPairwiseDistance {
                name: other.to_string(),
            }),
        }
    }
}

/// Relaxed cost from each objective to all others; see [`relaxed_costs`].
pub type RelaxedCosts = HashMap<State, Cost>;

/// Symmetric distance table between objective cells.
///
/// Pairs without an entry are unreachable from one another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMatrix {
    distances: HashMap<(State, State), Cost>,
}

impl DistanceMatrix {
    /// Build the table from Manhattan distances.
    pub fn manhattan<'a>(objectives: impl IntoIterator<Item = &'a State> + Clone) -> Self {
        let mut matrix = Self::default();
        for a in objectives.clone() {
            for b in objectives.clone() {
                if a < b {
                    matrix.insert(*a, *b, a.manhattan(b));
                }
            }
        }
        matrix
    }

    /// Build the table from walkable grid distances, flooding once per objective.
    pub fn from_grid<'a, G: Grid + ?Sized>(
        grid: &G,
        objectives: impl IntoIterator<Item = &'a State> + Clone,
    ) -> Self {
        let mut matrix = Self::default();
        for a in objectives.clone() {
            let flood = bfs_distances(grid, *a);
            for b in objectives.clone() {
                if a < b {
                    if let Some(&distance) = flood.get(b) {
                        matrix.insert(*a, *b, distance);
                    }
                }
            }
        }
        matrix
    }

    /// Build the table using the requested distance source.
    pub fn build<'a, G: Grid + ?Sized>(
        source: PairwiseDistance,
        grid: &G,
        objectives: impl IntoIterator<Item = &'a State> + Clone,
    ) -> Self {
        match source {
            PairwiseDistance::Manhattan => Self::manhattan(objectives),
            PairwiseDistance::Grid => Self::from_grid(grid, objectives),
        }
    }

    pub fn insert(&mut self, a: State, b: State, distance: Cost) {
        self.distances.insert(key(a, b), distance);
    }

    /// Distance between `a` and `b`, or `None` when they are not connected.
    pub fn get(&self, a: State, b: State) -> Option<Cost> {
        if a == b {
            return Some(0);
        }
        self.distances.get(&key(a, b)).copied()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

fn key(a: State, b: State) -> (State, State) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Shortest unit-cost distances from `source` to every cell reachable through `grid`.
pub fn bfs_distances<G: Grid + ?Sized>(grid: &G, source: State) -> HashMap<State, Cost> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for next in grid.neighbors(current) {
            if distances.contains_key(&next) || !grid.is_valid_move(next) {
                continue;
            }
            distances.insert(next, next_distance);
            queue.push_back(next);
        }
    }

    distances
}

/// Single-source shortest distances from `source` to every objective, relaxing
/// through the pairwise distances in `matrix`.
///
/// Objectives that cannot be reached keep `None`.
pub fn relax_from(
    source: State,
    objectives: &[State],
    matrix: &DistanceMatrix,
) -> BTreeMap<State, Option<Cost>> {
    let mut tentative: BTreeMap<State, Option<Cost>> = objectives
        .iter()
        .map(|&objective| (objective, None))
        .collect();
    tentative.insert(source, Some(0));
    let mut unsettled: Vec<State> = tentative.keys().copied().collect();

    while let Some((position, current, current_distance)) = unsettled
        .iter()
        .enumerate()
        .filter_map(|(i, state)| tentative[state].map(|d| (i, *state, d)))
        .min_by_key(|&(_, _, distance)| distance)
    {
        unsettled.swap_remove(position);

        for &other in &unsettled {
            let Some(base) = matrix.get(current, other) else {
                continue;
            };
            let candidate = current_distance.saturating_add(base);
            let entry = tentative.entry(other).or_insert(None);
            if entry.is_none_or(|known| candidate < known) {
                *entry = Some(candidate);
            }
        }
    }

    tentative
}

/// Sum of the finite relaxation distances from `source` to every objective.
pub fn aggregated_cost(source: State, objectives: &[State], matrix: &DistanceMatrix) -> Cost {
    relax_from(source, objectives, matrix)
        .values()
        .flatten()
        .fold(0, |sum: Cost, distance| sum.saturating_add(*distance))
}

/// [`aggregated_cost`] from every objective, computed once so lookups stay O(1).
pub fn relaxed_costs(objectives: &[State], matrix: &DistanceMatrix) -> RelaxedCosts {
    objectives
        .iter()
        .map(|&objective| {
            let cost = aggregated_cost(objective, objectives, matrix);
            (objective, cost)
        })
        .collect()
}
