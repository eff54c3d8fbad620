use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Path cost and heuristic unit. Every move on the grid costs one.
pub type Cost = u32;

/// A cell position on the grid, addressed by row then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct State {
    pub row: i32,
    pub col: i32,
}

impl State {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(&self, other: &State) -> Cost {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(i32, i32)> for State {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Frontier entry: a state scored by its estimated total cost.
///
/// Nodes order by `priority` only, with insertion sequence as the tie-break,
/// and the ordering is reversed so that a `BinaryHeap<Node>` pops the
/// cheapest entry first.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub state: State,
    /// Accumulated cost from the start plus the heuristic estimate.
    pub priority: Cost,
    /// Accumulated cost from the start.
    pub cost: Cost,
    /// State this node was reached from; `None` for the start.
    pub parent: Option<State>,
    pub(crate) seq: u64,
}

impl Node {
    pub fn new(state: State, priority: Cost) -> Self {
        Self {
            state,
            priority,
            cost: 0,
            parent: None,
            seq: 0,
        }
    }

    /// Node reached from `parent` with accumulated `cost` and heuristic `estimate`.
    pub fn reached(state: State, parent: State, cost: Cost, estimate: Cost) -> Self {
        Self {
            state,
            priority: cost.saturating_add(estimate),
            cost,
            parent: Some(parent),
            seq: 0,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
