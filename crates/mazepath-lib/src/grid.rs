use std::collections::BTreeSet;

use crate::state::State;

/// Goal cells of a grid. Ordered so that iteration is deterministic.
pub type ObjectiveSet = BTreeSet<State>;

/// Grid interface consumed by the search engine.
pub trait Grid {
    /// Cell the search starts from.
    fn start(&self) -> State;

    /// Cells that end the search when reached.
    fn objectives(&self) -> ObjectiveSet;

    /// Candidate moves from `state`. Candidates are not yet filtered by
    /// [`Grid::is_valid_move`].
    fn neighbors(&self, state: State) -> Vec<State>;

    /// Whether `state` is inside the grid and not blocked.
    fn is_valid_move(&self, state: State) -> bool;
}
