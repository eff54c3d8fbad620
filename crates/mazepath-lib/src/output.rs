use std::fmt::Write;

use serde::Serialize;

use crate::heuristic::Heuristic;
use crate::path::{SearchOutcome, SearchReport};
use crate::routing::{SearchMethod, SearchRequest};
use crate::state::State;

/// Step taken along a found path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub state: State,
}

/// Structured representation of a finished search that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchSummary {
    pub method: SearchMethod,
    pub heuristic: Heuristic,
    pub start: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<State>,
    pub moves: usize,
    pub explored: usize,
    pub outcome: SearchOutcome,
    pub steps: Vec<PathStep>,
}

impl SearchSummary {
    /// Combine the request that was run with the report it produced.
    pub fn from_report(request: &SearchRequest, start: State, report: &SearchReport) -> Self {
        let steps = report
            .path
            .iter()
            .enumerate()
            .map(|(index, state)| PathStep {
                index,
                state: *state,
            })
            .collect();

        Self {
            method: request.method,
            heuristic: request.config.heuristic,
            start,
            goal: report.goal(),
            moves: report.moves(),
            explored: report.explored,
            outcome: report.outcome,
            steps,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Succeeded { .. })
    }

    fn header(&self) -> String {
        match self.goal {
            Some(goal) => format!(
                "Path: {} -> {} ({} moves, {} explored, heuristic: {})",
                self.start, goal, self.moves, self.explored, self.heuristic
            ),
            None => format!(
                "No path from {} ({} explored, heuristic: {})",
                self.start, self.explored, self.heuristic
            ),
        }
    }

    /// Header line followed by one numbered line per step.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.header());
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {}", step.index, step.state);
        }
        buffer
    }
}
