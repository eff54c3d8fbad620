use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Grid, ObjectiveSet};
use crate::state::State;

const WALL: char = '%';
const START: char = 'P';
const OBJECTIVE: char = '.';
const OPEN: char = ' ';

/// Rectangular maze with orthogonal unit-cost moves.
///
/// Text form: `%` wall, `P` start, `.` objective, space for open floor.
/// Rows shorter than the widest row are padded with walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
    start: State,
    objectives: ObjectiveSet,
}

impl Maze {
    /// Build a maze with no walls.
    pub fn open(rows: usize, cols: usize, start: State, objectives: ObjectiveSet) -> Self {
        Self {
            rows,
            cols,
            walls: vec![false; rows * cols],
            start,
            objectives,
        }
    }

    /// Return a copy of this maze with `state` blocked. Out-of-range cells are ignored.
    pub fn with_wall(mut self, state: State) -> Self {
        if let Some(index) = self.index(state) {
            self.walls[index] = true;
        }
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `state` is a wall. Cells outside the maze count as walls.
    pub fn is_wall(&self, state: State) -> bool {
        self.index(state).is_none_or(|index| self.walls[index])
    }

    fn index(&self, state: State) -> Option<usize> {
        let row = usize::try_from(state.row).ok()?;
        let col = usize::try_from(state.col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}

impl Grid for Maze {
    fn start(&self) -> State {
        self.start
    }

    fn objectives(&self) -> ObjectiveSet {
        self.objectives.clone()
    }

    fn neighbors(&self, state: State) -> Vec<State> {
        let State { row, col } = state;
        [
            row.checked_add(1).map(|r| State::new(r, col)),
            row.checked_sub(1).map(|r| State::new(r, col)),
            col.checked_add(1).map(|c| State::new(row, c)),
            col.checked_sub(1).map(|c| State::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn is_valid_move(&self, state: State) -> bool {
        !self.is_wall(state)
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let row_count = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last| last + 1);
        let lines = &lines[..row_count];
        let cols = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut walls = vec![true; row_count * cols];
        let mut start: Option<State> = None;
        let mut objectives = ObjectiveSet::new();

        for (row, line) in lines.iter().enumerate() {
            let row_index = coordinate(row, row + 1)?;
            for (col, ch) in line.chars().enumerate() {
                let state = State::new(row_index, coordinate(col, row + 1)?);
                match ch {
                    WALL => continue,
                    OPEN => {}
                    OBJECTIVE => {
                        objectives.insert(state);
                    }
                    START => {
                        if let Some(first) = start {
                            return Err(Error::MultipleStarts {
                                first,
                                second: state,
                            });
                        }
                        start = Some(state);
                    }
                    other => {
                        let column = col + 1;
                        return Err(Error::MazeParse {
                            line: row + 1,
                            message: format!("unexpected character '{other}' at column {column}"),
                        });
                    }
                }
                walls[row * cols + col] = false;
            }
        }

        let start = start.ok_or(Error::MissingStart)?;
        Ok(Self {
            rows: row_count,
            cols,
            walls,
            start,
            objectives,
        })
    }
}

/// Convert a zero-based row or column index into a coordinate.
fn coordinate(index: usize, line: usize) -> Result<i32> {
    i32::try_from(index).map_err(|_| Error::MazeParse {
        line,
        message: format!("index {index} does not fit in a grid coordinate"),
    })
}

/// Load a maze from a text file.
pub fn load_maze(path: &Path) -> Result<Maze> {
    let text = fs::read_to_string(path)?;
    let maze: Maze = text.parse()?;
    debug!(
        path = %path.display(),
        rows = maze.rows,
        cols = maze.cols,
        objectives = maze.objectives.len(),
        "loaded maze"
    );
    Ok(maze)
}
