use thiserror::Error;

use crate::state::State;

/// Convenient result alias for the mazepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// A search that exhausts its frontier is not an error; see
/// [`crate::ExhaustionReason`].
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a maze file contains a line that cannot be interpreted.
    #[error("invalid maze at line {line}: {message}")]
    MazeParse { line: usize, message: String },

    /// Raised when a maze has no start cell.
    #[error("maze does not contain a start cell ('P')")]
    MissingStart,

    /// Raised when a maze declares more than one start cell.
    #[error("maze contains more than one start cell: {first} and {second}")]
    MultipleStarts { first: State, second: State },

    /// Raised when a search method has no implementation.
    #[error("search method {method} is not supported yet")]
    UnsupportedMethod { method: String },

    /// Raised when a heuristic name cannot be resolved.
    #[error("unknown heuristic: {name}")]
    UnknownHeuristic { name: String },

    /// Raised when a pairwise distance source cannot be resolved.
    #[error("unknown pairwise distance source: {name}")]
    UnknownPairwiseDistance { name: String },

    /// Raised when a search method name cannot be resolved.
    #[error("unknown search method: {name}")]
    UnknownMethod { name: String },

    /// Extraction from an empty frontier. The engine checks for emptiness
    /// before popping, so this never leaves a search invocation.
    #[error("attempted to pop from an empty frontier")]
    EmptyFrontier,

    /// A reconstructed path hit a state with no recorded predecessor.
    #[error("no predecessor recorded for {state} while reconstructing path")]
    MissingPredecessor { state: State },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised when a search configuration document cannot be decoded.
    #[error("invalid search configuration: {0}")]
    Config(#[from] serde_json::Error),
}
