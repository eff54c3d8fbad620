use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::state::Node;

/// Min-priority exploration queue.
///
/// Entries with equal priority pop in insertion order. The frontier does not
/// de-duplicate states; stale entries are filtered by the caller.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Node>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut node: Node) {
        node.seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(node);
    }

    /// Remove and return the cheapest node.
    pub fn pop(&mut self) -> Result<Node> {
        self.heap.pop().ok_or(Error::EmptyFrontier)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
