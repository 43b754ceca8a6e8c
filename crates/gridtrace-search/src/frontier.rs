//! Frontier structures: FIFO queue, LIFO stack and min-priority queue.
//!
//! All three implement [`Frontier`], so the expansion loops read the same
//! way regardless of discipline. Each one can [`snapshot`](Frontier::snapshot)
//! its pending entries for the trace.

use std::collections::{BinaryHeap, VecDeque};

use gridtrace_core::Coord;

use crate::searcher::PathNode;

/// Common interface of the pending-node containers.
pub trait Frontier {
    type Item: Copy;

    /// Add an entry.
    fn push(&mut self, item: Self::Item);

    /// Remove the next entry according to the container's discipline.
    fn pop(&mut self) -> Option<Self::Item>;

    /// The entry [`pop`](Self::pop) would return next.
    fn peek(&self) -> Option<Self::Item>;

    /// Number of pending entries, duplicates included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the pending entries, in the container's natural order.
    fn snapshot(&self) -> Vec<Self::Item>;
}

// ---------------------------------------------------------------------------
// FifoQueue
// ---------------------------------------------------------------------------

/// First-in first-out queue of coordinates.
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    items: VecDeque<Coord>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoQueue {
    type Item = Coord;

    fn push(&mut self, item: Coord) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<Coord> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<Coord> {
        self.items.front().copied()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    /// Front (next to pop) to back.
    fn snapshot(&self) -> Vec<Coord> {
        self.items.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// LifoStack
// ---------------------------------------------------------------------------

/// Last-in first-out stack of coordinates.
#[derive(Debug, Clone, Default)]
pub struct LifoStack {
    items: Vec<Coord>,
}

impl LifoStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoStack {
    type Item = Coord;

    fn push(&mut self, item: Coord) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<Coord> {
        self.items.pop()
    }

    fn peek(&self) -> Option<Coord> {
        self.items.last().copied()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    /// Bottom to top: the last element is the next to pop.
    fn snapshot(&self) -> Vec<Coord> {
        self.items.clone()
    }
}

// ---------------------------------------------------------------------------
// MinQueue
// ---------------------------------------------------------------------------

/// Heap entry ordered by cost, then by insertion sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    node: PathNode,
    seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first,
        // and among equal costs the earliest push.
        (other.node.cost, other.seq).cmp(&(self.node.cost, self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of costed coordinates.
///
/// Equal costs pop in insertion order, which keeps runs reproducible. The
/// queue may hold several entries for the same coordinate; callers discard
/// stale ones on pop.
#[derive(Debug, Clone, Default)]
pub struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    seq: u64,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinQueue {
    type Item = PathNode;

    fn push(&mut self, node: PathNode) {
        self.heap.push(QueueEntry {
            node,
            seq: self.seq,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<PathNode> {
        self.heap.pop().map(|e| e.node)
    }

    fn peek(&self) -> Option<PathNode> {
        self.heap.peek().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    /// In pop order.
    fn snapshot(&self) -> Vec<PathNode> {
        let mut entries: Vec<QueueEntry> = self.heap.iter().copied().collect();
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| e.node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn node(row: i32, col: i32, cost: i32) -> PathNode {
        PathNode {
            pos: c(row, col),
            cost,
        }
    }

    #[test]
    fn fifo_order() {
        let mut q = FifoQueue::new();
        q.push(c(0, 0));
        q.push(c(0, 1));
        q.push(c(0, 2));
        assert_eq!(q.peek(), Some(c(0, 0)));
        assert_eq!(q.snapshot(), vec![c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(q.pop(), Some(c(0, 0)));
        assert_eq!(q.pop(), Some(c(0, 1)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn lifo_order() {
        let mut s = LifoStack::new();
        s.push(c(0, 0));
        s.push(c(0, 1));
        s.push(c(0, 2));
        assert_eq!(s.peek(), Some(c(0, 2)));
        assert_eq!(s.snapshot(), vec![c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(s.pop(), Some(c(0, 2)));
        assert_eq!(s.pop(), Some(c(0, 1)));
        assert!(!s.is_empty());
        assert_eq!(s.pop(), Some(c(0, 0)));
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn min_queue_pops_cheapest_first() {
        let mut q = MinQueue::new();
        q.push(node(0, 0, 3));
        q.push(node(0, 1, 1));
        q.push(node(0, 2, 2));
        assert_eq!(q.peek(), Some(node(0, 1, 1)));
        assert_eq!(q.pop().map(|n| n.cost), Some(1));
        assert_eq!(q.pop().map(|n| n.cost), Some(2));
        assert_eq!(q.pop().map(|n| n.cost), Some(3));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn min_queue_ties_break_by_insertion() {
        let mut q = MinQueue::new();
        q.push(node(2, 2, 1));
        q.push(node(0, 0, 1));
        q.push(node(1, 1, 1));
        q.push(node(3, 3, 0));
        assert_eq!(
            q.snapshot(),
            vec![node(3, 3, 0), node(2, 2, 1), node(0, 0, 1), node(1, 1, 1)]
        );
        let popped: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(
            popped,
            vec![node(3, 3, 0), node(2, 2, 1), node(0, 0, 1), node(1, 1, 1)]
        );
    }

    #[test]
    fn min_queue_keeps_duplicates() {
        let mut q = MinQueue::new();
        q.push(node(1, 1, 4));
        q.push(node(1, 1, 2));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop(), Some(node(1, 1, 2)));
        assert_eq!(q.pop(), Some(node(1, 1, 4)));
    }
}
