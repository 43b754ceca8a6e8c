//! Per-run node state: flat maps keyed by grid cell.
//!
//! Every search invocation allocates its own maps sized to the grid, so no
//! state survives from one call to the next.

use gridtrace_core::{Bounds, Coord};

use crate::searcher::PathNode;

/// A map from in-bounds coordinates to `T`, stored as a flat array.
#[derive(Debug, Clone)]
pub(crate) struct NodeMap<T> {
    bounds: Bounds,
    slots: Vec<Option<T>>,
}

impl<T: Copy> NodeMap<T> {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            slots: vec![None; bounds.len()],
        }
    }

    #[inline]
    pub(crate) fn get(&self, c: Coord) -> Option<T> {
        self.bounds.index(c).and_then(|i| self.slots[i])
    }

    #[inline]
    pub(crate) fn contains(&self, c: Coord) -> bool {
        self.get(c).is_some()
    }

    /// Store `value` at `c`, returning the previous value. Out-of-bounds
    /// coordinates are ignored.
    pub(crate) fn insert(&mut self, c: Coord, value: T) -> Option<T> {
        debug_assert!(self.bounds.contains(c), "node map insert out of bounds: {c}");
        let i = self.bounds.index(c)?;
        self.slots[i].replace(value)
    }
}

/// Predecessor pointers. `Some(None)` marks a root.
pub(crate) type ParentMap = NodeMap<Option<Coord>>;

/// Visited set that remembers insertion order, so snapshots are
/// reproducible.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    seen: NodeMap<()>,
    order: Vec<Coord>,
}

impl VisitedSet {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            seen: NodeMap::new(bounds),
            order: Vec::new(),
        }
    }

    /// Mark `c` visited. Returns `true` if it was not visited before.
    pub(crate) fn insert(&mut self, c: Coord) -> bool {
        if self.seen.insert(c, ()).is_some() {
            return false;
        }
        self.order.push(c);
        true
    }

    #[inline]
    pub(crate) fn contains(&self, c: Coord) -> bool {
        self.seen.contains(c)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Visited coordinates in the order they were marked.
    pub(crate) fn snapshot(&self) -> Vec<Coord> {
        self.order.clone()
    }
}

/// Finalized costs, in finalization order.
#[derive(Debug, Clone)]
pub(crate) struct CostMap {
    costs: NodeMap<i32>,
    order: Vec<Coord>,
}

impl CostMap {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            costs: NodeMap::new(bounds),
            order: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, c: Coord) -> Option<i32> {
        self.costs.get(c)
    }

    /// Record `cost` as the confirmed cost of `c`.
    pub(crate) fn finalize(&mut self, c: Coord, cost: i32) {
        if self.costs.insert(c, cost).is_none() {
            self.order.push(c);
        }
    }

    /// Confirmed costs in the order they were first confirmed.
    pub(crate) fn snapshot(&self) -> Vec<PathNode> {
        self.order
            .iter()
            .filter_map(|&pos| self.costs.get(pos).map(|cost| PathNode { pos, cost }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_map_insert_and_replace() {
        let mut m: NodeMap<i32> = NodeMap::new(Bounds::new(2, 2));
        assert_eq!(m.get(Coord::new(1, 1)), None);
        assert_eq!(m.insert(Coord::new(1, 1), 5), None);
        assert_eq!(m.insert(Coord::new(1, 1), 7), Some(5));
        assert_eq!(m.get(Coord::new(1, 1)), Some(7));
        assert!(!m.contains(Coord::new(0, 0)));
        assert_eq!(m.get(Coord::new(4, 4)), None);
    }

    #[test]
    fn parent_map_distinguishes_root_from_unset() {
        let mut p: ParentMap = NodeMap::new(Bounds::new(2, 2));
        p.insert(Coord::new(0, 0), None);
        assert_eq!(p.get(Coord::new(0, 0)), Some(None));
        assert_eq!(p.get(Coord::new(0, 1)), None);
    }

    #[test]
    fn visited_set_keeps_order() {
        let mut v = VisitedSet::new(Bounds::new(3, 3));
        assert!(v.insert(Coord::new(2, 2)));
        assert!(v.insert(Coord::new(0, 1)));
        assert!(!v.insert(Coord::new(2, 2)));
        assert_eq!(v.len(), 2);
        assert_eq!(v.snapshot(), vec![Coord::new(2, 2), Coord::new(0, 1)]);
    }

    #[test]
    fn cost_map_snapshot() {
        let mut m = CostMap::new(Bounds::new(3, 3));
        m.finalize(Coord::new(0, 0), 0);
        m.finalize(Coord::new(1, 1), 1);
        m.finalize(Coord::new(0, 0), 0);
        assert_eq!(m.get(Coord::new(1, 1)), Some(1));
        assert_eq!(
            m.snapshot(),
            vec![
                PathNode {
                    pos: Coord::new(0, 0),
                    cost: 0
                },
                PathNode {
                    pos: Coord::new(1, 1),
                    cost: 1
                },
            ]
        );
    }
}
