use gridtrace_core::Coord;

use crate::frontier::{Frontier, MinQueue};
use crate::neighbors::{MoveSet, Neighbors};
use crate::path::reconstruct;
use crate::searcher::{PathNode, SearchError, SearchRun, Searcher, conclude};
use crate::state::{CostMap, NodeMap, ParentMap};
use crate::trace::{Aux, Current, FrontierSnapshot, TraceEntry, TraceRecorder, VisitedSnapshot};

/// Cost of one move, orthogonal or diagonal.
const STEP_COST: i32 = 1;

impl Searcher<'_> {
    /// Uniform-cost search from `start` to `target` over the eight-way move
    /// set with unit step cost.
    ///
    /// Popped entries whose cell already has a confirmed cost no greater than
    /// theirs are stale and discarded without an entry. A neighbor is pushed
    /// whenever it is unconfirmed or the new cost beats its confirmed cost, so
    /// the queue may hold several entries per cell. The parent pointer only
    /// moves on a strictly cheaper tentative cost, which keeps the returned
    /// path as cheap as the reported cost.
    pub fn ucs(&self, start: Coord, target: Coord) -> Result<SearchRun, SearchError> {
        self.validate(start, target)?;

        let bounds = self.grid.bounds();
        let mut queue = MinQueue::new();
        let mut costs = CostMap::new(bounds);
        let mut tentative: NodeMap<i32> = NodeMap::new(bounds);
        let mut parents = ParentMap::new(bounds);
        let mut recorder = TraceRecorder::new();
        let mut nbrs = Neighbors::new();

        queue.push(PathNode {
            pos: start,
            cost: 0,
        });
        tentative.insert(start, 0);
        parents.insert(start, None);

        let mut found = None;
        while let Some(PathNode { pos: current, cost }) = queue.pop() {
            if costs.get(current).is_some_and(|c| c <= cost) {
                continue;
            }
            costs.finalize(current, cost);

            recorder.record(
                TraceEntry::new(Current::Node(current), VisitedSnapshot::Costed(costs.snapshot()))
                    .with_frontier(FrontierSnapshot::Costed(queue.snapshot()))
                    .with_aux(Aux::Cost(cost)),
            );

            if current == target {
                found = Some(cost);
                break;
            }

            let next = cost + STEP_COST;
            for &n in nbrs.expand(self.grid, current, MoveSet::EIGHT_WAY) {
                if costs.get(n).is_some_and(|c| c <= next) {
                    continue;
                }
                if tentative.get(n).is_none_or(|c| next < c) {
                    tentative.insert(n, next);
                    parents.insert(n, Some(current));
                }
                queue.push(PathNode { pos: n, cost: next });
            }
        }

        let path = found.map(|cost| {
            let path = reconstruct(&parents, target);
            recorder.record(
                TraceEntry::new(Current::Node(target), VisitedSnapshot::Costed(costs.snapshot()))
                    .with_frontier(FrontierSnapshot::Costed(Vec::new()))
                    .with_aux(Aux::Cost(cost))
                    .with_path(path.clone()),
            );
            path
        });

        Ok(conclude("ucs", recorder, path))
    }
}
