use gridtrace_core::Coord;

use crate::frontier::{Frontier, LifoStack};
use crate::neighbors::{MoveSet, Neighbors};
use crate::path::reconstruct;
use crate::searcher::{SearchError, SearchRun, Searcher, conclude};
use crate::state::{ParentMap, VisitedSet};
use crate::trace::{Current, FrontierSnapshot, TraceEntry, TraceRecorder, VisitedSnapshot};

impl Searcher<'_> {
    /// Depth-first search from `start` to `target` over the six-way move
    /// set.
    ///
    /// Cells are marked visited when popped, and a cell popped a second time
    /// is discarded, so the stack may hold duplicates. Successors are pushed
    /// in reverse move order so the first direction is explored first. A
    /// cell keeps the parent that discovered it first. The path returned is
    /// the first one found, not necessarily the shortest.
    pub fn dfs(&self, start: Coord, target: Coord) -> Result<SearchRun, SearchError> {
        self.validate(start, target)?;

        let bounds = self.grid.bounds();
        let mut stack = LifoStack::new();
        let mut visited = VisitedSet::new(bounds);
        let mut parents = ParentMap::new(bounds);
        let mut recorder = TraceRecorder::new();
        let mut nbrs = Neighbors::new();

        stack.push(start);
        parents.insert(start, None);

        let mut found = false;
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }

            recorder.record(
                TraceEntry::new(Current::Node(current), VisitedSnapshot::Nodes(visited.snapshot()))
                    .with_frontier(FrontierSnapshot::Nodes(stack.snapshot())),
            );

            if current == target {
                found = true;
                break;
            }

            // Reversal and move order go together: LIFO pops undo the reversal.
            for &n in nbrs.expand(self.grid, current, MoveSet::SIX_WAY).iter().rev() {
                if visited.contains(n) {
                    continue;
                }
                if !parents.contains(n) {
                    parents.insert(n, Some(current));
                }
                stack.push(n);
            }
        }

        let path = found.then(|| reconstruct(&parents, target));
        if let Some(path) = &path {
            recorder.record(
                TraceEntry::new(Current::Node(target), VisitedSnapshot::Nodes(visited.snapshot()))
                    .with_frontier(FrontierSnapshot::Nodes(Vec::new()))
                    .with_path(path.clone()),
            );
        }

        Ok(conclude("dfs", recorder, path))
    }
}
