use gridtrace_core::Coord;

use crate::frontier::{FifoQueue, Frontier};
use crate::neighbors::{MoveSet, Neighbors};
use crate::path::reconstruct;
use crate::searcher::{SearchError, SearchRun, Searcher, conclude};
use crate::state::{ParentMap, VisitedSet};
use crate::trace::{Current, FrontierSnapshot, TraceEntry, TraceRecorder, VisitedSnapshot};

impl Searcher<'_> {
    /// Breadth-first search from `start` to `target` over the six-way move
    /// set.
    ///
    /// Cells are marked visited when they are enqueued. One entry is
    /// recorded per dequeued cell, and the first dequeue of `target` follows
    /// a path with the fewest edges.
    pub fn bfs(&self, start: Coord, target: Coord) -> Result<SearchRun, SearchError> {
        self.validate(start, target)?;

        let bounds = self.grid.bounds();
        let mut queue = FifoQueue::new();
        let mut visited = VisitedSet::new(bounds);
        let mut parents = ParentMap::new(bounds);
        let mut recorder = TraceRecorder::new();
        let mut nbrs = Neighbors::new();

        queue.push(start);
        visited.insert(start);
        parents.insert(start, None);

        let mut found = false;
        while let Some(current) = queue.pop() {
            recorder.record(
                TraceEntry::new(Current::Node(current), VisitedSnapshot::Nodes(visited.snapshot()))
                    .with_frontier(FrontierSnapshot::Nodes(queue.snapshot())),
            );

            if current == target {
                found = true;
                break;
            }

            for &n in nbrs.expand(self.grid, current, MoveSet::SIX_WAY) {
                if visited.insert(n) {
                    parents.insert(n, Some(current));
                    queue.push(n);
                }
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

        Ok(conclude("bfs", recorder, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::Grid;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn straight_corridor() {
        let g = Grid::parse("....").unwrap();
        let run = Searcher::new(&g).bfs(c(0, 0), c(0, 3)).unwrap();
        assert_eq!(run.path, Some(vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3)]));
        // Four dequeues plus the terminal entry.
        assert_eq!(run.trace.len(), 5);
        assert_eq!(run.trace.final_path(), run.path.as_deref());
    }

    #[test]
    fn first_entry_sees_start_visited_and_empty_queue() {
        let g = Grid::parse("...\n...").unwrap();
        let run = Searcher::new(&g).bfs(c(0, 0), c(1, 2)).unwrap();
        let first = run.trace.first().unwrap();
        assert_eq!(first.current, Current::Node(c(0, 0)));
        assert_eq!(first.visited, VisitedSnapshot::Nodes(vec![c(0, 0)]));
        assert_eq!(first.frontier, FrontierSnapshot::Nodes(vec![]));
        // Second entry: start expanded right, down, down-right in that order.
        let second = run.trace.get(1).unwrap();
        assert_eq!(second.current, Current::Node(c(0, 1)));
        assert_eq!(
            second.frontier,
            FrontierSnapshot::Nodes(vec![c(1, 0), c(1, 1)])
        );
    }

    #[test]
    fn unreachable_target_returns_full_trace() {
        let g = Grid::parse("..#.\n..#.").unwrap();
        let run = Searcher::new(&g).bfs(c(0, 0), c(0, 3)).unwrap();
        assert!(!run.is_found());
        assert_eq!(run.trace.len(), 4);
        assert!(run.trace.iter().all(|e| !e.is_terminal()));
    }

    #[test]
    fn start_equals_target() {
        let g = Grid::parse("..").unwrap();
        let run = Searcher::new(&g).bfs(c(0, 1), c(0, 1)).unwrap();
        assert_eq!(run.path, Some(vec![c(0, 1)]));
        assert_eq!(run.edges(), Some(0));
        assert_eq!(run.trace.len(), 2);
    }

    #[test]
    fn blocked_start_rejected() {
        let g = Grid::parse("#.").unwrap();
        assert!(matches!(
            Searcher::new(&g).bfs(c(0, 0), c(0, 1)),
            Err(SearchError::Blocked { .. })
        ));
    }
}
