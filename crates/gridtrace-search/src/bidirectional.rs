//! Bidirectional breadth-first search.
//!
//! Two breadth-first halves run in lockstep, one rooted at the start and one
//! at the target. Every round the forward half expands one node, then the
//! backward half expands one node. The search stops at the first cell
//! discovered by one half that the other half has already visited, even in
//! the middle of an expansion. The resulting path is valid but not always
//! the shortest.

use gridtrace_core::{Coord, Grid};

use crate::frontier::{FifoQueue, Frontier};
use crate::neighbors::{MoveSet, Neighbors};
use crate::path::{reconstruct, walk_to_root};
use crate::searcher::{SearchError, SearchRun, Searcher, conclude};
use crate::state::{ParentMap, VisitedSet};
use crate::trace::{Current, FrontierSnapshot, TraceEntry, TraceRecorder, VisitedSnapshot};

/// One direction of the search.
struct Half {
    queue: FifoQueue,
    visited: VisitedSet,
    parents: ParentMap,
}

impl Half {
    fn new(grid: &Grid, root: Coord) -> Self {
        let bounds = grid.bounds();
        let mut half = Self {
            queue: FifoQueue::new(),
            visited: VisitedSet::new(bounds),
            parents: ParentMap::new(bounds),
        };
        half.queue.push(root);
        half.visited.insert(root);
        half.parents.insert(root, None);
        half
    }

    /// Expand the next queued node. Returns the node and, if one of its newly
    /// discovered neighbors is already in `other`, that meeting cell.
    fn step(
        &mut self,
        grid: &Grid,
        nbrs: &mut Neighbors,
        other: &VisitedSet,
    ) -> Option<(Coord, Option<Coord>)> {
        let current = self.queue.pop()?;
        for &n in nbrs.expand(grid, current, MoveSet::SIX_WAY) {
            if !self.visited.insert(n) {
                continue;
            }
            self.parents.insert(n, Some(current));
            self.queue.push(n);
            if other.contains(n) {
                return Some((current, Some(n)));
            }
        }
        Some((current, None))
    }
}

fn snapshot(
    current: Current,
    forward: &Half,
    backward: &Half,
    meeting: Option<Coord>,
) -> TraceEntry {
    TraceEntry::new(
        current,
        VisitedSnapshot::Split {
            forward: forward.visited.snapshot(),
            backward: backward.visited.snapshot(),
        },
    )
    .with_frontier(FrontierSnapshot::Split {
        forward: forward.queue.snapshot(),
        backward: backward.queue.snapshot(),
    })
    .with_meeting(meeting)
}

impl Searcher<'_> {
    /// Bidirectional breadth-first search between `start` and `target` over
    /// the six-way move set.
    ///
    /// One entry is recorded per round. A round cut short because the
    /// forward half met the backward search has no backward node. When
    /// `start == target` the search succeeds at once.
    pub fn bidirectional(&self, start: Coord, target: Coord) -> Result<SearchRun, SearchError> {
        self.validate(start, target)?;

        let mut forward = Half::new(self.grid, start);
        let mut backward = Half::new(self.grid, target);
        let mut recorder = TraceRecorder::new();
        let mut nbrs = Neighbors::new();

        let mut meeting = (start == target).then_some(start);
        while meeting.is_none() && !forward.queue.is_empty() && !backward.queue.is_empty() {
            let Some((fwd, met)) = forward.step(self.grid, &mut nbrs, &backward.visited) else {
                break;
            };
            if met.is_some() {
                meeting = met;
                recorder.record(snapshot(
                    Current::Pair {
                        forward: fwd,
                        backward: None,
                    },
                    &forward,
                    &backward,
                    meeting,
                ));
                break;
            }

            let Some((bwd, met)) = backward.step(self.grid, &mut nbrs, &forward.visited) else {
                break;
            };
            meeting = met;
            recorder.record(snapshot(
                Current::Pair {
                    forward: fwd,
                    backward: Some(bwd),
                },
                &forward,
                &backward,
                meeting,
            ));
        }

        let path = meeting.map(|meet| {
            let mut path = reconstruct(&forward.parents, meet);
            if let Some(Some(next)) = backward.parents.get(meet) {
                path.extend(walk_to_root(&backward.parents, next));
            }
            log::debug!("bidirectional: halves met at {meet}");
            recorder.record(
                snapshot(Current::Node(meet), &forward, &backward, Some(meet))
                    .with_frontier(FrontierSnapshot::Split {
                        forward: Vec::new(),
                        backward: Vec::new(),
                    })
                    .with_path(path.clone()),
            );
            path
        });

        Ok(conclude("bidirectional", recorder, path))
    }
}
