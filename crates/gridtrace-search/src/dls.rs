//! Depth-limited depth-first search.
//!
//! The traversal state lives in [`DepthLimited`], owned by a single
//! invocation. Recursion is replaced by an explicit stack of frames, each
//! remembering which move to try next, so the visit order is exactly that of
//! the recursive formulation without risking the call stack on large grids.

use gridtrace_core::{Coord, Grid};

use crate::neighbors::MoveSet;
use crate::path::reconstruct;
use crate::searcher::{SearchError, SearchRun, Searcher, conclude, validate_limit};
use crate::state::{ParentMap, VisitedSet};
use crate::trace::{Aux, Current, Trace, TraceEntry, TraceRecorder, VisitedSnapshot};

/// Result of one depth-limited run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LimitedOutcome {
    Found(Vec<Coord>),
    /// The limit stopped at least one branch.
    Cutoff,
    /// Everything reachable was explored without hitting the limit.
    Exhausted,
}

struct Frame {
    node: Coord,
    depth: i32,
    next: usize,
}

/// State of a single depth-limited traversal.
pub(crate) struct DepthLimited<'g> {
    grid: &'g Grid,
    target: Coord,
    limit: i32,
    /// Tag entries with the round's limit (iterative deepening).
    tag_limit: bool,
    visited: VisitedSet,
    parents: ParentMap,
    recorder: TraceRecorder,
    cutoff: bool,
}

impl<'g> DepthLimited<'g> {
    pub(crate) fn new(grid: &'g Grid, target: Coord, limit: i32, tag_limit: bool) -> Self {
        let bounds = grid.bounds();
        Self {
            grid,
            target,
            limit,
            tag_limit,
            visited: VisitedSet::new(bounds),
            parents: ParentMap::new(bounds),
            recorder: TraceRecorder::new(),
            cutoff: false,
        }
    }

    /// Run from `start`, consuming the state.
    pub(crate) fn run(mut self, start: Coord) -> (LimitedOutcome, Trace) {
        self.parents.insert(start, None);

        let outcome = if self.search(start) {
            let path = reconstruct(&self.parents, self.target);
            let depth = path.len() as i32 - 1;
            let entry = TraceEntry::new(
                Current::Node(self.target),
                VisitedSnapshot::Nodes(self.visited.snapshot()),
            )
            .with_aux(self.aux(depth))
            .with_path(path.clone());
            self.recorder.record(entry);
            LimitedOutcome::Found(path)
        } else if self.cutoff {
            LimitedOutcome::Cutoff
        } else {
            LimitedOutcome::Exhausted
        };

        (outcome, self.recorder.finish())
    }

    fn search(&mut self, start: Coord) -> bool {
        debug_assert!(self.limit >= 0, "negative depth limit {}", self.limit);
        if self.enter(start, 0) {
            return true;
        }

        let moves = MoveSet::SIX_WAY;
        let mut frames = vec![Frame {
            node: start,
            depth: 0,
            next: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let Some(offset) = moves.get(frame.next) else {
                frames.pop();
                continue;
            };
            frame.next += 1;

            let parent = frame.node;
            let node = parent + offset;
            let depth = frame.depth + 1;

            if !self.grid.is_free(node) || self.visited.contains(node) {
                continue;
            }
            // Too deep: neither visited nor expanded.
            if depth > self.limit {
                self.cutoff = true;
                continue;
            }

            self.parents.insert(node, Some(parent));
            if self.enter(node, depth) {
                return true;
            }
            frames.push(Frame {
                node,
                depth,
                next: 0,
            });
        }

        false
    }

    /// Mark `node` visited at `depth` and record it. Returns whether it is
    /// the target.
    fn enter(&mut self, node: Coord, depth: i32) -> bool {
        self.visited.insert(node);
        let entry = TraceEntry::new(
            Current::Node(node),
            VisitedSnapshot::Nodes(self.visited.snapshot()),
        )
        .with_aux(self.aux(depth));
        self.recorder.record(entry);
        node == self.target
    }

    fn aux(&self, depth: i32) -> Aux {
        if self.tag_limit {
            Aux::Iteration {
                depth,
                limit: self.limit,
            }
        } else {
            Aux::Depth(depth)
        }
    }
}

impl Searcher<'_> {
    /// Depth-limited search from `start` to `target` over the six-way move
    /// set.
    ///
    /// Cells deeper than `limit` are neither visited nor expanded. The
    /// visited set is shared by every branch of the call, so a cell reached
    /// first along a long branch is not revisited along a shorter one. Each
    /// entry carries the current depth.
    pub fn dls(&self, start: Coord, target: Coord, limit: i32) -> Result<SearchRun, SearchError> {
        validate_limit(limit)?;
        self.validate(start, target)?;

        let (outcome, trace) = DepthLimited::new(self.grid, target, limit, false).run(start);
        if outcome == LimitedOutcome::Cutoff {
            log::debug!("dls: cut off at limit {limit}");
        }
        let mut recorder = TraceRecorder::new();
        recorder.append(trace);
        let path = match outcome {
            LimitedOutcome::Found(path) => Some(path),
            LimitedOutcome::Cutoff | LimitedOutcome::Exhausted => None,
        };
        Ok(conclude("dls", recorder, path))
    }
}
