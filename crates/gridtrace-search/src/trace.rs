//! Step-by-step search traces.
//!
//! A [`Trace`] is the ordered list of [`TraceEntry`] snapshots a strategy
//! produced, one per processed node plus one terminal entry carrying the
//! path when the search succeeds. Entries are never reordered or merged.
//! A finished trace is immutable, `Send` and `Sync`, so it can be handed to
//! any number of consumers at once.

use gridtrace_core::Coord;

use crate::searcher::PathNode;

/// The node(s) being processed when an entry was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Current {
    Node(Coord),
    /// One bidirectional round. `backward` is `None` when the forward half
    /// met the backward search before the backward half ran.
    Pair {
        forward: Coord,
        backward: Option<Coord>,
    },
}

/// Pending entries at the time of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierSnapshot {
    /// Depth-limited strategies keep no explicit frontier.
    None,
    /// Queue (front first) or stack (bottom first) contents.
    Nodes(Vec<Coord>),
    /// Priority queue contents, in pop order.
    Costed(Vec<PathNode>),
    /// Forward and backward queues of a bidirectional search.
    Split {
        forward: Vec<Coord>,
        backward: Vec<Coord>,
    },
}

/// Visited or finalized nodes at the time of the snapshot, in the order they
/// were marked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitedSnapshot {
    Nodes(Vec<Coord>),
    /// Finalized uniform-cost entries.
    Costed(Vec<PathNode>),
    Split {
        forward: Vec<Coord>,
        backward: Vec<Coord>,
    },
}

/// Strategy-specific scalar attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aux {
    Depth(i32),
    Cost(i32),
    /// Current depth within an iterative-deepening round, and that round's
    /// limit.
    Iteration { depth: i32, limit: i32 },
}

/// Coarse state shown by a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Searching,
    Found,
}

/// One immutable snapshot of search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    pub current: Current,
    pub frontier: FrontierSnapshot,
    pub visited: VisitedSnapshot,
    pub aux: Option<Aux>,
    /// Bidirectional meeting node, once known.
    pub meeting: Option<Coord>,
    /// The final path; only set on the terminal entry.
    pub path: Option<Vec<Coord>>,
}

impl TraceEntry {
    /// An entry with no frontier, scalar, meeting node or path.
    pub fn new(current: Current, visited: VisitedSnapshot) -> Self {
        Self {
            current,
            frontier: FrontierSnapshot::None,
            visited,
            aux: None,
            meeting: None,
            path: None,
        }
    }

    /// Set the frontier snapshot (builder).
    pub fn with_frontier(mut self, frontier: FrontierSnapshot) -> Self {
        self.frontier = frontier;
        self
    }

    /// Set the auxiliary scalar (builder).
    pub fn with_aux(mut self, aux: Aux) -> Self {
        self.aux = Some(aux);
        self
    }

    /// Set the meeting node (builder).
    pub fn with_meeting(mut self, meeting: Option<Coord>) -> Self {
        self.meeting = meeting;
        self
    }

    /// Set the final path (builder).
    pub fn with_path(mut self, path: Vec<Coord>) -> Self {
        self.path = Some(path);
        self
    }

    /// Whether this is the terminal entry of a successful search.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.path.is_some()
    }

    pub fn status(&self) -> Status {
        if self.is_terminal() {
            Status::Found
        } else {
            Status::Searching
        }
    }

    /// Every coordinate of the visited snapshot.
    pub fn visited_coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        match &self.visited {
            VisitedSnapshot::Nodes(v) => Box::new(v.iter().copied()),
            VisitedSnapshot::Costed(v) => Box::new(v.iter().map(|n| n.pos)),
            VisitedSnapshot::Split { forward, backward } => {
                Box::new(forward.iter().chain(backward).copied())
            }
        }
    }

    /// Every coordinate of the frontier snapshot, duplicates included.
    pub fn frontier_coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        match &self.frontier {
            FrontierSnapshot::None => Box::new(std::iter::empty()),
            FrontierSnapshot::Nodes(v) => Box::new(v.iter().copied()),
            FrontierSnapshot::Costed(v) => Box::new(v.iter().map(|n| n.pos)),
            FrontierSnapshot::Split { forward, backward } => {
                Box::new(forward.iter().chain(backward).copied())
            }
        }
    }

    /// Whether `c` appears in the visited snapshot.
    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited_coords().any(|v| v == c)
    }
}

/// An ordered, finished sequence of [`TraceEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    /// All entries, in production order.
    #[inline]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&TraceEntry> {
        self.entries.get(i)
    }

    #[inline]
    pub fn first(&self) -> Option<&TraceEntry> {
        self.entries.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// The path carried by the terminal entry, if the search succeeded.
    pub fn final_path(&self) -> Option<&[Coord]> {
        self.last().and_then(|e| e.path.as_deref())
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Append-only builder used while a search runs.
#[derive(Debug, Default)]
pub(crate) struct TraceRecorder {
    entries: Vec<TraceEntry>,
}

impl TraceRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: TraceEntry) {
        log::trace!("step {}: {:?}", self.entries.len(), entry.current);
        self.entries.push(entry);
    }

    /// Append every entry of a finished sub-trace.
    pub(crate) fn append(&mut self, trace: Trace) {
        self.entries.extend(trace.entries);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn finish(self) -> Trace {
        Trace {
            entries: self.entries,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn finished_trace_round_trips_with_status() {
        let mut r = TraceRecorder::new();
        r.record(
            TraceEntry::new(Current::Node(Coord::new(0, 0)), VisitedSnapshot::Nodes(vec![]))
                .with_path(vec![Coord::new(0, 0)]),
        );
        let t = r.finish();
        let json = serde_json::to_string(&t).unwrap();
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        let status = back.last().map(TraceEntry::status).unwrap();
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), Status::Found);
    }
}
