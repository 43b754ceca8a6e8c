use std::fmt;

use gridtrace_core::{Coord, Grid, GridError};

use crate::trace::{Aux, Trace, TraceRecorder};

/// A position with an associated cost, as held by the uniform-cost frontier
/// and cost map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which end of a search an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Input errors, all detected before a search allocates any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Coord },
    /// An endpoint is a blocked cell.
    Blocked { endpoint: Endpoint, pos: Coord },
    /// A negative depth limit or maximum depth.
    InvalidLimit(i32),
    /// The grid could not be built or queried.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "search: {endpoint} {pos} is outside the grid")
            }
            Self::Blocked { endpoint, pos } => write!(f, "search: {endpoint} {pos} is blocked"),
            Self::InvalidLimit(limit) => {
                write!(f, "search: depth limit must be non-negative, got {limit}")
            }
            Self::Grid(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ---------------------------------------------------------------------------
// SearchRun
// ---------------------------------------------------------------------------

/// The outcome of one strategy invocation.
///
/// Every strategy returns its path here as well as in the terminal trace
/// entry. Exhaustion is not an error: `path` is `None` and `trace` holds
/// everything that was explored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRun {
    pub trace: Trace,
    pub path: Option<Vec<Coord>>,
}

impl SearchRun {
    /// Whether the target was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in edges.
    pub fn edges(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }

    /// Total cost of the path. Uniform-cost runs report the finalized cost of
    /// the target; the other strategies count unit steps.
    pub fn cost(&self) -> Option<i32> {
        let path = self.path.as_ref()?;
        match self.trace.last().and_then(|e| e.aux) {
            Some(Aux::Cost(cost)) => Some(cost),
            _ => Some(path.len() as i32 - 1),
        }
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Entry point for every strategy over one grid.
///
/// A `Searcher` only borrows the grid. Each strategy call allocates its own
/// frontier, visited/cost map, parent map and trace, so calls are
/// independent and repeatable.
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'g> {
    pub(crate) grid: &'g Grid,
}

impl<'g> Searcher<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Reject endpoints that are out of bounds or blocked.
    pub(crate) fn validate(&self, start: Coord, target: Coord) -> Result<(), SearchError> {
        for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::Target, target)] {
            if !self.grid.in_bounds(pos) {
                return Err(SearchError::OutOfBounds { endpoint, pos });
            }
            if self.grid.is_blocked(pos)? {
                return Err(SearchError::Blocked { endpoint, pos });
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_limit(limit: i32) -> Result<(), SearchError> {
    if limit < 0 {
        return Err(SearchError::InvalidLimit(limit));
    }
    Ok(())
}

/// Seal a finished run and log its outcome.
pub(crate) fn conclude(
    strategy: &str,
    recorder: TraceRecorder,
    path: Option<Vec<Coord>>,
) -> SearchRun {
    match &path {
        Some(p) => log::debug!(
            "{strategy}: path of {} edges after {} steps",
            p.len() - 1,
            recorder.len()
        ),
        None => log::debug!("{strategy}: no path after {} steps", recorder.len()),
    }
    SearchRun {
        trace: recorder.finish(),
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::parse("..\n.#").unwrap()
    }

    #[test]
    fn validate_accepts_free_endpoints() {
        let g = grid();
        assert_eq!(Searcher::new(&g).validate(Coord::new(0, 0), Coord::new(1, 0)), Ok(()));
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let g = grid();
        let s = Searcher::new(&g);
        assert_eq!(
            s.validate(Coord::new(-1, 0), Coord::new(0, 0)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: Coord::new(-1, 0)
            })
        );
        assert_eq!(
            s.validate(Coord::new(0, 0), Coord::new(0, 2)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Target,
                pos: Coord::new(0, 2)
            })
        );
    }

    #[test]
    fn validate_rejects_blocked() {
        let g = grid();
        assert_eq!(
            Searcher::new(&g).validate(Coord::new(0, 0), Coord::new(1, 1)),
            Err(SearchError::Blocked {
                endpoint: Endpoint::Target,
                pos: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn limits() {
        assert_eq!(validate_limit(0), Ok(()));
        assert_eq!(validate_limit(-1), Err(SearchError::InvalidLimit(-1)));
    }

    #[test]
    fn error_display() {
        let e = SearchError::Blocked {
            endpoint: Endpoint::Start,
            pos: Coord::new(1, 2),
        };
        assert_eq!(e.to_string(), "search: start (1, 2) is blocked");
        let e: SearchError = GridError::Empty.into();
        assert!(std::error::Error::source(&e).is_some());
    }
}
