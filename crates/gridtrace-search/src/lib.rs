//! Traced search strategies on occupancy grids.
//!
//! This crate implements six classic uninformed and cost-based searches over
//! a [`Grid`](gridtrace_core::Grid):
//!
//! - **Breadth-first** search ([`Searcher::bfs`])
//! - **Depth-first** search ([`Searcher::dfs`])
//! - **Depth-limited** search ([`Searcher::dls`])
//! - **Iterative deepening** ([`Searcher::iddfs`])
//! - **Uniform-cost** search ([`Searcher::ucs`])
//! - **Bidirectional** breadth-first search ([`Searcher::bidirectional`])
//!
//! Every strategy records a [`Trace`] with one [`TraceEntry`] per processed
//! node, enough to replay the search step by step, and returns it with the
//! path in a [`SearchRun`].
//!
//! # Move sets
//!
//! | Strategy | [`MoveSet`] |
//! |---|---|
//! | BFS, DFS, DLS, IDDFS, bidirectional | [`MoveSet::SIX_WAY`] |
//! | UCS | [`MoveSet::EIGHT_WAY`] |

mod bfs;
mod bidirectional;
mod dfs;
mod dls;
mod frontier;
mod iddfs;
mod neighbors;
mod path;
mod searcher;
mod state;
mod strategy;
mod trace;
mod ucs;

pub use frontier::{FifoQueue, Frontier, LifoStack, MinQueue};
pub use gridtrace_core::{Bounds, Cell, Coord, Grid, GridError};
pub use neighbors::{MoveSet, Neighbors};
pub use searcher::{Endpoint, PathNode, SearchError, SearchRun, Searcher};
pub use strategy::{ParseStrategyError, Strategy};
pub use trace::{Aux, Current, FrontierSnapshot, Status, Trace, TraceEntry, VisitedSnapshot};
