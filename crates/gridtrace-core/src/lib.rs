//! **gridtrace-core** — geometry and the occupancy grid.
//!
//! This crate provides the types shared by the *gridtrace* search crates:
//! the `(row, col)` [`Coord`], the [`Bounds`] of a grid, and the immutable
//! occupancy [`Grid`] with its construction errors.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Coord};
pub use grid::{Cell, Grid, GridError};
