//! Shared pieces of the gridtrace demo: the sample grid, a text overlay for
//! paths and one-line run summaries.

use std::collections::HashSet;
use std::fmt::Write;

use gridtrace_core::{Coord, Grid, GridError};
use gridtrace_search::{SearchError, SearchRun, Searcher, Strategy};

/// The 5x5 sample grid.
pub const SAMPLE: &str = "\
.....
.##..
.....
..##.
.....";

pub const START: Coord = Coord::new(0, 0);
pub const TARGET: Coord = Coord::new(4, 4);

/// Depth used for `dls` and `iddfs` when none is given.
pub const DEFAULT_DEPTH: i32 = 10;

pub fn sample_grid() -> Result<Grid, GridError> {
    Grid::parse(SAMPLE)
}

/// The grid's text form with every path cell replaced by `*`.
pub fn render_path(grid: &Grid, path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.bounds().len() + grid.rows() as usize);
    for (c, cell) in grid {
        if c.col == 0 && c.row > 0 {
            out.push('\n');
        }
        out.push(if on_path.contains(&c) { '*' } else { cell.to_char() });
    }
    out
}

/// One line describing how `run` ended.
pub fn summarize(strategy: Strategy, run: &SearchRun) -> String {
    let mut line = format!("{:<14}", strategy.to_string());
    let steps = run.trace.len();
    match (run.edges(), run.cost()) {
        (Some(edges), Some(cost)) => {
            let _ = write!(line, "path of {edges} edges, cost {cost}, {steps} steps");
            if let Some(meet) = run.trace.last().and_then(|e| e.meeting) {
                let _ = write!(line, ", met at {meet}");
            }
        }
        _ => {
            let _ = write!(line, "no path, {steps} steps");
        }
    }
    line
}

/// Run each strategy from [`START`] to [`TARGET`] and render the results.
pub fn report(grid: &Grid, strategies: &[Strategy]) -> Result<String, SearchError> {
    let searcher = Searcher::new(grid);
    let mut out = String::new();
    for &strategy in strategies {
        log::info!("running {strategy}");
        let run = searcher.run(strategy, START, TARGET)?;
        out.push_str(&summarize(strategy, &run));
        out.push('\n');
        if let Some(path) = &run.path {
            out.push_str(&render_path(grid, path));
            out.push_str("\n\n");
        }
    }
    Ok(out)
}
