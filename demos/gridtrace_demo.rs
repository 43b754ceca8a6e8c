//! Runs search strategies on the sample grid and prints what each found.
//!
//! Run: cargo run --bin gridtrace-demo -- [bfs dfs dls:8 iddfs:10 ucs bidirectional]

use gridtrace_demos::{DEFAULT_DEPTH, report, sample_grid};
use gridtrace_search::{SearchError, Strategy};

fn main() {
    let strategies: Result<Vec<Strategy>, _> =
        std::env::args().skip(1).map(|arg| arg.parse::<Strategy>()).collect();
    let strategies = match strategies {
        Ok(s) if s.is_empty() => Strategy::all(DEFAULT_DEPTH).to_vec(),
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let result = sample_grid()
        .map_err(SearchError::from)
        .and_then(|grid| report(&grid, &strategies));
    match result {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
