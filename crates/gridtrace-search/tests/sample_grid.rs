//! Scenarios on the 5x5 sample grid used throughout the demos.

use gridtrace_search::{
    Aux, Coord, Grid, MoveSet, SearchRun, Searcher, Strategy, Trace, TraceEntry,
};

const SAMPLE: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

const START: Coord = Coord::new(0, 0);
const TARGET: Coord = Coord::new(4, 4);

fn sample() -> Grid {
    Grid::from_rows(&SAMPLE).unwrap()
}

fn assert_walkable(grid: &Grid, path: &[Coord], moves: MoveSet) {
    assert_eq!(path.first(), Some(&START));
    assert_eq!(path.last(), Some(&TARGET));
    for &p in path {
        assert!(grid.is_free(p), "{p} is not free");
    }
    for w in path.windows(2) {
        assert!(moves.connects(w[0], w[1]), "{} -> {} is not a move", w[0], w[1]);
    }
}

#[test]
fn bfs_shortest_path() {
    let g = sample();
    let run = Searcher::new(&g).bfs(START, TARGET).unwrap();
    let path = run.path.as_deref().unwrap();
    // Five edges would need three down-right moves, which the blocks rule out.
    assert_eq!(run.edges(), Some(6));
    assert_walkable(&g, path, MoveSet::SIX_WAY);

    let first = run.trace.first().unwrap();
    assert!(first.is_visited(START));
    assert_eq!(run.trace.final_path(), Some(path));
}

#[test]
fn ucs_minimum_cost() {
    let g = sample();
    let run = Searcher::new(&g).ucs(START, TARGET).unwrap();
    assert_eq!(run.cost(), Some(6));
    assert_eq!(run.edges(), Some(6));
    assert_walkable(&g, run.path.as_deref().unwrap(), MoveSet::EIGHT_WAY);
}

#[test]
fn dfs_finds_a_longer_path() {
    let g = sample();
    let s = Searcher::new(&g);
    let run = s.dfs(START, TARGET).unwrap();
    assert_walkable(&g, run.path.as_deref().unwrap(), MoveSet::SIX_WAY);
    assert!(run.edges() >= s.bfs(START, TARGET).unwrap().edges());
}

#[test]
fn dls_limit_two_fails() {
    let g = sample();
    let run = Searcher::new(&g).dls(START, TARGET, 2).unwrap();
    assert!(!run.is_found());
    assert!(!run.trace.is_empty());
    assert!(run.trace.iter().all(|e| !e.is_terminal()));
}

#[test]
fn iddfs_matches_first_successful_dls() {
    let g = sample();
    let s = Searcher::new(&g);

    let mut rounds: Vec<SearchRun> = Vec::new();
    for limit in 0..=10 {
        let run = s.dls(START, TARGET, limit).unwrap();
        let found = run.is_found();
        rounds.push(run);
        if found {
            break;
        }
    }
    let last = rounds.last().unwrap();
    assert!(last.is_found());
    let first_limit = rounds.len() as i32 - 1;
    assert_eq!(first_limit, 8);

    let run = s.iddfs(START, TARGET, 10).unwrap();
    assert_eq!(run.path, last.path);
    assert_eq!(
        run.trace.last().unwrap().aux,
        Some(Aux::Iteration {
            depth: 8,
            limit: first_limit
        })
    );
    let expected: usize = rounds.iter().map(|r| r.trace.len()).sum();
    assert_eq!(run.trace.len(), expected);
}

#[test]
fn bidirectional_connects_both_ends() {
    let g = sample();
    let run = Searcher::new(&g).bidirectional(START, TARGET).unwrap();
    let path = run.path.as_deref().unwrap();
    assert_walkable(&g, path, MoveSet::SIX_WAY);
    let meet = run.trace.last().unwrap().meeting.unwrap();
    assert!(path.contains(&meet));
}

#[test]
fn every_strategy_is_repeatable() {
    let g = sample();
    let s = Searcher::new(&g);
    for strategy in Strategy::all(10) {
        let a = s.run(strategy, START, TARGET).unwrap();
        let b = s.run(strategy, START, TARGET).unwrap();
        assert_eq!(a, b, "{strategy} is not deterministic");
        assert!(a.is_found(), "{strategy} found no path");
        assert_eq!(a.trace.final_path(), a.path.as_deref());
    }
}

#[test]
fn traces_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Trace>();
    assert_send_sync::<TraceEntry>();

    let g = sample();
    let trace = Searcher::new(&g).bfs(START, TARGET).unwrap().trace;
    std::thread::scope(|scope| {
        let a = scope.spawn(|| trace.iter().filter(|e| e.is_terminal()).count());
        let b = scope.spawn(|| trace.len());
        assert_eq!(a.join().unwrap(), 1);
        assert_eq!(b.join().unwrap(), trace.len());
    });
}
