use gridtrace_core::Coord;

use crate::dls::{DepthLimited, LimitedOutcome};
use crate::searcher::{SearchError, SearchRun, Searcher, conclude, validate_limit};
use crate::trace::TraceRecorder;

impl Searcher<'_> {
    /// Iterative-deepening search from `start` to `target`.
    ///
    /// Runs depth-limited search with limits `0..=max_depth`, each with a
    /// fresh visited set and parent map, and concatenates every round's
    /// entries. Entries carry both the current depth and the round's limit.
    /// The first successful round yields a path of at most `limit` edges.
    ///
    /// Deepening stops early once a round explores everything reachable
    /// without cutting anything off.
    pub fn iddfs(
        &self,
        start: Coord,
        target: Coord,
        max_depth: i32,
    ) -> Result<SearchRun, SearchError> {
        validate_limit(max_depth)?;
        self.validate(start, target)?;

        let mut recorder = TraceRecorder::new();
        let mut path = None;
        for limit in 0..=max_depth {
            let (outcome, trace) = DepthLimited::new(self.grid, target, limit, true).run(start);
            log::trace!("iddfs: limit {limit} produced {} entries", trace.len());
            recorder.append(trace);
            match outcome {
                LimitedOutcome::Found(p) => {
                    path = Some(p);
                    break;
                }
                LimitedOutcome::Cutoff => {}
                LimitedOutcome::Exhausted => {
                    log::debug!("iddfs: search space exhausted at limit {limit}");
                    break;
                }
            }
        }

        Ok(conclude("iddfs", recorder, path))
    }
}
