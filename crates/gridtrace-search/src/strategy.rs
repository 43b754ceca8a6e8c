//! Strategy selection by value or by name.

use std::fmt;
use std::str::FromStr;

use gridtrace_core::Coord;

use crate::neighbors::MoveSet;
use crate::searcher::{SearchError, SearchRun, Searcher};

/// One of the six search strategies, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    Bfs,
    Dfs,
    DepthLimited { limit: i32 },
    IterativeDeepening { max_depth: i32 },
    UniformCost,
    Bidirectional,
}

impl Strategy {
    /// Every strategy, with the given depth parameter for the two
    /// depth-bounded ones.
    pub fn all(depth: i32) -> [Strategy; 6] {
        [
            Strategy::Bfs,
            Strategy::Dfs,
            Strategy::DepthLimited { limit: depth },
            Strategy::IterativeDeepening { max_depth: depth },
            Strategy::UniformCost,
            Strategy::Bidirectional,
        ]
    }

    /// Short name, without parameters.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::DepthLimited { .. } => "dls",
            Strategy::IterativeDeepening { .. } => "iddfs",
            Strategy::UniformCost => "ucs",
            Strategy::Bidirectional => "bidirectional",
        }
    }

    /// The move set the strategy expands with.
    pub fn move_set(self) -> MoveSet {
        match self {
            Strategy::UniformCost => MoveSet::EIGHT_WAY,
            _ => MoveSet::SIX_WAY,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthLimited { limit } => write!(f, "dls:{limit}"),
            Strategy::IterativeDeepening { max_depth } => write!(f, "iddfs:{max_depth}"),
            _ => f.write_str(self.name()),
        }
    }
}

/// Error returned when parsing a [`Strategy`] name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStrategyError {
    Unknown(String),
    /// A depth-bounded strategy without a usable `:<depth>` suffix.
    BadDepth(String),
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "unknown strategy {s:?}"),
            Self::BadDepth(s) => write!(f, "strategy {s:?} needs a depth, e.g. dls:3"),
        }
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let depth = || {
            arg.and_then(|a| a.trim().parse::<i32>().ok())
                .ok_or_else(|| ParseStrategyError::BadDepth(s.to_string()))
        };
        let plain = |strategy: Strategy| match arg {
            None => Ok(strategy),
            Some(_) => Err(ParseStrategyError::Unknown(s.to_string())),
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "bfs" => plain(Strategy::Bfs),
            "dfs" => plain(Strategy::Dfs),
            "dls" => Ok(Strategy::DepthLimited { limit: depth()? }),
            "iddfs" => Ok(Strategy::IterativeDeepening {
                max_depth: depth()?,
            }),
            "ucs" => plain(Strategy::UniformCost),
            "bidirectional" | "bd" => plain(Strategy::Bidirectional),
            _ => Err(ParseStrategyError::Unknown(s.to_string())),
        }
    }
}

impl Searcher<'_> {
    /// Run `strategy` from `start` to `target`.
    pub fn run(
        &self,
        strategy: Strategy,
        start: Coord,
        target: Coord,
    ) -> Result<SearchRun, SearchError> {
        match strategy {
            Strategy::Bfs => self.bfs(start, target),
            Strategy::Dfs => self.dfs(start, target),
            Strategy::DepthLimited { limit } => self.dls(start, target, limit),
            Strategy::IterativeDeepening { max_depth } => self.iddfs(start, target, max_depth),
            Strategy::UniformCost => self.ucs(start, target),
            Strategy::Bidirectional => self.bidirectional(start, target),
        }
    }
}
