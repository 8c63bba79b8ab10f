//! Algorithm choice and engine settings.

use std::fmt;
use std::str::FromStr;

/// Which best-first variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Dijkstra: frontier keyed by distance from the start.
    UniformCost,
    /// A*: frontier keyed by distance plus Manhattan estimate to the end.
    #[default]
    HeuristicGuided,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Self::UniformCost, Self::HeuristicGuided];

    /// Short name, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniformCost => "dijkstra",
            Self::HeuristicGuided => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected dijkstra or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Self::UniformCost),
            "astar" | "a*" | "heuristic-guided" => Ok(Self::HeuristicGuided),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Settings for [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Algorithm used by [`Engine::run`](crate::Engine::run).
    pub algorithm: Algorithm,
    /// Wipe visited/frontier/path marks left by an earlier search before
    /// starting. Has no effect on snapshot searches.
    pub clear_marks: bool,
    /// Notify the observer for every path cell during reconstruction.
    pub notify_path: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            clear_marks: true,
            notify_path: true,
        }
    }
}

impl SearchConfig {
    /// Set the algorithm (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set whether earlier marks are cleared (builder).
    pub fn with_clear_marks(mut self, clear: bool) -> Self {
        self.clear_marks = clear;
        self
    }

    /// Set whether path cells are reported (builder).
    pub fn with_notify_path(mut self, notify: bool) -> Self {
        self.notify_path = notify;
        self
    }
}
