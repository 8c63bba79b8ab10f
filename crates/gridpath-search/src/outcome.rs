//! Search results: [`Path`], [`Outcome`], [`SearchStats`].

use gridpath_core::{Grid, Pos};

use crate::error::EmptyPath;

/// A start-to-end sequence of cells, both endpoints included.
///
/// Serialized as the bare list of cells. An empty list is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Pos>", into = "Vec<Pos>"))]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Pos>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }

    /// Number of cells, endpoints included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for paths produced by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. the path cost under unit edge weights.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    pub fn end(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// Whether every pair of consecutive cells is one orthogonal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Whether the path is contiguous and crosses no barrier of `grid`.
    pub fn is_walkable(&self, grid: &Grid) -> bool {
        self.is_contiguous()
            && self
                .cells
                .iter()
                .all(|&p| grid.state(p).is_some_and(|s| !s.is_barrier()))
    }
}

impl TryFrom<Vec<Pos>> for Path {
    type Error = EmptyPath;

    fn try_from(cells: Vec<Pos>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err(EmptyPath);
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Pos> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

/// How a search ended. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Path),
    /// The frontier ran dry before the end was reached.
    NoPathFound,
    /// The observer asked to stop. Cell marks stay as last notified.
    Cancelled,
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells whose neighbours were relaxed. The end is never counted.
    pub expanded: usize,
    /// Frontier insertions, the start's included. Key improvements of a
    /// queued cell are not counted.
    pub inserted: usize,
    /// Key improvements of a cell already in the frontier.
    pub improved: usize,
    /// Cells marked as path.
    pub path_marked: usize,
}

/// Outcome of a search plus its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl SearchReport {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            Outcome::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }
}
