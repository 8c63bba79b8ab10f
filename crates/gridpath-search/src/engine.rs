//! [`Engine`]: the shared best-first loop behind Dijkstra and A*.

use gridpath_core::{CellState, Grid, Pos};
use log::{debug, trace};

use crate::config::{Algorithm, SearchConfig};
use crate::distance::manhattan;
use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, Insertion};
use crate::observer::{Observer, Step};
use crate::outcome::{Outcome, Path, SearchReport, SearchStats};

/// Sentinel g-score of a cell not reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Search record
// ---------------------------------------------------------------------------

/// Per-cell bookkeeping, rebuilt at the start of every search.
#[derive(Clone, Copy)]
struct Node {
    g: u32,
    f: u32,
    parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas: where visitation marks go
// ---------------------------------------------------------------------------

/// The grid a search reads, and whether it may write marks into it.
pub(crate) trait Canvas {
    fn grid(&self) -> &Grid;
    fn mark(&mut self, p: Pos, state: CellState);
    fn clear_marks(&mut self);
}

/// Marks are written into the grid.
pub(crate) struct Marking<'g>(pub(crate) &'g mut Grid);

impl Canvas for Marking<'_> {
    #[inline]
    fn grid(&self) -> &Grid {
        &*self.0
    }

    #[inline]
    fn mark(&mut self, p: Pos, state: CellState) {
        self.0.mark(p, state);
    }

    fn clear_marks(&mut self) {
        self.0.clear_marks();
    }
}

/// The grid is never written.
pub(crate) struct Snapshot<'g>(pub(crate) &'g Grid);

impl Canvas for Snapshot<'_> {
    #[inline]
    fn grid(&self) -> &Grid {
        self.0
    }

    #[inline]
    fn mark(&mut self, _p: Pos, _state: CellState) {}

    fn clear_marks(&mut self) {}
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Endpoints of one search. `None` means unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchRequest {
    pub start: Option<Pos>,
    pub end: Option<Pos>,
}

impl SearchRequest {
    /// Search between two explicit cells, which may coincide.
    pub fn new(start: Pos, end: Pos) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Search between the grid's own start and end cells.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            start: grid.start(),
            end: grid.end(),
        }
    }

    /// Check both endpoints against `grid`, start first.
    fn resolve(self, grid: &Grid) -> Result<(Pos, Pos), SearchError> {
        let check = |which: Endpoint, p: Option<Pos>| {
            let p = p.ok_or(SearchError::MissingEndpoint(which))?;
            if !grid.contains(p) {
                return Err(SearchError::OutOfBounds {
                    which,
                    pos: p,
                    size: grid.size(),
                });
            }
            Ok(p)
        };
        let start = check(Endpoint::Start, self.start)?;
        let end = check(Endpoint::End, self.end)?;
        Ok((start, end))
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`], reusing its buffers between runs.
///
/// Every search is single-threaded and synchronous: it runs to completion
/// on the calling thread, calling the observer after each expansion and
/// after each path mark.
#[derive(Default)]
pub struct Engine {
    config: SearchConfig,
    nodes: Vec<Node>,
    frontier: Frontier,
    nbuf: Vec<Pos>,
}

impl Engine {
    /// An engine with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Search between the grid's start and end with the configured
    /// algorithm, marking cells in `grid` as the search proceeds.
    pub fn run<O: Observer>(
        &mut self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let request = SearchRequest::from_grid(grid);
        self.run_between(grid, request, observer)
    }

    /// Like [`run`](Self::run) but with explicit endpoints.
    pub fn run_between<O: Observer>(
        &mut self,
        grid: &mut Grid,
        request: SearchRequest,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let algorithm = self.config.algorithm;
        self.search(Marking(grid), algorithm, request, observer)
    }

    /// Search a grid without writing to it. The observer still sees every
    /// step, against the untouched grid.
    pub fn run_snapshot<O: Observer>(
        &mut self,
        grid: &Grid,
        request: SearchRequest,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let algorithm = self.config.algorithm;
        self.search(Snapshot(grid), algorithm, request, observer)
    }

    /// Best-first search from `request.start` to `request.end`.
    ///
    /// Uniform-cost keys the frontier by g, heuristic-guided by
    /// g + manhattan(cell, end); ties go to the earlier insertion.
    pub(crate) fn search<C: Canvas, O: Observer>(
        &mut self,
        mut canvas: C,
        algorithm: Algorithm,
        request: SearchRequest,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let (start, end) = request.resolve(canvas.grid())?;

        if self.config.clear_marks {
            canvas.clear_marks();
        }

        let cells = canvas.grid().cell_count();
        self.nodes.clear();
        self.nodes.resize(cells, Node::default());
        self.frontier.reset(cells);

        debug!(
            "[Search] {algorithm}: start={start} end={end} grid={0}x{0}",
            canvas.grid().size()
        );

        let estimate = |p: Pos| match algorithm {
            Algorithm::UniformCost => 0,
            Algorithm::HeuristicGuided => manhattan(p, end),
        };
        let index = |grid: &Grid, p: Pos| grid.index(p).unwrap_or(NO_PARENT);

        let start_idx = index(canvas.grid(), start);
        let end_idx = index(canvas.grid(), end);
        let mut stats = SearchStats::default();

        {
            let n = &mut self.nodes[start_idx];
            n.g = 0;
            n.f = estimate(start);
            self.frontier.insert_or_improve(start_idx, n.f);
            stats.inserted += 1;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some((ci, _)) = self.frontier.pop_min() else {
                break 'search Outcome::NoPathFound;
            };

            if ci == end_idx {
                break 'search self.reconstruct(
                    &mut canvas,
                    start_idx,
                    end_idx,
                    observer,
                    &mut stats,
                );
            }

            let current = canvas.grid().pos(ci);
            let tentative = self.nodes[ci].g + 1;

            nbuf.clear();
            canvas.grid().neighbors_into(current, &mut nbuf);

            for &np in nbuf.iter() {
                let ni = index(canvas.grid(), np);
                let n = &mut self.nodes[ni];
                if tentative >= n.g {
                    continue;
                }
                n.g = tentative;
                n.f = tentative + estimate(np);
                n.parent = ci;
                match self.frontier.insert_or_improve(ni, n.f) {
                    Insertion::Inserted => {
                        stats.inserted += 1;
                        canvas.mark(np, CellState::Frontier);
                    }
                    Insertion::Improved => {
                        stats.improved += 1;
                        trace!("[Search] improved {np} to f={}", n.f);
                    }
                    Insertion::Unchanged => {}
                }
            }

            stats.expanded += 1;
            trace!(
                "[Search] expanded {current} g={} frontier={}",
                tentative - 1,
                self.frontier.len()
            );

            if observer
                .observe(canvas.grid(), Step::Expanded { pos: current })
                .is_abort()
            {
                break 'search Outcome::Cancelled;
            }

            if ci != start_idx {
                canvas.mark(current, CellState::Visited);
            }
        };

        self.nbuf = nbuf;

        debug!(
            "[Search] {algorithm}: {} after {} expansions",
            match &outcome {
                Outcome::Found(p) => format!("found {} steps", p.steps()),
                Outcome::NoPathFound => "no path".to_string(),
                Outcome::Cancelled => "cancelled".to_string(),
            },
            stats.expanded
        );

        Ok(SearchReport { outcome, stats })
    }

    /// Walk predecessors back from the end, marking each cell strictly
    /// between the endpoints as path and reporting it.
    fn reconstruct<C: Canvas, O: Observer>(
        &self,
        canvas: &mut C,
        start_idx: usize,
        end_idx: usize,
        observer: &mut O,
        stats: &mut SearchStats,
    ) -> Outcome {
        let mut cells = vec![canvas.grid().pos(end_idx)];
        if start_idx != end_idx {
            let mut ci = self.nodes[end_idx].parent;
            while ci != start_idx && ci != NO_PARENT {
                let p = canvas.grid().pos(ci);
                cells.push(p);
                canvas.mark(p, CellState::Path);
                stats.path_marked += 1;
                trace!("[Search] path {p}");
                if self.config.notify_path
                    && observer
                        .observe(canvas.grid(), Step::PathCell { pos: p })
                        .is_abort()
                {
                    return Outcome::Cancelled;
                }
                ci = self.nodes[ci].parent;
            }
            cells.push(canvas.grid().pos(start_idx));
        }
        cells.reverse();
        Outcome::Found(Path::new(cells))
    }

    /// g-score of `p` in the last search, or [`UNREACHABLE`].
    ///
    /// Only meaningful for the grid the last search ran on.
    pub fn g_score(&self, grid: &Grid, p: Pos) -> u32 {
        grid.index(p)
            .and_then(|i| self.nodes.get(i))
            .map_or(UNREACHABLE, |n| n.g)
    }

    /// f-score of `p` in the last search, or [`UNREACHABLE`]. Equal to the
    /// g-score for uniform-cost searches.
    pub fn f_score(&self, grid: &Grid, p: Pos) -> u32 {
        grid.index(p)
            .and_then(|i| self.nodes.get(i))
            .map_or(UNREACHABLE, |n| n.f)
    }

    /// Predecessor of `p` on its best known route in the last search.
    pub fn predecessor(&self, grid: &Grid, p: Pos) -> Option<Pos> {
        let n = self.nodes.get(grid.index(p)?)?;
        (n.parent != NO_PARENT && n.parent < grid.cell_count()).then(|| grid.pos(n.parent))
    }
}
