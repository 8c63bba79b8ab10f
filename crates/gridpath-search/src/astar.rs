use gridpath_core::Grid;

use crate::config::Algorithm;
use crate::engine::{Engine, Marking, SearchRequest, Snapshot};
use crate::error::SearchError;
use crate::observer::Observer;
use crate::outcome::SearchReport;

impl Engine {
    /// Heuristic-guided search (A*) between the grid's start and end.
    ///
    /// Same loop and marking as [`dijkstra`](Self::dijkstra), but the
    /// frontier is keyed by `g + manhattan(cell, end)`. The estimate never
    /// overestimates on a 4-connected unit-cost grid, so the returned path
    /// is as short as Dijkstra's while expanding no more cells.
    pub fn astar<O: Observer>(
        &mut self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let request = SearchRequest::from_grid(grid);
        self.search(Marking(grid), Algorithm::HeuristicGuided, request, observer)
    }

    /// [`astar`](Self::astar) without touching the grid.
    pub fn astar_snapshot<O: Observer>(
        &mut self,
        grid: &Grid,
        request: SearchRequest,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        self.search(Snapshot(grid), Algorithm::HeuristicGuided, request, observer)
    }
}
