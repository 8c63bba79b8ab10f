use gridpath_core::Grid;

use crate::config::Algorithm;
use crate::engine::{Engine, Marking, SearchRequest, Snapshot};
use crate::error::SearchError;
use crate::observer::Observer;
use crate::outcome::SearchReport;

impl Engine {
    /// Uniform-cost search (Dijkstra) between the grid's start and end.
    ///
    /// Cells are expanded in order of distance from the start, earlier
    /// discoveries first among equal distances. Newly discovered cells are
    /// marked frontier, expanded cells other than the start are marked
    /// visited, and the cells between the endpoints of the found path are
    /// marked path.
    pub fn dijkstra<O: Observer>(
        &mut self,
        grid: &mut Grid,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let request = SearchRequest::from_grid(grid);
        self.search(Marking(grid), Algorithm::UniformCost, request, observer)
    }

    /// [`dijkstra`](Self::dijkstra) without touching the grid.
    pub fn dijkstra_snapshot<O: Observer>(
        &mut self,
        grid: &Grid,
        request: SearchRequest,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        self.search(Snapshot(grid), Algorithm::UniformCost, request, observer)
    }
}
