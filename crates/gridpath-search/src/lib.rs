//! Observable shortest-path search over a [`gridpath_core::Grid`].
//!
//! Two best-first algorithms share one loop and one result shape:
//!
//! - **Dijkstra** uniform-cost search ([`Engine::dijkstra`])
//! - **A\*** heuristic-guided search with the Manhattan estimate ([`Engine::astar`])
//!
//! Both move in the four cardinal directions at unit cost, break priority
//! ties by insertion order, and call an [`Observer`] after every expansion
//! and every path cell so that a front end can redraw the grid as the
//! search progresses. The observer may cancel the search.
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{Engine, Outcome, Silent};
//!
//! let mut grid: Grid = "S.#\n..#\n..E".parse().unwrap();
//! let report = Engine::new().astar(&mut grid, &mut Silent).unwrap();
//! match report.outcome {
//!     Outcome::Found(path) => assert_eq!(path.steps(), 4),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod astar;
mod config;
mod dijkstra;
mod distance;
mod engine;
mod error;
mod frontier;
mod observer;
mod outcome;

pub use config::{Algorithm, ParseAlgorithmError, SearchConfig};
pub use distance::manhattan;
pub use engine::{Engine, SearchRequest, UNREACHABLE};
pub use error::{EmptyPath, Endpoint, SearchError};
pub use frontier::{Frontier, Insertion};
pub use observer::{Flow, Observer, Recorder, Silent, Step};
pub use outcome::{Outcome, Path, SearchReport, SearchStats};
