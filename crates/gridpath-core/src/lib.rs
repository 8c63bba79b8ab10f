//! **gridpath-core** — the square obstacle grid searched by `gridpath-search`.
//!
//! This crate provides cell coordinates, the per-cell state tag, the
//! [`Grid`] itself with its editing operations and neighbour query, and a
//! small text format for writing grids down in tests and tools.

pub mod error;
pub mod geom;
pub mod grid;
pub mod state;
pub mod text;

pub use error::{GridError, MapError};
pub use geom::{CARDINALS, Pos};
pub use grid::Grid;
pub use state::CellState;
