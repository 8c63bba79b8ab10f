//! Editor-side errors.

use crate::geom::Pos;
use crate::state::CellState;

/// Rejected grid construction or edit. A rejected call changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid size {0}: size must be positive")]
    InvalidSize(i32),

    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Pos, size: i32 },

    #[error("cannot make {pos} the {wanted}: it is already the {held}")]
    RoleConflict {
        pos: Pos,
        wanted: CellState,
        held: CellState,
    },
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,

    #[error("map line {line} has width {found}, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("map is {width}x{height}, but grids are square")]
    NotSquare { width: usize, height: usize },

    #[error("map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Pos },

    #[error("map has a second {role} at {second} (first at {first})")]
    DuplicateRole {
        role: CellState,
        first: Pos,
        second: Pos,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}
