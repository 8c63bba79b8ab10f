use std::fmt;

use gridpath_core::Pos;

/// One end of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// A search request rejected before any frontier or grid mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no {0} cell is set")]
    MissingEndpoint(Endpoint),

    #[error("{which} {pos} is outside the {size}x{size} grid")]
    OutOfBounds {
        which: Endpoint,
        pos: Pos,
        size: i32,
    },
}

/// A [`Path`](crate::Path) was built from no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a path needs at least one cell")]
pub struct EmptyPath;
