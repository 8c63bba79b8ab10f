//! The [`CellState`] tag carried by every grid cell.

use std::fmt;

/// The single role or mark a cell holds.
///
/// `Barrier`, `Start` and `End` are topology, set only by the editor.
/// `Visited`, `Frontier` and `Path` are visitation marks written by a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    Visited,
    Frontier,
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        Self::Empty,
        Self::Barrier,
        Self::Start,
        Self::End,
        Self::Visited,
        Self::Frontier,
        Self::Path,
    ];

    #[inline]
    pub fn is_barrier(self) -> bool {
        self == Self::Barrier
    }

    /// Start or end.
    #[inline]
    pub fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Visited, frontier or path.
    #[inline]
    pub fn is_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }

    /// Whether a search may overwrite this state with a mark.
    #[inline]
    pub fn is_markable(self) -> bool {
        self == Self::Empty || self.is_mark()
    }

    /// Glyph used by the text map format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'v',
            Self::Frontier => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == ch)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Visited => "visited",
            Self::Frontier => "frontier",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_unique_and_invertible() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn classification() {
        assert!(CellState::Empty.is_markable());
        assert!(CellState::Path.is_markable());
        assert!(!CellState::Barrier.is_markable());
        assert!(!CellState::Start.is_markable());
        assert!(!CellState::End.is_markable());
        assert!(CellState::End.is_endpoint());
        assert!(CellState::Frontier.is_mark());
        assert!(!CellState::Empty.is_mark());
    }
}
