//! The [`Grid`] type — a square arena of [`CellState`]s with at most one
//! start and one end.
//!
//! Topology (barriers, start, end) is edited through the `set_*`/`clear`
//! methods. Searches only ever write visitation marks, through
//! [`mark`](Grid::mark), which refuses to touch topology cells.

use crate::error::GridError;
use crate::geom::Pos;
use crate::state::CellState;

/// A square grid of cells, `size` × `size`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<CellState>,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Grid {
    /// Create a `size` × `size` grid with every cell empty.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::InvalidSize(size));
        }
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            cells: vec![CellState::Empty; len],
            start: None,
            end: None,
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.size as usize) + p.col as usize)
    }

    /// Position of a flat index. `idx` must be below [`cell_count`](Self::cell_count).
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let n = self.size as usize;
        Pos::new((idx / n) as i32, (idx % n) as i32)
    }

    /// State of the cell at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The current start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The current end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Make `p` the start cell, moving the start if one was already set.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.set_endpoint(p, CellState::Start)
    }

    /// Make `p` the end cell, moving the end if one was already set.
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        self.set_endpoint(p, CellState::End)
    }

    /// Turn `p` into a barrier. A start or end at `p` is removed first.
    pub fn set_barrier(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.release_role(p);
        self.cells[i] = CellState::Barrier;
        Ok(())
    }

    /// Reset `p` to empty, removing whatever role it held.
    pub fn clear(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.release_role(p);
        self.cells[i] = CellState::Empty;
        Ok(())
    }

    /// Primary editing action: place the start if none is set, otherwise the
    /// end if none is set, otherwise a barrier.
    ///
    /// The start and end cells are never overwritten; placing on them does
    /// nothing. Returns the state of `p` afterwards.
    pub fn place(&mut self, p: Pos) -> Result<CellState, GridError> {
        let i = self.checked_index(p)?;
        let is_start = self.start == Some(p);
        let is_end = self.end == Some(p);
        if self.start.is_none() && !is_end {
            self.set_start(p)?;
        } else if self.end.is_none() && !is_start {
            self.set_end(p)?;
        } else if !is_start && !is_end {
            self.cells[i] = CellState::Barrier;
        }
        Ok(self.cells[i])
    }

    /// Secondary editing action; same as [`clear`](Self::clear).
    pub fn erase(&mut self, p: Pos) -> Result<(), GridError> {
        self.clear(p)
    }

    /// Empty every cell and forget start and end.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.end = None;
    }

    // -----------------------------------------------------------------------
    // Visitation marks
    // -----------------------------------------------------------------------

    /// Write a visitation mark at `p`.
    ///
    /// Only `Visited`, `Frontier` and `Path` are accepted, and only on cells
    /// that are empty or already marked. Returns whether the mark was applied.
    pub fn mark(&mut self, p: Pos, state: CellState) -> bool {
        if !state.is_mark() {
            return false;
        }
        match self.index(p) {
            Some(i) if self.cells[i].is_markable() => {
                self.cells[i] = state;
                true
            }
            _ => false,
        }
    }

    /// Turn every visitation mark back into an empty cell, keeping barriers
    /// and endpoints.
    pub fn clear_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_mark() {
                *c = CellState::Empty;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Append the passable neighbours of `p` to `buf` in down, up, right,
    /// left order. Out-of-bounds cells and barriers are skipped; an
    /// out-of-bounds `p` has no neighbours. The caller clears `buf`.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        if !self.contains(p) {
            return;
        }
        for n in p.neighbors_4() {
            if let Some(i) = self.index(n) {
                if !self.cells[i].is_barrier() {
                    buf.push(n);
                }
            }
        }
    }

    /// Passable neighbours of `p`, see [`neighbors_into`](Self::neighbors_into).
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Row-major iterator over `(Pos, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.pos(i), s))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    fn set_endpoint(&mut self, p: Pos, role: CellState) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let held = self.cells[i];
        if held.is_endpoint() && held != role {
            return Err(GridError::RoleConflict {
                pos: p,
                wanted: role,
                held,
            });
        }
        let previous = if role == CellState::Start {
            self.start.replace(p)
        } else {
            self.end.replace(p)
        };
        if let Some(old) = previous {
            if let Some(oi) = self.index(old) {
                self.cells[oi] = CellState::Empty;
            }
        }
        self.cells[i] = role;
        Ok(())
    }

    fn release_role(&mut self, p: Pos) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: i32) -> Grid {
        Grid::new(n).unwrap()
    }

    #[test]
    fn new_is_empty() {
        let g = grid(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.cell_count(), 16);
        assert!(g.iter().all(|(_, s)| s == CellState::Empty));
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
    }

    #[test]
    fn invalid_size() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize(0)));
        assert_eq!(Grid::new(-3), Err(GridError::InvalidSize(-3)));
    }

    #[test]
    fn index_round_trip() {
        let g = grid(5);
        for i in 0..g.cell_count() {
            assert_eq!(g.index(g.pos(i)), Some(i));
        }
        assert_eq!(g.index(Pos::new(5, 0)), None);
        assert_eq!(g.index(Pos::new(0, -1)), None);
    }

    #[test]
    fn out_of_bounds_edits() {
        let mut g = grid(3);
        let p = Pos::new(3, 1);
        let err = GridError::OutOfBounds { pos: p, size: 3 };
        assert_eq!(g.set_start(p), Err(err.clone()));
        assert_eq!(g.set_end(p), Err(err.clone()));
        assert_eq!(g.set_barrier(p), Err(err.clone()));
        assert_eq!(g.clear(p), Err(err));
        assert_eq!(g, grid(3));
    }

    #[test]
    fn start_moves() {
        let mut g = grid(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_start(Pos::new(1, 1)).unwrap();
        assert_eq!(g.start(), Some(Pos::new(1, 1)));
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Empty));
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::Start));
        assert_eq!(g.count(CellState::Start), 1);
    }

    #[test]
    fn role_conflict_leaves_grid_untouched() {
        let mut g = grid(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_end(Pos::new(2, 2)).unwrap();
        let before = g.clone();
        assert_eq!(
            g.set_start(Pos::new(2, 2)),
            Err(GridError::RoleConflict {
                pos: Pos::new(2, 2),
                wanted: CellState::Start,
                held: CellState::End,
            })
        );
        assert!(matches!(
            g.set_end(Pos::new(0, 0)),
            Err(GridError::RoleConflict { .. })
        ));
        assert_eq!(g, before);
    }

    #[test]
    fn barrier_replaces_endpoint() {
        let mut g = grid(3);
        g.set_start(Pos::new(1, 1)).unwrap();
        g.set_barrier(Pos::new(1, 1)).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::Barrier));

        g.set_end(Pos::new(1, 1)).unwrap();
        assert_eq!(g.end(), Some(Pos::new(1, 1)));
        g.clear(Pos::new(1, 1)).unwrap();
        assert_eq!(g.end(), None);
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::Empty));
    }

    #[test]
    fn place_follows_start_end_barrier_order() {
        let mut g = grid(3);
        assert_eq!(g.place(Pos::new(0, 0)), Ok(CellState::Start));
        // Placing on the start again while the end is unset does nothing.
        assert_eq!(g.place(Pos::new(0, 0)), Ok(CellState::Start));
        assert_eq!(g.place(Pos::new(2, 2)), Ok(CellState::End));
        assert_eq!(g.place(Pos::new(1, 1)), Ok(CellState::Barrier));
        assert_eq!(g.place(Pos::new(2, 2)), Ok(CellState::End));

        g.erase(Pos::new(0, 0)).unwrap();
        assert_eq!(g.start(), None);
        // With no start, placing on the end cell still does nothing.
        assert_eq!(g.place(Pos::new(2, 2)), Ok(CellState::End));
        assert_eq!(g.place(Pos::new(0, 1)), Ok(CellState::Start));
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let mut g = grid(3);
        let c = Pos::new(1, 1);
        assert_eq!(
            g.neighbors(c),
            vec![
                Pos::new(2, 1),
                Pos::new(0, 1),
                Pos::new(1, 2),
                Pos::new(1, 0)
            ]
        );
        g.set_barrier(Pos::new(0, 1)).unwrap();
        assert_eq!(
            g.neighbors(c),
            vec![Pos::new(2, 1), Pos::new(1, 2), Pos::new(1, 0)]
        );
        assert_eq!(
            g.neighbors(Pos::new(0, 0)),
            vec![Pos::new(1, 0)]
        );
        assert!(g.neighbors(Pos::new(9, 9)).is_empty());
    }

    #[test]
    fn barrier_round_trip_restores_connectivity() {
        let mut g = grid(4);
        let before: Vec<_> = g.iter().map(|(p, _)| g.neighbors(p)).collect();
        g.set_barrier(Pos::new(2, 1)).unwrap();
        g.clear(Pos::new(2, 1)).unwrap();
        let after: Vec<_> = g.iter().map(|(p, _)| g.neighbors(p)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn marks_never_touch_topology() {
        let mut g = grid(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_end(Pos::new(0, 2)).unwrap();
        g.set_barrier(Pos::new(1, 1)).unwrap();

        assert!(!g.mark(Pos::new(0, 0), CellState::Visited));
        assert!(!g.mark(Pos::new(0, 2), CellState::Frontier));
        assert!(!g.mark(Pos::new(1, 1), CellState::Path));
        assert!(!g.mark(Pos::new(5, 5), CellState::Path));
        assert!(!g.mark(Pos::new(2, 2), CellState::Barrier));

        assert!(g.mark(Pos::new(0, 1), CellState::Frontier));
        assert!(g.mark(Pos::new(0, 1), CellState::Visited));
        assert!(g.mark(Pos::new(2, 2), CellState::Path));

        g.clear_marks();
        assert_eq!(g.count(CellState::Visited), 0);
        assert_eq!(g.count(CellState::Path), 0);
        assert_eq!(g.count(CellState::Barrier), 1);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(0, 2)));
    }

    #[test]
    fn reset_empties_everything() {
        let mut g = grid(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_end(Pos::new(1, 0)).unwrap();
        g.set_barrier(Pos::new(2, 2)).unwrap();
        g.reset();
        assert_eq!(g, grid(3));
    }
}
