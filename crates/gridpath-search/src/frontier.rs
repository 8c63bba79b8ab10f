//! The open set: a priority queue and a membership table kept in lockstep.

use std::collections::BinaryHeap;

/// Heap entry, ordered by `(key, order)` ascending.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    key: u32,
    order: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key, and the
        // earliest insertion among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Live key and insertion order of a cell currently in the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    key: u32,
    order: u64,
}

/// Result of [`Frontier::insert_or_improve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The cell was not in the frontier and now is.
    Inserted,
    /// The cell was already queued and got a smaller key and a fresh order.
    Improved,
    /// The cell was already queued with a key at least as good.
    Unchanged,
}

/// Cells discovered but not yet expanded, keyed by priority.
///
/// Membership is tracked per cell index next to the heap. A cell's slot
/// records the `(key, order)` of its only live heap entry; superseded
/// entries are discarded when they surface, so `contains`, `len` and
/// `pop_min` always agree.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    slots: Vec<Option<Slot>>,
    next_order: u64,
    len: usize,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({} @ {} #{})", self.idx, self.key, self.order)
    }
}

impl Frontier {
    /// An empty frontier over `cells` cell indices.
    pub fn new(cells: usize) -> Self {
        let mut f = Self::default();
        f.reset(cells);
        f
    }

    /// Empty the frontier and resize it for `cells` indices. Insertion
    /// order restarts at 0.
    pub fn reset(&mut self, cells: usize) {
        self.heap.clear();
        self.slots.clear();
        self.slots.resize(cells, None);
        self.next_order = 0;
        self.len = 0;
    }

    /// Queue `idx` with `key`, or lower its key if it is already queued with
    /// a larger one. Either way the entry gets the next insertion order.
    ///
    /// # Panics
    ///
    /// If `idx` is outside the range given to [`reset`](Self::reset).
    pub fn insert_or_improve(&mut self, idx: usize, key: u32) -> Insertion {
        let result = match self.slots[idx] {
            Some(slot) if key >= slot.key => return Insertion::Unchanged,
            Some(_) => Insertion::Improved,
            None => {
                self.len += 1;
                Insertion::Inserted
            }
        };
        let order = self.next_order;
        self.next_order += 1;
        self.slots[idx] = Some(Slot { key, order });
        self.heap.push(Entry { key, order, idx });
        result
    }

    /// Remove and return the cell with the smallest `(key, order)`, along
    /// with its key.
    pub fn pop_min(&mut self) -> Option<(usize, u32)> {
        while let Some(e) = self.heap.pop() {
            match self.slots[e.idx] {
                Some(slot) if slot.order == e.order => {
                    self.slots[e.idx] = None;
                    self.len -= 1;
                    return Some((e.idx, e.key));
                }
                // Superseded by an improvement.
                _ => continue,
            }
        }
        None
    }

    /// Whether `idx` is currently queued.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.slots.get(idx).is_some_and(|s| s.is_some())
    }

    /// Number of queued cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_key_then_insertion_order() {
        let mut f = Frontier::new(8);
        assert_eq!(f.insert_or_improve(3, 5), Insertion::Inserted);
        assert_eq!(f.insert_or_improve(1, 2), Insertion::Inserted);
        assert_eq!(f.insert_or_improve(7, 5), Insertion::Inserted);
        assert_eq!(f.insert_or_improve(0, 2), Insertion::Inserted);
        assert_eq!(f.len(), 4);

        let order: Vec<_> = std::iter::from_fn(|| f.pop_min()).collect();
        assert_eq!(order, vec![(1, 2), (0, 2), (3, 5), (7, 5)]);
        assert!(f.is_empty());
    }

    #[test]
    fn membership_tracks_queue() {
        let mut f = Frontier::new(4);
        f.insert_or_improve(2, 1);
        assert!(f.contains(2));
        assert!(!f.contains(1));
        assert!(!f.contains(99));
        assert_eq!(f.pop_min(), Some((2, 1)));
        assert!(!f.contains(2));
        assert_eq!(f.pop_min(), None);
    }

    #[test]
    fn improve_rekeys_with_fresh_order() {
        let mut f = Frontier::new(4);
        f.insert_or_improve(0, 4);
        f.insert_or_improve(1, 3);
        assert_eq!(f.insert_or_improve(0, 4), Insertion::Unchanged);
        assert_eq!(f.insert_or_improve(0, 9), Insertion::Unchanged);
        assert_eq!(f.insert_or_improve(0, 3), Insertion::Improved);
        assert_eq!(f.len(), 2);

        // Equal keys: cell 1 was queued before cell 0's improvement.
        assert_eq!(f.pop_min(), Some((1, 3)));
        assert_eq!(f.pop_min(), Some((0, 3)));
        // The stale (0, 4) entry is skipped.
        assert_eq!(f.pop_min(), None);
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn reinsert_after_pop() {
        let mut f = Frontier::new(2);
        f.insert_or_improve(0, 1);
        assert_eq!(f.pop_min(), Some((0, 1)));
        assert_eq!(f.insert_or_improve(0, 7), Insertion::Inserted);
        assert!(f.contains(0));
        assert_eq!(f.pop_min(), Some((0, 7)));
    }

    #[test]
    fn reset_restarts() {
        let mut f = Frontier::new(2);
        f.insert_or_improve(0, 1);
        f.insert_or_improve(1, 1);
        f.reset(3);
        assert!(f.is_empty());
        assert!(!f.contains(0));
        f.insert_or_improve(2, 0);
        assert_eq!(f.pop_min(), Some((2, 0)));
    }
}
