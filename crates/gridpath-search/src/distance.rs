use gridpath_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Exact step count on an open 4-connected grid, hence an admissible and
/// consistent A* heuristic for unit-cost moves.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(0, 0);
        let b = Pos::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(Pos::new(-2, 1), Pos::new(1, -1)), 5);
    }
}
