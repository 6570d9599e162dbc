use std::cmp::Ordering;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}
impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offsets this position by `(dr, dc)` on a `rows x cols` torus
    ///
    /// The result always lands inside the grid: stepping off one edge comes
    /// back in on the opposite edge.
    #[inline]
    pub fn wrapping_offset(self, dr: isize, dc: isize, rows: usize, cols: usize) -> Self {
        Self {
            row: wrap(self.row, dr, rows),
            col: wrap(self.col, dc, cols),
        }
    }
}

#[inline]
fn wrap(value: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrapping on an empty axis");
    (value as isize + delta).rem_euclid(len as isize) as usize
}

impl PartialOrd for Pos {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
