mod rule;
mod step;

pub use self::rule::next_state;
pub use self::step::Stepper;
use crate::Pos;
use rand::Rng;

/// Offsets of the 8 cells surrounding a cell, excluding the cell itself
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A toroidal Game of Life grid
///
/// Cells are stored in a single row-major buffer. The top row neighbors the
/// bottom row and the leftmost column neighbors the rightmost one, so every
/// cell has exactly 8 neighbors regardless of where it sits.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    // reuses the cell buffer, which the stepper relies on for its snapshot
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.cells.clone_from(&source.cells);
    }
}

impl Grid {
    /// Creates a grid where every cell is dead
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn empty(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Creates a grid where each cell is independently alive with probability
    /// `live_probability`
    ///
    /// # Panics
    /// If either dimension is zero or `live_probability` is outside `0.0..=1.0`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::empty(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = rng.random_bool(live_probability);
        }
        grid
    }

    /// Creates a grid with only the given cells alive
    ///
    /// Positions outside the grid wrap back onto it.
    pub fn from_alive<I: IntoIterator<Item = Pos>>(rows: usize, cols: usize, alive: I) -> Self {
        let mut grid = Self::empty(rows, cols);
        for pos in alive {
            let pos = pos.wrapping_offset(0, 0, rows, cols);
            grid.set(pos, true);
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        row * self.cols + col
    }

    #[inline]
    pub fn is_alive(&self, pos: Pos) -> bool {
        self.cells[self.index(pos.row, pos.col)]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, alive: bool) {
        let idx = self.index(pos.row, pos.col);
        self.cells[idx] = alive;
    }

    /// Counts the live cells among the 8 toroidal neighbors of `(row, col)`
    ///
    /// The cell itself is never counted, although on grids narrower than 3
    /// cells a neighbor offset may wrap around onto the cell's own row or
    /// column (or, on a 1x1 grid, onto the cell itself).
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let center = Pos::new(row, col);
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| center.wrapping_offset(dr, dc, self.rows, self.cols))
            .filter(|&pos| self.is_alive(pos))
            .count() as u8
    }

    /// Iterates every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| Pos::new(i / cols, i % cols))
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Advances this grid by one generation using a throwaway [`Stepper`]
    ///
    /// Prefer holding on to a [`Stepper`] when stepping repeatedly, so the
    /// snapshot buffer is reused.
    pub fn next_generation(&mut self) {
        Stepper::new().step(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn pos(row: usize, col: usize) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn empty_grid_has_no_live_cells() {
        let grid = Grid::empty(4, 5);

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.live_cells().count(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn zero_sized_grid_is_rejected() {
        Grid::empty(0, 3);
    }

    #[test]
    fn random_respects_extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(Grid::random(6, 7, 1.0, &mut rng).alive_count(), 42);
        assert_eq!(Grid::random(6, 7, 0.0, &mut rng).alive_count(), 0);
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let a = Grid::random(20, 30, 0.5, &mut StdRng::seed_from_u64(42));
        let b = Grid::random(20, 30, 0.5, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn random_half_density_is_roughly_half() {
        let grid = Grid::random(100, 100, 0.5, &mut StdRng::seed_from_u64(1));
        let alive = grid.alive_count();

        assert!((4000..6000).contains(&alive), "alive: {}", alive);
    }

    #[test]
    fn from_alive_wraps_outside_positions() {
        let grid = Grid::from_alive(3, 3, [pos(1, 1), pos(4, 5)]);

        assert!(grid.is_alive(pos(1, 1)));
        assert!(grid.is_alive(pos(1, 2)));
        assert_eq!(grid.alive_count(), 2);
    }

    #[test]
    fn live_cells_are_row_major() {
        let grid = Grid::from_alive(3, 4, [pos(2, 0), pos(0, 3), pos(1, 1), pos(0, 0)]);

        let cells: Vec<Pos> = grid.live_cells().collect();
        assert_eq!(cells, vec![pos(0, 0), pos(0, 3), pos(1, 1), pos(2, 0)]);
    }

    #[test]
    fn neighbor_count_excludes_the_cell_itself() {
        let grid = Grid::from_alive(5, 5, [pos(2, 2)]);

        assert_eq!(grid.neighbor_count(2, 2), 0);
        assert_eq!(grid.neighbor_count(1, 1), 1);
        assert_eq!(grid.neighbor_count(3, 2), 1);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    #[test]
    fn neighbor_count_wraps_around_the_torus() {
        let grid = Grid::from_alive(3, 3, [pos(0, 0)]);

        // on a 3x3 torus every other cell touches (0, 0)
        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (0, 0) { 0 } else { 1 };
                assert_eq!(grid.neighbor_count(row, col), expected, "({row}, {col})");
            }
        }
        assert_eq!(grid.neighbor_count(2, 2), 1);
        assert_eq!(grid.neighbor_count(2, 0), 1);
        assert_eq!(grid.neighbor_count(0, 2), 1);
    }

    #[test]
    fn neighbor_count_wraps_across_opposite_edges() {
        let grid = Grid::from_alive(6, 6, [pos(0, 5), pos(5, 0), pos(5, 5)]);

        assert_eq!(grid.neighbor_count(0, 0), 3);
    }

    #[test]
    fn neighbor_count_of_full_grid_is_eight() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(4, 4, 1.0, &mut rng);

        assert!((0..4).all(|r| (0..4).all(|c| grid.neighbor_count(r, c) == 8)));
    }

    #[test]
    fn neighbor_count_on_tiny_grids_aliases_neighbors() {
        // a single live cell is its own neighbor 8 times over on a 1x1 torus
        let single = Grid::from_alive(1, 1, [pos(0, 0)]);
        assert_eq!(single.neighbor_count(0, 0), 8);

        // on a 2x2 torus the opposite cells are each reached through several offsets
        let small = Grid::from_alive(2, 2, [pos(1, 1)]);
        assert_eq!(small.neighbor_count(0, 0), 4);
        assert_eq!(small.neighbor_count(0, 1), 2);
        assert_eq!(small.neighbor_count(1, 1), 0);
    }

    #[test]
    fn next_generation_matches_stepper() {
        let seed = Grid::random(12, 9, 0.4, &mut StdRng::seed_from_u64(11));

        let mut a = seed.clone();
        a.next_generation();
        let mut b = seed;
        Stepper::new().step(&mut b);

        assert_eq!(a, b);
    }
}
