use super::{Grid, rule};
use crate::Pos;

/// Advances a [`Grid`] one generation at a time
///
/// Every neighbor count for a generation is read from a snapshot of the grid
/// taken before any cell is overwritten. The snapshot buffer is kept between
/// steps so repeated stepping does not reallocate.
#[derive(Debug, Default)]
pub struct Stepper {
    snapshot: Option<Grid>,
}

impl Stepper {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, grid: &mut Grid) {
        let snapshot = self
            .snapshot
            .get_or_insert_with(|| Grid::empty(grid.rows(), grid.cols()));
        snapshot.clone_from(grid);

        for row in 0..snapshot.rows() {
            for col in 0..snapshot.cols() {
                let pos = Pos::new(row, col);
                let neighbors = snapshot.neighbor_count(row, col);
                grid.set(pos, rule::next_state(snapshot.is_alive(pos), neighbors));
            }
        }
    }
}
