/// The number of cells surrounding any cell on the grid
pub const NEIGHBORHOOD: u8 = 8;

/// Applies the Game of Life ruleset (B3/S23) to a single cell
///
/// A cell is alive in the next generation if it has exactly 3 live
/// neighbors, or if it is already alive and has exactly 2.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    debug_assert!(neighbors <= NEIGHBORHOOD, "more than 8 neighbors");
    neighbors == 3 || (alive && neighbors == 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn dead_cells_only_birth_on_three() {
        let births: Vec<u8> = (0..=NEIGHBORHOOD).filter(|&n| next_state(false, n)).collect();

        assert_eq!(births, vec![3]);
    }

    #[test]
    fn live_cells_only_survive_on_two_or_three() {
        let survivors: Vec<u8> = (0..=NEIGHBORHOOD).filter(|&n| next_state(true, n)).collect();

        assert_eq!(survivors, vec![2, 3]);
    }
}
