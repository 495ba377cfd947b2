//! Recursive relocation: the solution strategy for the three-peg puzzle.
//!
//! `relocate` moves a *named* disk to a destination peg, not merely the whole
//! tower: everything stacked above the disk is first cleared onto the spare
//! peg, the disk itself is moved, then the cleared sub-tower is brought onto
//! the same destination, preserving its relative order.

use tracing::instrument;

use crate::peg::PegId;
use crate::puzzle::{MoveError, Puzzle};

impl Puzzle {
    /// Whether the disk of the given size can be relocated from here.
    ///
    /// A disk is reachable when it is the top of its peg, or when it is
    /// covered exactly by the contiguous tower of every smaller disk. This
    /// holds for every disk in the canonical initial state and is preserved
    /// by the recursion; [`Puzzle::relocate`] debug-asserts it at entry.
    pub fn is_reachable(&self, size: u32) -> bool {
        let peg = self.peg(self.peg_holding(size));
        let Some(position) = peg.position_of(size) else {
            return false;
        };
        let covered_by = peg.len() - 1 - position;
        covered_by == 0 || covered_by as u32 == size - 1
    }

    /// Moves the disk of the given size, and transitively everything needed
    /// to expose and then re-cover it, onto `destination`.
    ///
    /// A disk already sitting on `destination` is a no-op. Each recursive
    /// step strictly decreases `size`, so the recursion always terminates;
    /// from the canonical initial state, `relocate(N, target)` solves the
    /// puzzle in exactly 2^N - 1 moves. A size outside 1..=N is a caller bug
    /// and panics.
    #[instrument(skip(self), level = "debug")]
    pub fn relocate(&mut self, size: u32, destination: PegId) -> Result<(), MoveError> {
        assert!(
            size >= 1 && size <= self.total_disks(),
            "disk size {size} is out of bounds for a {}-disk puzzle",
            self.total_disks()
        );
        let from = self.peg_holding(size);
        if from == destination {
            return Ok(());
        }
        debug_assert!(
            self.is_reachable(size),
            "disk {size} is buried under disks that do not belong to its tower"
        );
        // base case: nothing rests above the disk, one move suffices
        if size == 1 || self.peg(from).top().map(|disk| disk.size) == Some(size) {
            return self.move_disk(from, destination);
        }
        let spare = from.spare(destination);
        self.relocate(size - 1, spare)?;
        self.move_disk(from, destination)?;
        self.relocate(size - 1, destination)
    }
}

#[cfg(test)]
mod tests {
    use crate::peg::PegId;
    use crate::puzzle::Puzzle;

    #[test]
    fn test_relocate_moves_whole_tower() {
        for total in 1..=6 {
            let mut puzzle = Puzzle::new(total);
            puzzle.relocate(total, PegId::Right).unwrap();

            assert!(puzzle.is_solved(PegId::Right));
            assert!(puzzle.peg(PegId::Left).is_empty());
            assert!(puzzle.peg(PegId::Center).is_empty());

            let sizes: Vec<u32> = puzzle.peg(PegId::Right).sizes().collect();
            let expected: Vec<u32> = (1..=total).rev().collect();
            assert_eq!(sizes, expected);
            assert_eq!(puzzle.move_count(), (1u64 << total) - 1);
        }
    }

    #[test]
    fn test_three_disk_solution_sequence() {
        let mut puzzle = Puzzle::new(3);
        puzzle.relocate(3, PegId::Right).unwrap();

        let moves: Vec<(u32, PegId, PegId)> = puzzle
            .moves()
            .iter()
            .map(|record| (record.disk, record.from, record.to))
            .collect();
        assert_eq!(
            moves,
            vec![
                (1, PegId::Left, PegId::Right),
                (2, PegId::Left, PegId::Center),
                (1, PegId::Right, PegId::Center),
                (3, PegId::Left, PegId::Right),
                (1, PegId::Center, PegId::Left),
                (2, PegId::Center, PegId::Right),
                (1, PegId::Left, PegId::Right),
            ]
        );
    }

    #[test]
    fn test_relocate_to_current_peg_is_a_no_op() {
        let mut puzzle = Puzzle::new(3);
        let before = puzzle.snapshot();

        puzzle.relocate(3, PegId::Left).unwrap();
        assert_eq!(puzzle.snapshot(), before);
        assert_eq!(puzzle.move_count(), 0);
    }

    #[test]
    fn test_relocate_moves_a_sub_tower() {
        let mut puzzle = Puzzle::new(3);
        puzzle.relocate(2, PegId::Center).unwrap();

        let expected: [(PegId, Vec<u32>); 3] = [
            (PegId::Left, vec![3]),
            (PegId::Center, vec![2, 1]),
            (PegId::Right, vec![]),
        ];
        assert_eq!(puzzle.snapshot(), expected);
        assert_eq!(puzzle.move_count(), 3);
    }

    #[test]
    fn test_relocate_in_stages_matches_direct_solve() {
        // clear the two smallest, move the base, re-cover it
        let mut puzzle = Puzzle::new(3);
        puzzle.relocate(2, PegId::Center).unwrap();
        puzzle.relocate(3, PegId::Right).unwrap();
        puzzle.relocate(2, PegId::Right).unwrap();

        assert!(puzzle.is_solved(PegId::Right));
        assert_eq!(puzzle.move_count(), 7);
    }

    #[test]
    fn test_every_disk_is_reachable_in_canonical_state() {
        let puzzle = Puzzle::new(4);
        for size in 1..=4 {
            assert!(puzzle.is_reachable(size));
        }
    }

    #[test]
    fn test_buried_disk_without_its_tower_is_unreachable() {
        // build left = [3, 1], center = [2]: disk 3 is covered, but not by
        // the full tower of smaller disks
        let mut puzzle = Puzzle::new(3);
        puzzle.move_disk(PegId::Left, PegId::Right).unwrap();
        puzzle.move_disk(PegId::Left, PegId::Center).unwrap();
        puzzle.move_disk(PegId::Right, PegId::Left).unwrap();

        assert!(!puzzle.is_reachable(3));
        assert!(puzzle.is_reachable(1));
        assert!(puzzle.is_reachable(2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_relocate_size_zero_panics() {
        let mut puzzle = Puzzle::new(3);
        let _ = puzzle.relocate(0, PegId::Right);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_relocate_oversized_disk_panics() {
        let mut puzzle = Puzzle::new(3);
        let _ = puzzle.relocate(4, PegId::Right);
    }
}
