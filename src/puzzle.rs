//! Puzzle state: three pegs, disk transfer, and move accounting.
//!
//! `Puzzle` coordinates disk transfer between named pegs and owns the single
//! source of truth for move accounting. Legality itself is decided by the
//! destination peg; a rejected transfer restores the disk to its origin, so
//! no transient illegal configuration is ever observable outside a call.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::peg::{Peg, PegId, PlaceError};

/// Errors for a single-disk transfer between pegs.
///
/// All variants are expected, recoverable outcomes: callers check the result
/// and react, they never unwind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The source peg has no disk to move.
    #[error("peg {0} has no disk to move")]
    EmptyPeg(PegId),
    /// Source and destination name the same peg.
    #[error("cannot move a disk from peg {0} onto itself")]
    SamePeg(PegId),
    /// The destination peg refused the disk.
    #[error(transparent)]
    Illegal(#[from] PlaceError),
}

/// One successful single-disk transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Size of the disk that moved.
    pub disk: u32,
    /// Peg the disk was lifted from.
    pub from: PegId,
    /// Peg the disk came to rest on.
    pub to: PegId,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {} {} -> {}", self.disk, self.from, self.to)
    }
}

/// A puzzle instance: the disks 1..=N distributed across three pegs.
///
/// Created with all disks stacked on the left peg, largest at the bottom,
/// and mutated exclusively through [`Puzzle::move_disk`] and
/// [`Puzzle::relocate`]. Disks are never created or destroyed afterwards;
/// they only change pegs.
#[derive(Debug, Clone)]
pub struct Puzzle {
    total_disks: u32,
    pegs: [Peg; 3],
    log: Vec<MoveRecord>,
}

impl Puzzle {
    /// Creates a puzzle with `total_disks` disks on the left peg.
    pub fn new(total_disks: u32) -> Self {
        assert!(total_disks >= 1, "a puzzle needs at least one disk");
        let capacity = total_disks as usize;
        let mut pegs = PegId::ALL.map(|id| Peg::new(id, capacity));
        pegs[PegId::Left.index()].fill(total_disks);
        Self {
            total_disks,
            pegs,
            log: Vec::new(),
        }
    }

    /// Number of disks in the puzzle.
    pub fn total_disks(&self) -> u32 {
        self.total_disks
    }

    /// The peg with the given identifier.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.index()]
    }

    /// Disk sizes per peg, bottom to top.
    ///
    /// Reading the board mutates nothing; two reads without an intervening
    /// move return identical results.
    pub fn snapshot(&self) -> [(PegId, Vec<u32>); 3] {
        PegId::ALL.map(|id| (id, self.peg(id).sizes().collect()))
    }

    /// Every successful move so far, in order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Number of successful moves so far.
    pub fn move_count(&self) -> u64 {
        self.log.len() as u64
    }

    /// Whether every disk sits on `target`.
    pub fn is_solved(&self, target: PegId) -> bool {
        self.peg(target).len() == self.total_disks as usize
    }

    /// The peg currently holding the disk of the given size.
    ///
    /// Every size 1..=N is on exactly one peg at all times; asking for any
    /// other size is a caller bug and panics.
    pub fn peg_holding(&self, size: u32) -> PegId {
        PegId::ALL
            .into_iter()
            .find(|&id| self.peg(id).contains(size))
            .unwrap_or_else(|| panic!("no peg holds a disk of size {size}"))
    }

    /// Transfers the topmost disk of `from` onto `to`.
    ///
    /// On success exactly one disk changes peg and the move count grows by
    /// one. On rejection the board is left exactly as it was: a disk popped
    /// from `from` is pushed straight back before the error is returned.
    pub fn move_disk(&mut self, from: PegId, to: PegId) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::SamePeg(from));
        }
        let disk = self.peg_mut(from).pop().ok_or(MoveError::EmptyPeg(from))?;
        match self.peg_mut(to).push(disk) {
            Ok(()) => {
                trace!(disk = disk.size, %from, %to, "moved disk");
                self.log.push(MoveRecord {
                    disk: disk.size,
                    from,
                    to,
                });
                Ok(())
            }
            Err(err) => {
                // the disk was legally on `from` a moment ago
                let restored = self.peg_mut(from).push(disk);
                debug_assert!(restored.is_ok(), "origin peg must take its disk back");
                debug!(disk = disk.size, %from, %to, "rejected illegal move");
                Err(MoveError::Illegal(err))
            }
        }
    }
}
