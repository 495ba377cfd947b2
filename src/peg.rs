//! Peg and disk types for the three-peg puzzle.
//!
//! A peg is an ordered stack of disks, bottom to top, and is the sole
//! authority on whether an incoming disk may be placed: a disk may only rest
//! on the base of an empty peg or on a strictly larger disk.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A sized disk resting on one of the pegs.
///
/// Sizes are positive and unique within a puzzle; larger numbers are wider
/// disks. Which peg holds a disk, and whether it is on top, are derived from
/// the owning peg's stack order, so the disk itself carries no location
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disk {
    /// Size rank of the disk, starting at 1 for the smallest.
    pub size: u32,
}

impl Disk {
    /// Creates a disk of the given size.
    pub fn new(size: u32) -> Self {
        assert!(size >= 1, "disk sizes start at 1");
        Self { size }
    }
}

/// Identifier for one of the three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Left,
    Center,
    Right,
}

impl PegId {
    /// The three pegs in board order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Center, PegId::Right];

    /// Index of this peg within [`PegId::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Center => 1,
            PegId::Right => 2,
        }
    }

    /// Returns the peg that is neither `self` nor `other`.
    pub fn spare(self, other: PegId) -> PegId {
        debug_assert_ne!(self, other, "two distinct pegs are needed to pick a spare");
        // the three indices sum to 3, so the remaining one falls out
        Self::ALL[3 - self.index() - other.index()]
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PegId::Left => "left",
            PegId::Center => "center",
            PegId::Right => "right",
        };
        f.write_str(name)
    }
}

/// Error returned when a peg name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown peg '{0}', expected left, center, or right")]
pub struct ParsePegError(String);

impl FromStr for PegId {
    type Err = ParsePegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(PegId::Left),
            "center" | "c" => Ok(PegId::Center),
            "right" | "r" => Ok(PegId::Right),
            _ => Err(ParsePegError(s.to_owned())),
        }
    }
}

/// Error returned when a disk may not be placed on a peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The incoming disk is at least as large as the current top disk.
    #[error("disk {disk} cannot rest on smaller disk {top}")]
    WouldCoverSmaller { disk: u32, top: u32 },
}

/// An ordered stack of disks, bottom to top.
///
/// Reading the stack bottom to top always yields strictly decreasing disk
/// sizes; `push` rejects anything that would break that order.
#[derive(Debug, Clone)]
pub struct Peg {
    id: PegId,
    capacity: usize,
    disks: Vec<Disk>,
}

impl Peg {
    /// Creates an empty peg able to hold every disk in the puzzle.
    pub(crate) fn new(id: PegId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            disks: Vec::with_capacity(capacity),
        }
    }

    /// Seeds the peg with `count` disks, largest at the bottom.
    pub(crate) fn fill(&mut self, count: u32) {
        self.disks = (1..=count).rev().map(Disk::new).collect();
    }

    /// Identifier of this peg.
    pub fn id(&self) -> PegId {
        self.id
    }

    /// True iff no disks are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Number of disks currently on the peg.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// The disk at the highest occupied position, or `None` if empty.
    ///
    /// No side effects; this is the single authority on "which disk is on
    /// top" for all callers.
    #[inline]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Whether a disk of the given size is on this peg.
    pub fn contains(&self, size: u32) -> bool {
        self.disks.iter().any(|disk| disk.size == size)
    }

    /// Height index of the disk with the given size, base = 0.
    pub fn position_of(&self, size: u32) -> Option<usize> {
        self.disks.iter().position(|disk| disk.size == size)
    }

    /// All disks on the peg, bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Disk sizes bottom to top.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.disks.iter().map(|disk| disk.size)
    }

    /// Places a disk on top of the peg if the move is legal.
    ///
    /// An empty peg accepts any disk; a non-empty peg accepts only disks
    /// strictly smaller than the current top. Rejection leaves the peg
    /// untouched and is an ordinary outcome for the caller to check, not a
    /// fault. A disk larger than the puzzle allows is a caller bug and
    /// panics.
    pub fn push(&mut self, disk: Disk) -> Result<(), PlaceError> {
        assert!(
            disk.size as usize <= self.capacity,
            "disk {} is out of bounds for a {}-disk puzzle",
            disk.size,
            self.capacity
        );
        if let Some(top) = self.top() {
            if disk.size >= top.size {
                return Err(PlaceError::WouldCoverSmaller {
                    disk: disk.size,
                    top: top.size,
                });
            }
        }
        self.disks.push(disk);
        Ok(())
    }

    /// Removes and returns the topmost disk, or `None` if the peg is empty.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}
