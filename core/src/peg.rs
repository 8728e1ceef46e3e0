use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;

pub const PEG_COUNT: usize = 3;
pub const PEG_LABELS: [char; PEG_COUNT] = ['A', 'B', 'C'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiskSize(pub u32);

impl DiskSize {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DiskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PegIndex {
    Left,
    Middle,
    Right,
}

impl PegIndex {
    pub const ALL: [PegIndex; PEG_COUNT] = [PegIndex::Left, PegIndex::Middle, PegIndex::Right];
    pub const START: PegIndex = PegIndex::Left;
    pub const GOAL: PegIndex = PegIndex::Right;

    pub fn index(self) -> usize {
        match self {
            PegIndex::Left => 0,
            PegIndex::Middle => 1,
            PegIndex::Right => 2,
        }
    }

    pub fn label(self) -> char {
        PEG_LABELS[self.index()]
    }

    /// Accepts `0`..`2`, `a`..`c` and `left`/`middle`/`right`, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(index) = value.parse::<usize>() {
            return Self::try_from(index).ok();
        }
        let lower = value.to_ascii_lowercase();
        match lower.as_str() {
            "a" | "left" | "l" => Some(PegIndex::Left),
            "b" | "middle" | "mid" | "m" => Some(PegIndex::Middle),
            "c" | "right" | "r" => Some(PegIndex::Right),
            _ => None,
        }
    }
}

impl TryFrom<usize> for PegIndex {
    type Error = PuzzleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PegIndex::Left),
            1 => Ok(PegIndex::Middle),
            2 => Ok(PegIndex::Right),
            _ => Err(PuzzleError::InvalidPeg { index }),
        }
    }
}

impl From<PegIndex> for usize {
    fn from(peg: PegIndex) -> Self {
        peg.index()
    }
}

impl fmt::Display for PegIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stack of disks, base first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peg {
    disks: Vec<DiskSize>,
}

impl Peg {
    pub fn new() -> Self {
        Self { disks: Vec::new() }
    }

    pub(crate) fn stacked(disk_count: u32) -> Self {
        Self {
            disks: (1..=disk_count).rev().map(DiskSize).collect(),
        }
    }

    pub fn top(&self) -> Option<DiskSize> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn disks(&self) -> &[DiskSize] {
        &self.disks
    }

    pub fn sizes(&self) -> Vec<u32> {
        self.disks.iter().map(|disk| disk.get()).collect()
    }

    /// True if `disk` may be placed on top of this peg.
    pub fn accepts(&self, disk: DiskSize) -> bool {
        self.top().map_or(true, |top| disk < top)
    }

    pub fn is_descending(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[0] > pair[1])
    }

    pub(crate) fn pop(&mut self) -> Option<DiskSize> {
        self.disks.pop()
    }

    pub(crate) fn push(&mut self, disk: DiskSize) {
        self.disks.push(disk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_peg_is_descending_with_smallest_on_top() {
        let peg = Peg::stacked(4);
        assert_eq!(peg.sizes(), vec![4, 3, 2, 1]);
        assert_eq!(peg.top(), Some(DiskSize(1)));
        assert!(peg.is_descending());
    }

    #[test]
    fn empty_peg_accepts_anything() {
        let peg = Peg::new();
        assert!(peg.accepts(DiskSize(5)));
        assert_eq!(peg.top(), None);
    }

    #[test]
    fn peg_rejects_larger_and_equal_disks() {
        let peg = Peg::stacked(2);
        assert!(!peg.accepts(DiskSize(2)));
        assert!(!peg.accepts(DiskSize(1)));
    }

    #[test]
    fn parse_peg_names() {
        assert_eq!(PegIndex::parse("0"), Some(PegIndex::Left));
        assert_eq!(PegIndex::parse(" B "), Some(PegIndex::Middle));
        assert_eq!(PegIndex::parse("right"), Some(PegIndex::Right));
        assert_eq!(PegIndex::parse("3"), None);
        assert_eq!(PegIndex::parse("d"), None);
    }

    #[test]
    fn peg_index_out_of_range() {
        assert_eq!(
            PegIndex::try_from(7),
            Err(PuzzleError::InvalidPeg { index: 7 })
        );
        assert_eq!(usize::from(PegIndex::GOAL), 2);
    }
}
