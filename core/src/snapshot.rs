use serde::{Deserialize, Serialize};

/// Disk sizes per peg, base first.
pub type PegsSnapshot = [Vec<u32>; 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    pub pegs: PegsSnapshot,
    pub move_count: u64,
    pub disk_count: u32,
    pub solved: bool,
}

impl PuzzleSnapshot {
    pub fn tallest_peg(&self) -> usize {
        self.pegs.iter().map(Vec::len).max().unwrap_or(0)
    }
}
