use std::fmt;

use serde::Serialize;

use crate::error::PuzzleError;
use crate::peg::{DiskSize, Peg, PegIndex, PEG_COUNT};
use crate::snapshot::{PegsSnapshot, PuzzleSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PuzzleStatus {
    InProgress,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    SamePeg,
    EmptySource,
    LargerOnSmaller { moving: DiskSize, target_top: DiskSize },
    AlreadySolved,
    NothingHeld,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::SamePeg => write!(f, "source and target are the same peg"),
            RejectReason::EmptySource => write!(f, "source peg is empty"),
            RejectReason::LargerOnSmaller { moving, target_top } => {
                write!(f, "disk {moving} cannot go on top of disk {target_top}")
            }
            RejectReason::AlreadySolved => write!(f, "puzzle is already solved"),
            RejectReason::NothingHeld => write!(f, "no disk is being held"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { disk: DiskSize, now_solved: bool },
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    pub fn moved_disk(&self) -> Option<DiskSize> {
        match self {
            MoveOutcome::Applied { disk, .. } => Some(*disk),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Whether the puzzle is solved after this call. A move refused because
    /// the puzzle was already solved still reports `true`.
    pub fn now_solved(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Applied {
                now_solved: true,
                ..
            } | MoveOutcome::Rejected(RejectReason::AlreadySolved)
        )
    }

    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Applied { .. } => None,
        }
    }
}

/// Three pegs, a move counter and the disk count the game was set up with.
///
/// The only mutations are [`PuzzleState::apply_move`] and
/// [`PuzzleState::reset`]; both keep every disk `1..=disk_count` on exactly one
/// peg with each peg strictly descending from base to top. Solved-ness is
/// derived from the pegs on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pegs: [Peg; PEG_COUNT],
    move_count: u64,
    disk_count: u32,
}

impl PuzzleState {
    pub fn new(disk_count: u32) -> Result<Self, PuzzleError> {
        ensure_positive(disk_count)?;
        Ok(Self::stacked(disk_count))
    }

    /// Caller guarantees `disk_count >= 1`.
    pub(crate) fn stacked(disk_count: u32) -> Self {
        let mut pegs = [Peg::new(), Peg::new(), Peg::new()];
        pegs[PegIndex::START.index()] = Peg::stacked(disk_count);
        Self {
            pegs,
            move_count: 0,
            disk_count,
        }
    }

    /// Re-stacks every disk on the start peg, keeping the current disk count
    /// unless a new one is given. A zero count is rejected before anything
    /// changes.
    pub fn reset(&mut self, disk_count: Option<u32>) -> Result<(), PuzzleError> {
        let disk_count = disk_count.unwrap_or(self.disk_count);
        ensure_positive(disk_count)?;
        *self = Self::stacked(disk_count);
        Ok(())
    }

    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn pegs(&self) -> &[Peg; PEG_COUNT] {
        &self.pegs
    }

    pub fn peg(&self, peg: PegIndex) -> &Peg {
        &self.pegs[peg.index()]
    }

    pub fn top_disk(&self, peg: PegIndex) -> Option<DiskSize> {
        self.peg(peg).top()
    }

    pub fn is_solved(&self) -> bool {
        self.peg(PegIndex::GOAL).len() == self.disk_count as usize
    }

    pub fn status(&self) -> PuzzleStatus {
        if self.is_solved() {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::InProgress
        }
    }

    /// Returns the disk that would move, or why the move is not allowed.
    /// Does not look at solved-ness.
    pub fn check_move(&self, source: PegIndex, target: PegIndex) -> Result<DiskSize, RejectReason> {
        if source == target {
            return Err(RejectReason::SamePeg);
        }
        let moving = self.top_disk(source).ok_or(RejectReason::EmptySource)?;
        let target_peg = self.peg(target);
        match target_peg.top() {
            Some(target_top) if !target_peg.accepts(moving) => {
                Err(RejectReason::LargerOnSmaller { moving, target_top })
            }
            _ => Ok(moving),
        }
    }

    pub fn is_legal_move(&self, source: PegIndex, target: PegIndex) -> bool {
        self.check_move(source, target).is_ok()
    }

    pub fn apply_move(&mut self, source: PegIndex, target: PegIndex) -> MoveOutcome {
        if self.is_solved() {
            tracing::debug!(%source, %target, "move rejected: puzzle already solved");
            return MoveOutcome::Rejected(RejectReason::AlreadySolved);
        }
        let disk = match self.check_move(source, target) {
            Ok(disk) => disk,
            Err(reason) => {
                tracing::debug!(%source, %target, %reason, "move rejected");
                return MoveOutcome::Rejected(reason);
            }
        };
        self.pegs[source.index()].pop();
        self.pegs[target.index()].push(disk);
        self.move_count += 1;
        debug_assert!(self.check_invariants().is_ok());
        MoveOutcome::Applied {
            disk,
            now_solved: self.is_solved(),
        }
    }

    pub fn snapshot_pegs(&self) -> PegsSnapshot {
        [
            self.pegs[0].sizes(),
            self.pegs[1].sizes(),
            self.pegs[2].sizes(),
        ]
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            pegs: self.snapshot_pegs(),
            move_count: self.move_count,
            disk_count: self.disk_count,
            solved: self.is_solved(),
        }
    }

    /// Checks disk conservation and per-peg ordering.
    pub fn check_invariants(&self) -> Result<(), PuzzleError> {
        let total = self.disk_count as usize;
        let mut seen = vec![false; total];
        for (index, peg) in self.pegs.iter().enumerate() {
            if !peg.is_descending() {
                return Err(PuzzleError::InvariantViolated {
                    detail: format!("peg {index} is not strictly descending: {:?}", peg.sizes()),
                });
            }
            for disk in peg.disks() {
                let size = disk.get() as usize;
                if size == 0 || size > total {
                    return Err(PuzzleError::InvariantViolated {
                        detail: format!("disk {size} outside 1..={total}"),
                    });
                }
                if std::mem::replace(&mut seen[size - 1], true) {
                    return Err(PuzzleError::InvariantViolated {
                        detail: format!("disk {size} appears twice"),
                    });
                }
            }
        }
        if let Some(missing) = seen.iter().position(|present| !present) {
            return Err(PuzzleError::InvariantViolated {
                detail: format!("disk {} is missing", missing + 1),
            });
        }
        Ok(())
    }
}

fn ensure_positive(disk_count: u32) -> Result<(), PuzzleError> {
    if disk_count == 0 {
        return Err(PuzzleError::InvalidConfiguration {
            disk_count,
            reason: "at least one disk is required",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::PegIndex::{Left, Middle, Right};

    #[test]
    fn new_stacks_all_disks_on_start_peg() {
        let state = PuzzleState::new(5).unwrap();
        assert_eq!(state.snapshot_pegs(), [vec![5, 4, 3, 2, 1], vec![], vec![]]);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.status(), PuzzleStatus::InProgress);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn zero_disks_is_invalid() {
        let err = PuzzleState::new(0).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidConfiguration { disk_count: 0, .. }
        ));
    }

    #[test]
    fn core_tolerates_counts_outside_the_slider_range() {
        let state = PuzzleState::new(1).unwrap();
        assert_eq!(state.snapshot_pegs(), [vec![1], vec![], vec![]]);
        let state = PuzzleState::new(9).unwrap();
        assert_eq!(state.peg(Left).len(), 9);
    }

    #[test]
    fn check_move_reports_reasons() {
        let mut state = PuzzleState::new(3).unwrap();
        assert_eq!(state.check_move(Left, Left), Err(RejectReason::SamePeg));
        assert_eq!(state.check_move(Middle, Right), Err(RejectReason::EmptySource));
        assert!(state.apply_move(Left, Right).applied());
        assert_eq!(
            state.check_move(Left, Right),
            Err(RejectReason::LargerOnSmaller {
                moving: DiskSize(2),
                target_top: DiskSize(1),
            })
        );
        assert_eq!(state.check_move(Right, Middle), Ok(DiskSize(1)));
    }

    #[test]
    fn rejected_move_leaves_state_untouched() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(Left, Right);
        let before = state.clone();
        let outcome = state.apply_move(Left, Right);
        assert!(!outcome.applied());
        assert_eq!(outcome.moved_disk(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn solved_puzzle_rejects_further_moves() {
        let mut state = PuzzleState::new(2).unwrap();
        state.apply_move(Left, Middle);
        state.apply_move(Left, Right);
        let last = state.apply_move(Middle, Right);
        assert!(last.now_solved());
        assert_eq!(state.status(), PuzzleStatus::Solved);

        let outcome = state.apply_move(Right, Left);
        assert_eq!(outcome.rejection(), Some(RejectReason::AlreadySolved));
        assert_eq!(state.move_count(), 3);
        assert!(state.is_solved());
    }

    #[test]
    fn reset_keeps_or_replaces_disk_count() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(Left, Right);
        state.reset(None).unwrap();
        assert_eq!(state, PuzzleState::new(3).unwrap());

        state.reset(Some(4)).unwrap();
        assert_eq!(state.disk_count(), 4);
        assert_eq!(state.snapshot_pegs()[0], vec![4, 3, 2, 1]);
    }

    #[test]
    fn reset_with_zero_does_not_mutate() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(Left, Middle);
        let before = state.clone();
        assert!(state.reset(Some(0)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn legality_matches_target_peg_acceptance() {
        let mut state = PuzzleState::new(3).unwrap();
        state.apply_move(Left, Right);
        for source in PegIndex::ALL {
            for target in PegIndex::ALL {
                let Some(moving) = state.top_disk(source) else {
                    continue;
                };
                if source == target {
                    continue;
                }
                assert_eq!(
                    state.is_legal_move(source, target),
                    state.peg(target).accepts(moving),
                    "{source} -> {target}"
                );
            }
        }
    }

    #[test]
    fn reject_reason_messages_are_readable() {
        let reason = RejectReason::LargerOnSmaller {
            moving: DiskSize(3),
            target_top: DiskSize(1),
        };
        assert_eq!(reason.to_string(), "disk 3 cannot go on top of disk 1");
    }
}
