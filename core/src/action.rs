use crate::peg::{DiskSize, PegIndex};
use crate::state::MoveOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreAction {
    PickUp { peg: PegIndex },
    DropOn { peg: PegIndex },
    CancelDrag,
    Move { source: PegIndex, target: PegIndex },
    Reset { disk_count: Option<u32> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionResult {
    PickedUp(Option<DiskSize>),
    Moved(MoveOutcome),
    Cancelled,
    Reset { disk_count: u32 },
}

impl ActionResult {
    pub fn move_outcome(&self) -> Option<MoveOutcome> {
        match self {
            ActionResult::Moved(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
