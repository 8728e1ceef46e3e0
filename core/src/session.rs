use std::rc::Rc;

use crate::action::{ActionResult, CoreAction};
use crate::event::{ListenerId, Listeners, PuzzleEvent, PuzzleListener};
use crate::peg::{DiskSize, PegIndex};
use crate::rules::GameRules;
use crate::snapshot::PuzzleSnapshot;
use crate::state::{MoveOutcome, PuzzleState, RejectReason};

/// The disk currently lifted off a peg by a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grip {
    pub peg: PegIndex,
    pub disk: DiskSize,
}

/// One running game: the puzzle state, the disk being dragged, and whoever
/// wants to hear about pick-ups, moves and wins.
pub struct GameSession {
    rules: GameRules,
    state: PuzzleState,
    grip: Option<Grip>,
    listeners: Listeners,
}

impl GameSession {
    pub fn new(rules: GameRules, disk_count: u32) -> Self {
        let disk_count = rules.clamp_disk_count(disk_count);
        Self {
            rules,
            state: PuzzleState::stacked(disk_count),
            grip: None,
            listeners: Listeners::default(),
        }
    }

    pub fn with_default_disks(rules: GameRules) -> Self {
        Self::new(rules, rules.default_disks())
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        self.state.snapshot()
    }

    pub fn grip(&self) -> Option<Grip> {
        self.grip
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: PuzzleListener + 'static,
    {
        self.listeners.add(Rc::new(listener))
    }

    pub fn subscribe_shared(&mut self, listener: Rc<dyn PuzzleListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Only the top disk of a peg can be dragged, and nothing once solved.
    pub fn is_draggable(&self, peg: PegIndex, disk: DiskSize) -> bool {
        !self.state.is_solved() && self.state.top_disk(peg) == Some(disk)
    }

    pub fn pick_up(&mut self, peg: PegIndex) -> Option<DiskSize> {
        if self.state.is_solved() {
            return None;
        }
        let disk = self.state.top_disk(peg)?;
        self.grip = Some(Grip { peg, disk });
        self.listeners.emit(&PuzzleEvent::DiskPickedUp { peg, disk });
        Some(disk)
    }

    /// Whether the held disk may be dropped on `target`. Safe to call on every
    /// drag-over.
    pub fn can_drop(&self, target: PegIndex) -> bool {
        self.grip
            .map_or(false, |grip| self.state.is_legal_move(grip.peg, target))
    }

    pub fn drop_on(&mut self, target: PegIndex) -> MoveOutcome {
        let Some(grip) = self.grip.take() else {
            return MoveOutcome::Rejected(RejectReason::NothingHeld);
        };
        self.move_disk(grip.peg, target)
    }

    pub fn cancel_drag(&mut self) {
        self.grip = None;
    }

    pub fn move_disk(&mut self, source: PegIndex, target: PegIndex) -> MoveOutcome {
        let outcome = self.state.apply_move(source, target);
        if let MoveOutcome::Applied { disk, now_solved } = outcome {
            self.grip = None;
            let move_count = self.state.move_count();
            self.listeners.emit(&PuzzleEvent::MoveApplied {
                source,
                target,
                disk,
                move_count,
            });
            if now_solved {
                tracing::info!(
                    disk_count = self.state.disk_count(),
                    move_count,
                    "puzzle solved"
                );
                self.listeners.emit(&PuzzleEvent::Solved { move_count });
            }
        }
        outcome
    }

    /// Starts over with the current or a new disk count, clamped to the rules.
    pub fn reset(&mut self, disk_count: Option<u32>) -> u32 {
        let disk_count = disk_count
            .map(|count| self.rules.clamp_disk_count(count))
            .unwrap_or_else(|| self.state.disk_count());
        self.state = PuzzleState::stacked(disk_count);
        self.grip = None;
        self.listeners.emit(&PuzzleEvent::Reset { disk_count });
        disk_count
    }

    pub fn apply_action(&mut self, action: CoreAction) -> ActionResult {
        match action {
            CoreAction::PickUp { peg } => ActionResult::PickedUp(self.pick_up(peg)),
            CoreAction::DropOn { peg } => ActionResult::Moved(self.drop_on(peg)),
            CoreAction::CancelDrag => {
                self.cancel_drag();
                ActionResult::Cancelled
            }
            CoreAction::Move { source, target } => {
                ActionResult::Moved(self.move_disk(source, target))
            }
            CoreAction::Reset { disk_count } => ActionResult::Reset {
                disk_count: self.reset(disk_count),
            },
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_default_disks(GameRules::default())
    }
}
