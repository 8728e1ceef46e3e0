use std::rc::Rc;

use crate::error::ListenerError;
use crate::peg::{DiskSize, PegIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleEvent {
    DiskPickedUp {
        peg: PegIndex,
        disk: DiskSize,
    },
    MoveApplied {
        source: PegIndex,
        target: PegIndex,
        disk: DiskSize,
        move_count: u64,
    },
    Solved {
        move_count: u64,
    },
    Reset {
        disk_count: u32,
    },
}

/// Receives session notifications. Errors are logged by the session and never
/// reach the puzzle state.
pub trait PuzzleListener {
    fn on_event(&self, event: &PuzzleEvent) -> Result<(), ListenerError>;
}

impl<F> PuzzleListener for F
where
    F: Fn(&PuzzleEvent) -> Result<(), ListenerError>,
{
    fn on_event(&self, event: &PuzzleEvent) -> Result<(), ListenerError> {
        self(event)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Rc<dyn PuzzleListener>)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Rc<dyn PuzzleListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&self, event: &PuzzleEvent) {
        for (id, listener) in &self.entries {
            if let Err(err) = listener.on_event(event) {
                tracing::warn!(
                    listener = ?id,
                    ?event,
                    error = err.message(),
                    "puzzle listener failed"
                );
            }
        }
    }
}
