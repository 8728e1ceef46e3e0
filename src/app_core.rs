use std::cell::RefCell;
use std::rc::Rc;

use hanoi_core::{
    min_moves, DiskSize, GameRules, GameSession, Grip, ListenerId, MoveOutcome, PegIndex,
    PuzzleListener, PuzzleSnapshot, PEG_COUNT,
};

use crate::app_router::InitConfig;

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Everything the view needs for one render.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppSnapshot {
    pub(crate) puzzle: PuzzleSnapshot,
    pub(crate) held: Option<Grip>,
    pub(crate) droppable: [bool; PEG_COUNT],
    pub(crate) muted: bool,
    pub(crate) min_disks: u32,
    pub(crate) max_disks: u32,
    pub(crate) par: u64,
}

impl AppSnapshot {
    /// Only the top disk of each peg can be dragged, and none once solved.
    pub(crate) fn top_draggable(&self, peg: PegIndex) -> bool {
        !self.puzzle.solved && !self.puzzle.pegs[peg.index()].is_empty()
    }
}

struct AppState {
    session: GameSession,
    muted: bool,
}

pub(crate) struct AppCore {
    state: RefCell<AppState>,
    snapshot: RefCell<AppSnapshot>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl AppCore {
    pub(crate) fn new(rules: GameRules, config: &InitConfig) -> Rc<Self> {
        let state = AppState {
            session: GameSession::new(rules, config.disk_count),
            muted: config.muted,
        };
        let snapshot = build_snapshot(&state);
        Rc::new(Self {
            state: RefCell::new(state),
            snapshot: RefCell::new(snapshot),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    /// Listeners run while the session is borrowed; they must not call back
    /// into this store.
    pub(crate) fn add_listener(&self, listener: Rc<dyn PuzzleListener>) -> ListenerId {
        self.state.borrow_mut().session.subscribe_shared(listener)
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        self.snapshot.borrow().clone()
    }

    fn notify(&self) {
        {
            let state = self.state.borrow();
            *self.snapshot.borrow_mut() = build_snapshot(&state);
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub(crate) fn pick_up(&self, peg: PegIndex) -> Option<DiskSize> {
        let picked = self.state.borrow_mut().session.pick_up(peg);
        if picked.is_some() {
            self.notify();
        }
        picked
    }

    pub(crate) fn can_drop(&self, peg: PegIndex) -> bool {
        self.state.borrow().session.can_drop(peg)
    }

    pub(crate) fn drop_on(&self, peg: PegIndex) -> MoveOutcome {
        let outcome = self.state.borrow_mut().session.drop_on(peg);
        self.notify();
        outcome
    }

    pub(crate) fn cancel_drag(&self) {
        let had_grip = {
            let mut state = self.state.borrow_mut();
            let had_grip = state.session.grip().is_some();
            state.session.cancel_drag();
            had_grip
        };
        if had_grip {
            self.notify();
        }
    }

    pub(crate) fn reset(&self) {
        self.state.borrow_mut().session.reset(None);
        self.notify();
    }

    pub(crate) fn set_disk_count(&self, disk_count: u32) {
        self.state.borrow_mut().session.reset(Some(disk_count));
        self.notify();
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        let changed = {
            let mut state = self.state.borrow_mut();
            std::mem::replace(&mut state.muted, muted) != muted
        };
        if changed {
            self.notify();
        }
    }

    pub(crate) fn toggle_mute(&self) -> bool {
        let muted = !self.state.borrow().muted;
        self.set_muted(muted);
        muted
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

fn build_snapshot(state: &AppState) -> AppSnapshot {
    let session = &state.session;
    let rules = session.rules();
    let puzzle = session.snapshot();
    let droppable = PegIndex::ALL.map(|peg| session.can_drop(peg));
    AppSnapshot {
        par: min_moves(puzzle.disk_count),
        puzzle,
        held: session.grip(),
        droppable,
        muted: state.muted,
        min_disks: rules.min_disks(),
        max_disks: rules.max_disks(),
    }
}
