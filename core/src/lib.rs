pub mod action;
pub mod error;
pub mod event;
pub mod peg;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod state;

pub use action::{ActionResult, CoreAction};
pub use error::{ListenerError, PuzzleError};
pub use event::{ListenerId, PuzzleEvent, PuzzleListener};
pub use peg::{DiskSize, Peg, PegIndex, PEG_COUNT, PEG_LABELS};
pub use rules::{min_moves, GameRules, DEFAULT_DISKS, MAX_DISKS, MIN_DISKS};
pub use session::{GameSession, Grip};
pub use snapshot::{PegsSnapshot, PuzzleSnapshot};
pub use state::{MoveOutcome, PuzzleState, PuzzleStatus, RejectReason};
