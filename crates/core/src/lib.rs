pub mod game;
pub mod journal;
pub mod journal_file;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use game::{DEFAULT_VIEWPORT, Game};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::{ReplayError, ReplayResult, replay_to_end};
pub use state::{Counters, Explorer, TileStore, WorldState};
pub use types::*;
