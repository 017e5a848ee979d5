use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::types::{Coord, LogEvent, MoveError};

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// A replayed move hit an unmaterialized destination. This can never
    /// happen for a journal recorded against a correct engine, so it always
    /// marks a defect or a corrupted journal.
    MissingTile { coord: Coord },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub turns: u64,
    pub tiles_explored: usize,
    pub rejected_moves: u32,
    /// Event log of the replayed run, for diagnosis tooling.
    pub log: Vec<LogEvent>,
}

/// Re-run every journaled command against a fresh game and report the final
/// state digest. Off-map and impassable rejections are normal transcript
/// entries; they mutated nothing when recorded and mutate nothing now.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed);
    game.set_config(journal.starting_config);

    let mut rejected_moves = 0_u32;
    for record in &journal.inputs {
        match &record.payload {
            InputPayload::Move { delta } => match game.request_move(*delta) {
                Ok(_) => {}
                Err(MoveError::OffMap { .. } | MoveError::Impassable { .. }) => rejected_moves += 1,
                Err(MoveError::MissingTile { coord }) => {
                    return Err(ReplayError::MissingTile { coord });
                }
            },
            InputPayload::Config { update } => game.apply_config_update(*update),
        }
    }

    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        turns: game.state().counters.turns,
        tiles_explored: game.state().tiles.len(),
        rejected_moves,
        log: game.log().to_vec(),
    })
}
