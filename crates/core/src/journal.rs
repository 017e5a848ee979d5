use serde::{Deserialize, Serialize};

use crate::types::{ConfigUpdate, Delta, GenConfig};

/// Ordered record of every command issued to a run, sufficient to replay it
/// headlessly. Rejected moves are recorded too; they mutate nothing but
/// consume RNG-free validation, so replaying them is harmless and keeps the
/// journal a faithful transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    /// Generation config at the start of the run. Later changes are inputs.
    pub starting_config: GenConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { delta: Delta },
    Config { update: ConfigUpdate },
}

impl InputJournal {
    pub fn new(seed: u64, starting_config: GenConfig) -> Self {
        Self { format_version: 1, seed, starting_config, inputs: Vec::new() }
    }

    pub fn append_move(&mut self, delta: Delta, seq: u64) {
        self.inputs.push(InputRecord { seq, payload: InputPayload::Move { delta } });
    }

    pub fn append_config(&mut self, update: ConfigUpdate, seq: u64) {
        self.inputs.push(InputRecord { seq, payload: InputPayload::Config { update } });
    }
}
