//! Keyboard-to-command mapping for one rendered frame.
//!
//! Keys never invoke engine logic directly; they map to explicit commands
//! that the main loop dispatches, so a test harness or a scripted replay
//! can issue the same commands without a keyboard.

use macroquad::prelude::{KeyCode, is_key_pressed};
use wander_core::{ConfigUpdate, Delta, EAST, GenConfig, NORTH, SOUTH, Terrain, WEST};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Delta),
    ToggleFootprints,
    EraseMarker,
    Adjust(ConfigUpdate),
    SaveJournal,
}

const COMMAND_KEYS: [KeyCode; 15] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Z,
    KeyCode::F,
    KeyCode::J,
    KeyCode::LeftBracket,
    KeyCode::RightBracket,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// Map one key press to a command. Bias and radius adjustments read the
/// current config so each press moves the value by one step.
pub fn command_for_key(key: KeyCode, config: &GenConfig) -> Option<Command> {
    let bias = |terrain: Terrain, votes: u32| {
        Some(Command::Adjust(ConfigUpdate::BiasVotes { terrain, votes }))
    };

    match key {
        KeyCode::W => Some(Command::Move(NORTH)),
        KeyCode::S => Some(Command::Move(SOUTH)),
        KeyCode::A => Some(Command::Move(WEST)),
        KeyCode::D => Some(Command::Move(EAST)),
        KeyCode::Z => Some(Command::EraseMarker),
        KeyCode::F => Some(Command::ToggleFootprints),
        KeyCode::J => Some(Command::SaveJournal),
        KeyCode::LeftBracket => {
            Some(Command::Adjust(ConfigUpdate::Radius(config.radius.saturating_sub(1))))
        }
        KeyCode::RightBracket => Some(Command::Adjust(ConfigUpdate::Radius(config.radius + 1))),
        KeyCode::Key1 => bias(Terrain::Grass, config.grass_votes.saturating_sub(1)),
        KeyCode::Key2 => bias(Terrain::Grass, config.grass_votes + 1),
        KeyCode::Key3 => bias(Terrain::Water, config.water_votes.saturating_sub(1)),
        KeyCode::Key4 => bias(Terrain::Water, config.water_votes + 1),
        KeyCode::Key5 => bias(Terrain::Mountain, config.mountain_votes.saturating_sub(1)),
        KeyCode::Key6 => bias(Terrain::Mountain, config.mountain_votes + 1),
        _ => None,
    }
}

pub fn capture_frame_commands(config: &GenConfig) -> Vec<Command> {
    let mut commands = Vec::new();
    for key in COMMAND_KEYS {
        if is_key_pressed(key)
            && let Some(command) = command_for_key(key, config)
        {
            commands.push(command);
        }
    }
    commands
}
