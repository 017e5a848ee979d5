pub mod canvas;
pub mod command;
pub mod render;
pub mod seed;
pub mod settings_file;
pub mod window_config;

use wander_core::MoveError;

pub const APP_NAME: &str = "Wander";

/// User-facing message for a rejected move, shown in the status line.
pub fn describe_move_error(error: &MoveError) -> &'static str {
    match error {
        MoveError::OffMap { .. } => "EDGE OF MAP: you cannot move off the board",
        MoveError::Impassable { .. } => "Sorry, you cannot cross mountains.",
        // Unreachable with a correctly wired engine; still worth a message.
        MoveError::MissingTile { .. } => "internal error: destination tile was never generated",
    }
}
