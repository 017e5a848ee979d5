use std::env;
use std::path::Path;

use macroquad::prelude::next_frame;

use wander_app::canvas::CanvasExtent;
use wander_app::command::{Command, capture_frame_commands};
use wander_app::settings_file::Settings;
use wander_app::window_config::build_window_conf;
use wander_app::{describe_move_error, render, seed};
use wander_core::{Game, InputJournal, journal_file};

const JOURNAL_DUMP_PATH: &str = "wander-journal.json";

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let run_seed = match seed::resolve_seed_from_args(&args, seed::generate_runtime_seed()) {
        Ok(run_seed) => run_seed,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let settings_path = Settings::get_default_path();
    let settings = settings_path
        .as_deref()
        .and_then(|path| Settings::load(path).ok())
        .unwrap_or_default();

    let mut game = Game::new(run_seed);
    game.set_config(settings.config);
    let mut journal = InputJournal::new(run_seed, settings.config);
    let mut next_seq = 0_u64;

    let mut canvas = CanvasExtent::default();
    game.set_viewport(canvas.viewport());

    let mut status: Option<String> = None;
    let mut marker_erased = false;

    loop {
        for command in capture_frame_commands(game.config()) {
            match command {
                Command::Move(delta) => {
                    journal.append_move(delta, next_seq);
                    next_seq += 1;
                    match game.request_move(delta) {
                        Ok(outcome) => {
                            status = None;
                            marker_erased = false;
                            for direction in outcome.expand {
                                canvas.expand(direction);
                            }
                            game.set_viewport(canvas.viewport());
                        }
                        Err(error) => status = Some(describe_move_error(&error).to_owned()),
                    }
                }
                Command::ToggleFootprints => {
                    game.toggle_footprints();
                }
                Command::EraseMarker => marker_erased = true,
                Command::Adjust(update) => {
                    journal.append_config(update, next_seq);
                    next_seq += 1;
                    game.apply_config_update(update);
                    if let Some(path) = settings_path.as_deref()
                        && let Err(error) = Settings::with_config(*game.config()).write_atomic(path)
                    {
                        eprintln!("failed to save settings: {error}");
                    }
                }
                Command::SaveJournal => {
                    let path = Path::new(JOURNAL_DUMP_PATH);
                    status = Some(match journal_file::save(&journal, path) {
                        Ok(()) => format!("journal saved to {JOURNAL_DUMP_PATH}"),
                        Err(error) => format!("journal save failed: {error}"),
                    });
                }
            }
        }

        render::draw_frame(&game, &canvas, status.as_deref(), marker_erased);
        next_frame().await;
    }
}
