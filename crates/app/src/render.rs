//! Immediate-mode rendering of the map, the explorer marker, and the HUD.

use macroquad::prelude::*;
use wander_core::{Game, Terrain, Tile};

use crate::canvas::CanvasExtent;

const HUD_HEIGHT: f32 = 140.0;
const HUD_FONT_SIZE: f32 = 18.0;

pub fn terrain_color(terrain: Terrain) -> Color {
    match terrain {
        Terrain::Grass => Color::from_rgba(0x55, 0x6B, 0x2F, 0xFF), // dark olive green
        Terrain::Water => Color::from_rgba(0x1E, 0x90, 0xFF, 0xFF), // dodger blue
        Terrain::Mountain => Color::from_rgba(0xA9, 0xA9, 0xA9, 0xFF), // dark grey
    }
}

pub fn unit_color() -> Color {
    Color::from_rgba(0xFF, 0x45, 0x00, 0xFF)
}

pub fn draw_frame(game: &Game, canvas: &CanvasExtent, status: Option<&str>, marker_erased: bool) {
    clear_background(BLACK);
    let tile_size = canvas.tile_size(screen_width(), screen_height() - HUD_HEIGHT);

    for tile in game.state().tiles.all() {
        draw_tile(*tile, tile_size);
    }
    if !marker_erased {
        draw_unit(game, tile_size);
    }
    draw_hud(game, status);
}

fn draw_tile(tile: Tile, tile_size: f32) {
    draw_rectangle(
        tile.coord.col as f32 * tile_size,
        tile.coord.row as f32 * tile_size,
        tile_size,
        tile_size,
        terrain_color(tile.terrain),
    );
}

fn draw_unit(game: &Game, tile_size: f32) {
    let coord = game.player_coord();
    let x = (coord.col as f32 + 0.5) * tile_size;
    let y = (coord.row as f32 + 0.5) * tile_size;
    let mut radius = tile_size / 4.0;
    if game.footprints_shown() {
        radius *= 1.3;
    }
    draw_circle_lines(x, y, radius, 3.0, unit_color());
}

fn draw_hud(game: &Game, status: Option<&str>) {
    let config = game.config();
    let counters = game.state().counters;
    let base = screen_height() - HUD_HEIGHT + HUD_FONT_SIZE;
    let mut line = 0.0_f32;
    let mut put = |text: &str| {
        draw_text(text, 10.0, base + line, HUD_FONT_SIZE, WHITE);
        line += HUD_FONT_SIZE;
    };

    put(&format!("Turn: {}", counters.turns));
    put(&format!("Number of tiles explored: {}", game.state().tiles.len()));
    put(&format!("Number of turns spent on grass: {}", counters.grass_visits));
    put(&format!("Number of turns spent on water: {}", counters.water_visits));
    if !config.mountains_are_lava {
        put(&format!("Number of turns spent on mountains: {}", counters.mountain_visits));
    }
    put(&format!(
        "Influence radius: {}   bias votes g/w/m: {}/{}/{}",
        config.radius, config.grass_votes, config.water_votes, config.mountain_votes
    ));
    if let Some(status) = status {
        put(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_palette_matches_the_classic_colors() {
        assert_eq!(terrain_color(Terrain::Grass), Color::from_rgba(0x55, 0x6B, 0x2F, 0xFF));
        assert_eq!(terrain_color(Terrain::Water), Color::from_rgba(0x1E, 0x90, 0xFF, 0xFF));
        assert_eq!(terrain_color(Terrain::Mountain), Color::from_rgba(0xA9, 0xA9, 0xA9, 0xFF));
        assert_eq!(unit_color(), Color::from_rgba(0xFF, 0x45, 0x00, 0xFF));
    }
}
