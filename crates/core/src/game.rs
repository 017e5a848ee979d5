use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::mapgen;
use crate::state::WorldState;
use crate::types::*;

/// Logical surface extent matching the original 300x180 canvas at 20px tiles.
pub const DEFAULT_VIEWPORT: Viewport = Viewport { rows: 9, cols: 15 };

/// The single controller owning world state, configuration, and the RNG.
///
/// Every mutation goes through a command method (`request_move`,
/// `apply_config_update`, ...) that returns a description of what changed;
/// drawing is entirely the front end's business.
pub struct Game {
    seed: u64,
    rng: ChaCha8Rng,
    state: WorldState,
    config: GenConfig,
    viewport: Viewport,
    footprints_shown: bool,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_origin(seed, mapgen::SEED_ORIGIN)
    }

    pub fn with_origin(seed: u64, origin: Coord) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: WorldState::seeded(origin),
            config: GenConfig::default(),
            viewport: DEFAULT_VIEWPORT,
            footprints_shown: false,
            log: Vec::new(),
        }
    }

    /// Move the explorer. Equivalent to `move_unit` on the player unit.
    pub fn request_move(&mut self, delta: Delta) -> Result<MoveOutcome, MoveError> {
        self.move_unit(self.state.player_id, delta)
    }

    /// Validate and commit a move for one unit.
    ///
    /// Rejections are all-or-nothing: the unit position, the tile store, and
    /// the counters are untouched unless every check passes. The destination
    /// of any one-step move from an explored tile is already materialized,
    /// so a missing destination is a wiring defect, not a user error.
    pub fn move_unit(&mut self, unit: UnitId, delta: Delta) -> Result<MoveOutcome, MoveError> {
        let from = self.state.units[unit].coord;
        let to = from.offset(delta);

        if !to.on_map() {
            return Err(self.reject(MoveError::OffMap { attempted: to }));
        }

        let Some(terrain) = self.state.tiles.get(to) else {
            return Err(self.reject(MoveError::MissingTile { coord: to }));
        };

        if !terrain.passable(self.config.mountains_are_lava) {
            return Err(self.reject(MoveError::Impassable { coord: to, terrain }));
        }

        self.state.units[unit].coord = to;
        let created =
            mapgen::materialize_neighborhood(to, &mut self.state.tiles, &self.config, &mut self.rng);
        self.state.counters.record_visit(terrain);

        let expand = self.expansion_hints(to);
        self.log.push(LogEvent::MoveCommitted { from, to, entered: terrain, created: created.len() });

        Ok(MoveOutcome { from, to, entered: terrain, created, expand })
    }

    /// Flip footprint display and return the pure-render refresh of the 3x3
    /// neighborhood around the explorer. No terrain or position changes.
    pub fn toggle_footprints(&mut self) -> FootprintView {
        self.footprints_shown = !self.footprints_shown;
        self.footprint_view()
    }

    /// The current 3x3 neighborhood snapshot, for re-rendering around the
    /// explorer without touching any state.
    pub fn footprint_view(&self) -> FootprintView {
        let unit = self.state.player().coord;
        let mut tiles = Vec::with_capacity(9);
        for row_offset in -1..=1 {
            for col_offset in -1..=1 {
                let coord = Coord { row: unit.row + row_offset, col: unit.col + col_offset };
                if let Some(terrain) = self.state.tiles.get(coord) {
                    tiles.push(Tile { coord, terrain });
                }
            }
        }
        FootprintView { tiles, unit, footprints_shown: self.footprints_shown }
    }

    /// Debug utility: the coordinate whose unit marker the renderer should
    /// erase. State is untouched; the next draw restores the marker.
    pub fn erase_marker(&self) -> Coord {
        self.state.player().coord
    }

    pub fn apply_config_update(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
        self.log.push(LogEvent::ConfigChanged { update });
    }

    /// Replace the whole generation config, e.g. from a persisted settings
    /// file at startup. Not journaled; replays carry the starting config.
    pub fn set_config(&mut self, config: GenConfig) {
        self.config = config;
    }

    /// Record the front end's current surface extent after it resizes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player_coord(&self) -> Coord {
        self.state.player().coord
    }

    pub fn footprints_shown(&self) -> bool {
        self.footprints_shown
    }

    /// Canonical digest of everything a replay must reproduce.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.state.counters.turns);
        hasher.write_u64(self.state.counters.grass_visits);
        hasher.write_u64(self.state.counters.water_visits);
        hasher.write_u64(self.state.counters.mountain_visits);

        let player = self.state.player().coord;
        hasher.write_i32(player.row);
        hasher.write_i32(player.col);

        for tile in self.state.tiles.all() {
            hasher.write_i32(tile.coord.row);
            hasher.write_i32(tile.coord.col);
            hasher.write_u8(match tile.terrain {
                Terrain::Grass => 0,
                Terrain::Water => 1,
                Terrain::Mountain => 2,
            });
        }

        hasher.finish()
    }

    fn reject(&mut self, error: MoveError) -> MoveError {
        self.log.push(LogEvent::MoveRejected { error });
        error
    }

    /// Expansion is due when the committed position lands within one tile of
    /// the recorded surface edge, mirroring the original canvas check.
    fn expansion_hints(&self, to: Coord) -> Vec<ExpandDirection> {
        let mut hints = Vec::new();
        if to.col + 1 >= self.viewport.cols {
            hints.push(ExpandDirection::East);
        }
        if to.row + 1 >= self.viewport.rows {
            hints.push(ExpandDirection::South);
        }
        hints
    }
}
