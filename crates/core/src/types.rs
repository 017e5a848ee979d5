use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct UnitId;
}

/// Map coordinate. Rows grow southward, columns grow eastward; the map has a
/// hard edge at row 0 / col 0 and negative coordinates are never materialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn offset(self, delta: Delta) -> Self {
        Self { row: self.row + delta.row, col: self.col + delta.col }
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn on_map(self) -> bool {
        self.row >= 0 && self.col >= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Grass,
    Water,
    Mountain,
}

impl Terrain {
    pub const ALL: [Self; 3] = [Self::Grass, Self::Water, Self::Mountain];

    pub fn passable(self, mountains_are_lava: bool) -> bool {
        match self {
            Self::Grass | Self::Water => true,
            Self::Mountain => !mountains_are_lava,
        }
    }
}

/// One terrain assignment at one coordinate. Immutable once inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub coord: Coord,
    pub terrain: Terrain,
}

/// A movement offset. Callers issue single-cell deltas, but the engine
/// accepts any vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub row: i32,
    pub col: i32,
}

pub const NORTH: Delta = Delta { row: -1, col: 0 };
pub const SOUTH: Delta = Delta { row: 1, col: 0 };
pub const WEST: Delta = Delta { row: 0, col: -1 };
pub const EAST: Delta = Delta { row: 0, col: 1 };

/// Logical rendering surface extent, measured in tiles. The front end owns
/// the actual surface; the engine only compares committed positions against
/// this extent to emit expansion hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub rows: i32,
    pub cols: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandDirection {
    East,
    South,
}

/// Delta description of a committed move, for the rendering collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    pub entered: Terrain,
    /// Tiles materialized by this move, in creation order.
    pub created: Vec<Tile>,
    /// Surface-expansion hints; the canvas policy owns the actual resize.
    pub expand: Vec<ExpandDirection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Destination has a negative row or column. User-visible; no state change.
    OffMap { attempted: Coord },
    /// Destination terrain is impassable under the current configuration.
    /// User-visible; no state change.
    Impassable { coord: Coord, terrain: Terrain },
    /// Destination was never materialized. Internal invariant failure: the
    /// 3x3 neighborhood of the previous position must already exist.
    MissingTile { coord: Coord },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A tile already exists at this coordinate. Internal; callers check
    /// `contains` first, so this surfacing is always a defect.
    DuplicateTile { coord: Coord },
}

/// Live configuration for terrain generation and passability.
/// Sampling reads current values on every call, never a startup snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Manhattan search radius for neighborhood sampling.
    pub radius: u32,
    pub grass_votes: u32,
    pub water_votes: u32,
    pub mountain_votes: u32,
    pub mountains_are_lava: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            grass_votes: 0,
            water_votes: 0,
            mountain_votes: 0,
            mountains_are_lava: true,
        }
    }
}

impl GenConfig {
    pub fn votes_for(&self, terrain: Terrain) -> u32 {
        match terrain {
            Terrain::Grass => self.grass_votes,
            Terrain::Water => self.water_votes,
            Terrain::Mountain => self.mountain_votes,
        }
    }

    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Radius(radius) => self.radius = radius,
            ConfigUpdate::BiasVotes { terrain: Terrain::Grass, votes } => self.grass_votes = votes,
            ConfigUpdate::BiasVotes { terrain: Terrain::Water, votes } => self.water_votes = votes,
            ConfigUpdate::BiasVotes { terrain: Terrain::Mountain, votes } => {
                self.mountain_votes = votes
            }
        }
    }
}

/// A single user-driven configuration change. Journaled, because sampling
/// reads live values and replay must reproduce them at the same turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigUpdate {
    Radius(u32),
    BiasVotes { terrain: Terrain, votes: u32 },
}

/// Pure-render refresh of the explorer's 3x3 neighborhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootprintView {
    /// Known tiles of the 3x3 block around the explorer, row-major.
    pub tiles: Vec<Tile>,
    pub unit: Coord,
    pub footprints_shown: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    MoveCommitted { from: Coord, to: Coord, entered: Terrain, created: usize },
    MoveRejected { error: MoveError },
    ConfigChanged { update: ConfigUpdate },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_sums_row_and_col_offsets() {
        let a = Coord { row: 3, col: 3 };
        assert_eq!(a.manhattan(Coord { row: 3, col: 3 }), 0);
        assert_eq!(a.manhattan(Coord { row: 1, col: 6 }), 5);
        assert_eq!(a.manhattan(Coord { row: 5, col: 0 }), 5);
    }

    #[test]
    fn mountain_passability_follows_lava_flag() {
        assert!(!Terrain::Mountain.passable(true));
        assert!(Terrain::Mountain.passable(false));
        assert!(Terrain::Grass.passable(true));
        assert!(Terrain::Water.passable(true));
    }

    #[test]
    fn config_update_targets_only_the_named_field() {
        let mut config = GenConfig::default();
        config.apply(ConfigUpdate::BiasVotes { terrain: Terrain::Water, votes: 7 });
        assert_eq!(config.water_votes, 7);
        assert_eq!(config.grass_votes, 0);
        assert_eq!(config.mountain_votes, 0);

        config.apply(ConfigUpdate::Radius(5));
        assert_eq!(config.radius, 5);
        assert_eq!(config.water_votes, 7);
    }
}
