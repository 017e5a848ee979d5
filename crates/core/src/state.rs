use std::collections::HashMap;

use slotmap::SlotMap;

use crate::mapgen;
use crate::types::*;

/// Sparse insert-only mapping from coordinate to terrain.
///
/// Lookup goes through a hash map so it stays O(1) as the map grows; a
/// parallel insertion-order list backs `all()` so full-redraw snapshots are
/// stable and reproducible.
#[derive(Clone, Debug, Default)]
pub struct TileStore {
    lookup: HashMap<Coord, Terrain>,
    order: Vec<Tile>,
}

impl TileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coord) -> Option<Terrain> {
        self.lookup.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.lookup.contains_key(&coord)
    }

    /// Insert a tile at a not-yet-occupied coordinate. Terrain is immutable
    /// once assigned, so inserting over an existing tile is always a defect.
    pub fn insert(&mut self, tile: Tile) -> Result<(), StoreError> {
        if self.lookup.contains_key(&tile.coord) {
            return Err(StoreError::DuplicateTile { coord: tile.coord });
        }
        self.lookup.insert(tile.coord, tile.terrain);
        self.order.push(tile);
        Ok(())
    }

    /// Snapshot of every known tile in insertion order.
    pub fn all(&self) -> &[Tile] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A single movable unit. Exactly one exists today; the slot map in
/// `WorldState` keeps the door open for more without an API redesign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Explorer {
    pub coord: Coord,
}

/// Turn and per-terrain visit counters. Process lifetime; never reset.
/// The turn counter starts at 1, matching the original game's display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    pub turns: u64,
    pub grass_visits: u64,
    pub water_visits: u64,
    pub mountain_visits: u64,
}

impl Default for Counters {
    fn default() -> Self {
        Self { turns: 1, grass_visits: 0, water_visits: 0, mountain_visits: 0 }
    }
}

impl Counters {
    pub fn record_visit(&mut self, terrain: Terrain) {
        self.turns += 1;
        match terrain {
            Terrain::Grass => self.grass_visits += 1,
            Terrain::Water => self.water_visits += 1,
            Terrain::Mountain => self.mountain_visits += 1,
        }
    }

    pub fn visits(&self, terrain: Terrain) -> u64 {
        match terrain {
            Terrain::Grass => self.grass_visits,
            Terrain::Water => self.water_visits,
            Terrain::Mountain => self.mountain_visits,
        }
    }
}

/// The single aggregate holding all mutable world state. Owned by `Game`
/// and passed by reference to whatever needs it; there are no globals.
pub struct WorldState {
    pub tiles: TileStore,
    pub units: SlotMap<UnitId, Explorer>,
    pub player_id: UnitId,
    pub counters: Counters,
}

impl WorldState {
    /// Build a world seeded with the fixed 3x3 starting map around `origin`
    /// and one explorer standing on its center.
    pub fn seeded(origin: Coord) -> Self {
        let mut tiles = TileStore::new();
        for tile in mapgen::seed_tiles(origin) {
            // Seed coordinates are distinct and the store starts empty.
            let _ = tiles.insert(tile);
        }

        let mut units = SlotMap::with_key();
        let player_id = units.insert(Explorer { coord: origin });

        Self { tiles, units, player_id, counters: Counters::default() }
    }

    pub fn player(&self) -> &Explorer {
        &self.units[self.player_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_rejects_occupied_coordinate() {
        let mut store = TileStore::new();
        let coord = Coord { row: 2, col: 5 };
        store.insert(Tile { coord, terrain: Terrain::Grass }).expect("first insert");

        let err = store.insert(Tile { coord, terrain: Terrain::Water }).unwrap_err();
        assert_eq!(err, StoreError::DuplicateTile { coord });
        // The rejected insert must not have touched the stored terrain.
        assert_eq!(store.get(coord), Some(Terrain::Grass));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut store = TileStore::new();
        let coords =
            [Coord { row: 0, col: 3 }, Coord { row: 5, col: 1 }, Coord { row: 2, col: 2 }];
        for coord in coords {
            store.insert(Tile { coord, terrain: Terrain::Grass }).expect("insert");
        }
        let snapshot: Vec<Coord> = store.all().iter().map(|tile| tile.coord).collect();
        assert_eq!(snapshot, coords);
    }

    #[test]
    fn seeded_world_places_explorer_on_origin() {
        let origin = Coord { row: 3, col: 3 };
        let world = WorldState::seeded(origin);
        assert_eq!(world.player().coord, origin);
        assert_eq!(world.tiles.len(), 9);
        assert_eq!(world.counters.turns, 1);
    }

    #[test]
    fn visit_recording_bumps_turn_and_matching_terrain_only() {
        let mut counters = Counters::default();
        counters.record_visit(Terrain::Water);
        counters.record_visit(Terrain::Water);
        counters.record_visit(Terrain::Grass);
        assert_eq!(counters.turns, 4);
        assert_eq!(counters.water_visits, 2);
        assert_eq!(counters.grass_visits, 1);
        assert_eq!(counters.mountain_visits, 0);
    }
}
