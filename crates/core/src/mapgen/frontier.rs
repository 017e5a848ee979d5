//! Exploration-frontier expansion: keep the 3x3 neighborhood of the
//! explorer materialized so any one-step destination is already known.

use rand_chacha::ChaCha8Rng;

use super::sampler;
use crate::state::TileStore;
use crate::types::{Coord, GenConfig, Tile};

/// Materialize every missing cell of the 3x3 block centered on `center`,
/// row-major. Off-map cells and already-known cells are skipped; partial
/// population is normal, not a failure. Returns exactly the tiles created,
/// in creation order, so the caller can render only the delta.
pub fn materialize_neighborhood(
    center: Coord,
    store: &mut TileStore,
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<Tile> {
    let mut created = Vec::new();
    for row_offset in -1..=1 {
        for col_offset in -1..=1 {
            let coord = Coord { row: center.row + row_offset, col: center.col + col_offset };
            if !coord.on_map() || store.contains(coord) {
                continue;
            }
            let Some(terrain) = sampler::sample(coord, store, config, rng) else {
                continue;
            };
            let tile = Tile { coord, terrain };
            // `contains` was checked above, so the insert cannot collide.
            if store.insert(tile).is_ok() {
                created.push(tile);
            }
        }
    }
    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::{SEED_ORIGIN, seed_tiles};
    use crate::types::Terrain;
    use rand_chacha::rand_core::SeedableRng;

    fn seeded_store() -> TileStore {
        let mut store = TileStore::new();
        for tile in seed_tiles(SEED_ORIGIN) {
            store.insert(tile).expect("seed insert");
        }
        store
    }

    #[test]
    fn fully_known_neighborhood_creates_nothing() {
        let mut store = seeded_store();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let created =
            materialize_neighborhood(SEED_ORIGIN, &mut store, &GenConfig::default(), &mut rng);
        assert!(created.is_empty());
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn stepping_east_creates_the_three_new_column_cells() {
        let mut store = seeded_store();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let east = Coord { row: SEED_ORIGIN.row, col: SEED_ORIGIN.col + 1 };
        let created = materialize_neighborhood(east, &mut store, &GenConfig::default(), &mut rng);

        let expected: Vec<Coord> =
            (2..=4).map(|row| Coord { row, col: SEED_ORIGIN.col + 2 }).collect();
        let coords: Vec<Coord> = created.iter().map(|tile| tile.coord).collect();
        assert_eq!(coords, expected);
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn neighborhood_at_map_corner_skips_off_map_cells() {
        let mut store = TileStore::new();
        store
            .insert(Tile { coord: Coord { row: 0, col: 0 }, terrain: Terrain::Grass })
            .expect("insert");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let created = materialize_neighborhood(
            Coord { row: 0, col: 0 },
            &mut store,
            &GenConfig::default(),
            &mut rng,
        );

        assert_eq!(created.len(), 3);
        assert!(created.iter().all(|tile| tile.coord.on_map()));
    }

    #[test]
    fn unreachable_cells_stay_unmaterialized_without_bias_votes() {
        // Radius 0 and no votes: nothing nearby to sample from.
        let mut store = seeded_store();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = GenConfig { radius: 0, ..GenConfig::default() };
        let far = Coord { row: 50, col: 50 };
        let created = materialize_neighborhood(far, &mut store, &config, &mut rng);
        assert!(created.is_empty());
    }
}
