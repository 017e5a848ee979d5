//! Neighborhood terrain sampling with user-tunable bias votes.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::RngCore;

use crate::state::TileStore;
use crate::types::{Coord, GenConfig, Terrain};

/// Choose a terrain for a coordinate not yet in the store.
///
/// The pool holds the terrain of every known tile within Manhattan distance
/// `config.radius` of `coord`, plus `config.votes_for(t)` synthetic votes
/// per terrain, and one element is drawn uniformly. Returns `None` when the
/// pool is empty; the caller treats that cell as not yet generatable.
///
/// The injected RNG is the single source of nondeterminism in the engine.
pub fn sample(
    coord: Coord,
    store: &TileStore,
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
) -> Option<Terrain> {
    let mut pool = collect_within_radius(coord, config.radius, store);

    for terrain in Terrain::ALL {
        for _ in 0..config.votes_for(terrain) {
            pool.push(terrain);
        }
    }

    if pool.is_empty() {
        return None;
    }

    let index = rng.next_u64() as usize % pool.len();
    Some(pool[index])
}

/// Walk the Manhattan diamond around `coord` instead of scanning the whole
/// store, so a sample stays O(radius^2) as the map grows.
fn collect_within_radius(coord: Coord, radius: u32, store: &TileStore) -> Vec<Terrain> {
    let radius = radius as i32;
    let mut found = Vec::new();
    for row_offset in -radius..=radius {
        let remaining = radius - row_offset.abs();
        for col_offset in -remaining..=remaining {
            let probe = Coord { row: coord.row + row_offset, col: coord.col + col_offset };
            if let Some(terrain) = store.get(probe) {
                found.push(terrain);
            }
        }
    }
    found
}
