//! Incremental terrain generation: the fixed seed map, neighborhood
//! sampling, and frontier expansion around the explorer.

mod frontier;
mod sampler;
mod seed;

pub use frontier::materialize_neighborhood;
pub use sampler::sample;
pub use seed::{SEED_ORIGIN, seed_tiles};

#[cfg(test)]
mod tests {
    use super::seed_tiles;
    use crate::types::Coord;

    #[test]
    fn seed_map_off_origin_matches_centered_layout() {
        let centered = seed_tiles(Coord { row: 3, col: 3 });
        let shifted = seed_tiles(Coord { row: 10, col: 20 });
        assert_eq!(centered.len(), shifted.len());
        for (a, b) in centered.iter().zip(shifted.iter()) {
            assert_eq!(a.terrain, b.terrain);
            assert_eq!(a.coord.row - 3, b.coord.row - 10);
            assert_eq!(a.coord.col - 3, b.coord.col - 20);
        }
    }
}
