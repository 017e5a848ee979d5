//! The hand-authored 3x3 starting map.

use crate::types::{Coord, Terrain, Tile};

/// Default map center, in map coordinates.
pub const SEED_ORIGIN: Coord = Coord { row: 3, col: 3 };

const SEED_LAYOUT: [[Terrain; 3]; 3] = [
    [Terrain::Water, Terrain::Grass, Terrain::Water],
    [Terrain::Grass, Terrain::Grass, Terrain::Grass],
    [Terrain::Mountain, Terrain::Grass, Terrain::Mountain],
];

/// The fixed 3x3 seed block centered on `origin`, row-major. Cells that
/// would fall off the map edge are skipped.
pub fn seed_tiles(origin: Coord) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(9);
    for (row_offset, layout_row) in SEED_LAYOUT.iter().enumerate() {
        for (col_offset, &terrain) in layout_row.iter().enumerate() {
            let coord = Coord {
                row: origin.row + row_offset as i32 - 1,
                col: origin.col + col_offset as i32 - 1,
            };
            if !coord.on_map() {
                continue;
            }
            tiles.push(Tile { coord, terrain });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_block_has_exact_authored_terrain() {
        let origin = Coord { row: 3, col: 3 };
        let tiles = seed_tiles(origin);
        assert_eq!(tiles.len(), 9);

        let at = |row: i32, col: i32| {
            tiles
                .iter()
                .find(|tile| tile.coord == Coord { row, col })
                .map(|tile| tile.terrain)
                .expect("seed tile present")
        };

        assert_eq!(at(2, 2), Terrain::Water);
        assert_eq!(at(2, 3), Terrain::Grass);
        assert_eq!(at(2, 4), Terrain::Water);
        assert_eq!(at(3, 2), Terrain::Grass);
        assert_eq!(at(3, 3), Terrain::Grass);
        assert_eq!(at(3, 4), Terrain::Grass);
        assert_eq!(at(4, 2), Terrain::Mountain);
        assert_eq!(at(4, 3), Terrain::Grass);
        assert_eq!(at(4, 4), Terrain::Mountain);
    }

    #[test]
    fn seed_block_at_map_corner_drops_off_map_cells() {
        let tiles = seed_tiles(Coord { row: 0, col: 0 });
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|tile| tile.coord.on_map()));
    }
}
