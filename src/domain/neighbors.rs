use super::Grid;

/// Offsets of the eight adjacent cells (N, S, E, W and the diagonals)
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count filled neighbors of (row, col).
/// Positions outside the grid are absent, so edge cells have fewer candidates.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.is_filled(r, c)
        })
        .filter(|&filled| filled)
        .count() as u8
}
