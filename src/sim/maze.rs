//! Maze generation
//!
//! Produces a full grid plus start/end positions for an attempt. Two
//! strategies, selectable as configuration:
//!
//! - `Banded`: deterministic funnel of three corridors of decreasing width,
//!   with fixed obstacles punched in at set offsets. The final obstacle's row
//!   is recorded so the session can fire the finale trigger mid-traversal.
//! - `Leveled`: one pattern per level (sparse blocks, seeded scatter, random
//!   walk), with a Bernoulli fallback for anything past the defined levels.
//!
//! Invariant held by every strategy: the start and end cells and their
//! immediate horizontal neighbors are force-cleared after the main carve, and
//! obstacles never touch the outer border ring.

use glam::Vec2;
use rand::Rng;

use super::grid::Grid;

/// Which generation strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeStyle {
    /// Fixed three-band funnel (the primary variant)
    Banded,
    /// Per-level patterns, widening difficulty with the level counter
    Leveled,
}

/// A generated maze: grid plus the fixed attempt geometry
#[derive(Debug, Clone)]
pub struct MazeLayout {
    pub grid: Grid,
    /// Player spawn, centered on the horizontal midline at row 1
    pub start: Vec2,
    /// Goal, centered on the horizontal midline at row rows-2
    pub end: Vec2,
    /// Top row of the last banded obstacle, if the strategy placed one.
    /// Crossing its vertical midpoint counts as a win (finale trigger).
    pub finale_row: Option<usize>,
}

/// Generate a maze for the given pixel extent.
///
/// `level` only matters for [`MazeStyle::Leveled`]; the banded strategy is
/// fully deterministic and ignores both `level` and `rng`.
pub fn generate<R: Rng>(
    style: MazeStyle,
    level: u32,
    width: u32,
    height: u32,
    cell_size: f32,
    rng: &mut R,
) -> MazeLayout {
    let mut grid = Grid::new(width, height, cell_size);

    let finale_row = match style {
        MazeStyle::Banded => carve_banded(&mut grid),
        MazeStyle::Leveled => {
            match level {
                1 => carve_sparse_blocks(&mut grid),
                2 => carve_scatter(&mut grid, rng),
                3 => carve_random_walk(&mut grid, rng),
                _ => carve_bernoulli(&mut grid, rng),
            }
            None
        }
    };

    let (start, end) = clear_start_and_end(&mut grid, width);

    MazeLayout {
        grid,
        start,
        end,
        finale_row,
    }
}

/// Three-band funnel: corridor half-widths 6 / 3 / 1 around the center
/// column, then three fixed obstacles, one per band.
fn carve_banded(grid: &mut Grid) -> Option<usize> {
    let cols = grid.cols();
    let rows = grid.rows();
    let mid = cols / 2;

    let band1 = rows / 3;
    let band2 = rows * 2 / 3;

    carve_corridor(grid, 1..band1, mid, 6);
    carve_corridor(grid, band1..band2, mid, 3);
    carve_corridor(grid, band2..rows - 1, mid, 1);

    // Band 1: a short block at the center column
    let o1 = (band1 as f32 * 0.7).floor() as usize;
    for col in mid..=cols / 2 {
        for row in o1..=o1 + 2 {
            fill_interior(grid, col, row);
        }
    }

    // Band 2: 3x2 block with the side channels re-opened so the corridor
    // stays connected on both flanks
    let o2 = band1 + ((band2 - band1) as f32 * 0.5).floor() as usize;
    for col in mid - 1..=mid + 1 {
        for row in o2..=o2 + 1 {
            fill_interior(grid, col, row);
        }
    }
    for row in [o2, o2 + 1] {
        grid.carve(mid - 2, row);
        grid.carve(mid + 2, row);
    }

    // Band 3: three-row plug in the narrow passage, both side columns forced
    // open. Its row doubles as the finale trigger.
    let o3 = band2 + ((rows - band2) as f32 * 0.6).floor() as usize;
    if o3 >= 1 && o3 < rows - 5 {
        for row in o3..=o3 + 2 {
            grid.fill(mid, row);
            grid.carve(mid - 1, row);
            grid.carve(mid + 1, row);
        }
        return Some(o3);
    }

    None
}

/// Carve a centered corridor of the given half-width over a row range
fn carve_corridor(grid: &mut Grid, rows: std::ops::Range<usize>, mid: usize, half_width: isize) {
    let cols = grid.cols();
    for row in rows {
        for dx in -half_width..=half_width {
            let col = mid as isize + dx;
            if col >= 1 && (col as usize) < cols - 1 {
                grid.carve(col as usize, row);
            }
        }
    }
}

/// Set a wall cell, clamped to the interior so the border ring stays intact
fn fill_interior(grid: &mut Grid, col: usize, row: usize) {
    if col >= 1 && col < grid.cols() - 1 && row >= 1 && row < grid.rows() - 1 {
        grid.fill(col, row);
    }
}

/// Open the whole interior
fn open_interior(grid: &mut Grid) {
    for row in 1..grid.rows() - 1 {
        for col in 1..grid.cols() - 1 {
            grid.carve(col, row);
        }
    }
}

/// True if the column sits within one column of the center line, which must
/// stay clear so the start-to-end spine is never blocked
fn near_center(grid: &Grid, col: usize) -> bool {
    let mid = grid.cols() / 2;
    col.abs_diff(mid) <= 1
}

/// Level 1: open interior with sparse deterministic 2x2 blocks
fn carve_sparse_blocks(grid: &mut Grid) {
    open_interior(grid);

    let cols = grid.cols();
    let rows = grid.rows();
    for row in (4..rows - 2).step_by(8) {
        for col in (3..cols - 2).step_by(10) {
            if near_center(grid, col) || near_center(grid, col + 1) {
                continue;
            }
            for r in row..row + 2 {
                for c in col..col + 2 {
                    fill_interior(grid, c, r);
                }
            }
        }
    }
}

/// Level 2: open interior with seeded scatter walls, filtered by the center
/// exclusion and a modulus pattern
fn carve_scatter<R: Rng>(grid: &mut Grid, rng: &mut R) {
    open_interior(grid);

    for row in 1..grid.rows() - 1 {
        for col in 1..grid.cols() - 1 {
            if near_center(grid, col) {
                continue;
            }
            if (col + row) % 3 == 0 && rng.random_bool(0.3) {
                grid.fill(col, row);
            }
        }
    }
}

/// Probability of stepping backward (left/up) once off the first row/column
const WALK_BACKSTEP_PROB: f64 = 0.12;

/// Level 3: randomized walk from the top-left corner, carving a single-cell
/// path until both axes reach the far edge. Biased toward right/down so the
/// walk always terminates; left/up appear with fixed low probability.
fn carve_random_walk<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let cols = grid.cols();
    let rows = grid.rows();

    let (mut col, mut row) = (1usize, 1usize);
    grid.carve(col, row);

    while col < cols - 2 || row < rows - 2 {
        let mut moves: Vec<(isize, isize)> = Vec::with_capacity(4);
        if col < cols - 2 {
            moves.push((1, 0));
        }
        if row < rows - 2 {
            moves.push((0, 1));
        }
        if col > 1 && rng.random_bool(WALK_BACKSTEP_PROB) {
            moves.push((-1, 0));
        }
        if row > 1 && rng.random_bool(WALK_BACKSTEP_PROB) {
            moves.push((0, -1));
        }

        let (dc, dr) = moves[rng.random_range(0..moves.len())];
        col = (col as isize + dc) as usize;
        row = (row as isize + dr) as usize;
        grid.carve(col, row);
    }
}

/// Fallback for undefined levels: independent Bernoulli cells, 0.7 open
fn carve_bernoulli<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for row in 1..grid.rows() - 1 {
        for col in 1..grid.cols() - 1 {
            if rng.random_bool(0.7) {
                grid.carve(col, row);
            }
        }
    }
}

/// Force-clear the start and end cells plus their horizontal neighbors,
/// overriding any obstacle the strategy placed there, and compute the fixed
/// start/end positions on the horizontal midline.
fn clear_start_and_end(grid: &mut Grid, width: u32) -> (Vec2, Vec2) {
    let cols = grid.cols();
    let rows = grid.rows();
    let cs = grid.cell_size();

    let center_x = width as f32 / 2.0;
    let center_col = (center_x / cs).floor() as usize;

    for row in [1, rows - 2] {
        grid.carve(center_col, row);
        if center_col > 0 {
            grid.carve(center_col - 1, row);
        }
        if center_col < cols - 1 {
            grid.carve(center_col + 1, row);
        }
    }

    let start = Vec2::new(center_x, cs + cs / 2.0);
    let end = Vec2::new(center_x, (rows - 2) as f32 * cs + cs / 2.0);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_SIZE;
    use crate::sim::grid::Cell;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn layout(style: MazeStyle, level: u32, seed: u64) -> MazeLayout {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate(style, level, 300, 450, CELL_SIZE, &mut rng)
    }

    fn assert_start_end_clear(layout: &MazeLayout) {
        let grid = &layout.grid;
        let center_col = grid.cols() / 2;
        for row in [1, grid.rows() - 2] {
            for col in [center_col - 1, center_col, center_col + 1] {
                assert_eq!(
                    grid.get(col, row),
                    Some(Cell::Path),
                    "cell ({col},{row}) must be clear"
                );
            }
        }
    }

    fn assert_border_walls(layout: &MazeLayout) {
        let grid = &layout.grid;
        for col in 0..grid.cols() {
            assert_eq!(grid.get(col, 0), Some(Cell::Wall));
            assert_eq!(grid.get(col, grid.rows() - 1), Some(Cell::Wall));
        }
        for row in 0..grid.rows() {
            assert_eq!(grid.get(0, row), Some(Cell::Wall));
            assert_eq!(grid.get(grid.cols() - 1, row), Some(Cell::Wall));
        }
    }

    #[test]
    fn test_banded_dimensions() {
        let l = layout(MazeStyle::Banded, 1, 0);
        assert_eq!(l.grid.cols(), 50);
        assert_eq!(l.grid.rows(), 75);
    }

    #[test]
    fn test_banded_start_end_positions() {
        let l = layout(MazeStyle::Banded, 1, 0);
        assert_eq!(l.start, Vec2::new(150.0, 9.0));
        assert_eq!(l.end, Vec2::new(150.0, 441.0));
    }

    #[test]
    fn test_banded_records_finale_row() {
        let l = layout(MazeStyle::Banded, 1, 0);
        // band2 = 50, offset floor(25 * 0.6) = 15
        assert_eq!(l.finale_row, Some(65));
    }

    #[test]
    fn test_banded_finale_obstacle_has_side_channels() {
        let l = layout(MazeStyle::Banded, 1, 0);
        let mid = l.grid.cols() / 2;
        let row = l.finale_row.unwrap();
        for r in row..=row + 2 {
            assert_eq!(l.grid.get(mid, r), Some(Cell::Wall));
            assert_eq!(l.grid.get(mid - 1, r), Some(Cell::Path));
            assert_eq!(l.grid.get(mid + 1, r), Some(Cell::Path));
        }
    }

    #[test]
    fn test_banded_funnel_narrows() {
        let l = layout(MazeStyle::Banded, 1, 0);
        let mid = l.grid.cols() / 2;
        // Wide band: +/-6 open at row 5
        assert_eq!(l.grid.get(mid - 6, 5), Some(Cell::Path));
        assert_eq!(l.grid.get(mid - 7, 5), Some(Cell::Wall));
        // Narrow band: +/-1 open at row 55
        assert_eq!(l.grid.get(mid - 1, 55), Some(Cell::Path));
        assert_eq!(l.grid.get(mid - 2, 55), Some(Cell::Wall));
    }

    #[test]
    fn test_leveled_patterns_differ() {
        let l1 = layout(MazeStyle::Leveled, 1, 42);
        let l2 = layout(MazeStyle::Leveled, 2, 42);
        let differing = (0..l1.grid.rows())
            .flat_map(|r| (0..l1.grid.cols()).map(move |c| (c, r)))
            .filter(|&(c, r)| l1.grid.get(c, r) != l2.grid.get(c, r))
            .count();
        assert!(differing > 0, "level patterns must differ");
    }

    #[test]
    fn test_leveled_sparse_blocks_avoid_center() {
        let l = layout(MazeStyle::Leveled, 1, 0);
        let mid = l.grid.cols() / 2;
        for row in 1..l.grid.rows() - 1 {
            for col in mid - 1..=mid + 1 {
                assert_eq!(l.grid.get(col, row), Some(Cell::Path));
            }
        }
    }

    #[test]
    fn test_random_walk_reaches_far_corner() {
        let l = layout(MazeStyle::Leveled, 3, 7);
        let (c, r) = (l.grid.cols() - 2, l.grid.rows() - 2);
        assert_eq!(l.grid.get(c, r), Some(Cell::Path));
        assert_eq!(l.grid.get(1, 1), Some(Cell::Path));
    }

    #[test]
    fn test_random_walk_deterministic_per_seed() {
        let a = layout(MazeStyle::Leveled, 3, 99);
        let b = layout(MazeStyle::Leveled, 3, 99);
        for row in 0..a.grid.rows() {
            for col in 0..a.grid.cols() {
                assert_eq!(a.grid.get(col, row), b.grid.get(col, row));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_start_end_always_clear(seed: u64, level in 1u32..=5) {
            for style in [MazeStyle::Banded, MazeStyle::Leveled] {
                let l = layout(style, level, seed);
                assert_start_end_clear(&l);
            }
        }

        #[test]
        fn prop_border_ring_stays_wall(seed: u64, level in 1u32..=5) {
            for style in [MazeStyle::Banded, MazeStyle::Leveled] {
                let l = layout(style, level, seed);
                assert_border_walls(&l);
            }
        }
    }
}
