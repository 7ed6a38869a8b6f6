//! Occupancy grid: the maze as a rectangular array of wall/path cells.
//!
//! Immutable once generated for an attempt; the only writers are the
//! generator's carve/fill helpers, which are crate-private.

use glam::Vec2;

/// One cell of the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

/// Rectangular wall/path grid with a fixed pixel cell size
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-wall grid sized for the given pixel extent.
    ///
    /// `cols = floor(width / cell_size)`, `rows = floor(height / cell_size)`.
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        let cols = (width as f32 / cell_size).floor() as usize;
        let rows = (height as f32 / cell_size).floor() as usize;
        Self {
            cols,
            rows,
            cell_size,
            cells: vec![Cell::Wall; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Bounds-checked cell lookup
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Map a pixel-space point to its containing cell, `None` if outside the
    /// grid (including negative coordinates).
    pub fn pixel_to_cell(&self, p: Vec2) -> Option<(usize, usize)> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let col = (p.x / self.cell_size).floor() as usize;
        let row = (p.y / self.cell_size).floor() as usize;
        if col < self.cols && row < self.rows {
            Some((col, row))
        } else {
            None
        }
    }

    /// Center of a cell in pixel space
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_size + self.cell_size / 2.0,
            row as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }

    pub(crate) fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = cell;
        }
    }

    pub(crate) fn carve(&mut self, col: usize, row: usize) {
        self.set(col, row, Cell::Path);
    }

    pub(crate) fn fill(&mut self, col: usize, row: usize) {
        self.set(col, row, Cell::Wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_pixels() {
        let grid = Grid::new(300, 450, 6.0);
        assert_eq!(grid.cols(), 50);
        assert_eq!(grid.rows(), 75);
    }

    #[test]
    fn test_get_bounds_checked() {
        let grid = Grid::new(60, 60, 6.0);
        assert_eq!(grid.get(0, 0), Some(Cell::Wall));
        assert_eq!(grid.get(9, 9), Some(Cell::Wall));
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
    }

    #[test]
    fn test_pixel_to_cell_floor_division() {
        let grid = Grid::new(300, 450, 6.0);
        assert_eq!(grid.pixel_to_cell(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(grid.pixel_to_cell(Vec2::new(5.9, 5.9)), Some((0, 0)));
        assert_eq!(grid.pixel_to_cell(Vec2::new(6.0, 6.0)), Some((1, 1)));
        assert_eq!(grid.pixel_to_cell(Vec2::new(150.0, 9.0)), Some((25, 1)));
    }

    #[test]
    fn test_pixel_to_cell_outside() {
        let grid = Grid::new(300, 450, 6.0);
        assert_eq!(grid.pixel_to_cell(Vec2::new(-0.1, 10.0)), None);
        assert_eq!(grid.pixel_to_cell(Vec2::new(10.0, -0.1)), None);
        assert_eq!(grid.pixel_to_cell(Vec2::new(300.0, 10.0)), None);
        assert_eq!(grid.pixel_to_cell(Vec2::new(10.0, 450.0)), None);
    }

    #[test]
    fn test_carve_and_fill() {
        let mut grid = Grid::new(60, 60, 6.0);
        grid.carve(3, 4);
        assert_eq!(grid.get(3, 4), Some(Cell::Path));
        grid.fill(3, 4);
        assert_eq!(grid.get(3, 4), Some(Cell::Wall));
        // Out-of-bounds writes are ignored
        grid.carve(100, 100);
    }
}
