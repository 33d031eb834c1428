//! Grid geometry
//!
//! The playing field is addressed in whole cells, not pixels. Conversion from
//! a pixel surface happens once at session start.

use glam::IVec2;
use rand::Rng;

use crate::consts::MIN_GRID_CELLS;

/// Playing field dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// Derive the cell grid from a pixel surface. Partial cells at the right
    /// and bottom edges are unused.
    pub fn from_surface(width_px: u32, height_px: u32, cell_px: u32) -> Self {
        let cell_px = cell_px.max(1);
        Self {
            cols: ((width_px / cell_px) as i32).max(MIN_GRID_CELLS),
            rows: ((height_px / cell_px) as i32).max(MIN_GRID_CELLS),
        }
    }

    /// True iff `cell` lies on the board.
    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    /// Center cell, rounded toward the origin on even dimensions.
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.cols / 2, self.rows / 2)
    }

    /// Draw a uniformly random in-bounds cell.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> IVec2 {
        IVec2::new(
            rng.random_range(0..self.cols),
            rng.random_range(0..self.rows),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_from_surface_integer_division() {
        let grid = Grid::from_surface(450, 450, 50);
        assert_eq!(grid.cols, 9);
        assert_eq!(grid.rows, 9);

        // Partial trailing cells are dropped
        let grid = Grid::from_surface(449, 500, 50);
        assert_eq!(grid.cols, 8);
        assert_eq!(grid.rows, 10);
    }

    #[test]
    fn test_from_surface_clamps_tiny_surfaces() {
        let grid = Grid::from_surface(10, 10, 50);
        assert_eq!(grid.cols, MIN_GRID_CELLS);
        assert_eq!(grid.rows, MIN_GRID_CELLS);
    }

    #[test]
    fn test_in_bounds_edges() {
        let grid = Grid::new(5, 4);
        assert!(grid.in_bounds(IVec2::new(0, 0)));
        assert!(grid.in_bounds(IVec2::new(4, 3)));
        assert!(!grid.in_bounds(IVec2::new(5, 0)));
        assert!(!grid.in_bounds(IVec2::new(0, 4)));
        assert!(!grid.in_bounds(IVec2::new(-1, 2)));
        assert!(!grid.in_bounds(IVec2::new(2, -1)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(5, 5).center(), IVec2::new(2, 2));
        assert_eq!(Grid::new(10, 8).center(), IVec2::new(5, 4));
    }

    #[test]
    fn test_random_cell_stays_in_bounds() {
        let grid = Grid::new(7, 3);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            assert!(grid.in_bounds(grid.random_cell(&mut rng)));
        }
    }
}
