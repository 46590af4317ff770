//! Drawing target abstraction.
//!
//! The engine only ever clears the surface and paints cell squares, so any
//! raster backend (macroquad in the binary, a recorder in tests) can host it.

use crate::domain::Grid;

/// Rectangular pixel area of a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Paint used for a cell square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    /// Filled cells
    Foreground,
    /// Unfilled cells
    Background,
}

impl CellColor {
    pub const fn for_state(filled: bool) -> Self {
        if filled {
            CellColor::Foreground
        } else {
            CellColor::Background
        }
    }
}

pub trait Surface {
    /// Pixel size of the drawable area as (width, height)
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, region: Region);

    fn draw_cell(&mut self, x: u32, y: u32, size: u32, color: CellColor);
}

/// Clear the whole surface and draw every cell of the grid
pub fn render(grid: &Grid, surface: &mut dyn Surface) {
    let (width, height) = surface.size();
    surface.clear(Region::full(width, height));

    let size = grid.cell_size();
    for (_, _, cell) in grid.iter() {
        surface.draw_cell(cell.x(), cell.y(), size, CellColor::for_state(cell.is_filled()));
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;

    #[test]
    fn test_render_draws_every_cell() {
        let mut grid = Grid::new(2, 3, 20);
        grid.set_filled(1, 2, true).unwrap();
        let mut surface = RecordingSurface::new(100, 100);

        render(&grid, &mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.frame.len(), 6);
        assert_eq!(surface.foreground_cells(), 1);
        assert!(surface.frame.contains(&(43, 22, 20, CellColor::Foreground)));
        assert!(surface.frame.contains(&(1, 1, 20, CellColor::Background)));
    }

    #[test]
    fn test_render_empty_grid_only_clears() {
        let grid = Grid::new(0, 0, 20);
        let mut surface = RecordingSurface::new(0, 0);
        render(&grid, &mut surface);
        assert_eq!(surface.clears, 1);
        assert!(surface.frame.is_empty());
    }
}
