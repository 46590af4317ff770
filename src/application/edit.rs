use tracing::trace;

use crate::domain::Grid;

/// How a pointer hit changes a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    /// Pointer pressed: flip the cell
    Click,
    /// Pointer moved while pressed: fill the cell
    Drag,
}

/// EditController turns pointer events into cell edits.
/// Meant for a paused simulation; edits made while running are
/// overwritten by the next committed generation.
#[derive(Debug, Default)]
pub struct EditController {
    dragging: bool,
    last_cell: Option<(usize, usize)>,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply `mode` to every cell whose box contains the pixel (px, py).
    /// Returns the number of cells hit.
    pub fn paint(grid: &mut Grid, px: f32, py: f32, mode: PaintMode) -> usize {
        let size = grid.cell_size();
        let mut hits = 0;
        for cell in grid.cells_mut().filter(|cell| cell.contains(px, py, size)) {
            match mode {
                PaintMode::Click => {
                    cell.toggle();
                }
                PaintMode::Drag => cell.set_filled(true),
            }
            hits += 1;
        }
        if hits > 0 {
            trace!(px, py, ?mode, hits, "Painted cells");
        }
        hits
    }

    /// Grid position of the first cell under the pixel, if any
    pub fn cell_at(grid: &Grid, px: f32, py: f32) -> Option<(usize, usize)> {
        let size = grid.cell_size();
        grid.iter()
            .find(|(_, _, cell)| cell.contains(px, py, size))
            .map(|(row, col, _)| (row, col))
    }

    /// Pointer pressed: toggle the cell under it and begin a drag
    pub fn pointer_down(&mut self, grid: &mut Grid, px: f32, py: f32) -> usize {
        self.dragging = true;
        self.last_cell = Self::cell_at(grid, px, py);
        Self::paint(grid, px, py, PaintMode::Click)
    }

    /// Pointer moved: fill cells while dragging.
    /// The cell toggled by the press is left alone until the pointer leaves it.
    pub fn pointer_move(&mut self, grid: &mut Grid, px: f32, py: f32) -> usize {
        if !self.dragging {
            return 0;
        }
        let cell = Self::cell_at(grid, px, py);
        if cell.is_none() || cell == self.last_cell {
            return 0;
        }
        self.last_cell = cell;
        Self::paint(grid, px, py, PaintMode::Drag)
    }

    /// Pointer released: the drag ends
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.last_cell = None;
    }
}
