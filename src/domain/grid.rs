use rand::Rng;

use super::Cell;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};

/// Pixel offset of the first row and column used by `Grid::new`.
pub const DEFAULT_CELL_OFFSET: u32 = 1;

/// Grid owns the 2D cell array and the cell geometry.
/// Dimensions are fixed at construction; a reset builds a new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: u32,
    cells: Vec<Cell>,
}

/// Next-generation states, same shape as the grid it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    states: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn from_parts(rows: usize, cols: usize, states: Vec<bool>) -> Self {
        debug_assert_eq!(states.len(), rows * cols);
        Self { rows, cols, states }
    }

    /// Build a snapshot from equal-length rows
    pub fn from_rows(rows: &[Vec<bool>]) -> SimResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(SimError::ShapeMismatch {
                expected: (rows.len(), cols),
                found: (rows.len(), bad.len()),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            states: rows.concat(),
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State at (row, col); out-of-range positions read as unfilled
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.states[row * self.cols + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.states.chunks(self.cols.max(1))
    }

    pub fn count_filled(&self) -> usize {
        self.states.iter().filter(|&&s| s).count()
    }
}

impl Grid {
    /// Create a grid with all cells unfilled, laid out from the default offset
    pub fn new(rows: usize, cols: usize, cell_size: u32) -> Self {
        Self::with_geometry(rows, cols, cell_size, DEFAULT_CELL_OFFSET)
    }

    /// Create a grid with explicit geometry.
    /// Cell (i, j) sits at `(j*(cell_size+1)+offset, i*(cell_size+1)+offset)`;
    /// coordinates past `u32::MAX` saturate there.
    pub fn with_geometry(rows: usize, cols: usize, cell_size: u32, offset: u32) -> Self {
        let stride = cell_size.saturating_add(1);
        let cells = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| Cell::new(origin(j, stride, offset), origin(i, stride, offset)))
            .collect();

        Self {
            rows,
            cols,
            cell_size,
            cells,
        }
    }

    /// Size a grid to cover a `width x height` pixel surface
    pub fn for_surface(width: u32, height: u32, config: &SimConfig) -> Self {
        let stride = config.cell_stride();
        let rows = cells_along(height, config.cell_offset, stride);
        let cols = cells_along(width, config.cell_offset, stride);
        Self::with_geometry(rows, cols, config.cell_size, config.cell_offset)
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, row: usize, col: usize) -> SimResult<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(SimError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> SimResult<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> SimResult<&mut Cell> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Filled state at (row, col), or `None` outside the grid
    pub fn is_filled(&self, row: usize, col: usize) -> Option<bool> {
        self.get(row, col).ok().map(Cell::is_filled)
    }

    pub fn set_filled(&mut self, row: usize, col: usize, filled: bool) -> SimResult<()> {
        self.get_mut(row, col)?.set_filled(filled);
        Ok(())
    }

    /// Replace every cell's state with the snapshot's in a single pass
    pub fn commit(&mut self, snapshot: &Snapshot) -> SimResult<()> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(SimError::ShapeMismatch {
                expected: self.dimensions(),
                found: snapshot.dimensions(),
            });
        }
        self.cells
            .iter_mut()
            .zip(&snapshot.states)
            .for_each(|(cell, &filled)| cell.set_filled(filled));
        Ok(())
    }

    /// Current states as a snapshot
    pub fn states(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            cols: self.cols,
            states: self.cells.iter().map(Cell::is_filled).collect(),
        }
    }

    /// Set every cell to unfilled
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_filled(false));
    }

    /// Fill each cell independently with the given probability
    pub fn randomize(&mut self, probability: f64) {
        self.randomize_with(probability, &mut rand::rng());
    }

    /// NaN counts as 0; everything else is clamped into [0, 1]
    pub fn randomize_with<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_filled(rng.random_bool(p)));
    }

    /// Number of filled cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / self.cols, idx % self.cols, cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }
}

/// Pixel origin of the `index`-th row or column
fn origin(index: usize, stride: u32, offset: u32) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|k| k.checked_mul(stride))
        .and_then(|px| px.checked_add(offset))
        .unwrap_or(u32::MAX)
}

/// Count cell origins `offset + k*stride` that fall strictly inside `pixels`
fn cells_along(pixels: u32, offset: u32, stride: u32) -> usize {
    if pixels <= offset {
        return 0;
    }
    ((pixels - offset).div_ceil(stride)) as usize
}
