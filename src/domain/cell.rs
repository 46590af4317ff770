/// Cell is one square of the grid.
/// Its pixel position is fixed when the grid is built; only `filled` changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    x: u32,
    y: u32,
    filled: bool,
}

impl Cell {
    /// Create an unfilled cell with its top-left corner at (x, y)
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y, filled: false }
    }

    pub const fn x(&self) -> u32 {
        self.x
    }

    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Check if the cell is currently filled
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    /// Flip the filled state, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.filled = !self.filled;
        self.filled
    }

    /// Inclusive hit test against the cell box `[x, x+size] x [y, y+size]`
    pub fn contains(&self, px: f32, py: f32, size: u32) -> bool {
        let (left, top) = (self.x as f32, self.y as f32);
        let (right, bottom) = (left + size as f32, top + size as f32);
        px >= left && px <= right && py >= top && py <= bottom
    }
}
