mod cell;
mod grid;
mod neighbors;
mod rules;

pub use cell::Cell;
pub use grid::{DEFAULT_CELL_OFFSET, Grid, Snapshot};
pub use neighbors::count_neighbors;
pub use rules::{ConwayRule, ElementaryRule30, Rule, RuleKind};
