use thiserror::Error;

/// Errors raised by the simulation engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A cell index outside the grid extents.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Rule selector value with no matching rule.
    #[error("rule selector {0} does not name a rule")]
    InvalidRuleSelection(usize),
    /// A snapshot whose shape differs from the grid it is committed into.
    #[error("snapshot is {found:?} but the grid is {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
