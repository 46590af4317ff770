// Domain layer - grid, neighbor counting and rules
pub mod domain;

// Application layer - simulation lifecycle and editing
pub mod application;

// Configuration and errors shared by every layer
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Rule, RuleKind, Snapshot};
pub use application::{EditController, PaintMode, RunState, Simulation, Tick};
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use rendering::{CellColor, Region, Surface};
