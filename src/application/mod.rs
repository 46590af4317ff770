mod edit;
mod simulation;

pub use edit::{EditController, PaintMode};
pub use simulation::{RunState, Simulation, Tick};
