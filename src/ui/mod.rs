mod button;

pub use button::Button;

// UI constants - functions where they depend on the window size
use macroquad::prelude::{Color, screen_height, screen_width};

use crate::domain::RuleKind;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_SPACING: f32 = 46.0;

/// Filled cells
pub const FOREGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// Unfilled cells
pub const BACKGROUND: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Gaps between cells and everything outside the grid
pub const GUTTER: Color = Color::new(0.78, 0.78, 0.78, 1.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Actions a control-panel button or key can trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
    /// Start when idle, stop when running
    Toggle,
    Step,
    Reset,
    Randomize,
    /// Switch the selector to the other rule
    CycleRule,
    /// Select a rule by selector value (0 = Conway, 1 = Rule 30)
    SelectRule(usize),
}

/// Create the control panel buttons, top to bottom
pub fn create_buttons(selected: RuleKind) -> Vec<(Control, Button)> {
    let px = panel_x();
    let labels = [
        (Control::CycleRule, format!("Rule: {selected}")),
        (Control::Start, "Start".to_owned()),
        (Control::Stop, "Stop".to_owned()),
        (Control::Step, "Step".to_owned()),
        (Control::Randomize, "Random".to_owned()),
        (Control::Reset, "Reset".to_owned()),
    ];

    labels
        .into_iter()
        .enumerate()
        .map(|(idx, (control, label))| {
            let y = 20.0 + idx as f32 * BUTTON_SPACING;
            (control, Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label))
        })
        .collect()
}
