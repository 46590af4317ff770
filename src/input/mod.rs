use macroquad::prelude::*;
use tracing::debug;

use crate::application::{EditController, Simulation};
use crate::domain::RuleKind;
use crate::error::SimResult;
use crate::rendering::Surface;
use crate::ui::{Button, Control, grid_area_width};

/// Run a panel or keyboard control against the simulation
pub fn apply_control(
    control: Control,
    sim: &mut Simulation,
    surface: &mut dyn Surface,
) -> SimResult<()> {
    debug!(?control, "Control triggered");
    match control {
        Control::Start => sim.start(sim.selected_rule()),
        Control::Stop => sim.stop(),
        Control::Toggle if sim.is_running() => sim.stop(),
        Control::Toggle => sim.start(sim.selected_rule()),
        Control::Step => {
            sim.step(surface)?;
        }
        Control::Reset => sim.reset(surface),
        Control::Randomize => sim.randomize(surface),
        Control::CycleRule => sim.select_rule(sim.selected_rule().next()),
        Control::SelectRule(value) => sim.select_rule(RuleKind::from_selector(value)?),
    }
    Ok(())
}

/// Forward mouse state to the edit controller while the simulation is paused
pub fn handle_pointer(edit: &mut EditController, sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if is_mouse_button_released(MouseButton::Left) {
        edit.pointer_up();
        return;
    }
    if sim.is_running() || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let (px, py) = mouse_pos;
    if is_mouse_button_pressed(MouseButton::Left) {
        edit.pointer_down(sim.grid_mut(), px, py);
    } else if is_mouse_button_down(MouseButton::Left) {
        edit.pointer_move(sim.grid_mut(), px, py);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: &mut Simulation, surface: &mut dyn Surface) -> SimResult<()> {
    const KEYS: [(KeyCode, Control); 6] = [
        (KeyCode::Space, Control::Toggle),
        (KeyCode::S, Control::Step),
        (KeyCode::C, Control::Reset),
        (KeyCode::R, Control::Randomize),
        (KeyCode::Key1, Control::SelectRule(RuleKind::Conway.selector())),
        (KeyCode::Key2, Control::SelectRule(RuleKind::ElementaryRule30.selector())),
    ];

    KEYS.iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .try_for_each(|(_, control)| apply_control(*control, sim, surface))
}

/// Process control panel clicks
pub fn process_button_clicks(
    sim: &mut Simulation,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
    surface: &mut dyn Surface,
) -> SimResult<()> {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .try_for_each(|(control, _)| apply_control(*control, sim, surface))
}
