mod surface;

pub use surface::{CellColor, Region, Surface, render};

#[cfg(test)]
pub(crate) use surface::recording;

use macroquad::prelude::*;

use crate::application::Simulation;
use crate::ui::{self, Button, Control, PANEL_WIDTH};

/// Surface backed by the macroquad window, covering the grid area left of the panel
#[derive(Debug, Clone, Copy)]
pub struct MacroquadSurface {
    width: u32,
    height: u32,
}

impl MacroquadSurface {
    pub fn fit_to_window() -> Self {
        let mut surface = Self { width: 0, height: 0 };
        surface.resize_to_window();
        surface
    }

    /// Track window resizes; the grid itself only follows on reset
    pub fn resize_to_window(&mut self) {
        self.width = ui::grid_area_width() as u32;
        self.height = ui::grid_area_height() as u32;
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, region: Region) {
        draw_rectangle(
            region.x as f32,
            region.y as f32,
            region.width as f32,
            region.height as f32,
            ui::GUTTER,
        );
    }

    fn draw_cell(&mut self, x: u32, y: u32, size: u32, color: CellColor) {
        let fill = match color {
            CellColor::Foreground => ui::FOREGROUND,
            CellColor::Background => ui::BACKGROUND,
        };
        draw_rectangle(x as f32, y as f32, size as f32, size as f32, fill);
    }
}

/// Draw the control panel with buttons and simulation status
pub fn draw_controls(sim: &Simulation, buttons: &[(Control, Button)], mouse_pos: (f32, f32)) {
    let px = ui::panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let (rows, cols) = sim.grid().dimensions();
    let status = if sim.is_running() { "Running" } else { "Paused" };
    let status_color = if sim.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let rule = sim.selected_rule();
    let cadence_ms = sim.config().interval(rule).as_millis();

    let top = 20.0 + buttons.len() as f32 * ui::BUTTON_SPACING + 10.0;
    let labels = [
        (rule.rule().description().to_owned(), 12.0, GRAY),
        (format!("{cadence_ms} ms/gen"), 12.0, GRAY),
        (format!("Grid: {rows}x{cols}"), 14.0, GRAY),
        (format!("Generation: {}", sim.generation()), 16.0, WHITE),
        (format!("Population: {}", sim.grid().population()), 16.0, WHITE),
        (format!("Status: {status}"), 16.0, status_color),
        (String::new(), 8.0, GRAY),
        ("LMB: toggle / drag fill".to_owned(), 12.0, GRAY),
        ("Space: start/stop  S: step".to_owned(), 12.0, GRAY),
        ("R: random  C: reset".to_owned(), 12.0, GRAY),
        ("1/2: Conway / Rule 30".to_owned(), 12.0, GRAY),
    ];

    labels
        .iter()
        .enumerate()
        .for_each(|(idx, (text, size, color))| {
            draw_text(text, px + 8.0, top + idx as f32 * 20.0, *size, *color);
        });
}
