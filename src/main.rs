use macroquad::prelude::*;
use pixel_automaton::{
    EditController, SimConfig, Simulation, Surface, Tick,
    input,
    rendering::{self, MacroquadSurface},
    ui,
};
use tracing::{error, info, warn};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pixel Automaton".to_owned(),
        window_width: 1000,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    // `--enhanced` selects the faster Conway cadence
    let config = if std::env::args().any(|arg| arg == "--enhanced") {
        SimConfig::enhanced()
    } else {
        SimConfig::default()
    };

    let mut surface = MacroquadSurface::fit_to_window();
    let mut sim = match Simulation::new(config, surface.size()) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "Could not create simulation");
            return;
        }
    };
    let mut edit = EditController::new();
    info!("Starting pixel automaton");

    loop {
        let mouse_pos = mouse_position();
        surface.resize_to_window();
        clear_background(ui::GUTTER);

        let buttons = ui::create_buttons(sim.selected_rule());
        let handled = input::process_button_clicks(&mut sim, &buttons, mouse_pos, &mut surface)
            .and_then(|()| input::process_keyboard_input(&mut sim, &mut surface));
        if let Err(err) = handled {
            warn!(%err, "Control ignored");
        }
        input::handle_pointer(&mut edit, &mut sim, mouse_pos);

        match sim.tick(get_frame_time(), &mut surface) {
            // Nothing new to show, but the frame still needs the grid
            Ok(Tick::Waiting) => sim.render(&mut surface),
            Ok(_) => {}
            Err(err) => {
                error!(%err, "Generation failed, stopping");
                sim.stop();
            }
        }

        rendering::draw_controls(&sim, &buttons, mouse_pos);
        next_frame().await;
    }
}
