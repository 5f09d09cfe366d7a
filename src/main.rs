use macroquad::prelude::*;
use tracing::{error, info, warn};
use life_board::{BoardConfig, Session, input, rendering, ui};

fn window_conf() -> Conf {
    let config = BoardConfig::default();
    let (width, height) = ui::window_size(config.rows, config.cols);
    Conf {
        window_title: "Brief Simulation: Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
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

    let config = BoardConfig::default();
    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "cannot create board");
            return;
        }
    };
    let (rows, cols) = session.engine().dimensions();
    info!(rows, cols, "board ready");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(session.engine());

        for command in input::collect_commands(&session, &buttons, mouse_pos) {
            if let Err(err) = session.apply(command) {
                warn!(%err, ?command, "command failed");
            }
        }

        let engine = session.engine();
        // rebuilt so enabled/latched states reflect this frame's commands
        let buttons = ui::create_buttons(engine);

        clear_background(WHITE);
        rendering::draw_stats(&engine.stats());
        rendering::draw_help(engine.is_still(), engine.is_editable());
        rendering::draw_board(engine);
        rendering::draw_controls(&buttons, mouse_pos);

        next_frame().await;
    }
}
