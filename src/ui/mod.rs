mod button;

pub use button::Button;

use crate::application::Command;
use crate::domain::SimulationEngine;

pub const CELL_SIZE: f32 = 20.0;
pub const MARGIN: f32 = 30.0;
pub const INFO_HEIGHT: f32 = 44.0;
pub const CONTROLS_HEIGHT: f32 = 60.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BUTTON_WIDTH: f32 = 118.0;
pub const BUTTON_GAP: f32 = 12.0;

/// Window size that fits a `rows x cols` board plus info and control rows
pub fn window_size(rows: usize, cols: usize) -> (f32, f32) {
    let board_w = cols as f32 * CELL_SIZE;
    let buttons_w = 5.0 * BUTTON_WIDTH + 4.0 * BUTTON_GAP;
    (
        board_w.max(buttons_w) + 2.0 * MARGIN,
        INFO_HEIGHT + rows as f32 * CELL_SIZE + CONTROLS_HEIGHT,
    )
}

/// Top-left pixel of cell (0, 0)
pub const fn board_origin() -> (f32, f32) {
    (MARGIN, INFO_HEIGHT)
}

/// Board cell under a screen position
pub fn cell_at(pos: (f32, f32), rows: usize, cols: usize) -> Option<(usize, usize)> {
    let (ox, oy) = board_origin();
    let (x, y) = (pos.0 - ox, pos.1 - oy);
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = ((y / CELL_SIZE) as usize, (x / CELL_SIZE) as usize);
    (row < rows && col < cols).then_some((row, col))
}

/// Control-row buttons paired with the command each one issues, enabled
/// according to what the engine currently allows.
pub fn create_buttons(engine: &SimulationEngine) -> Vec<(Button, Command)> {
    let (rows, _) = engine.dimensions();
    let y = INFO_HEIGHT + rows as f32 * CELL_SIZE + (CONTROLS_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let x = |slot: usize| MARGIN + slot as f32 * (BUTTON_WIDTH + BUTTON_GAP);
    let button = |slot: usize, text: &str| Button::new(x(slot), y, BUTTON_WIDTH, BUTTON_HEIGHT, text);
    let editable = engine.is_editable();

    vec![
        (button(0, "New Simulation"), Command::NewSimulation),
        (button(1, "Restart").enabled(!editable), Command::Restart),
        (button(2, "Break").enabled(!editable), Command::Break),
        (
            button(3, "Unbounded").enabled(editable).latched(engine.is_unbounded()),
            Command::SetUnbounded(!engine.is_unbounded()),
        ),
        (
            button(4, "Trajectory").latched(engine.shows_trajectory()),
            Command::SetShowTrajectory(!engine.shows_trajectory()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_board_pixels() {
        let (ox, oy) = board_origin();
        assert_eq!(cell_at((ox + 1.0, oy + 1.0), 20, 32), Some((0, 0)));
        assert_eq!(cell_at((ox + 45.0, oy + 21.0), 20, 32), Some((1, 2)));
        assert_eq!(cell_at((ox - 1.0, oy), 20, 32), None);
        assert_eq!(cell_at((ox + 32.0 * CELL_SIZE + 1.0, oy), 20, 32), None);
    }

    #[test]
    fn test_window_fits_default_board() {
        let (w, h) = window_size(20, 32);
        assert!(w >= 32.0 * CELL_SIZE + 2.0 * MARGIN);
        assert_eq!(h, INFO_HEIGHT + 400.0 + CONTROLS_HEIGHT);
    }
}
