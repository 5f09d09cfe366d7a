use macroquad::prelude::*;
use crate::application::Command;
use crate::domain::{CellView, SimulationEngine, Stats};
use crate::ui::{Button, CELL_SIZE, MARGIN, board_origin};

const LIVE_COLOR: Color = BLACK;
const DEAD_COLOR: Color = WHITE;
const TRACE_COLOR: Color = Color::new(0.82, 0.82, 0.82, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.89, 0.89, 0.89, 1.0);

/// Draw every cell as a square, coloured by its view
pub fn draw_board(engine: &SimulationEngine) {
    let (ox, oy) = board_origin();
    let grid = engine.grid();

    for (index, _) in grid.iter_cells() {
        let (row, col) = grid.coords_of(index);
        let x = ox + col as f32 * CELL_SIZE;
        let y = oy + row as f32 * CELL_SIZE;
        let color = match engine.cell_view(index) {
            Ok(CellView::Live) => LIVE_COLOR,
            Ok(CellView::Trace) => TRACE_COLOR,
            Ok(CellView::Dead) | Err(_) => DEAD_COLOR,
        };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 2.0, GRID_LINE_COLOR);
    }
}

/// Statistics row above the board
pub fn draw_stats(stats: &Stats) {
    let labels = [
        format!("Generation: {}", stats.generation),
        format!("Initial Live Cells: {}", stats.initial_live),
        format!("Current Live Cells: {}", stats.current_live),
        format!("Max Live Cells: {}", stats.max_live),
    ];
    let y = board_origin().1 - 16.0;
    let mut x = MARGIN;
    for label in &labels {
        draw_text(label, x, y, 18.0, DARKGRAY);
        x += measure_text(label, None, 18, 1.0).width + 24.0;
    }
}

pub fn draw_controls(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|(btn, _)| btn.draw(mouse_pos));
}

/// One-line key reference under the stats
pub fn draw_help(still: bool, editable: bool) {
    let text = match (editable, still) {
        (true, _) => "Click: edit | Right: next generation | 1-9: preset | R: random",
        (false, true) => "Still pattern: Restart, Break or New Simulation",
        (false, false) => "Right: next generation",
    };
    draw_text(text, MARGIN, board_origin().1 - 2.0, 14.0, GRAY);
}
