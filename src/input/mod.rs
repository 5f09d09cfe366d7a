use macroquad::prelude::*;
use crate::application::{Command, Session};
use crate::ui::{Button, cell_at};

const PRESET_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Left click on the board toggles the cell under the cursor
pub fn cell_click(session: &Session, mouse_pos: (f32, f32)) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    let grid = session.engine().grid();
    let (rows, cols) = grid.dimensions();
    let (row, col) = cell_at(mouse_pos, rows, cols)?;
    grid.index_of(row, col).map(Command::ToggleCell)
}

/// Keyboard commands for this frame
pub fn keyboard_commands(session: &Session) -> Vec<Command> {
    let (rows, cols) = session.engine().dimensions();
    let mut commands = Vec::new();

    if is_key_pressed(KeyCode::Right) {
        commands.push(Command::Advance);
    }
    if is_key_pressed(KeyCode::R) {
        commands.push(Command::Randomize);
    }
    commands.extend(
        PRESET_KEYS
            .iter()
            .enumerate()
            .filter(|&(index, key)| index < session.patterns().len() && is_key_pressed(*key))
            .map(|(index, _)| Command::PlacePattern { index, row: rows / 2, col: cols / 2 }),
    );
    commands
}

/// Command of the clicked button, if any
pub fn button_click(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .find(|(btn, _)| btn.is_clicked(mouse_pos))
        .map(|(_, command)| *command)
}

/// All commands raised this frame, in the order they should be applied
pub fn collect_commands(
    session: &Session,
    buttons: &[(Button, Command)],
    mouse_pos: (f32, f32),
) -> Vec<Command> {
    button_click(buttons, mouse_pos)
        .into_iter()
        .chain(cell_click(session, mouse_pos))
        .chain(keyboard_commands(session))
        .collect()
}
