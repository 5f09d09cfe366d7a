use macroquad::prelude::*;

/// Push button, optionally latched (for on/off settings) and optionally
/// disabled while its action is unavailable.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    enabled: bool,
    latched: Option<bool>,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            enabled: true,
            latched: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button as an on/off toggle in the given state
    pub fn latched(mut self, on: bool) -> Self {
        self.latched = Some(on);
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.enabled, self.latched, self.is_hovered(mouse_pos)) {
            (false, _, _) => Color::from_rgba(90, 90, 90, 255),
            (true, Some(true), _) => Color::from_rgba(40, 150, 90, 255),
            (true, _, true) => Color::from_rgba(100, 149, 237, 255),
            (true, _, false) => Color::from_rgba(70, 130, 180, 255),
        };
        let text_color = if self.enabled { WHITE } else { LIGHTGRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            text_color,
        );
    }

    /// Clicked this frame; disabled buttons never report a click
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
