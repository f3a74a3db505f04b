use macroquad::prelude::*;

/// Commands the bottom panel offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Clear,
    Randomize,
    Step,
    Start,
    Stop,
}

impl ButtonAction {
    pub const fn all() -> [ButtonAction; 5] {
        [
            ButtonAction::Clear,
            ButtonAction::Randomize,
            ButtonAction::Step,
            ButtonAction::Start,
            ButtonAction::Stop,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::Clear => "Clear Cells",
            ButtonAction::Randomize => "Random Cells",
            ButtonAction::Step => "Next Step",
            ButtonAction::Start => "Start",
            ButtonAction::Stop => "Stop",
        }
    }
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub const fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text = self.action.label();
        let text_size = measure_text(text, None, 18, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
