use crate::color::Color;

/// Impassable block. Walls can be placed, removed, and dragged by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wall {
    color: Color,
}

impl Wall {
    pub fn with_color(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
