use crate::color::Color;
use crate::coords::Position;

/// The mobile actor. Not stored in the grid; the board tracks its position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Player {
    color: Color,
    alternate_color: Color,
    position: Position,
}

impl Player {
    pub fn with_colors(color: Color, alternate_color: Color) -> Self {
        Self {
            color,
            alternate_color,
            position: Position::ORIGIN,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn alternate_color(&self) -> Color {
        self.alternate_color
    }

    pub fn set_alternate_color(&mut self, color: Color) {
        self.alternate_color = color;
    }

    /// Exchanges the primary and alternate colors.
    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.color, &mut self.alternate_color);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn vector_x(&self) -> u32 {
        self.position.x
    }

    pub fn vector_y(&self) -> u32 {
        self.position.y
    }

    /// Negative values clamp to 0.
    pub fn set_vector_x(&mut self, x: i64) {
        self.position.x = clamp_coordinate(x);
    }

    /// Negative values clamp to 0.
    pub fn set_vector_y(&mut self, y: i64) {
        self.position.y = clamp_coordinate(y);
    }
}

fn clamp_coordinate(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
