//! Grid positions and pixel/grid coordinate conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete grid position: `x` is the column, `y` the row.
///
/// Ordered column-first, so iterating a `BTreeMap<Position, _>` walks the
/// board column by column.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// One-cell offset, `None` if it would leave the non-negative quadrant.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Converts between pixel space and grid space for a fixed block size.
///
/// Negative inputs are clamped to 0 before converting, so the results are
/// always valid (if possibly out-of-range) grid or pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMapper {
    block_width: u32,
    block_height: u32,
}

impl CoordinateMapper {
    /// Both extents must be positive; callers normalize before constructing.
    pub const fn new(block_width: u32, block_height: u32) -> Self {
        Self {
            block_width,
            block_height,
        }
    }

    pub fn block_width(&self) -> u32 {
        self.block_width
    }

    pub fn block_height(&self) -> u32 {
        self.block_height
    }

    pub fn vector_x_to_pixel_x(&self, vector_x: i32) -> u32 {
        non_negative(vector_x).saturating_mul(self.block_width)
    }

    pub fn vector_y_to_pixel_y(&self, vector_y: i32) -> u32 {
        non_negative(vector_y).saturating_mul(self.block_height)
    }

    pub fn pixel_x_to_vector_x(&self, pixel_x: i32) -> u32 {
        non_negative(pixel_x) / self.block_width
    }

    pub fn pixel_y_to_vector_y(&self, pixel_y: i32) -> u32 {
        non_negative(pixel_y) / self.block_height
    }

    /// Grid cell containing the given pixel.
    pub fn pixel_to_position(&self, pixel_x: i32, pixel_y: i32) -> Position {
        Position::new(
            self.pixel_x_to_vector_x(pixel_x),
            self.pixel_y_to_vector_y(pixel_y),
        )
    }

    /// Top-left pixel of the given cell.
    pub fn position_to_pixel(&self, position: Position) -> (u32, u32) {
        (
            position.x.saturating_mul(self.block_width),
            position.y.saturating_mul(self.block_height),
        )
    }
}

fn non_negative(value: i32) -> u32 {
    value.max(0).unsigned_abs()
}
