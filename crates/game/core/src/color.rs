//! RGB colors with every channel held in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Three floating-point channels, each clamped into `[0, 1]` on construction.
///
/// There is no way to build a `Color` with an out-of-range channel: the only
/// constructors clamp, and deserialization goes through the same path.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a color, silently clamping each channel into `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Creates a color from 8-bit channels (`value / 255`).
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

/// NaN maps to 0.
fn clamp_channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Unchecked wire shape; converted through [`Color::new`].
#[derive(Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::new(raw.r, raw.g, raw.b)
    }
}
