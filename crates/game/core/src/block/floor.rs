use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::BlockError;

/// Floor sub-types. The discriminant is the persisted `floorType` value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(into = "u8", try_from = "u8")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FloorKind {
    #[default]
    Grass = 0,
    Sand = 1,
    Dirt = 2,
}

impl FloorKind {
    /// Fixed palette entry for this sub-type.
    pub const fn color(self) -> Color {
        match self {
            FloorKind::Grass => Color::from_rgb8(0, 123, 12),
            FloorKind::Sand => Color::from_rgb8(237, 201, 175),
            FloorKind::Dirt => Color::from_rgb8(120, 72, 0),
        }
    }
}

impl From<FloorKind> for u8 {
    fn from(kind: FloorKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for FloorKind {
    type Error = BlockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FloorKind::Grass),
            1 => Ok(FloorKind::Sand),
            2 => Ok(FloorKind::Dirt),
            other => Err(BlockError::UnknownFloorKind(other)),
        }
    }
}

/// Walkable ground. Its color is always the palette entry of its sub-type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Floor {
    kind: FloorKind,
}

impl Floor {
    pub const fn new(kind: FloorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> FloorKind {
        self.kind
    }

    /// Changes the sub-type, which also changes the color.
    pub fn set_kind(&mut self, kind: FloorKind) {
        self.kind = kind;
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }
}
