//! Tile and actor types.
//!
//! A [`Block`] is the content of one cell (a [`Floor`] or a [`Wall`]) or the
//! mobile [`Player`]. Every variant shares the same capabilities: a color, a
//! walkability check, a stable [`BlockKind`] tag, and conversion to and from
//! the persisted [`BlockRecord`]. Dispatch is a plain `match` on the variant.

mod floor;
mod player;
mod wall;

pub use floor::{Floor, FloorKind};
pub use player::Player;
pub use wall::Wall;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::BlockError;

/// Stable type tag. The discriminant is the persisted `type` value.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(into = "u8", try_from = "u8")]
#[strum(serialize_all = "snake_case")]
pub enum BlockKind {
    Player = 1,
    Floor = 2,
    Wall = 3,
}

impl From<BlockKind> for u8 {
    fn from(kind: BlockKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for BlockKind {
    type Error = BlockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BlockKind::Player),
            2 => Ok(BlockKind::Floor),
            3 => Ok(BlockKind::Wall),
            other => Err(BlockError::UnknownKind(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Block {
    Floor(Floor),
    Wall(Wall),
    Player(Player),
}

impl Block {
    pub fn floor(kind: FloorKind) -> Self {
        Block::Floor(Floor::new(kind))
    }

    pub fn wall() -> Self {
        Block::Wall(Wall::default())
    }

    /// Whether another actor can stand on this block.
    pub fn is_walkable(&self) -> bool {
        match self {
            Block::Floor(_) => true,
            Block::Wall(_) | Block::Player(_) => false,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Floor(_) => BlockKind::Floor,
            Block::Wall(_) => BlockKind::Wall,
            Block::Player(_) => BlockKind::Player,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Block::Wall(_))
    }

    pub fn color(&self) -> Color {
        match self {
            Block::Floor(floor) => floor.color(),
            Block::Wall(wall) => wall.color(),
            Block::Player(player) => player.color(),
        }
    }

    /// Sets the color. A floor's color follows its sub-type, so this is
    /// ignored for floors; use [`Floor::set_kind`] instead.
    pub fn set_color(&mut self, color: Color) {
        match self {
            Block::Floor(_) => {}
            Block::Wall(wall) => wall.set_color(color),
            Block::Player(player) => player.set_color(color),
        }
    }

    pub fn as_floor_mut(&mut self) -> Option<&mut Floor> {
        match self {
            Block::Floor(floor) => Some(floor),
            _ => None,
        }
    }

    pub fn to_record(&self) -> BlockRecord {
        let mut record = BlockRecord::new(self.color(), self.kind());
        match self {
            Block::Floor(floor) => record.floor_type = Some(floor.kind()),
            Block::Wall(_) => {}
            Block::Player(player) => {
                record.alternate_color = Some(player.alternate_color());
                record.vector_x = Some(i64::from(player.vector_x()));
                record.vector_y = Some(i64::from(player.vector_y()));
            }
        }
        record
    }

    /// Rebuilds a block from its record.
    ///
    /// Variant-specific fields are required. A floor's color always comes from
    /// its `floorType`, whatever the record's `color` says.
    pub fn from_record(record: &BlockRecord) -> Result<Self, BlockError> {
        let missing = |field| BlockError::MissingField {
            kind: record.kind,
            field,
        };

        match record.kind {
            BlockKind::Floor => {
                let kind = record.floor_type.ok_or_else(|| missing("floorType"))?;
                Ok(Block::floor(kind))
            }
            BlockKind::Wall => Ok(Block::Wall(Wall::with_color(record.color))),
            BlockKind::Player => {
                let alternate = record
                    .alternate_color
                    .ok_or_else(|| missing("alternateColor"))?;
                let x = record.vector_x.ok_or_else(|| missing("vectorX"))?;
                let y = record.vector_y.ok_or_else(|| missing("vectorY"))?;

                let mut player = Player::with_colors(record.color, alternate);
                player.set_vector_x(x);
                player.set_vector_y(y);
                Ok(Block::Player(player))
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // A record of plain numbers and options always encodes.
        serde_json::to_value(self.to_record()).unwrap_or_default()
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, BlockError> {
        let record = BlockRecord::deserialize(value)?;
        Self::from_record(&record)
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::Floor(Floor::default())
    }
}

/// Persisted shape of a block: `color` and `type`, plus `floorType` for
/// floors and `alternateColor`, `vectorX`, `vectorY` for the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_type: Option<FloorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_y: Option<i64>,
}

impl BlockRecord {
    pub fn new(color: Color, kind: BlockKind) -> Self {
        Self {
            color,
            kind,
            floor_type: None,
            alternate_color: None,
            vector_x: None,
            vector_y: None,
        }
    }
}
