//! Save-file format and file I/O for [`GameBoard`].
//!
//! A save holds only what cannot be regenerated: dimensions, seed, wall
//! probability, the player, and the change overlay. Loading rebuilds the grid
//! from those, so `load(save(board))` reproduces the board cell for cell.
//!
//! # Partial loads
//!
//! Sections are applied independently, in this order:
//! dimensions, seed, wall probability, player, changes. A rejected section
//! leaves its fields at their pre-load values and the remaining sections are
//! still applied, so a damaged file can leave the board in a mixed state. In
//! the `changes` list the first malformed entry stops the loop; entries
//! before it stay in the overlay.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::{Block, BlockKind, BlockRecord};
use crate::board::GameBoard;
use crate::config::BoardConfig;
use crate::coords::{CoordinateMapper, Position};
use crate::error::{LoadError, SaveError, SaveSection, SectionError};

/// Top-level save record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
    pub num_blocks_wide: u32,
    pub num_blocks_high: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub seed: u32,
    pub percent_wall: f64,
    pub player: BlockRecord,
    pub changes: Vec<ChangeRecord>,
}

/// One overlay entry: a block record plus its cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub column: u32,
    pub row: u32,
    #[serde(flatten)]
    pub block: BlockRecord,
}

type JsonObject = serde_json::Map<String, Value>;

type SectionLoader = fn(&mut GameBoard, &JsonObject) -> Result<(), SectionError>;

impl GameBoard {
    /// Captures the persisted part of the board.
    pub fn to_save_file(&self) -> SaveFile {
        SaveFile {
            num_blocks_wide: self.num_blocks_wide,
            num_blocks_high: self.num_blocks_high,
            block_width: self.block_width(),
            block_height: self.block_height(),
            seed: self.seed,
            percent_wall: self.wall_probability,
            player: Block::Player(self.player).to_record(),
            changes: self
                .changes()
                .map(|(position, block)| ChangeRecord {
                    column: position.x,
                    row: position.y,
                    block: block.to_record(),
                })
                .collect(),
        }
    }

    /// Writes the board to `path` as pretty-printed JSON.
    ///
    /// The file is written next to its destination and renamed into place, so
    /// a failed save leaves any previous file intact. In-memory state is never
    /// modified.
    pub fn save_game(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.to_save_file())?;

        let mut temp_path = path.as_os_str().to_owned();
        temp_path.push(".tmp");

        let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(SaveError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        tracing::info!(path = %path.display(), changes = self.overlay.len(), "saved game");
        Ok(())
    }

    /// Loads the board from `path`.
    ///
    /// If the file cannot be read or is not a JSON object the board is left
    /// untouched. Otherwise every section is attempted; see the module docs
    /// for what a [`LoadError::Sections`] leaves behind.
    pub fn load_game(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text)?;

        self.apply_save_value(&value)?;

        tracing::info!(path = %path.display(), changes = self.overlay.len(), "loaded game");
        Ok(())
    }

    /// Applies a parsed save record section by section, then regenerates.
    pub fn apply_save_value(&mut self, value: &Value) -> Result<(), LoadError> {
        let root = value.as_object().ok_or(LoadError::NotAnObject)?;
        let mut errors = Vec::new();

        let sections: [(SaveSection, SectionLoader); 5] = [
            (SaveSection::Dimensions, GameBoard::load_dimensions),
            (SaveSection::Seed, GameBoard::load_seed),
            (SaveSection::WallProbability, GameBoard::load_wall_probability),
            (SaveSection::Player, GameBoard::load_player),
            (SaveSection::Changes, GameBoard::load_changes),
        ];

        for (section, load) in sections {
            if let Err(error) = load(self, root) {
                tracing::warn!(%section, reason = %error.reason, "save section rejected");
                errors.push(error);
            }
        }

        self.clamp_player();
        self.regenerate();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(LoadError::Sections(errors))
        }
    }

    fn load_dimensions(&mut self, root: &JsonObject) -> Result<(), SectionError> {
        let section = SaveSection::Dimensions;
        let wide = field::<i64>(root, "numBlocksWide", section)?;
        let high = field::<i64>(root, "numBlocksHigh", section)?;
        let block_width = field::<i64>(root, "blockWidth", section)?;
        let block_height = field::<i64>(root, "blockHeight", section)?;

        let wide = BoardConfig::normalize_extent(wide, BoardConfig::DEFAULT_NUM_BLOCKS_WIDE);
        let high = BoardConfig::normalize_extent(high, BoardConfig::DEFAULT_NUM_BLOCKS_HIGH);
        if !BoardConfig::grid_fits(wide, high) {
            return Err(SectionError::new(
                section,
                format!(
                    "{wide}x{high} exceeds the limit of {} cells",
                    BoardConfig::MAX_CELLS
                ),
            ));
        }

        self.num_blocks_wide = wide;
        self.num_blocks_high = high;
        self.mapper = CoordinateMapper::new(
            BoardConfig::normalize_extent(block_width, BoardConfig::DEFAULT_BLOCK_WIDTH),
            BoardConfig::normalize_extent(block_height, BoardConfig::DEFAULT_BLOCK_HEIGHT),
        );
        Ok(())
    }

    fn load_seed(&mut self, root: &JsonObject) -> Result<(), SectionError> {
        self.seed = field::<u32>(root, "seed", SaveSection::Seed)?;
        Ok(())
    }

    fn load_wall_probability(&mut self, root: &JsonObject) -> Result<(), SectionError> {
        let value = field::<f64>(root, "percentWall", SaveSection::WallProbability)?;
        self.wall_probability = BoardConfig::normalize_wall_probability(Some(value));
        Ok(())
    }

    fn load_player(&mut self, root: &JsonObject) -> Result<(), SectionError> {
        let value = root
            .get("player")
            .ok_or_else(|| SectionError::new(SaveSection::Player, "missing `player`"))?;

        // The player record may omit its type tag.
        let mut value = value.clone();
        if let Some(object) = value.as_object_mut() {
            object
                .entry("type")
                .or_insert_with(|| Value::from(u8::from(BlockKind::Player)));
        }

        match Block::from_json(&value) {
            Ok(Block::Player(player)) => {
                self.player = player;
                Ok(())
            }
            Ok(other) => Err(SectionError::new(
                SaveSection::Player,
                format!("expected a player record, found {}", other.kind()),
            )),
            Err(e) => Err(SectionError::new(SaveSection::Player, e.to_string())),
        }
    }

    fn load_changes(&mut self, root: &JsonObject) -> Result<(), SectionError> {
        let entries = root
            .get("changes")
            .ok_or_else(|| SectionError::new(SaveSection::Changes, "missing `changes`"))?
            .as_array()
            .ok_or_else(|| SectionError::new(SaveSection::Changes, "`changes` is not a list"))?;

        self.overlay.clear();

        for (index, entry) in entries.iter().enumerate() {
            let (position, block) = decode_change(entry).map_err(|reason| {
                SectionError::new(SaveSection::Changes, format!("entry {index}: {reason}"))
            })?;
            let id = self.tiles.insert(block);
            self.overlay.insert(position, id);
        }
        Ok(())
    }
}

fn field<T>(root: &JsonObject, key: &str, section: SaveSection) -> Result<T, SectionError>
where
    T: for<'de> Deserialize<'de>,
{
    let value = root
        .get(key)
        .ok_or_else(|| SectionError::new(section, format!("missing `{key}`")))?;
    T::deserialize(value).map_err(|e| SectionError::new(section, e.to_string()))
}

fn decode_change(entry: &Value) -> Result<(Position, Block), String> {
    let record = ChangeRecord::deserialize(entry).map_err(|e| e.to_string())?;
    let block = Block::from_record(&record.block).map_err(|e| e.to_string())?;
    if let Block::Player(_) = block {
        return Err("player records cannot be board changes".to_owned());
    }
    Ok((Position::new(record.column, record.row), block))
}
