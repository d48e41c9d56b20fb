//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use infinity_core::{GameBoard, GameBoardBuilder};

/// Configuration for a client session.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub save_dir: Option<PathBuf>,
    pub board: BoardSettings,
    pub show_tutorial: bool,
}

/// Board construction arguments. `None` or non-positive values fall back to
/// the engine defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardSettings {
    pub num_blocks_wide: Option<i32>,
    pub num_blocks_high: Option<i32>,
    pub block_width: Option<i32>,
    pub block_height: Option<i32>,
    pub seed: Option<u32>,
    pub wall_probability: Option<f64>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INFINITY_SAVE_DIR` - Directory holding `*.infinity.json` saves (default: platform data dir)
    /// - `INFINITY_BLOCKS_WIDE` / `INFINITY_BLOCKS_HIGH` - Board size in blocks (default: 30x20)
    /// - `INFINITY_BLOCK_WIDTH` / `INFINITY_BLOCK_HEIGHT` - Block size in pixels (default: 35x35)
    /// - `INFINITY_SEED` - Generation seed for new games (default: current time)
    /// - `INFINITY_WALL_PROBABILITY` - Per-cell wall chance for new games (default: 0.3)
    /// - `INFINITY_SHOW_TUTORIAL` - Start with the tutorial overlay visible (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.save_dir = env::var("INFINITY_SAVE_DIR").ok().map(PathBuf::from);

        config.board = BoardSettings {
            num_blocks_wide: read_env("INFINITY_BLOCKS_WIDE"),
            num_blocks_high: read_env("INFINITY_BLOCKS_HIGH"),
            block_width: read_env("INFINITY_BLOCK_WIDTH"),
            block_height: read_env("INFINITY_BLOCK_HEIGHT"),
            seed: read_env("INFINITY_SEED"),
            wall_probability: read_env("INFINITY_WALL_PROBABILITY"),
        };

        if let Some(show) = read_env::<bool>("INFINITY_SHOW_TUTORIAL") {
            config.show_tutorial = show;
        } else if env::var("INFINITY_SHOW_TUTORIAL").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.show_tutorial = true;
        }

        config
    }

    /// Save directory, falling back to the platform data directory and then
    /// to the working directory.
    pub fn resolved_save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .or_else(|| {
                ProjectDirs::from("", "", "infinity").map(|dirs| dirs.data_dir().to_path_buf())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl BoardSettings {
    pub fn builder(&self) -> GameBoardBuilder {
        let mut builder = GameBoard::builder()
            .dimensions(
                self.num_blocks_wide.unwrap_or(0),
                self.num_blocks_high.unwrap_or(0),
            )
            .block_size(self.block_width.unwrap_or(0), self.block_height.unwrap_or(0))
            .wall_probability(self.wall_probability);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        builder
    }

    pub fn new_board(&self) -> GameBoard {
        self.builder().build()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_build_the_default_board() {
        let board = BoardSettings::default().new_board();
        assert_eq!(board.num_blocks_wide(), 30);
        assert_eq!(board.num_blocks_high(), 20);
        assert_eq!(board.game_pixel_width(), 1050);
    }

    #[test]
    fn settings_are_forwarded_to_the_board() {
        let settings = BoardSettings {
            num_blocks_wide: Some(12),
            num_blocks_high: Some(-3),
            block_width: Some(10),
            block_height: Some(20),
            seed: Some(42),
            wall_probability: Some(0.5),
        };
        let board = settings.new_board();

        assert_eq!(board.num_blocks_wide(), 12);
        assert_eq!(board.num_blocks_high(), 20);
        assert_eq!(board.block_width(), 10);
        assert_eq!(board.block_height(), 20);
        assert_eq!(board.seed(), 42);
        assert_eq!(board.wall_probability(), 0.5);
    }

    #[test]
    fn explicit_save_dir_wins() {
        let config = ClientConfig {
            save_dir: Some(PathBuf::from("/tmp/infinity-saves")),
            ..ClientConfig::default()
        };
        assert_eq!(config.resolved_save_dir(), PathBuf::from("/tmp/infinity-saves"));
    }
}
