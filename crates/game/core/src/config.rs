use crate::color::Color;

/// Board defaults and tunable constants.
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig;

impl BoardConfig {
    // ===== defaults applied when a non-positive value is supplied =====
    pub const DEFAULT_NUM_BLOCKS_WIDE: u32 = 30;
    pub const DEFAULT_NUM_BLOCKS_HIGH: u32 = 20;
    pub const DEFAULT_BLOCK_WIDTH: u32 = 35;
    pub const DEFAULT_BLOCK_HEIGHT: u32 = 35;
    pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

    /// Largest grid, in cells, that a board may be built or loaded with.
    pub const MAX_CELLS: u64 = 1 << 20;

    // ===== player palette =====
    pub const PLAYER_COLOR: Color = Color::WHITE;
    pub const PLAYER_ALTERNATE_COLOR: Color = Color::from_rgb8(220, 20, 60);

    /// Suffix shared by every save file.
    pub const SAVE_FILE_SUFFIX: &'static str = ".infinity.json";

    /// Replaces a non-positive value with `default`.
    pub fn normalize_extent(value: i64, default: u32) -> u32 {
        if value <= 0 {
            default
        } else {
            u32::try_from(value).unwrap_or(u32::MAX)
        }
    }

    /// Clamps into `[0, 1]`; NaN is treated as unset.
    pub fn normalize_wall_probability(value: Option<f64>) -> f64 {
        match value {
            Some(p) if !p.is_nan() => p.clamp(0.0, 1.0),
            _ => Self::DEFAULT_WALL_PROBABILITY,
        }
    }

    /// Whether a `width` x `height` grid stays within [`Self::MAX_CELLS`].
    pub fn grid_fits(width: u32, height: u32) -> bool {
        u64::from(width)
            .checked_mul(u64::from(height))
            .is_some_and(|cells| cells <= Self::MAX_CELLS)
    }
}
