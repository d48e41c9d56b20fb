//! The board orchestrator.
//!
//! [`GameBoard`] owns the tile arena, the change overlay, the generated grid
//! and the player. Every mutator that touches the overlay rebuilds the grid
//! in full before returning. Illegal requests (out of bounds, blocked, wrong
//! tile) are answered with `false` or ignored; nothing here panics or
//! returns an error for gameplay input.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::block::{Block, FloorKind, Player};
use crate::config::BoardConfig;
use crate::coords::{CoordinateMapper, Position};
use crate::generator::{self, Board, GenerationParams};
use crate::overlay::{ChangeOverlay, TileArena, TileId};

/// Player movement directions. Row 0 is the top of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameBoard {
    pub(crate) num_blocks_wide: u32,
    pub(crate) num_blocks_high: u32,
    pub(crate) mapper: CoordinateMapper,
    pub(crate) seed: u32,
    pub(crate) wall_probability: f64,
    pub(crate) tiles: TileArena,
    pub(crate) overlay: ChangeOverlay,
    pub(crate) grid: Board,
    pub(crate) player: Player,
}

impl GameBoard {
    /// Creates a board with a time-derived seed and the default wall
    /// probability. Non-positive arguments fall back to the defaults.
    pub fn new(
        num_blocks_wide: i32,
        num_blocks_high: i32,
        block_width: i32,
        block_height: i32,
    ) -> Self {
        Self::builder()
            .dimensions(num_blocks_wide, num_blocks_high)
            .block_size(block_width, block_height)
            .build()
    }

    pub fn builder() -> GameBoardBuilder {
        GameBoardBuilder::default()
    }

    // ===== dimensions =====

    pub fn num_blocks_wide(&self) -> u32 {
        self.num_blocks_wide
    }

    pub fn num_blocks_high(&self) -> u32 {
        self.num_blocks_high
    }

    pub fn block_width(&self) -> u32 {
        self.mapper.block_width()
    }

    pub fn block_height(&self) -> u32 {
        self.mapper.block_height()
    }

    /// Saturates at `u32::MAX`, like the coordinate conversions.
    pub fn game_pixel_width(&self) -> u32 {
        self.block_width().saturating_mul(self.num_blocks_wide)
    }

    pub fn game_pixel_height(&self) -> u32 {
        self.block_height().saturating_mul(self.num_blocks_high)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.num_blocks_wide && position.y < self.num_blocks_high
    }

    // ===== generation parameters =====

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn wall_probability(&self) -> f64 {
        self.wall_probability
    }

    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    // ===== queries =====

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The tile currently at `position`, if it is on the board.
    pub fn tile_at(&self, position: Position) -> Option<&Block> {
        self.grid.cell(position).and_then(|id| self.tiles.get(id))
    }

    /// Tile id at `position`; overlay cells share their id with the overlay.
    pub fn tile_id_at(&self, position: Position) -> Option<TileId> {
        self.grid.cell(position)
    }

    pub fn grid(&self) -> &Board {
        &self.grid
    }

    pub fn overlay(&self) -> &ChangeOverlay {
        &self.overlay
    }

    /// Every cell of the grid in column-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Block)> + '_ {
        self.grid
            .cells()
            .filter_map(|(position, id)| Some((position, self.tiles.get(id)?)))
    }

    /// The overlay's entries, column-major.
    pub fn changes(&self) -> impl Iterator<Item = (Position, &Block)> + '_ {
        self.overlay
            .iter()
            .filter_map(|(position, id)| Some((position, self.tiles.get(id)?)))
    }

    pub fn change_at(&self, position: Position) -> Option<&Block> {
        self.overlay.get(position).and_then(|id| self.tiles.get(id))
    }

    // ===== coordinate conversion =====

    pub fn vector_x_to_pixel_x(&self, vector_x: i32) -> u32 {
        self.mapper.vector_x_to_pixel_x(vector_x)
    }

    pub fn vector_y_to_pixel_y(&self, vector_y: i32) -> u32 {
        self.mapper.vector_y_to_pixel_y(vector_y)
    }

    pub fn pixel_x_to_vector_x(&self, pixel_x: i32) -> u32 {
        self.mapper.pixel_x_to_vector_x(pixel_x)
    }

    pub fn pixel_y_to_vector_y(&self, pixel_y: i32) -> u32 {
        self.mapper.pixel_y_to_vector_y(pixel_y)
    }

    // ===== mutators =====

    /// Moves the player one cell if the target is on the board and walkable.
    pub fn move_player(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        let Some(target) = self.player.position().offset(dx, dy) else {
            return;
        };

        if !self.is_walkable(target) {
            return;
        }

        self.player.set_position(target);
    }

    /// Drags a wall from the cell under the last cursor position to the cell
    /// under the current one.
    ///
    /// Fails without touching anything if either cell is off the board, they
    /// are the same cell, the source is not a wall, the destination is not
    /// walkable, or the destination is the player's cell.
    pub fn move_wall(
        &mut self,
        last_pixel_x: i32,
        last_pixel_y: i32,
        pixel_x: i32,
        pixel_y: i32,
    ) -> bool {
        let from = self.mapper.pixel_to_position(last_pixel_x, last_pixel_y);
        let to = self.mapper.pixel_to_position(pixel_x, pixel_y);

        if !self.contains(from) || !self.contains(to) || from == to {
            return false;
        }

        let Some(wall) = self.grid.cell(from) else {
            return false;
        };
        if !self.tiles.get(wall).is_some_and(Block::is_wall) {
            return false;
        }
        if !self.is_walkable(to) || to == self.player.position() {
            return false;
        }

        let floor = self.tiles.insert(Block::floor(FloorKind::Grass));
        self.overlay.insert(from, floor);
        self.overlay.insert(to, wall);
        self.regenerate();

        tracing::debug!(%from, %to, "moved wall");
        true
    }

    /// Places a new wall on a walkable cell that the player is not on.
    pub fn add_wall(&mut self, pixel_x: i32, pixel_y: i32) -> bool {
        let position = self.mapper.pixel_to_position(pixel_x, pixel_y);

        if !self.is_walkable(position) || position == self.player.position() {
            return false;
        }

        let wall = self.tiles.insert(Block::wall());
        self.overlay.insert(position, wall);
        self.regenerate();

        tracing::debug!(%position, "added wall");
        true
    }

    /// Replaces a wall with a fresh floor.
    pub fn remove_wall(&mut self, pixel_x: i32, pixel_y: i32) -> bool {
        let position = self.mapper.pixel_to_position(pixel_x, pixel_y);

        if !self.tile_at(position).is_some_and(Block::is_wall) {
            return false;
        }

        let floor = self.tiles.insert(Block::floor(FloorKind::Grass));
        self.overlay.insert(position, floor);
        self.regenerate();

        tracing::debug!(%position, "removed wall");
        true
    }

    /// Changes the sub-type of the floor under the player in place.
    pub fn change_floor_type_under_player(&mut self, kind: FloorKind) {
        let position = self.player.position();
        let Some(id) = self.grid.cell(position) else {
            return;
        };
        let Some(floor) = self.tiles.get_mut(id).and_then(Block::as_floor_mut) else {
            return;
        };

        floor.set_kind(kind);
        self.overlay.insert(position, id);
        self.regenerate();

        tracing::debug!(%position, %kind, "changed floor type");
    }

    pub fn swap_player_color(&mut self) {
        self.player.swap_colors();
    }

    // ===== internals =====

    fn is_walkable(&self, position: Position) -> bool {
        self.tile_at(position).is_some_and(Block::is_walkable)
    }

    pub(crate) fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            width: self.num_blocks_wide,
            height: self.num_blocks_high,
            seed: self.seed,
            wall_probability: self.wall_probability,
        }
    }

    /// Rebuilds the grid from the current parameters and overlay.
    pub(crate) fn regenerate(&mut self) {
        self.tiles.retain_overlay(&mut self.overlay);
        self.grid = generator::generate(&self.generation_params(), &self.overlay, &mut self.tiles);
    }

    /// Pulls the player back onto the board after the dimensions changed.
    pub(crate) fn clamp_player(&mut self) {
        let position = self.player.position();
        let clamped = Position::new(
            position.x.min(self.num_blocks_wide.saturating_sub(1)),
            position.y.min(self.num_blocks_high.saturating_sub(1)),
        );
        if clamped != position {
            tracing::warn!(%position, %clamped, "player was off the board");
            self.player.set_position(clamped);
        }
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`GameBoard`] with the optional constructor arguments.
#[derive(Clone, Debug, Default)]
pub struct GameBoardBuilder {
    num_blocks_wide: i64,
    num_blocks_high: i64,
    block_width: i64,
    block_height: i64,
    seed: Option<u32>,
    wall_probability: Option<f64>,
    changes: Vec<(Position, Block)>,
}

impl GameBoardBuilder {
    pub fn dimensions(mut self, num_blocks_wide: i32, num_blocks_high: i32) -> Self {
        self.num_blocks_wide = num_blocks_wide.into();
        self.num_blocks_high = num_blocks_high.into();
        self
    }

    pub fn block_size(mut self, block_width: i32, block_height: i32) -> Self {
        self.block_width = block_width.into();
        self.block_height = block_height.into();
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `None` keeps the default of 0.3.
    pub fn wall_probability(mut self, wall_probability: Option<f64>) -> Self {
        self.wall_probability = wall_probability;
        self
    }

    /// Initial overlay entries. Player blocks are not tiles and are skipped.
    pub fn changes(mut self, changes: impl IntoIterator<Item = (Position, Block)>) -> Self {
        self.changes.extend(changes);
        self
    }

    pub fn build(self) -> GameBoard {
        let num_blocks_wide = BoardConfig::normalize_extent(
            self.num_blocks_wide,
            BoardConfig::DEFAULT_NUM_BLOCKS_WIDE,
        );
        let num_blocks_high = BoardConfig::normalize_extent(
            self.num_blocks_high,
            BoardConfig::DEFAULT_NUM_BLOCKS_HIGH,
        );
        let (num_blocks_wide, num_blocks_high) =
            if BoardConfig::grid_fits(num_blocks_wide, num_blocks_high) {
                (num_blocks_wide, num_blocks_high)
            } else {
                tracing::warn!(
                    num_blocks_wide,
                    num_blocks_high,
                    "board too large, using default dimensions"
                );
                (
                    BoardConfig::DEFAULT_NUM_BLOCKS_WIDE,
                    BoardConfig::DEFAULT_NUM_BLOCKS_HIGH,
                )
            };
        let block_width =
            BoardConfig::normalize_extent(self.block_width, BoardConfig::DEFAULT_BLOCK_WIDTH);
        let block_height =
            BoardConfig::normalize_extent(self.block_height, BoardConfig::DEFAULT_BLOCK_HEIGHT);

        let mut tiles = TileArena::new();
        let mut overlay = ChangeOverlay::new();
        for (position, block) in self.changes {
            if matches!(block, Block::Player(_)) {
                tracing::warn!(%position, "ignoring player block in initial changes");
                continue;
            }
            overlay.insert(position, tiles.insert(block));
        }

        // The player always starts on walkable ground.
        if overlay.is_empty() {
            overlay.insert(Position::ORIGIN, tiles.insert(Block::floor(FloorKind::Grass)));
        }

        let mut board = GameBoard {
            num_blocks_wide,
            num_blocks_high,
            mapper: CoordinateMapper::new(block_width, block_height),
            seed: self.seed.unwrap_or_else(time_seed),
            wall_probability: BoardConfig::normalize_wall_probability(self.wall_probability),
            tiles,
            overlay,
            grid: Board::default(),
            player: Player::with_colors(
                BoardConfig::PLAYER_COLOR,
                BoardConfig::PLAYER_ALTERNATE_COLOR,
            ),
        };
        board.regenerate();
        board
    }
}

/// Seconds since the epoch, truncated to 32 bits.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as u32)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn default_board_dimensions() {
        let board = GameBoard::default();
        assert_eq!(board.num_blocks_wide(), 30);
        assert_eq!(board.num_blocks_high(), 20);
        assert_eq!(board.block_width(), 35);
        assert_eq!(board.block_height(), 35);
        assert_eq!(board.wall_probability(), 0.3);
    }

    #[test]
    fn non_positive_arguments_fall_back() {
        let board = GameBoard::new(21, -1, 40, 2);
        assert_eq!(board.num_blocks_wide(), 21);
        assert_eq!(board.num_blocks_high(), 20);
        assert_eq!(board.block_width(), 40);
        assert_eq!(board.block_height(), 2);
    }

    #[test]
    fn accepted_arguments_are_kept() {
        let board = GameBoard::new(21, 23, 49, 24);
        assert_eq!(board.num_blocks_wide(), 21);
        assert_eq!(board.num_blocks_high(), 23);
        assert_eq!(board.block_width(), 49);
        assert_eq!(board.block_height(), 24);
    }

    #[test]
    fn game_pixel_size() {
        let board = GameBoard::default();
        assert_eq!(board.game_pixel_width(), 1050);
        assert_eq!(board.game_pixel_height(), 700);

        let board = GameBoard::new(21, 23, 49, 24);
        assert_eq!(board.game_pixel_width(), 1029);
        assert_eq!(board.game_pixel_height(), 552);
    }

    #[test]
    fn empty_overlay_seeds_origin_floor() {
        let board = GameBoard::builder()
            .dimensions(4, 4)
            .seed(1)
            .wall_probability(Some(1.0))
            .build();

        assert_eq!(board.player().position(), Position::ORIGIN);
        assert_eq!(board.tile_at(Position::ORIGIN).map(Block::kind), Some(BlockKind::Floor));
        assert_eq!(board.change_at(Position::ORIGIN).map(Block::kind), Some(BlockKind::Floor));
        assert_eq!(board.overlay().len(), 1);
    }

    #[test]
    fn overlay_cells_share_their_tile_with_the_grid() {
        let board = GameBoard::builder()
            .dimensions(3, 3)
            .seed(42)
            .changes([(Position::new(1, 2), Block::default())])
            .build();

        assert_eq!(
            board.tile_id_at(Position::new(1, 2)),
            board.overlay().get(Position::new(1, 2))
        );
    }

    #[test]
    fn floor_change_is_visible_through_grid_and_overlay() {
        let mut board = GameBoard::builder().dimensions(3, 3).seed(42).build();

        board.change_floor_type_under_player(FloorKind::Sand);

        let expected = Block::floor(FloorKind::Sand);
        assert_eq!(board.tile_at(Position::ORIGIN), Some(&expected));
        assert_eq!(board.change_at(Position::ORIGIN), Some(&expected));
        assert_eq!(board.tile_id_at(Position::ORIGIN), board.overlay().get(Position::ORIGIN));
    }

    #[test]
    fn swap_player_color_exchanges_colors() {
        let mut board = GameBoard::default();
        let before = *board.player();

        board.swap_player_color();

        assert_eq!(board.player().color(), before.alternate_color());
        assert_eq!(board.player().alternate_color(), before.color());
    }

    #[test]
    fn player_blocks_are_not_tiles() {
        let board = GameBoard::builder()
            .dimensions(2, 2)
            .seed(3)
            .changes([(Position::new(1, 1), Block::Player(Player::default()))])
            .build();

        assert!(board.change_at(Position::new(1, 1)).is_none());
    }

    #[test]
    fn direction_parses_from_name() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
    }
}
