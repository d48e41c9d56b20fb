//! View-model snapshots derived from [`infinity_core::GameBoard`].
use infinity_core::{BlockKind, Color, GameBoard, Position};

/// Pixel-space rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x.checked_sub(self.x).is_some_and(|dx| dx < self.width)
            && y.checked_sub(self.y).is_some_and(|dy| dy < self.height)
    }
}

/// One drawable tile.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    pub position: Position,
    pub kind: BlockKind,
    pub color: Color,
    pub rect: PixelRect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub kind: BlockKind,
    pub position: Position,
    pub color: Color,
    pub rect: PixelRect,
}

/// High-level snapshot of the board used by presentation layers.
///
/// Cells are listed column-major. The player is drawn after the cells.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub cells: Vec<CellView>,
    pub player: PlayerView,
}

impl BoardView {
    pub fn capture(board: &GameBoard) -> Self {
        let block_width = board.block_width();
        let block_height = board.block_height();
        let rect_at = |position: Position| {
            let (x, y) = board.mapper().position_to_pixel(position);
            PixelRect {
                x,
                y,
                width: block_width,
                height: block_height,
            }
        };

        let cells = board
            .tiles()
            .map(|(position, block)| CellView {
                position,
                kind: block.kind(),
                color: block.color(),
                rect: rect_at(position),
            })
            .collect();

        let player = board.player();
        let player = PlayerView {
            kind: BlockKind::Player,
            position: player.position(),
            color: player.color(),
            rect: rect_at(player.position()),
        };

        Self {
            pixel_width: board.game_pixel_width(),
            pixel_height: board.game_pixel_height(),
            columns: board.num_blocks_wide(),
            rows: board.num_blocks_high(),
            cells,
            player,
        }
    }

    pub fn cell(&self, position: Position) -> Option<&CellView> {
        if position.x >= self.columns || position.y >= self.rows {
            return None;
        }
        let index = position.x as usize * self.rows as usize + position.y as usize;
        self.cells.get(index)
    }
}
