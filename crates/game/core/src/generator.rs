//! Procedural board generation.
//!
//! The grid is a pure function of `(width, height, seed, wall_probability,
//! overlay)`. Cells are visited column by column (outer loop over `x`, inner
//! loop over `y`) and every cell consumes exactly one draw from a freshly
//! seeded [`Mt19937`], including cells taken from the overlay. Overriding a
//! cell therefore never shifts the draws of the cells after it.

use crate::block::{Block, FloorKind};
use crate::coords::Position;
use crate::overlay::{ChangeOverlay, TileArena, TileId};
use crate::rng::Mt19937;

/// Inputs to [`generate`] other than the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub width: u32,
    pub height: u32,
    pub seed: u32,
    pub wall_probability: f64,
}

/// Generated grid of tile ids, stored column-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<TileId>,
}

impl Board {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn cell(&self, position: Position) -> Option<TileId> {
        if !self.contains(position) {
            return None;
        }
        self.cells.get(self.index(position)).copied()
    }

    /// Cells in generation order: column 0 top to bottom, then column 1, ...
    pub fn cells(&self) -> impl Iterator<Item = (Position, TileId)> + '_ {
        let height = self.height.max(1);
        self.cells.iter().enumerate().map(move |(i, id)| {
            let i = i as u32;
            (Position::new(i / height, i % height), *id)
        })
    }

    fn index(&self, position: Position) -> usize {
        position.x as usize * self.height as usize + position.y as usize
    }
}

/// Generates a board, inserting fresh tiles into `tiles`.
///
/// A cell becomes a wall when its draw is strictly below `wall_probability`,
/// so a probability of 0 never produces walls and 1 always does. Overlay
/// cells reuse the overlay's tile id.
pub fn generate(
    params: &GenerationParams,
    overlay: &ChangeOverlay,
    tiles: &mut TileArena,
) -> Board {
    let mut rng = Mt19937::new(params.seed);
    let capacity = params.width as usize * params.height as usize;
    let mut cells = Vec::with_capacity(capacity);

    for x in 0..params.width {
        for y in 0..params.height {
            let draw = rng.next_unit();

            let id = match overlay.get(Position::new(x, y)) {
                Some(id) => id,
                None if draw < params.wall_probability => tiles.insert(Block::wall()),
                None => tiles.insert(Block::floor(FloorKind::Grass)),
            };
            cells.push(id);
        }
    }

    tracing::debug!(
        width = params.width,
        height = params.height,
        seed = params.seed,
        overrides = overlay.len(),
        tiles = tiles.len(),
        "generated board"
    );

    Board {
        width: params.width,
        height: params.height,
        cells,
    }
}
