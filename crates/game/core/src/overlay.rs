//! Tile storage and the sparse change overlay.
//!
//! Tiles live in a [`TileArena`] and are addressed by [`TileId`]. The grid and
//! the [`ChangeOverlay`] both hold ids, so an edited cell is one logical tile
//! reachable from two places: mutating it through the arena is visible to
//! both.

use std::collections::BTreeMap;

use crate::block::Block;
use crate::coords::Position;

/// Handle to a tile stored in a [`TileArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u32);

impl TileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only tile storage, compacted on every board regeneration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileArena {
    tiles: Vec<Block>,
}

impl TileArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, block: Block) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(block);
        id
    }

    pub fn get(&self, id: TileId) -> Option<&Block> {
        self.tiles.get(id.index())
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Block> {
        self.tiles.get_mut(id.index())
    }

    pub(crate) fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Drops every tile the overlay does not reference and rewrites the
    /// overlay's ids to point into the compacted arena.
    pub fn retain_overlay(&mut self, overlay: &mut ChangeOverlay) {
        let mut kept = Vec::with_capacity(overlay.len());
        let mut remap: BTreeMap<TileId, TileId> = BTreeMap::new();

        for id in overlay.entries.values_mut() {
            let new_id = *remap.entry(*id).or_insert_with(|| {
                let new_id = TileId(kept.len() as u32);
                kept.push(self.tiles[id.index()]);
                new_id
            });
            *id = new_id;
        }

        self.tiles = kept;
    }
}

/// Player-caused edits, keyed by grid position.
///
/// Entries override procedural generation at their cell. Positions outside
/// the current board are kept (they are persisted and reapply if the board
/// grows) but have no effect on generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeOverlay {
    entries: BTreeMap<Position, TileId>,
}

impl ChangeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<TileId> {
        self.entries.get(&position).copied()
    }

    /// Records an override, returning the id it replaced.
    pub fn insert(&mut self, position: Position, tile: TileId) -> Option<TileId> {
        self.entries.insert(position, tile)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TileId)> + '_ {
        self.entries.iter().map(|(position, id)| (*position, *id))
    }
}
