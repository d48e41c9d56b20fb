//! Deterministic board engine for the Infinity sandbox.
//!
//! `infinity-core` owns everything with real invariants: the block types, the
//! seeded board generator, the sparse change overlay that records player
//! edits, pixel/grid coordinate conversion, and the JSON save format. All
//! mutation flows through [`board::GameBoard`]; rendering and input layers
//! only query it and call its mutators.
pub mod block;
pub mod board;
pub mod color;
pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod overlay;
pub mod rng;
pub mod save;

pub use block::{Block, BlockKind, BlockRecord, Floor, FloorKind, Player, Wall};
pub use board::{Direction, GameBoard, GameBoardBuilder};
pub use color::Color;
pub use config::BoardConfig;
pub use coords::{CoordinateMapper, Position};
pub use error::{BlockError, LoadError, SaveError, SaveSection, SectionError};
pub use generator::{Board, GenerationParams};
pub use overlay::{ChangeOverlay, TileArena, TileId};
pub use rng::Mt19937;
pub use save::{ChangeRecord, SaveFile};
