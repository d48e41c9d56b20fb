//! Client-side primitives for driving an Infinity board.
//!
//! Everything a rendering/input shell needs sits here: the [`Session`] that
//! turns input events into board operations, the [`BoardView`] snapshot that
//! gets drawn, the [`SaveCatalog`] of save files on disk, and environment
//! configuration. No windowing or terminal code lives in this crate.
pub mod config;
pub mod saves;
pub mod session;
pub mod view_model;

pub use config::{BoardSettings, ClientConfig};
pub use saves::{SaveCatalog, SaveEntry};
pub use session::{EventOutcome, InputEvent, SAVED_BANNER, Session, TUTORIAL_LINES};
pub use view_model::{BoardView, CellView, PixelRect, PlayerView};
