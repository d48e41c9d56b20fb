//! Input handling for a running game.
//!
//! A [`Session`] owns the board plus the interaction state a shell needs
//! between events: whether a wall is being dragged, where the cursor was
//! when the drag last succeeded, the tutorial toggle, and when the game was
//! last saved. Shells translate their raw key and mouse events into
//! [`InputEvent`]s and redraw according to the returned [`EventOutcome`].

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use infinity_core::{Direction, FloorKind, GameBoard, SaveError};

/// How long the "Game Saved" banner stays visible after a save.
pub const SAVED_BANNER_DURATION: Duration = Duration::from_secs(1);

pub const SAVED_BANNER: &str = "Game Saved";

pub const TUTORIAL_LINES: [&str; 11] = [
    "How to play:",
    " 1.  Press arrow keys to move",
    " 2.  Press D to create dirt underneath you",
    " 3.  Press F to create sand underneath you",
    " 4.  Press G to create grass underneath you",
    " 5.  Press S to save the game",
    " 6.  Press Space to change the player's color",
    " 7.  Left click to create walls",
    " 8.  Right click to delete walls",
    " 9.  Drag walls with the mouse",
    " 10. Press T to show/hide this tutorial",
];

/// Shell-independent input events. Pointer coordinates are window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Move(Direction),
    FloorKey(FloorKind),
    SwapColor,
    Save,
    ToggleTutorial,
    PrimaryDown { x: i32, y: i32 },
    PrimaryUp,
    CursorMoved { x: i32, y: i32 },
    SecondaryDown { x: i32, y: i32 },
    Quit,
}

impl InputEvent {
    /// Decodes a character key. Arrow keys and mouse input have no character
    /// form and are built by the shell directly.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'd' => Some(Self::FloorKey(FloorKind::Dirt)),
            'f' => Some(Self::FloorKey(FloorKind::Sand)),
            'g' => Some(Self::FloorKey(FloorKind::Grass)),
            's' => Some(Self::Save),
            't' => Some(Self::ToggleTutorial),
            ' ' => Some(Self::SwapColor),
            '\u{1b}' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// What the shell should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing visible changed.
    Unchanged,
    /// Board or overlay state changed; redraw.
    Changed,
    /// The game was written to disk; redraw.
    Saved,
    /// Writing the save failed; the board is still valid.
    SaveFailed,
    /// Stop the event loop. A final save has been attempted.
    Exit,
}

#[derive(Debug)]
pub struct Session {
    board: GameBoard,
    save_path: PathBuf,
    dragging: bool,
    last_cursor: (i32, i32),
    show_tutorial: bool,
    last_save: Option<SystemTime>,
}

impl Session {
    pub fn new(board: GameBoard, save_path: impl Into<PathBuf>) -> Self {
        Self {
            board,
            save_path: save_path.into(),
            dragging: false,
            last_cursor: (0, 0),
            show_tutorial: false,
            last_save: None,
        }
    }

    pub fn with_tutorial(mut self, show_tutorial: bool) -> Self {
        self.show_tutorial = show_tutorial;
        self
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn show_tutorial(&self) -> bool {
        self.show_tutorial
    }

    pub fn last_save(&self) -> Option<SystemTime> {
        self.last_save
    }

    /// Whether the saved banner should be drawn at `now`.
    pub fn saved_recently(&self, now: SystemTime) -> bool {
        self.last_save
            .and_then(|saved| now.duration_since(saved).ok())
            .is_some_and(|elapsed| elapsed < SAVED_BANNER_DURATION)
    }

    /// Writes the board to the session's save path and records the time.
    pub fn save(&mut self) -> Result<(), SaveError> {
        self.board.save_game(&self.save_path)?;
        self.last_save = Some(SystemTime::now());
        Ok(())
    }

    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Move(direction) => {
                let before = self.board.player().position();
                self.board.move_player(direction);
                changed_if(self.board.player().position() != before)
            }
            InputEvent::FloorKey(kind) => {
                self.board.change_floor_type_under_player(kind);
                EventOutcome::Changed
            }
            InputEvent::SwapColor => {
                self.board.swap_player_color();
                EventOutcome::Changed
            }
            InputEvent::Save => self.save_outcome(),
            InputEvent::ToggleTutorial => {
                self.show_tutorial = !self.show_tutorial;
                EventOutcome::Changed
            }
            InputEvent::PrimaryDown { x, y } => {
                let added = self.board.add_wall(x, y);
                self.dragging = true;
                self.last_cursor = (x, y);
                changed_if(added)
            }
            InputEvent::CursorMoved { x, y } => {
                if !self.dragging {
                    return EventOutcome::Unchanged;
                }
                let (last_x, last_y) = self.last_cursor;
                if self.board.move_wall(last_x, last_y, x, y) {
                    self.last_cursor = (x, y);
                    EventOutcome::Changed
                } else {
                    EventOutcome::Unchanged
                }
            }
            InputEvent::PrimaryUp => {
                self.dragging = false;
                self.save_outcome()
            }
            InputEvent::SecondaryDown { x, y } => {
                if !self.dragging && self.board.remove_wall(x, y) {
                    self.save_outcome()
                } else {
                    EventOutcome::Unchanged
                }
            }
            InputEvent::Quit => {
                let _ = self.save_outcome();
                EventOutcome::Exit
            }
        }
    }

    fn save_outcome(&mut self) -> EventOutcome {
        match self.save() {
            Ok(()) => {
                tracing::debug!(path = %self.save_path.display(), "game saved");
                EventOutcome::Saved
            }
            Err(error) => {
                tracing::warn!(%error, "failed to save game");
                EventOutcome::SaveFailed
            }
        }
    }
}

fn changed_if(changed: bool) -> EventOutcome {
    if changed {
        EventOutcome::Changed
    } else {
        EventOutcome::Unchanged
    }
}
