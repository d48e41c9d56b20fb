use std::fmt::Write;

use infinity_client_core::{BoardView, CellView, SAVED_BANNER, TUTORIAL_LINES};
use infinity_core::{BlockKind, FloorKind, Position};

pub struct Overlays {
    pub saved_banner: bool,
    pub tutorial: bool,
}

/// Draws the board as one character per block, row by row.
pub fn render(view: &BoardView, overlays: &Overlays) -> String {
    let mut out = String::new();

    if overlays.saved_banner {
        out.push_str(SAVED_BANNER);
        out.push('\n');
    }

    for row in 0..view.rows {
        for column in 0..view.columns {
            let position = Position::new(column, row);
            let ch = if position == view.player.position {
                '@'
            } else {
                view.cell(position).map_or(' ', glyph)
            };
            out.push(ch);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "player at {} ({}x{} px)",
        view.player.position, view.pixel_width, view.pixel_height
    );

    if overlays.tutorial {
        for line in TUTORIAL_LINES {
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

fn glyph(cell: &CellView) -> char {
    match cell.kind {
        BlockKind::Wall => '#',
        BlockKind::Player => '@',
        BlockKind::Floor => {
            if cell.color == FloorKind::Sand.color() {
                '.'
            } else if cell.color == FloorKind::Dirt.color() {
                ':'
            } else {
                ','
            }
        }
    }
}
