//! Line-oriented command input.
//!
//! Each stdin line becomes one [`Command`]. Mouse gestures are spelled out
//! with pixel coordinates, so `drag 15 15 45 15` is a full press, move and
//! release.

use anyhow::{Context, Result, bail};
use infinity_client_core::InputEvent;
use infinity_core::{Direction, FloorKind};

pub const HELP: &str = "\
commands:
  up | down | left | right     move the player
  floor <grass|sand|dirt>      change the floor under the player (or d, f, g)
  swap                         swap the player's colors (or space)
  click <x> <y>                place a wall at a pixel
  drag <x1> <y1> <x2> <y2>     drag a wall between pixels
  erase <x> <y>                remove the wall at a pixel
  save | s                     save the game
  tutorial | t                 show/hide the tutorial
  show                         redraw the board
  help                         show this list
  quit                         save and exit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Events(Vec<InputEvent>),
    Show,
    Help,
}

pub fn parse(line: &str) -> Result<Command> {
    // Single-key input maps like a keypress; a lone space is a color swap.
    if line.chars().count() == 1 {
        if let Some(event) = line.chars().next().and_then(InputEvent::from_key) {
            return Ok(Command::Events(vec![event]));
        }
    }

    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = words.collect();

    let events = match verb.to_ascii_lowercase().as_str() {
        "up" | "down" | "left" | "right" => {
            expect_args(verb, &args, 0)?;
            let direction: Direction = verb.parse().context("unknown direction")?;
            vec![InputEvent::Move(direction)]
        }
        "floor" => {
            expect_args(verb, &args, 1)?;
            let kind: FloorKind = args[0]
                .parse()
                .with_context(|| format!("unknown floor type `{}`", args[0]))?;
            vec![InputEvent::FloorKey(kind)]
        }
        "swap" => vec![InputEvent::SwapColor],
        "save" => vec![InputEvent::Save],
        "tutorial" => vec![InputEvent::ToggleTutorial],
        "click" => {
            let [x, y] = pixels::<2>(verb, &args)?;
            vec![InputEvent::PrimaryDown { x, y }, InputEvent::PrimaryUp]
        }
        "drag" => {
            let [x1, y1, x2, y2] = pixels::<4>(verb, &args)?;
            vec![
                InputEvent::PrimaryDown { x: x1, y: y1 },
                InputEvent::CursorMoved { x: x2, y: y2 },
                InputEvent::PrimaryUp,
            ]
        }
        "erase" => {
            let [x, y] = pixels::<2>(verb, &args)?;
            vec![InputEvent::SecondaryDown { x, y }]
        }
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => vec![InputEvent::Quit],
        other => bail!("unknown command `{other}` (try `help`)"),
    };

    Ok(Command::Events(events))
}

fn expect_args(verb: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        bail!("`{verb}` takes {count} argument(s), got {}", args.len());
    }
    Ok(())
}

fn pixels<const N: usize>(verb: &str, args: &[&str]) -> Result<[i32; N]> {
    expect_args(verb, args, N)?;
    let mut out = [0; N];
    for (slot, raw) in out.iter_mut().zip(args) {
        *slot = raw
            .parse()
            .with_context(|| format!("`{raw}` is not a pixel coordinate"))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_words() {
        assert_eq!(
            parse("f").unwrap(),
            Command::Events(vec![InputEvent::FloorKey(FloorKind::Sand)])
        );
        assert_eq!(
            parse(" ").unwrap(),
            Command::Events(vec![InputEvent::SwapColor])
        );
        assert_eq!(
            parse("Left").unwrap(),
            Command::Events(vec![InputEvent::Move(Direction::Left)])
        );
        assert_eq!(
            parse("floor dirt").unwrap(),
            Command::Events(vec![InputEvent::FloorKey(FloorKind::Dirt)])
        );
        assert_eq!(parse("").unwrap(), Command::Show);
        assert_eq!(parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn parses_mouse_gestures() {
        assert_eq!(
            parse("drag 15 15 45 -2").unwrap(),
            Command::Events(vec![
                InputEvent::PrimaryDown { x: 15, y: 15 },
                InputEvent::CursorMoved { x: 45, y: -2 },
                InputEvent::PrimaryUp,
            ])
        );
        assert_eq!(
            parse("erase 3 4").unwrap(),
            Command::Events(vec![InputEvent::SecondaryDown { x: 3, y: 4 }])
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("click 1").is_err());
        assert!(parse("click a b").is_err());
        assert!(parse("floor lava").is_err());
        assert!(parse("up 2").is_err());
        assert!(parse("jump").is_err());
    }
}
