use std::fs::File;
use std::time::{Duration, UNIX_EPOCH};

use infinity_client_core::{EventOutcome, InputEvent, SaveCatalog, Session};
use infinity_core::{Direction, GameBoard, Position};
use tempfile::TempDir;

fn touch(dir: &TempDir, name: &str, secs: u64) {
    let file = File::create(dir.path().join(name)).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

#[test]
fn lists_saves_newest_first() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "old.infinity.json", 1_000);
    touch(&dir, "new.infinity.json", 3_000);
    touch(&dir, "middle.infinity.json", 2_000);
    touch(&dir, "notes.json", 4_000);
    touch(&dir, ".infinity.json", 5_000);
    std::fs::create_dir(dir.path().join("nested.infinity.json")).unwrap();

    let catalog = SaveCatalog::new(dir.path());
    let names: Vec<_> = catalog
        .list()
        .unwrap()
        .into_iter()
        .map(|entry| entry.short_name)
        .collect();

    assert_eq!(names, ["new", "middle", "old"]);

    let latest = catalog.latest().unwrap().unwrap();
    assert_eq!(latest.path, dir.path().join("new.infinity.json"));
    assert_eq!(latest.modified, UNIX_EPOCH + Duration::from_secs(3_000));
}

#[test]
fn session_saves_resume_from_the_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = SaveCatalog::new(dir.path().join("saves"));
    catalog.ensure_dir().unwrap();

    let path = catalog.new_game_path(UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    let board = GameBoard::builder()
        .dimensions(4, 4)
        .block_size(10, 10)
        .seed(9)
        .wall_probability(Some(0.0))
        .build();
    let mut session = Session::new(board, &path);

    session.handle(InputEvent::Move(Direction::Down));
    session.handle(InputEvent::PrimaryDown { x: 25, y: 5 });
    assert_eq!(session.handle(InputEvent::PrimaryUp), EventOutcome::Saved);

    let entry = catalog.latest().unwrap().unwrap();
    assert_eq!(entry.short_name, "game-1700000000");

    let mut resumed = GameBoard::new(0, 0, 0, 0);
    resumed.load_game(&entry.path).unwrap();

    assert_eq!(resumed.num_blocks_wide(), 4);
    assert_eq!(resumed.seed(), 9);
    assert_eq!(resumed.player().position(), Position::new(0, 1));
    assert!(resumed.tile_at(Position::new(2, 0)).unwrap().is_wall());
}
