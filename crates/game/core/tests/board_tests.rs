use infinity_core::{Block, BlockKind, Direction, FloorKind, GameBoard, Position};

/// 3x3, seed 42, with a floor forced at (1, 2):
///
/// ```text
/// F F F
/// W F F
/// F F W
/// ```
fn three_by_three(block_size: i32) -> GameBoard {
    GameBoard::builder()
        .dimensions(3, 3)
        .block_size(block_size, block_size)
        .seed(42)
        .wall_probability(Some(0.3))
        .changes([(Position::new(1, 2), Block::floor(FloorKind::Grass))])
        .build()
}

fn kind_at(board: &GameBoard, x: u32, y: u32) -> Option<BlockKind> {
    board.tile_at(Position::new(x, y)).map(Block::kind)
}

type Snapshot = (Vec<(Position, Block)>, Vec<(Position, Block)>);

fn snapshot(board: &GameBoard) -> Snapshot {
    (
        board.tiles().map(|(p, b)| (p, *b)).collect(),
        board.changes().map(|(p, b)| (p, *b)).collect(),
    )
}

fn at(board: &GameBoard) -> (u32, u32) {
    (board.player().vector_x(), board.player().vector_y())
}

#[test]
fn reference_board_without_changes() {
    let board = GameBoard::builder()
        .dimensions(2, 3)
        .block_size(20, 20)
        .seed(42)
        .wall_probability(Some(0.3))
        .build();

    assert_eq!(kind_at(&board, 0, 0), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 0, 1), Some(BlockKind::Wall));
    assert_eq!(kind_at(&board, 0, 2), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 0), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 1), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 2), Some(BlockKind::Wall));
}

#[test]
fn reference_board_with_changes() {
    let board = GameBoard::builder()
        .dimensions(2, 3)
        .block_size(20, 20)
        .seed(42)
        .wall_probability(Some(0.3))
        .changes([
            (Position::new(1, 1), Block::wall()),
            (Position::new(1, 2), Block::floor(FloorKind::Grass)),
        ])
        .build();

    // F F
    // W W
    // F F
    assert_eq!(kind_at(&board, 0, 0), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 0, 1), Some(BlockKind::Wall));
    assert_eq!(kind_at(&board, 0, 2), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 0), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 1), Some(BlockKind::Wall));
    assert_eq!(kind_at(&board, 1, 2), Some(BlockKind::Floor));
}

#[test]
fn identical_arguments_generate_identical_boards() {
    let build = || {
        GameBoard::builder()
            .dimensions(25, 14)
            .seed(2_024)
            .wall_probability(Some(0.35))
            .build()
    };
    assert_eq!(snapshot(&build()), snapshot(&build()));
}

#[test]
fn move_player_walks_around_walls_and_edges() {
    let mut board = three_by_three(20);

    let steps = [
        (Direction::Up, (0, 0)),
        (Direction::Left, (0, 0)),
        (Direction::Right, (1, 0)),
        (Direction::Right, (2, 0)),
        (Direction::Right, (2, 0)),
        (Direction::Down, (2, 1)),
        (Direction::Down, (2, 1)),
        (Direction::Left, (1, 1)),
        (Direction::Left, (1, 1)),
        (Direction::Up, (1, 0)),
        (Direction::Down, (1, 1)),
        (Direction::Down, (1, 2)),
        (Direction::Down, (1, 2)),
        (Direction::Right, (1, 2)),
        (Direction::Left, (0, 2)),
        (Direction::Up, (0, 2)),
    ];

    for (i, (direction, expected)) in steps.into_iter().enumerate() {
        board.move_player(direction);
        assert_eq!(at(&board), expected, "step {i}: {direction}");
    }
}

#[test]
fn move_wall_rejects_illegal_moves_without_side_effects() {
    let mut board = three_by_three(1);
    let initial = snapshot(&board);

    let rejected = [
        ((3, 1), (1, 1), "source x off the board"),
        ((0, 3), (1, 1), "source y off the board"),
        ((0, 0), (3, 1), "destination x off the board"),
        ((0, 0), (0, 3), "destination y off the board"),
        ((1, 1), (1, 1), "same cell"),
        ((1, 1), (1, 0), "source is a floor"),
        ((0, 1), (2, 2), "destination is a wall"),
        ((0, 1), (0, 0), "destination is the player"),
    ];

    for ((fx, fy), (tx, ty), why) in rejected {
        assert!(!board.move_wall(fx, fy, tx, ty), "{why}");
        assert_eq!(snapshot(&board), initial, "{why} mutated the board");
    }
}

#[test]
fn move_wall_relocates_the_wall() {
    let mut board = three_by_three(1);
    let wall_id = board.tile_id_at(Position::new(0, 1));

    assert!(board.move_wall(0, 1, 1, 1));

    assert_eq!(kind_at(&board, 0, 1), Some(BlockKind::Floor));
    assert_eq!(kind_at(&board, 1, 1), Some(BlockKind::Wall));
    assert_eq!(
        board.change_at(Position::new(0, 1)).map(Block::kind),
        Some(BlockKind::Floor)
    );
    assert_eq!(
        board.change_at(Position::new(1, 1)).map(Block::kind),
        Some(BlockKind::Wall)
    );
    assert!(wall_id.is_some());
    assert_eq!(
        board.tile_id_at(Position::new(1, 1)),
        board.overlay().get(Position::new(1, 1))
    );
}

#[test]
fn move_wall_uses_pixel_coordinates() {
    let mut board = three_by_three(20);

    // (0, 1) is a wall; pixels inside cell (1, 1) are 20..40.
    assert!(board.move_wall(5, 25, 39, 21));
    assert_eq!(kind_at(&board, 1, 1), Some(BlockKind::Wall));
    assert_eq!(kind_at(&board, 0, 1), Some(BlockKind::Floor));
}

#[test]
fn add_wall_rules() {
    let mut board = three_by_three(1);
    let initial = snapshot(&board);

    assert!(!board.add_wall(0, 0), "player's cell");
    assert!(!board.add_wall(0, 1), "already a wall");
    assert!(!board.add_wall(3, 0), "off the board");
    assert_eq!(snapshot(&board), initial);

    assert!(board.add_wall(2, 0));
    assert_eq!(kind_at(&board, 2, 0), Some(BlockKind::Wall));
    assert_eq!(
        board.change_at(Position::new(2, 0)).map(Block::kind),
        Some(BlockKind::Wall)
    );
}

#[test]
fn remove_wall_rules() {
    let mut board = three_by_three(1);
    let initial = snapshot(&board);

    assert!(!board.remove_wall(1, 1), "floor");
    assert!(!board.remove_wall(9, 9), "off the board");
    assert_eq!(snapshot(&board), initial);

    assert!(board.remove_wall(2, 2));
    assert_eq!(kind_at(&board, 2, 2), Some(BlockKind::Floor));
    assert_eq!(
        board.change_at(Position::new(2, 2)).map(Block::kind),
        Some(BlockKind::Floor)
    );
}

#[test]
fn removed_wall_can_be_walked_through() {
    let mut board = three_by_three(1);

    board.move_player(Direction::Down);
    assert_eq!(at(&board), (0, 0));

    assert!(board.remove_wall(0, 1));
    board.move_player(Direction::Down);
    assert_eq!(at(&board), (0, 1));
}

#[test]
fn floor_type_changes_follow_the_player() {
    let mut board = three_by_three(1);

    board.change_floor_type_under_player(FloorKind::Dirt);
    board.move_player(Direction::Right);
    board.change_floor_type_under_player(FloorKind::Sand);

    assert_eq!(
        board.tile_at(Position::new(0, 0)),
        Some(&Block::floor(FloorKind::Dirt))
    );
    assert_eq!(
        board.tile_at(Position::new(1, 0)),
        Some(&Block::floor(FloorKind::Sand))
    );
    assert_eq!(board.overlay().len(), 3);
}

#[test]
fn overlay_entries_always_match_the_grid() {
    let mut board = three_by_three(1);
    board.add_wall(2, 0);
    board.move_wall(2, 0, 2, 1);
    board.remove_wall(2, 2);
    board.change_floor_type_under_player(FloorKind::Sand);

    for (position, id) in board.overlay().iter() {
        if board.grid().contains(position) {
            assert_eq!(board.tile_id_at(position), Some(id), "cell {position}");
        }
    }
}

#[test]
fn pixel_size_saturates_for_huge_blocks() {
    let board = GameBoard::new(70_000, 1, 70_000, 1);

    assert_eq!(board.num_blocks_wide(), 70_000);
    assert_eq!(board.game_pixel_width(), u32::MAX);
    assert_eq!(board.game_pixel_height(), 1);
}

#[test]
fn oversized_grid_falls_back_to_default_dimensions() {
    let board = GameBoard::builder()
        .dimensions(i32::MAX, i32::MAX)
        .seed(3)
        .build();

    assert_eq!(board.num_blocks_wide(), 30);
    assert_eq!(board.num_blocks_high(), 20);
    assert_eq!(board.tiles().count(), 600);
}
