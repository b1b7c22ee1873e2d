use sinkfleet::{
    AttackOutcome, BoardError, Cell, Coordinate, Gameboard, Neighbor, Orientation, BOARD_SIZE,
};

fn c(x: u8, y: u8) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn test_add_ship_horizontal() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(2, c(1, 3)).unwrap();
    let p = &board.placements()[0];
    assert_eq!(p.ship().length(), 2);
    assert_eq!(p.coordinates(), &[c(1, 3), c(2, 3)]);
    assert_eq!(p.orientation(), Orientation::Horizontal);
}

#[test]
fn test_add_ship_vertical() {
    let mut board = Gameboard::new();
    board.add_ship(3, c(4, 6), Orientation::Vertical).unwrap();
    let p = &board.placements()[0];
    assert_eq!(p.ship().length(), 3);
    assert_eq!(p.coordinates(), &[c(4, 6), c(4, 7), c(4, 8)]);
    assert_eq!(p.orientation(), Orientation::Vertical);
    for y in 6..9 {
        assert!(board.cell(c(4, y)).unwrap().occupied);
    }
}

#[test]
fn test_origin_outside_board() {
    let mut board = Gameboard::new();
    assert_eq!(
        board.add_ship(3, c(11, 6), Orientation::Vertical).unwrap_err(),
        BoardError::OutOfBounds { x: 11, y: 6 }
    );
    assert_eq!(
        board.add_ship_horizontal(1, c(0, BOARD_SIZE)).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: BOARD_SIZE }
    );
    assert_eq!(board.ship_count(), 0);
}

#[test]
fn test_invalid_lengths() {
    let mut board = Gameboard::new();
    assert_eq!(
        board.add_ship_horizontal(0, c(0, 0)).unwrap_err(),
        BoardError::InvalidLength(0)
    );
    assert_eq!(
        board.add_ship_horizontal(11, c(0, 0)).unwrap_err(),
        BoardError::InvalidLength(11)
    );
    board.add_ship_horizontal(10, c(5, 0)).unwrap();
    assert_eq!(board.placements()[0].coordinates()[0], c(0, 0));
}

#[test]
fn test_clamps_horizontal_overhang() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(3, c(8, 6)).unwrap();
    assert_eq!(
        board.placements()[0].coordinates(),
        &[c(7, 6), c(8, 6), c(9, 6)]
    );

    let mut board = Gameboard::new();
    board.add_ship_horizontal(3, c(9, 0)).unwrap();
    assert_eq!(board.placements()[0].coordinates()[0], c(7, 0));
}

#[test]
fn test_clamps_vertical_overhang() {
    let mut board = Gameboard::new();
    board.add_ship(2, c(8, 9), Orientation::Vertical).unwrap();
    assert_eq!(board.placements()[0].coordinates(), &[c(8, 8), c(8, 9)]);
}

#[test]
fn test_multiple_ships_keep_order() {
    let mut board = Gameboard::new();
    board.add_ship(2, c(8, 9), Orientation::Vertical).unwrap();
    board.add_ship_horizontal(2, c(1, 3)).unwrap();
    assert_eq!(board.ship_count(), 2);
    assert_eq!(board.placements()[0].coordinates(), &[c(8, 8), c(8, 9)]);
    assert_eq!(board.placements()[1].coordinates(), &[c(1, 3), c(2, 3)]);
}

#[test]
fn test_touching_ship_rejected_and_board_unchanged() {
    let mut board = Gameboard::new();
    board.add_ship(2, c(8, 9), Orientation::Vertical).unwrap();
    let before = board.clone();

    assert_eq!(
        board.add_ship_horizontal(2, c(7, 8)).unwrap_err(),
        BoardError::PositionTaken(Neighbor::Right)
    );
    assert_eq!(board.ship_count(), 1);
    assert!(!board.cell(c(7, 8)).unwrap().occupied);
    assert!(board.cell(c(8, 8)).unwrap().occupied);
    assert!(board.cell(c(8, 9)).unwrap().occupied);
    assert_eq!(board, before);
}

#[test]
fn test_overlap_reports_itself() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(3, c(2, 2)).unwrap();
    assert_eq!(
        board.add_ship(3, c(3, 2), Orientation::Vertical).unwrap_err(),
        BoardError::PositionTaken(Neighbor::Itself)
    );
}

#[test]
fn test_diagonal_contact_rejected() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(1, c(5, 5)).unwrap();
    let cases = [
        (c(4, 4), Neighbor::UpRight),
        (c(4, 6), Neighbor::DownRight),
        (c(6, 4), Neighbor::UpLeft),
        (c(6, 6), Neighbor::DownLeft),
        (c(5, 4), Neighbor::Up),
        (c(5, 6), Neighbor::Down),
        (c(6, 5), Neighbor::Left),
    ];
    for (origin, neighbor) in cases {
        assert_eq!(
            board.add_ship_horizontal(1, origin).unwrap_err(),
            BoardError::PositionTaken(neighbor),
            "origin {origin}"
        );
    }
    // two cells away is fine
    board.add_ship_horizontal(1, c(7, 5)).unwrap();
    board.add_ship_horizontal(1, c(5, 3)).unwrap();
}

#[test]
fn test_missed_attacks_mark_cells() {
    let mut board = Gameboard::new();
    for coord in [c(2, 4), c(4, 2), c(6, 1)] {
        assert!(!board.cell(coord).unwrap().attacked);
        assert!(board.receive_attack(coord).unwrap());
    }
    for coord in [c(2, 4), c(4, 2), c(6, 1)] {
        assert_eq!(
            board.cell(coord).unwrap(),
            Cell {
                attacked: true,
                occupied: false
            }
        );
    }
    assert_eq!(board.unattacked().count(), 97);
}

#[test]
fn test_repeat_attack_is_noop() {
    let mut board = Gameboard::new();
    assert!(board.receive_attack(c(5, 5)).unwrap());
    assert!(board.cell(c(5, 5)).unwrap().attacked);
    assert!(!board.receive_attack(c(5, 5)).unwrap());
    assert_eq!(board.attack(c(5, 5)).unwrap(), AttackOutcome::AlreadyAttacked);
}

#[test]
fn test_attack_out_of_bounds() {
    let mut board = Gameboard::new();
    assert_eq!(
        board.receive_attack(c(10, 0)).unwrap_err(),
        BoardError::OutOfBounds { x: 10, y: 0 }
    );
    assert!(board.cell(c(0, 10)).is_err());
}

#[test]
fn test_hit_counts_once() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(2, c(0, 0)).unwrap();
    assert_eq!(board.placements()[0].ship().hit_count(), 0);
    assert!(board.receive_attack(c(0, 0)).unwrap());
    assert!(!board.receive_attack(c(0, 0)).unwrap());
    assert_eq!(board.placements()[0].ship().hit_count(), 1);
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_sink_single_ship() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(2, c(0, 0)).unwrap();
    assert_eq!(board.attack(c(0, 0)).unwrap(), AttackOutcome::Hit);
    assert_eq!(board.attack(c(1, 0)).unwrap(), AttackOutcome::Sunk);
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_all_ships_sunk_needs_every_ship() {
    let mut board = Gameboard::new();
    assert!(board.all_ships_sunk());
    board.add_ship_horizontal(1, c(0, 0)).unwrap();
    board.add_ship_horizontal(1, c(9, 9)).unwrap();
    board.receive_attack(c(0, 0)).unwrap();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 1);
    board.receive_attack(c(9, 9)).unwrap();
    assert!(board.all_ships_sunk());
}

#[test]
fn test_ship_at_lookup() {
    let mut board = Gameboard::new();
    board.add_ship(3, c(4, 4), Orientation::Vertical).unwrap();
    assert_eq!(board.ship_at(c(4, 6)).unwrap().ship().length(), 3);
    assert!(board.ship_at(c(5, 6)).is_none());
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Gameboard::new();
    board.add_ship_horizontal(3, c(0, 0)).unwrap();
    board.receive_attack(c(0, 0)).unwrap();
    board.receive_attack(c(5, 5)).unwrap();
    board.reset_board_matrix();
    assert_eq!(board, Gameboard::new());
    assert_eq!(board.ship_count(), 0);
    assert_eq!(board.cell(c(0, 0)).unwrap(), Cell::default());
    board.add_ship_horizontal(3, c(0, 0)).unwrap();
}
