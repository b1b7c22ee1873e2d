use sinkfleet::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_set_clear_report_previous_state() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    assert!(bb.set(1, 2).unwrap());
    assert!(!bb.set(1, 2).unwrap());
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());
    assert!(bb.clear(1, 2).unwrap());
    assert!(!bb.clear(1, 2).unwrap());
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 4, y: 0 }
    );
    assert!(bb.get(0, 4).is_err());
}

#[test]
fn test_iter_is_row_major_xy() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 0).unwrap();
    bb.set(0, 1).unwrap();
    bb.set(2, 3).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(3, 0), (0, 1), (2, 3)]);
    assert_eq!(bb.nth_set(1), Some((0, 1)));
    assert_eq!(bb.nth_set(3), None);
}

#[test]
fn test_not_stays_within_board() {
    let bb = BitBoard::<u128, 10>::new();
    assert_eq!((!bb).count_ones(), 100);
    assert_eq!(BitBoard::<u128, 10>::full(), !bb);
    let mut one = BitBoard::<u128, 10>::new();
    one.set(9, 9).unwrap();
    assert_eq!((!one).count_ones(), 99);
    assert_eq!((one & !one).count_ones(), 0);
    assert_eq!((one | !one).count_ones(), 100);
}
