use sinkfleet::Ship;

#[test]
fn test_new_ship_is_afloat() {
    let ship = Ship::new(3);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.hit_count(), 0);
    assert!(!ship.is_sunk());
}

#[test]
fn test_sinks_exactly_at_length() {
    let mut ship = Ship::new(3);
    ship.hit();
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 3);
}

#[test]
fn test_extra_hits_keep_ship_sunk() {
    let mut ship = Ship::new(1);
    ship.hit();
    ship.hit();
    ship.hit();
    assert_eq!(ship.hit_count(), 3);
    assert!(ship.is_sunk());
}
