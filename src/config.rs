/// Width and height of every board.
pub const BOARD_SIZE: u8 = 10;

/// Number of ships in a standard fleet.
pub const NUM_SHIPS: usize = 4;

/// Ship lengths placed by the randomized fleet builder, in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 3];

/// Total number of ship segments in [`FLEET`].
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i];
        i += 1;
    }
    total
};

/// Random placements tried for a single ship before the board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Full boards generated before the fleet builder gives up.
pub const MAX_BOARD_ATTEMPTS: usize = 10;

/// Pause between computer attacks in paced play, in milliseconds.
pub const AI_ATTACK_DELAY_MS: u64 = 400;
