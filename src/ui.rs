//! Plain-text rendering and coordinate parsing for terminal front ends.

use std::fmt::Write;

use crate::board::Gameboard;
use crate::common::Coordinate;

/// Column letter and 1-based row, e.g. `(2, 4)` → `C5`. Off-board
/// coordinates fall back to their `(x, y)` form.
pub fn coord_to_string(coord: Coordinate) -> String {
    match coord.check() {
        Ok(c) => format!("{}{}", (b'A' + c.x) as char, c.y + 1),
        Err(_) => coord.to_string(),
    }
}

/// Parse `C5`-style input into a coordinate. Case-insensitive; returns
/// `None` for anything off the board.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let input = input.trim();
    let mut chars = input.chars();
    let col = chars.next()?.to_ascii_uppercase();
    if !col.is_ascii_uppercase() {
        return None;
    }
    let x = col as u8 - b'A';
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: u8 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    let coord = Coordinate::new(x, row - 1);
    coord.in_bounds().then_some(coord)
}

/// Draw `board` as a grid. Ships are only shown when `reveal` is set.
///
/// `X` hit, `o` miss, `#` ship, `.` open water.
pub fn render_board(board: &Gameboard, reveal: bool) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for x in 0..size {
        let _ = write!(out, " {}", (b'A' + x) as char);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "{:2} ", y + 1);
        for x in 0..size {
            let ch = match board.cell(Coordinate::new(x, y)) {
                Ok(cell) if cell.attacked && cell.occupied => 'X',
                Ok(cell) if cell.attacked => 'o',
                Ok(cell) if cell.occupied && reveal => '#',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print the human's own board next to what they know of the computer's.
pub fn print_player_view(own: &Gameboard, enemy: &Gameboard) {
    let own = render_board(own, true);
    let enemy = render_board(enemy, false);
    println!("{:<26}   {}", "Your fleet", "Enemy waters");
    for (left, right) in own.lines().zip(enemy.lines()) {
        println!("{:<26}   {}", left, right);
    }
}
