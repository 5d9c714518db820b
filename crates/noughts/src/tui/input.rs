//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_core::{Square, BOARD_SIZE};

/// Moves the cursor one square for arrow keys and `h`/`j`/`k`/`l`.
///
/// The cursor stops at the edges. Any other key leaves it where it is.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let last = BOARD_SIZE - 1;
    match key {
        KeyCode::Up | KeyCode::Char('k') => Square::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Square::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left | KeyCode::Char('h') => Square::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Square::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}

/// Maps digit keys `1`-`9` to squares in reading order.
pub fn digit_square(key: KeyCode) -> Option<Square> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Square::from_index(digit - 1)
        }
        _ => None,
    }
}
