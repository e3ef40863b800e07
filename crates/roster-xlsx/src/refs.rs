//! A1-style cell references.

use crate::error::{Result, XlsxError};

/// Column letters for a 0-based column index (`0 -> "A"`, `26 -> "AA"`).
pub fn column_letters(index: u32) -> String {
    let mut letters = Vec::new();
    let mut col = index + 1;
    while col > 0 {
        col -= 1;
        letters.push(b'A' + (col % 26) as u8);
        col /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Reference for a 0-based column and 1-based row, e.g. `(1, 3) -> "B3"`.
pub fn cell_reference(column: u32, row: u32) -> String {
    format!("{}{}", column_letters(column), row)
}

/// Parse a reference like `B3` into a 0-based column and 1-based row.
///
/// Absolute markers (`$B$3`) are accepted.
pub fn parse_cell_reference(reference: &str) -> Result<(u32, u32)> {
    let invalid = || XlsxError::invalid_cell_reference(reference);
    let cleaned: String = reference.chars().filter(|c| *c != '$').collect();
    let split = cleaned
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (letters, digits) = cleaned.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    let mut column: u32 = 0;
    for ch in letters.chars() {
        let value = u32::from(ch.to_ascii_uppercase() as u8 - b'A') + 1;
        column = column
            .checked_mul(26)
            .and_then(|c| c.checked_add(value))
            .ok_or_else(invalid)?;
    }
    let row: u32 = digits.parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }
    Ok((column - 1, row))
}
