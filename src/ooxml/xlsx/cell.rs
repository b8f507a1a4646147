//! Cell addressing for Excel worksheets.
//!
//! Converts between 1-based (column, row) coordinates and the A1 notation
//! SpreadsheetML uses in `r` attributes and range references.

use crate::common::{Error, Result};

/// Number of columns in a worksheet (`A` through `XFD`).
pub const MAX_COLUMNS: u32 = 16_384;

/// Number of rows in a worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Convert a 1-based column number to Excel column letters
/// (e.g., 1 -> "A", 26 -> "Z", 27 -> "AA").
pub fn column_number_to_name(col: u32) -> Result<String> {
    if col == 0 || col > MAX_COLUMNS {
        return Err(Error::InvalidCellReference(format!(
            "column number {} is outside 1..={}",
            col, MAX_COLUMNS
        )));
    }

    let mut letters = [0u8; 3];
    let mut start = letters.len();
    let mut col = col;
    while col > 0 {
        col -= 1;
        start -= 1;
        letters[start] = (col % 26) as u8 + b'A';
        col /= 26;
    }

    Ok(letters[start..].iter().map(|&b| b as char).collect())
}

/// Convert Excel column letters (case-insensitive) to a 1-based column number.
pub fn column_name_to_number(name: &str) -> Result<u32> {
    if name.is_empty() || name.len() > 3 || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::InvalidCellReference(format!(
            "invalid column name '{}'",
            name
        )));
    }

    let col = name
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + (b.to_ascii_uppercase() - b'A') as u32 + 1);

    if col > MAX_COLUMNS {
        return Err(Error::InvalidCellReference(format!(
            "column '{}' is beyond XFD",
            name
        )));
    }
    Ok(col)
}

/// Convert 1-based (column, row) coordinates to an A1 cell name.
///
/// # Examples
///
/// ```
/// use pixelsheet::ooxml::xlsx::cell::coordinates_to_cell_name;
/// assert_eq!(coordinates_to_cell_name(1, 1).unwrap(), "A1");
/// assert_eq!(coordinates_to_cell_name(28, 3).unwrap(), "AB3");
/// ```
pub fn coordinates_to_cell_name(col: u32, row: u32) -> Result<String> {
    if row == 0 || row > MAX_ROWS {
        return Err(Error::InvalidCellReference(format!(
            "row number {} is outside 1..={}",
            row, MAX_ROWS
        )));
    }

    let mut name = column_number_to_name(col)?;
    name.push_str(itoa::Buffer::new().format(row));
    Ok(name)
}

/// Convert an A1 cell name to 1-based (column, row) coordinates.
pub fn cell_name_to_coordinates(name: &str) -> Result<(u32, u32)> {
    let split = name
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| Error::InvalidCellReference(format!("'{}' has no row number", name)))?;
    let (col_part, row_part) = name.split_at(split);

    let col = column_name_to_number(col_part)?;
    let row: u32 = row_part
        .parse()
        .map_err(|_| Error::InvalidCellReference(format!("invalid row in '{}'", name)))?;
    if row == 0 || row > MAX_ROWS {
        return Err(Error::InvalidCellReference(format!(
            "row number {} is outside 1..={}",
            row, MAX_ROWS
        )));
    }

    Ok((col, row))
}
