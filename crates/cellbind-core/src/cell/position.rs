//! Cell position type

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell position in the grid (e.g., "A1", "C2")
///
/// Both indices are 1-based, matching the way references are written:
/// row 2, column 3 is "C2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    /// Row index (1-based)
    pub row: u32,
    /// Column index (1-based, A=1, B=2, ..., XFD=16384)
    pub column: u32,
}

impl CellPosition {
    /// Create a new cell position
    ///
    /// No range check is done; use [`CellPosition::try_new`] for indices
    /// that are not known to lie on the grid.
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Create a cell position, checking that it lies on the grid
    pub fn try_new(row: u32, column: u32) -> Result<Self> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if column == 0 || column > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(column, MAX_COLS));
        }
        Ok(Self { row, column })
    }

    /// Check that this position lies on the grid
    pub fn validate(&self) -> Result<()> {
        Self::try_new(self.row, self.column).map(|_| ())
    }

    /// Parse a cell position from an A1-style reference
    ///
    /// Only the plain form is accepted: column letters followed by a row
    /// number, without `$` markers or whitespace.
    ///
    /// # Examples
    /// ```
    /// use cellbind_core::CellPosition;
    ///
    /// let pos = CellPosition::parse("C2").unwrap();
    /// assert_eq!(pos.row, 2);
    /// assert_eq!(pos.column, 3);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty reference".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let column = Self::letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self { row, column })
    }

    /// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
    pub fn column_to_letters(column: u32) -> String {
        let mut result = String::new();
        let mut n = column;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut column: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            column = column
                .saturating_mul(26)
                .saturating_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        if column > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(column, MAX_COLS));
        }

        Ok(column)
    }

    /// Format as an A1-style reference
    pub fn to_reference(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.column), self.row)
    }

    /// Position shifted by the given number of rows and columns
    ///
    /// Fails if the result falls off the grid.
    pub fn offset(&self, rows: u32, columns: u32) -> Result<Self> {
        Self::try_new(
            self.row.saturating_add(rows),
            self.column.saturating_add(columns),
        )
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_reference())
    }
}

impl FromStr for CellPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
