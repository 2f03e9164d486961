//! Rectangles over cell positions
//!
//! A [`Rectangle`] is an inclusive block of cells: both corners belong to it,
//! so a rectangle from A1 to A1 covers exactly one cell.

use crate::cell::CellPosition;
use crate::error::{Error, Result};
use std::fmt;

/// Width and height of a region, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectSize {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl ObjectSize {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells covered
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// An axis-aligned block of cells
///
/// Invariant: `lower_right` is never above or left of `upper_left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    upper_left: CellPosition,
    lower_right: CellPosition,
}

impl Rectangle {
    /// Create a rectangle from its two corners
    ///
    /// Both corners must lie on the grid.
    ///
    /// # Examples
    /// ```
    /// use cellbind_core::{CellPosition, ObjectSize, Rectangle};
    ///
    /// let rect = Rectangle::new(CellPosition::new(2, 1), CellPosition::new(3, 5)).unwrap();
    /// assert_eq!(rect.size(), ObjectSize::new(5, 2));
    /// ```
    pub fn new(upper_left: CellPosition, lower_right: CellPosition) -> Result<Self> {
        upper_left.validate()?;
        lower_right.validate()?;
        if lower_right.row < upper_left.row || lower_right.column < upper_left.column {
            return Err(Error::InvalidRectangle {
                upper_left,
                lower_right,
            });
        }

        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    /// Create a rectangle from its upper-left corner and size
    ///
    /// Both dimensions must be at least one cell, and the whole region must
    /// fit on the grid.
    pub fn with_size(upper_left: CellPosition, size: ObjectSize) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::EmptySize {
                upper_left,
                width: size.width,
                height: size.height,
            });
        }

        upper_left.validate()?;
        let lower_right = upper_left.offset(size.height - 1, size.width - 1)?;
        Self::new(upper_left, lower_right)
    }

    /// Create a rectangle from two A1-style references
    pub fn from_references(upper_left: &str, lower_right: &str) -> Result<Self> {
        Self::new(
            CellPosition::parse(upper_left)?,
            CellPosition::parse(lower_right)?,
        )
    }

    /// Upper-left corner
    pub fn upper_left(&self) -> CellPosition {
        self.upper_left
    }

    /// Lower-right corner
    pub fn lower_right(&self) -> CellPosition {
        self.lower_right
    }

    /// Size in cells, counting both corners
    pub fn size(&self) -> ObjectSize {
        ObjectSize::new(
            self.lower_right.column - self.upper_left.column + 1,
            self.lower_right.row - self.upper_left.row + 1,
        )
    }

    /// Check if a cell lies within this rectangle
    pub fn contains(&self, position: &CellPosition) -> bool {
        position.row >= self.upper_left.row
            && position.row <= self.lower_right.row
            && position.column >= self.upper_left.column
            && position.column <= self.lower_right.column
    }

    /// Check if this rectangle shares at least one cell with another
    ///
    /// Rectangles that only touch along an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        let rows_overlap = self.upper_left.row <= other.lower_right.row
            && other.upper_left.row <= self.lower_right.row;
        let columns_overlap = self.upper_left.column <= other.lower_right.column
            && other.upper_left.column <= self.lower_right.column;

        rows_overlap && columns_overlap
    }

    /// Get the cells shared by two rectangles, if any
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(other) {
            return None;
        }

        Some(Rectangle {
            upper_left: CellPosition::new(
                self.upper_left.row.max(other.upper_left.row),
                self.upper_left.column.max(other.upper_left.column),
            ),
            lower_right: CellPosition::new(
                self.lower_right.row.min(other.lower_right.row),
                self.lower_right.column.min(other.lower_right.column),
            ),
        })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.upper_left, self.lower_right)
    }
}
