//! Error types for cellbind-core

use thiserror::Error;

use crate::cell::CellPosition;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellbind-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell reference format
    #[error("Invalid cell reference: {0}")]
    InvalidAddress(String),

    /// Row number out of bounds (1-based)
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column number out of bounds (1-based)
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Lower-right corner lies above or left of the upper-left corner
    #[error("Invalid rectangle: {lower_right} is not below and right of {upper_left}")]
    InvalidRectangle {
        upper_left: CellPosition,
        lower_right: CellPosition,
    },

    /// Region with a zero dimension
    #[error("Invalid rectangle size {width}x{height} at {upper_left}")]
    EmptySize {
        upper_left: CellPosition,
        width: u32,
        height: u32,
    },
}
