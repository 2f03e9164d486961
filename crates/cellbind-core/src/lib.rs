//! # cellbind-core
//!
//! Core value types for the cellbind grid-template library.
//!
//! This crate provides the geometry every other cellbind crate works in:
//! - [`CellPosition`] - A single cell, 1-based, convertible to and from "A1" references
//! - [`ObjectSize`] - Width and height of a region in cells
//! - [`Rectangle`] - An inclusive, axis-aligned block of cells
//!
//! ## Example
//!
//! ```rust
//! use cellbind_core::{CellPosition, ObjectSize, Rectangle};
//!
//! let header = Rectangle::from_references("A1", "C3").unwrap();
//! assert_eq!(header.size(), ObjectSize::new(3, 3));
//!
//! let body = Rectangle::with_size(CellPosition::new(4, 1), ObjectSize::new(3, 10)).unwrap();
//! assert!(!header.intersects(&body));
//! ```

pub mod cell;
pub mod error;
pub mod rectangle;

// Re-exports for convenience
pub use cell::CellPosition;
pub use error::{Error, Result};
pub use rectangle::{ObjectSize, Rectangle};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;
