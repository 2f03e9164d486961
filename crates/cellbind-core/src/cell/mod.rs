//! Cell addressing
//!
//! This module contains [`CellPosition`], a cell's location in the grid, and
//! the conversions between positions and A1-style references ("C2").

mod position;

pub use position::CellPosition;
