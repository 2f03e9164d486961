//! Table traversal
//!
//! [`TableParser`] is the cursor value parsers walk the grid with. Parsers that
//! decode nested or repeated structures save the cursor with
//! [`TableParser::push_state`] before an attempt and restore it with
//! [`TableParser::pop_state`] afterwards, so every attempt starts from a known
//! position whether it succeeded or not.
//!
//! How the cursor moves from one repetition of a structure to the next is not
//! decided here: it is delegated to a [`TableNavigator`].

use cellbind_core::{CellPosition, Rectangle};

use crate::error::{TemplateError, TemplateResult};

/// Snapshot of a traversal: where the current layer starts and where the
/// cursor is now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    /// First cell of the layer being decoded
    pub origin: CellPosition,
    /// Current cell
    pub cursor: CellPosition,
}

impl TableState {
    /// State with the cursor at the layer origin
    pub fn at(origin: CellPosition) -> Self {
        Self {
            origin,
            cursor: origin,
        }
    }
}

/// Moves a traversal to the next repetition unit of a structure
pub trait TableNavigator {
    /// State at which the layer after `current` starts
    ///
    /// Fails if that layer would start off the grid.
    fn next_layer(&self, current: &TableState) -> cellbind_core::Result<TableState>;
}

/// Layers are stacked vertically: each layer starts `rows` rows below the
/// previous one, in the same column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayerNavigator {
    rows: u32,
}

impl RowLayerNavigator {
    /// Layers of `rows` rows each
    pub fn new(rows: u32) -> Self {
        Self { rows }
    }

    /// Layers as tall as a template region
    pub fn for_region(region: &Rectangle) -> Self {
        Self::new(region.size().height)
    }
}

impl Default for RowLayerNavigator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TableNavigator for RowLayerNavigator {
    fn next_layer(&self, current: &TableState) -> cellbind_core::Result<TableState> {
        Ok(TableState::at(current.origin.offset(self.rows, 0)?))
    }
}

/// Layers run horizontally: each layer starts `columns` columns right of the
/// previous one, on the same row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayerNavigator {
    columns: u32,
}

impl ColumnLayerNavigator {
    /// Layers of `columns` columns each
    pub fn new(columns: u32) -> Self {
        Self { columns }
    }

    /// Layers as wide as a template region
    pub fn for_region(region: &Rectangle) -> Self {
        Self::new(region.size().width)
    }
}

impl Default for ColumnLayerNavigator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TableNavigator for ColumnLayerNavigator {
    fn next_layer(&self, current: &TableState) -> cellbind_core::Result<TableState> {
        Ok(TableState::at(current.origin.offset(0, self.columns)?))
    }
}

/// Grid cursor with a LIFO stack of saved states
#[derive(Debug)]
pub struct TableParser<N> {
    navigator: N,
    current: TableState,
    stack: Vec<TableState>,
}

impl<N: TableNavigator> TableParser<N> {
    /// Create a parser positioned at `origin`
    pub fn new(origin: CellPosition, navigator: N) -> TemplateResult<Self> {
        origin.validate()?;
        Ok(Self {
            navigator,
            current: TableState::at(origin),
            stack: Vec::new(),
        })
    }

    /// Current state
    pub fn current_state(&self) -> &TableState {
        &self.current
    }

    /// Current cell
    pub fn cursor(&self) -> CellPosition {
        self.current.cursor
    }

    /// Navigator used for layer moves
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Number of saved states
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Save the current state
    pub fn push_state(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the most recently saved state
    ///
    /// Popping without a matching push is a bug in the calling parser and is
    /// reported as [`TemplateError::StackUnderflow`].
    pub fn pop_state(&mut self) -> TemplateResult<()> {
        self.current = self.stack.pop().ok_or(TemplateError::StackUnderflow)?;
        Ok(())
    }

    /// Advance to the next repetition unit of the structure being decoded
    ///
    /// The state is left unchanged if the next layer would start off the grid.
    pub fn move_to_next_layer(&mut self) -> TemplateResult<()> {
        self.current = self.navigator.next_layer(&self.current)?;
        Ok(())
    }

    /// Put the cursor on a cell, keeping the layer origin
    pub fn set_cursor(&mut self, cursor: CellPosition) -> TemplateResult<()> {
        cursor.validate()?;
        self.current.cursor = cursor;
        Ok(())
    }

    /// Move the cursor `columns` cells to the right
    pub fn move_right(&mut self, columns: u32) -> TemplateResult<()> {
        self.current.cursor = self.current.cursor.offset(0, columns)?;
        Ok(())
    }

    /// Move the cursor `rows` cells down
    pub fn move_down(&mut self, rows: u32) -> TemplateResult<()> {
        self.current.cursor = self.current.cursor.offset(rows, 0)?;
        Ok(())
    }
}
