//! # cellbind
//!
//! Bind object models to spreadsheet grids through small text descriptors
//! placed in the cells of a template sheet.
//!
//! ## Features
//!
//! - Value, form control and template descriptors
//! - Model paths with array (`Items[]`) and keyed (`Totals["net"]`) access
//! - Cursor-based table traversal with saved states
//! - Sequence decoding with known or open-ended lengths
//! - Template region geometry and overlap checks
//!
//! Reading and writing spreadsheet files, and moving values in and out of
//! model instances, is left to the caller: plug in an
//! [`AtomicValueParser`] and a [`TableNavigator`].
//!
//! ## Example
//!
//! ```rust
//! use cellbind::prelude::*;
//!
//! let grammar = DescriptorGrammar::shared();
//! assert!(grammar.is_template_descriptor("Template:Header:A1:C3"));
//!
//! let region = grammar.try_extract_coordinates("Template:Header:A1:C3").unwrap();
//! assert_eq!(region.size(), ObjectSize::new(3, 3));
//! ```

pub mod bindings;
pub mod prelude;

pub use bindings::{FormBinding, ScanOptions, SheetBindings, ValueBinding};

// Re-export core types
pub use cellbind_core::{CellPosition, Error, ObjectSize, Rectangle, Result, MAX_COLS, MAX_ROWS};

// Re-export template types
pub use cellbind_template::{
    resolve_key, split_path, AtomicValueParser, CollectionKey, ColumnLayerNavigator, Descriptor,
    DescriptorGrammar, EnumerableLength, EnumerableOptions, EnumerableParser, FieldMapping,
    FieldMappings, FormControlType, KeyType, ModelPath, ParserCollection, PathPart,
    RowLayerNavigator, TableNavigator, TableParser, TableState, TemplateCatalog, TemplateError,
    TemplateRegion, TemplateResult, MAX_ENUMERABLE_LENGTH,
};
