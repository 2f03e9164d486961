//! # cellbind-template
//!
//! Reading grid templates for cellbind.
//!
//! This crate provides:
//! - Descriptor grammar (`Value:`, form control and `Template:` descriptors)
//! - Model path parsing and collection key resolution
//! - Table traversal with saved states and layer moves
//! - Sequence decoding on top of a pluggable atomic value parser
//! - A catalog of declared template regions
//!
//! ## Example
//!
//! ```rust
//! use cellbind_template::{Descriptor, DescriptorGrammar, PathPart};
//!
//! let grammar = DescriptorGrammar::shared();
//! assert!(grammar.is_value_descriptor("Value:Invoice:Lines[].Price"));
//!
//! let descriptor = Descriptor::parse("Value:Invoice:Lines[].Price").unwrap();
//! let path = descriptor.path().unwrap();
//! assert_eq!(path.parts()[0], PathPart::ArrayElement("Lines".into()));
//! ```

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod mapping;
pub mod parsers;
pub mod path;
pub mod table;

pub use catalog::{TemplateCatalog, TemplateRegion};
pub use descriptor::{Descriptor, DescriptorGrammar, FormControlType};
pub use error::{TemplateError, TemplateResult};
pub use mapping::{FieldMapping, FieldMappings};
pub use parsers::{
    AtomicValueParser, EnumerableLength, EnumerableOptions, EnumerableParser, ParserCollection,
    MAX_ENUMERABLE_LENGTH,
};
pub use path::{resolve_key, split_path, CollectionKey, KeyType, ModelPath, PathPart};
pub use table::{ColumnLayerNavigator, RowLayerNavigator, TableNavigator, TableParser, TableState};
