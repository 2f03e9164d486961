//! Prelude module - common imports for cellbind users
//!
//! ```rust
//! use cellbind::prelude::*;
//! ```

pub use crate::{
    // Parser traits
    AtomicValueParser,
    // Geometry
    CellPosition,
    CollectionKey,
    // Descriptors
    Descriptor,
    DescriptorGrammar,
    // Decoding
    EnumerableLength,
    EnumerableParser,
    FieldMappings,
    FormControlType,
    KeyType,
    // Model paths
    ModelPath,
    ObjectSize,
    ParserCollection,
    PathPart,
    Rectangle,
    RowLayerNavigator,
    // Sheet scanning
    ScanOptions,
    SheetBindings,
    TableNavigator,
    TableParser,
    TemplateCatalog,
    // Error types
    TemplateError,
    TemplateResult,
};
