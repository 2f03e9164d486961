//! Value parsers
//!
//! Decoding a single value from the grid is the job of the binding layer; it
//! plugs in through [`AtomicValueParser`] and [`ParserCollection`]. The parsers
//! in this module are the ones built on top of those: they decide where on the
//! grid each value is read, not how.

pub mod enumerable;

pub use enumerable::{
    EnumerableLength, EnumerableOptions, EnumerableParser, MAX_ENUMERABLE_LENGTH,
};

use crate::error::TemplateResult;
use crate::table::{TableNavigator, TableParser};

/// Decodes one value at the cursor
pub trait AtomicValueParser {
    /// Description of the target type, as understood by the binding layer
    type ModelType: ?Sized;
    /// Decoded value; `Default` provides placeholders for unreadable slots
    type Value: Default;

    /// Try to decode a value of `model_type` starting at the cursor
    ///
    /// May move the cursor. Returns `None` if no value of that type is there.
    fn try_parse<N: TableNavigator>(
        &self,
        table: &mut TableParser<N>,
        model_type: &Self::ModelType,
    ) -> Option<Self::Value>;
}

/// Selects the atomic parser for a model type
pub trait ParserCollection {
    type Parser: AtomicValueParser;

    /// Parser able to decode `model_type`
    fn atomic_value_parser(
        &self,
        model_type: &<Self::Parser as AtomicValueParser>::ModelType,
    ) -> TemplateResult<&Self::Parser>;
}

/// Model type accepted by a collection's parsers
pub type ModelTypeOf<C> = <<C as ParserCollection>::Parser as AtomicValueParser>::ModelType;

/// Value produced by a collection's parsers
pub type ValueOf<C> = <<C as ParserCollection>::Parser as AtomicValueParser>::Value;
