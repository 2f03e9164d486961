//! Enumerable parser
//!
//! Decodes a sequence of elements laid out as repeated layers on the grid
//! (one element per row of a list, for example).

use log::{debug, trace, warn};

use super::{AtomicValueParser, ModelTypeOf, ParserCollection, ValueOf};
use crate::error::{TemplateError, TemplateResult};
use crate::table::{TableNavigator, TableParser};

/// Longest sequence the enumerable parser will decode
pub const MAX_ENUMERABLE_LENGTH: usize = 10_000;

/// Declared length of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerableLength {
    /// Length not known up front: decode until an element fails to parse
    Unbounded,
    /// Exactly this many elements
    Exact(usize),
}

impl EnumerableLength {
    /// Interpret a raw element count, where `-1` means unbounded
    pub fn from_count(count: i64) -> TemplateResult<Self> {
        match count {
            -1 => Ok(EnumerableLength::Unbounded),
            n if n >= 0 => Ok(EnumerableLength::Exact(n as usize)),
            n => Err(TemplateError::InvalidLength(n)),
        }
    }
}

impl TryFrom<i64> for EnumerableLength {
    type Error = TemplateError;

    fn try_from(count: i64) -> TemplateResult<Self> {
        Self::from_count(count)
    }
}

/// Options for decoding sequences
#[derive(Debug, Clone)]
pub struct EnumerableOptions {
    /// Maximum number of elements (default and upper bound: [`MAX_ENUMERABLE_LENGTH`])
    pub max_length: usize,
}

impl Default for EnumerableOptions {
    fn default() -> Self {
        Self {
            max_length: MAX_ENUMERABLE_LENGTH,
        }
    }
}

/// Decodes sequences by running an atomic parser once per layer
#[derive(Debug)]
pub struct EnumerableParser<C> {
    parser_collection: C,
    options: EnumerableOptions,
}

impl<C: ParserCollection> EnumerableParser<C> {
    /// Create an enumerable parser with default options
    pub fn new(parser_collection: C) -> Self {
        Self::with_options(parser_collection, EnumerableOptions::default())
    }

    /// Create an enumerable parser with custom options
    pub fn with_options(parser_collection: C, options: EnumerableOptions) -> Self {
        Self {
            parser_collection,
            options,
        }
    }

    /// Effective element limit
    pub fn max_length(&self) -> usize {
        self.options.max_length.min(MAX_ENUMERABLE_LENGTH)
    }

    /// Decode a sequence of `model_type` elements starting at the cursor
    ///
    /// Element `i` is parsed in layer `i`; the table advances one layer before
    /// every element but the first. Each attempt runs between a push and a pop
    /// of the table state, so the stack depth is the same before and after
    /// this call. For every element a mapping from `[i]` to the cell the
    /// cursor ended on is reported through `add_field_mapping`.
    ///
    /// With [`EnumerableLength::Unbounded`] decoding stops at the first element
    /// that fails to parse; that element is not part of the result. With
    /// [`EnumerableLength::Exact`] exactly that many elements are returned and
    /// elements that fail to parse are replaced by `Default::default()`.
    pub fn parse<N, F>(
        &self,
        table: &mut TableParser<N>,
        model_type: &ModelTypeOf<C>,
        count: EnumerableLength,
        mut add_field_mapping: F,
    ) -> TemplateResult<Vec<ValueOf<C>>>
    where
        N: TableNavigator,
        F: FnMut(&str, &str),
    {
        let limit = self.max_length();
        if let EnumerableLength::Exact(length) = count {
            if length > limit {
                return Err(TemplateError::CollectionTooLarge { length, limit });
            }
        }

        let parser = self.parser_collection.atomic_value_parser(model_type)?;
        debug!("Decoding {:?} elements starting at {}", count, table.cursor());

        let mut result = match count {
            EnumerableLength::Exact(length) => Vec::with_capacity(length),
            EnumerableLength::Unbounded => Vec::new(),
        };

        for index in 0.. {
            match count {
                EnumerableLength::Exact(length) if index >= length => break,
                EnumerableLength::Unbounded if index >= limit => {
                    if Self::next_layer_parses(parser, table, model_type)? {
                        warn!(
                            "Unbounded sequence at {} exceeds {} elements",
                            table.cursor(),
                            limit
                        );
                        return Err(TemplateError::CollectionTooLarge {
                            length: limit + 1,
                            limit,
                        });
                    }
                    break;
                }
                _ => {}
            }

            if index != 0 {
                match table.move_to_next_layer() {
                    Ok(()) => {}
                    Err(e) if count == EnumerableLength::Unbounded => {
                        debug!("Sequence ended at the grid edge after {} elements: {}", index, e);
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }

            table.push_state();
            let item = match parser.try_parse(table, model_type) {
                Some(item) => item,
                None if count == EnumerableLength::Unbounded => {
                    table.pop_state()?;
                    debug!("Sequence ended after {} elements at {}", index, table.cursor());
                    break;
                }
                None => {
                    warn!(
                        "Element [{}] at {} could not be parsed, using default",
                        index,
                        table.cursor()
                    );
                    Default::default()
                }
            };

            let cell = table.cursor().to_reference();
            trace!("Decoded element [{}] ending at {}", index, cell);
            add_field_mapping(&format!("[{}]", index), &cell);
            result.push(item);
            table.pop_state()?;
        }

        Ok(result)
    }

    /// Check whether one more element would parse past the limit
    fn next_layer_parses<N: TableNavigator>(
        parser: &C::Parser,
        table: &mut TableParser<N>,
        model_type: &ModelTypeOf<C>,
    ) -> TemplateResult<bool> {
        if table.move_to_next_layer().is_err() {
            return Ok(false);
        }
        table.push_state();
        let parsed = parser.try_parse(table, model_type).is_some();
        table.pop_state()?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::FieldMappings;
    use crate::table::RowLayerNavigator;
    use cellbind_core::{CellPosition, Error, MAX_ROWS};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Reads the text of the cell under the cursor
    struct TextCells {
        cells: HashMap<CellPosition, String>,
        attempts: Cell<usize>,
    }

    impl TextCells {
        fn column(values: &[Option<&str>]) -> Self {
            let cells = values
                .iter()
                .enumerate()
                .filter_map(|(i, value)| {
                    value.map(|v| (CellPosition::new(i as u32 + 1, 1), v.to_string()))
                })
                .collect();
            Self {
                cells,
                attempts: Cell::new(0),
            }
        }
    }

    impl AtomicValueParser for TextCells {
        type ModelType = str;
        type Value = String;

        fn try_parse<N: TableNavigator>(
            &self,
            table: &mut TableParser<N>,
            _model_type: &str,
        ) -> Option<String> {
            self.attempts.set(self.attempts.get() + 1);
            self.cells.get(&table.cursor()).cloned()
        }
    }

    impl ParserCollection for TextCells {
        type Parser = TextCells;

        fn atomic_value_parser(&self, model_type: &str) -> TemplateResult<&TextCells> {
            match model_type {
                "string" => Ok(self),
                other => Err(TemplateError::UnsupportedModelType(other.to_string())),
            }
        }
    }

    /// Parses something everywhere
    struct Endless;

    impl AtomicValueParser for Endless {
        type ModelType = str;
        type Value = u32;

        fn try_parse<N: TableNavigator>(
            &self,
            table: &mut TableParser<N>,
            _model_type: &str,
        ) -> Option<u32> {
            Some(table.cursor().row)
        }
    }

    impl ParserCollection for Endless {
        type Parser = Endless;

        fn atomic_value_parser(&self, _model_type: &str) -> TemplateResult<&Endless> {
            Ok(self)
        }
    }

    fn table() -> TableParser<RowLayerNavigator> {
        TableParser::new(CellPosition::new(1, 1), RowLayerNavigator::default()).unwrap()
    }

    #[test]
    fn test_length_from_count() {
        assert_eq!(
            EnumerableLength::from_count(-1),
            Ok(EnumerableLength::Unbounded)
        );
        assert_eq!(
            EnumerableLength::try_from(5),
            Ok(EnumerableLength::Exact(5))
        );
        assert_eq!(
            EnumerableLength::from_count(-2),
            Err(TemplateError::InvalidLength(-2))
        );
    }

    #[test]
    fn test_exact_length_fills_placeholders() {
        let parser = EnumerableParser::new(TextCells::column(&[
            Some("a"),
            Some("b"),
            None,
            Some("d"),
            Some("e"),
        ]));
        let mut table = table();
        let mut mappings = FieldMappings::new();

        let items = parser
            .parse(
                &mut table,
                "string",
                EnumerableLength::Exact(5),
                mappings.recorder(),
            )
            .unwrap();

        assert_eq!(items, vec!["a", "b", "", "d", "e"]);
        assert_eq!(mappings.len(), 5);
        assert_eq!(mappings.get("[0]"), Some("A1"));
        assert_eq!(mappings.get("[2]"), Some("A3"));
        assert_eq!(mappings.get("[4]"), Some("A5"));
    }

    #[test]
    fn test_unbounded_stops_at_first_failure() {
        let parser = EnumerableParser::new(TextCells::column(&[
            Some("a"),
            Some("b"),
            None,
            Some("d"),
        ]));
        let mut table = table();
        let mut mappings = FieldMappings::new();

        let items = parser
            .parse(
                &mut table,
                "string",
                EnumerableLength::Unbounded,
                mappings.recorder(),
            )
            .unwrap();

        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings.get("[2]"), None);
    }

    #[test]
    fn test_exact_zero() {
        let parser = EnumerableParser::new(TextCells::column(&[Some("a")]));
        let items = parser
            .parse(&mut table(), "string", EnumerableLength::Exact(0), |_, _| {})
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(parser.parser_collection.attempts.get(), 0);
    }

    #[test]
    fn test_too_large_fails_before_parsing() {
        let parser = EnumerableParser::new(TextCells::column(&[Some("a")]));
        let result = parser.parse(
            &mut table(),
            "string",
            EnumerableLength::from_count(10_001).unwrap(),
            |_, _| {},
        );

        assert_eq!(
            result,
            Err(TemplateError::CollectionTooLarge {
                length: 10_001,
                limit: MAX_ENUMERABLE_LENGTH
            })
        );
        assert_eq!(parser.parser_collection.attempts.get(), 0);
    }

    #[test]
    fn test_configured_limit() {
        let parser = EnumerableParser::with_options(
            TextCells::column(&[Some("a")]),
            EnumerableOptions { max_length: 3 },
        );
        assert!(matches!(
            parser.parse(&mut table(), "string", EnumerableLength::Exact(4), |_, _| {}),
            Err(TemplateError::CollectionTooLarge { limit: 3, .. })
        ));

        let parser = EnumerableParser::with_options(
            Endless,
            EnumerableOptions {
                max_length: usize::MAX,
            },
        );
        assert_eq!(parser.max_length(), MAX_ENUMERABLE_LENGTH);
    }

    #[test]
    fn test_unbounded_past_limit() {
        let parser =
            EnumerableParser::with_options(Endless, EnumerableOptions { max_length: 10 });
        let mut table = table();

        let result = parser.parse(&mut table, "number", EnumerableLength::Unbounded, |_, _| {});

        assert_eq!(
            result,
            Err(TemplateError::CollectionTooLarge {
                length: 11,
                limit: 10
            })
        );
        assert_eq!(table.stack_depth(), 0);
    }

    #[test]
    fn test_unbounded_exactly_at_limit() {
        let parser = EnumerableParser::with_options(
            TextCells::column(&[Some("a"), Some("b"), Some("c")]),
            EnumerableOptions { max_length: 3 },
        );

        let items = parser
            .parse(&mut table(), "string", EnumerableLength::Unbounded, |_, _| {})
            .unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sequence_at_grid_edge() {
        let parser = EnumerableParser::new(Endless);
        let origin = CellPosition::new(MAX_ROWS - 1, 1);

        let mut table = TableParser::new(origin, RowLayerNavigator::default()).unwrap();
        let items = parser
            .parse(&mut table, "number", EnumerableLength::Unbounded, |_, _| {})
            .unwrap();
        assert_eq!(items, vec![MAX_ROWS - 1, MAX_ROWS]);
        assert_eq!(table.stack_depth(), 0);

        let mut table = TableParser::new(origin, RowLayerNavigator::default()).unwrap();
        assert_eq!(
            parser.parse(&mut table, "number", EnumerableLength::Exact(3), |_, _| {}),
            Err(TemplateError::Geometry(Error::RowOutOfBounds(
                MAX_ROWS + 1,
                MAX_ROWS
            )))
        );
        assert_eq!(table.stack_depth(), 0);
    }

    #[test]
    fn test_stack_depth_is_preserved() {
        let parser = EnumerableParser::new(TextCells::column(&[Some("a"), None, Some("c")]));
        let mut table = table();
        table.push_state();

        for count in [EnumerableLength::Exact(3), EnumerableLength::Unbounded] {
            parser
                .parse(&mut table, "string", count, |_, _| {})
                .unwrap();
            assert_eq!(table.stack_depth(), 1);
        }
    }

    #[test]
    fn test_unsupported_model_type() {
        let parser = EnumerableParser::new(TextCells::column(&[Some("a")]));
        assert_eq!(
            parser.parse(&mut table(), "date", EnumerableLength::Unbounded, |_, _| {}),
            Err(TemplateError::UnsupportedModelType("date".into()))
        );
    }
}
