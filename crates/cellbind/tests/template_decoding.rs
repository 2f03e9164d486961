//! End-to-end tests: scan a template sheet, then decode the list it describes

use std::collections::HashMap;

use cellbind::prelude::*;
use cellbind::ColumnLayerNavigator;
use pretty_assertions::assert_eq;

/// Minimal in-memory sheet
struct Sheet {
    cells: HashMap<CellPosition, String>,
}

impl Sheet {
    fn new(cells: &[(&str, &str)]) -> Self {
        let cells = cells
            .iter()
            .map(|(reference, text)| (reference.parse().unwrap(), text.to_string()))
            .collect();
        Self { cells }
    }

    fn text(&self, position: CellPosition) -> Option<&str> {
        self.cells.get(&position).map(String::as_str)
    }

    fn descriptors(&self) -> Vec<(CellPosition, &str)> {
        let mut cells: Vec<_> = self
            .cells
            .iter()
            .map(|(position, text)| (*position, text.as_str()))
            .collect();
        cells.sort_by_key(|(position, _)| *position);
        cells
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Line {
    name: String,
    price: f64,
}

/// Reads a `Line` from two adjacent cells: name, then price
struct LineParser<'a> {
    sheet: &'a Sheet,
}

impl AtomicValueParser for LineParser<'_> {
    type ModelType = str;
    type Value = Line;

    fn try_parse<N: TableNavigator>(
        &self,
        table: &mut TableParser<N>,
        _model_type: &str,
    ) -> Option<Line> {
        let name = self.sheet.text(table.cursor())?.to_string();
        table.move_right(1).ok()?;
        let price = self.sheet.text(table.cursor())?.parse().ok()?;
        Some(Line { name, price })
    }
}

impl ParserCollection for LineParser<'_> {
    type Parser = Self;

    fn atomic_value_parser(&self, model_type: &str) -> TemplateResult<&Self> {
        match model_type {
            "Line" => Ok(self),
            other => Err(TemplateError::UnsupportedModelType(other.to_string())),
        }
    }
}

fn rows_from(origin: CellPosition) -> TableParser<RowLayerNavigator> {
    TableParser::new(origin, RowLayerNavigator::default()).unwrap()
}

fn invoice_sheet() -> Sheet {
    Sheet::new(&[
        ("A1", "Template:Lines:A1:B1"),
        ("C1", "Value:Lines:Lines[].Name"),
        ("A3", "Widget"),
        ("B3", "2.5"),
        ("A4", "Gadget"),
        ("B4", "10"),
        ("A5", "Gizmo"),
        ("B5", "n/a"),
        ("A6", "Doohickey"),
        ("B6", "1"),
    ])
}

#[test]
fn test_scan_and_decode_open_list() {
    let sheet = invoice_sheet();
    let bindings = SheetBindings::scan(sheet.descriptors(), &ScanOptions::default()).unwrap();

    let lines = bindings.catalog().get("Lines").unwrap();
    assert_eq!(lines.size(), ObjectSize::new(2, 1));

    let path = &bindings.values()[0].path;
    assert!(path.first().is_array_element());
    assert_eq!(path.first().name(), "Lines");

    let parser = EnumerableParser::new(LineParser { sheet: &sheet });
    let mut table = rows_from(CellPosition::new(3, 1));
    let mut mappings = FieldMappings::new();

    let items = parser
        .parse(
            &mut table,
            "Line",
            EnumerableLength::Unbounded,
            mappings.recorder(),
        )
        .unwrap();

    assert_eq!(
        items,
        vec![
            Line {
                name: "Widget".into(),
                price: 2.5
            },
            Line {
                name: "Gadget".into(),
                price: 10.0
            },
        ]
    );
    assert_eq!(mappings.get("[0]"), Some("B3"));
    assert_eq!(mappings.get("[1]"), Some("B4"));
    for mapping in &mappings {
        assert!(mapping.cell.parse::<CellPosition>().is_ok());
    }
    assert_eq!(table.stack_depth(), 0);
    assert_eq!(table.cursor(), CellPosition::new(5, 1));
}

#[test]
fn test_decode_known_length_with_gap() {
    let sheet = invoice_sheet();
    let parser = EnumerableParser::new(LineParser { sheet: &sheet });
    let mut table = rows_from(CellPosition::new(3, 1));
    let mut mappings = FieldMappings::new();

    let count = EnumerableLength::from_count(4).unwrap();
    let items = parser
        .parse(&mut table, "Line", count, mappings.recorder())
        .unwrap();

    assert_eq!(items.len(), 4);
    assert_eq!(items[2], Line::default());
    assert_eq!(items[3].name, "Doohickey");

    let mut nested = FieldMappings::new();
    nested.extend_nested("Lines", mappings);
    assert_eq!(nested.get("Lines[3]"), Some("B6"));
}

#[test]
fn test_decode_horizontal_list() {
    let sheet = Sheet::new(&[("B2", "a"), ("C2", "1"), ("D2", "b"), ("E2", "2")]);
    let parser = EnumerableParser::new(LineParser { sheet: &sheet });
    let navigator = ColumnLayerNavigator::new(2);
    let mut table = TableParser::new(CellPosition::new(2, 2), navigator).unwrap();

    let items = parser
        .parse(&mut table, "Line", EnumerableLength::Unbounded, |_, _| {})
        .unwrap();

    let names: Vec<_> = items.iter().map(|line| line.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_decoding_cannot_start_off_grid() {
    let result = TableParser::new(CellPosition::new(0, 1), RowLayerNavigator::default());
    assert!(matches!(result, Err(TemplateError::Geometry(_))));
}

#[test]
fn test_too_many_lines() {
    let sheet = invoice_sheet();
    let parser = EnumerableParser::new(LineParser { sheet: &sheet });
    let mut table = rows_from(CellPosition::new(3, 1));

    let count = EnumerableLength::from_count(10_001).unwrap();
    assert!(matches!(
        parser.parse(&mut table, "Line", count, |_, _| {}),
        Err(TemplateError::CollectionTooLarge { .. })
    ));
}

#[test]
fn test_keyed_paths() {
    let descriptor = Descriptor::parse("Value:Totals:Totals[\"net\"].Amount").unwrap();
    let part = &descriptor.path().unwrap().parts()[0];

    assert!(part.is_keyed_element());
    let key = part.key().unwrap();
    assert_eq!(
        cellbind::resolve_key(key, KeyType::Text).unwrap(),
        CollectionKey::Text("net".into())
    );
    assert!(matches!(
        cellbind::resolve_key(key, KeyType::Integer),
        Err(TemplateError::KeyTypeMismatch { .. })
    ));
}
