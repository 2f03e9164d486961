//! Field-to-cell mappings recorded while decoding

/// A decoded field and the cell it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMapping {
    /// Path expression relative to the decoded value, e.g. `[3].Name`
    pub path: String,
    /// A1-style reference of the cell
    pub cell: String,
}

/// Append-only list of mappings, in decode order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMappings {
    entries: Vec<FieldMapping>,
}

impl FieldMappings {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping
    pub fn record(&mut self, path: impl Into<String>, cell: impl Into<String>) {
        self.entries.push(FieldMapping {
            path: path.into(),
            cell: cell.into(),
        });
    }

    /// Callback that records into this list, for decoders that report
    /// mappings through a closure
    pub fn recorder(&mut self) -> impl FnMut(&str, &str) + '_ {
        move |path, cell| self.record(path, cell)
    }

    /// Append another list with every path prefixed by `prefix`
    ///
    /// Index paths are attached directly (`Items` + `[3]` = `Items[3]`), member
    /// paths with a dot (`Order` + `Name` = `Order.Name`).
    pub fn extend_nested(&mut self, prefix: &str, nested: FieldMappings) {
        for FieldMapping { path, cell } in nested.entries {
            let path = if prefix.is_empty() {
                path
            } else if path.starts_with('[') {
                format!("{}{}", prefix, path)
            } else {
                format!("{}.{}", prefix, path)
            };
            self.entries.push(FieldMapping { path, cell });
        }
    }

    /// Cell recorded for a path, if any (first match in decode order)
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.cell.as_str())
    }

    /// Iterate over mappings in decode order
    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.iter()
    }

    /// Number of mappings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldMappings {
    type Item = &'a FieldMapping;
    type IntoIter = std::slice::Iter<'a, FieldMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
