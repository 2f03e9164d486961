//! Model paths
//!
//! A model path locates a value inside the bound object graph:
//! `Order.Lines[].Price`, `Totals["net"]`, `Rows[3].Name`. Parts are joined by
//! `.`; each part may carry an empty `[]` (every element of an array) or an
//! indexer (one element of a keyed collection).

use std::fmt;

use lazy_regex::regex_captures;

use crate::descriptor::DescriptorGrammar;
use crate::error::{TemplateError, TemplateResult};

/// One segment of a model path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPart {
    /// Plain member access: `Name`
    Plain(String),
    /// Every element of an array member: `Items[]`
    ArrayElement(String),
    /// One element of a keyed collection: `Items[3]`, `Totals["net"]`
    KeyedElement { name: String, key: String },
}

impl PathPart {
    /// Classify a single path segment
    ///
    /// `name[]` is an array element, `name[key]` (key without brackets) is a
    /// keyed element, anything else is taken as a plain member name.
    pub fn parse(part: &str) -> Self {
        if let Some((_, name)) = regex_captures!(r"^(\w+)\[\]$", part) {
            return PathPart::ArrayElement(name.to_string());
        }
        if let Some((_, name, key)) = regex_captures!(r"^(\w+)\[([^\[\]]+)\]$", part) {
            return PathPart::KeyedElement {
                name: name.to_string(),
                key: key.to_string(),
            };
        }
        PathPart::Plain(part.to_string())
    }

    /// Bare member name, without any brackets
    pub fn name(&self) -> &str {
        match self {
            PathPart::Plain(name) | PathPart::ArrayElement(name) => name,
            PathPart::KeyedElement { name, .. } => name,
        }
    }

    /// Raw indexer token of a keyed element
    pub fn key(&self) -> Option<&str> {
        match self {
            PathPart::KeyedElement { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Check if this part addresses every element of an array
    pub fn is_array_element(&self) -> bool {
        matches!(self, PathPart::ArrayElement(_))
    }

    /// Check if this part addresses one element of a keyed collection
    pub fn is_keyed_element(&self) -> bool {
        matches!(self, PathPart::KeyedElement { .. })
    }
}

impl fmt::Display for PathPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPart::Plain(name) => write!(f, "{}", name),
            PathPart::ArrayElement(name) => write!(f, "{}[]", name),
            PathPart::KeyedElement { name, key } => write!(f, "{}[{}]", name, key),
        }
    }
}

/// A validated model path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelPath {
    parts: Vec<PathPart>,
}

impl ModelPath {
    /// Parse and validate a model path
    ///
    /// # Example
    /// ```rust
    /// use cellbind_template::{ModelPath, PathPart};
    ///
    /// let path = ModelPath::parse("Order.Lines[].Price").unwrap();
    /// assert_eq!(path.parts()[1], PathPart::ArrayElement("Lines".into()));
    /// ```
    pub fn parse(path: &str) -> TemplateResult<Self> {
        if !DescriptorGrammar::shared().is_model_path(path) {
            return Err(TemplateError::InvalidModelPath(path.to_string()));
        }

        let parts = split_outside_brackets(path)
            .into_iter()
            .map(PathPart::parse)
            .collect();

        Ok(Self { parts })
    }

    /// Path parts in order, outermost first
    pub fn parts(&self) -> &[PathPart] {
        &self.parts
    }

    /// Outermost part
    pub fn first(&self) -> &PathPart {
        // A parsed path always has at least one part
        &self.parts[0]
    }

    /// Check if the path is a single member access
    pub fn is_single(&self) -> bool {
        self.parts.len() == 1
    }
}

impl fmt::Display for ModelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// Split a model path into its parts
pub fn split_path(path: &str) -> TemplateResult<Vec<PathPart>> {
    ModelPath::parse(path).map(|path| path.parts)
}

/// Split on `.`, ignoring dots inside `[...]` (quoted keys may contain them)
fn split_outside_brackets(path: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&path[start..]);

    parts
}

/// Declared key type of a keyed collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    Integer,
    Text,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyType::Integer => write!(f, "integer"),
            KeyType::Text => write!(f, "text"),
        }
    }
}

/// A resolved collection indexer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionKey {
    Integer(i32),
    Text(String),
}

impl CollectionKey {
    /// Key type this key indexes
    pub fn key_type(&self) -> KeyType {
        match self {
            CollectionKey::Integer(_) => KeyType::Integer,
            CollectionKey::Text(_) => KeyType::Text,
        }
    }
}

/// Resolve an indexer token against the collection's declared key type
///
/// A quoted token (`"net"`) is a text key, a base-10 token (`3`) is an integer
/// key. The token must match `expected` exactly; there is no conversion
/// between the two.
pub fn resolve_key(token: &str, expected: KeyType) -> TemplateResult<CollectionKey> {
    let key = if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        CollectionKey::Text(token[1..token.len() - 1].to_string())
    } else if let Ok(index) = token.parse::<i32>() {
        CollectionKey::Integer(index)
    } else {
        return Err(TemplateError::UnsupportedKeyKind(token.to_string()));
    };

    if key.key_type() != expected {
        return Err(TemplateError::KeyTypeMismatch {
            expected,
            actual: key.key_type(),
        });
    }

    Ok(key)
}
