//! Descriptor grammar
//!
//! Grid regions are tagged with short colon-delimited descriptors:
//!
//! | shape | example |
//! |---|---|
//! | value | `Value:Invoice:Customer.Name` |
//! | form control | `CheckBox:Approved:Order.IsApproved` |
//! | template | `Template:Header:A1:C3` |
//!
//! The predicates on [`DescriptorGrammar`] never fail: a descriptor either
//! matches a shape or it doesn't. [`Descriptor::parse`] is the typed entry point
//! that turns a matching descriptor into its parts.

use std::fmt;
use std::str::FromStr;

use cellbind_core::{CellPosition, Rectangle};
use lazy_regex::{lazy_regex, Lazy, Regex};

use crate::error::{TemplateError, TemplateResult};
use crate::path::ModelPath;

static PATH_REGEX: Lazy<Regex> =
    lazy_regex!(r"^[A-Za-z]\w*(\[[^\[\]]*\])?(\.[A-Za-z]\w*(\[[^\[\]]*\])?)*$");

static CELL_REFERENCE_REGEX: Lazy<Regex> = lazy_regex!(r"[A-Z]+[1-9][0-9]*");

static EXACT_CELL_REFERENCE_REGEX: Lazy<Regex> = lazy_regex!(r"^[A-Z]+[1-9][0-9]*$");

static SHARED: DescriptorGrammar = DescriptorGrammar { _private: () };

const VALUE_KEYWORD: &str = "Value";
const TEMPLATE_KEYWORD: &str = "Template";

/// Form controls a descriptor can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormControlType {
    CheckBox,
    DropDown,
}

impl FormControlType {
    /// Name as written in a descriptor
    pub fn as_str(&self) -> &'static str {
        match self {
            FormControlType::CheckBox => "CheckBox",
            FormControlType::DropDown => "DropDown",
        }
    }
}

impl fmt::Display for FormControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormControlType {
    type Err = TemplateError;

    fn from_str(s: &str) -> TemplateResult<Self> {
        match s {
            "CheckBox" => Ok(FormControlType::CheckBox),
            "DropDown" => Ok(FormControlType::DropDown),
            _ => Err(TemplateError::MalformedDescriptor(s.to_string())),
        }
    }
}

/// Recognizer for descriptor strings
///
/// Stateless; all patterns are compiled once per process on first use. Get the
/// process-wide instance with [`DescriptorGrammar::shared`].
#[derive(Debug)]
pub struct DescriptorGrammar {
    _private: (),
}

impl DescriptorGrammar {
    /// Shared grammar instance
    pub fn shared() -> &'static DescriptorGrammar {
        &SHARED
    }

    /// Split a descriptor into its colon-separated tokens
    ///
    /// An empty descriptor has no tokens.
    pub fn split_descriptor<'a>(&self, descriptor: &'a str) -> Vec<&'a str> {
        if descriptor.is_empty() {
            return Vec::new();
        }
        descriptor.split(':').collect()
    }

    /// Check if a string is a well-formed model path
    pub fn is_model_path(&self, path: &str) -> bool {
        PATH_REGEX.is_match(path)
    }

    /// Three tokens, the last one a model path
    pub fn is_abstract_value_descriptor(&self, descriptor: &str) -> bool {
        let parts = self.split_descriptor(descriptor);
        if parts.len() != 3 || parts[2].is_empty() {
            return false;
        }
        self.is_model_path(parts[2])
    }

    /// `Value:<name>:<path>`
    pub fn is_value_descriptor(&self, descriptor: &str) -> bool {
        let parts = self.split_descriptor(descriptor);
        self.is_abstract_value_descriptor(descriptor) && parts[0] == VALUE_KEYWORD
    }

    /// `<CheckBox|DropDown>:<control name>:<path>`
    pub fn is_form_descriptor(&self, descriptor: &str) -> bool {
        let parts = self.split_descriptor(descriptor);
        self.is_abstract_value_descriptor(descriptor)
            && !parts[1].is_empty()
            && parts[0].parse::<FormControlType>().is_ok()
    }

    /// `Template:<name>:<cell ref>:<cell ref>`
    pub fn is_template_descriptor(&self, descriptor: &str) -> bool {
        let parts = self.split_descriptor(descriptor);
        if parts.len() != 4 || parts[0] != TEMPLATE_KEYWORD || parts[1].is_empty() {
            return false;
        }

        EXACT_CELL_REFERENCE_REGEX.is_match(parts[2])
            && EXACT_CELL_REFERENCE_REGEX.is_match(parts[3])
    }

    /// Label of a value descriptor (its second token)
    pub fn template_name_from_value_descriptor<'a>(&self, descriptor: &'a str) -> Option<&'a str> {
        if !self.is_value_descriptor(descriptor) {
            return None;
        }
        self.split_descriptor(descriptor).get(1).copied()
    }

    /// Control name of a form descriptor
    pub fn form_control_name<'a>(&self, descriptor: &'a str) -> Option<&'a str> {
        if !self.is_form_descriptor(descriptor) {
            return None;
        }
        self.split_descriptor(descriptor).get(1).copied()
    }

    /// Control type of a form descriptor
    pub fn form_control_type(&self, descriptor: &str) -> Option<FormControlType> {
        if !self.is_form_descriptor(descriptor) {
            return None;
        }
        self.split_descriptor(descriptor)
            .first()
            .and_then(|control| control.parse().ok())
    }

    /// Region declared by a template descriptor
    ///
    /// Returns `None` for anything that isn't a valid template descriptor, and
    /// for corners that don't form a rectangle (lower-right above or left of
    /// upper-left).
    pub fn try_extract_coordinates(&self, descriptor: &str) -> Option<Rectangle> {
        if !self.is_template_descriptor(descriptor) {
            return None;
        }
        self.extract_coordinates(descriptor).ok()
    }

    fn extract_coordinates(&self, descriptor: &str) -> TemplateResult<Rectangle> {
        let parts = self.split_descriptor(descriptor);
        let corner = |token: &str| -> TemplateResult<CellPosition> {
            let reference = CELL_REFERENCE_REGEX
                .find(token)
                .ok_or_else(|| TemplateError::MalformedDescriptor(descriptor.to_string()))?;
            Ok(CellPosition::parse(reference.as_str())?)
        };

        let upper_left = corner(parts[2])?;
        let lower_right = corner(parts[3])?;
        Ok(Rectangle::new(upper_left, lower_right)?)
    }
}

/// A classified descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// `Value:<name>:<path>`
    Value { name: String, path: ModelPath },
    /// `<control type>:<control name>:<path>`
    Form {
        control_type: FormControlType,
        control_name: String,
        path: ModelPath,
    },
    /// `Template:<name>:<upper left>:<lower right>`
    Template { name: String, region: Rectangle },
}

impl Descriptor {
    /// Classify and split a descriptor
    ///
    /// # Example
    /// ```rust
    /// use cellbind_template::Descriptor;
    ///
    /// let descriptor = Descriptor::parse("Template:Header:A1:C3").unwrap();
    /// assert!(matches!(descriptor, Descriptor::Template { .. }));
    /// ```
    pub fn parse(descriptor: &str) -> TemplateResult<Self> {
        let grammar = DescriptorGrammar::shared();
        let parts = grammar.split_descriptor(descriptor);

        if grammar.is_form_descriptor(descriptor) {
            return Ok(Descriptor::Form {
                control_type: parts[0].parse()?,
                control_name: parts[1].to_string(),
                path: ModelPath::parse(parts[2])?,
            });
        }
        if grammar.is_value_descriptor(descriptor) {
            return Ok(Descriptor::Value {
                name: parts[1].to_string(),
                path: ModelPath::parse(parts[2])?,
            });
        }
        if grammar.is_template_descriptor(descriptor) {
            return Ok(Descriptor::Template {
                name: parts[1].to_string(),
                region: grammar.extract_coordinates(descriptor)?,
            });
        }

        Err(TemplateError::MalformedDescriptor(descriptor.to_string()))
    }

    /// Bound model path, if the descriptor carries one
    pub fn path(&self) -> Option<&ModelPath> {
        match self {
            Descriptor::Value { path, .. } | Descriptor::Form { path, .. } => Some(path),
            Descriptor::Template { .. } => None,
        }
    }
}

impl FromStr for Descriptor {
    type Err = TemplateError;

    fn from_str(s: &str) -> TemplateResult<Self> {
        Self::parse(s)
    }
}
