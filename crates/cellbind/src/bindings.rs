//! Sheet-level descriptor scanning
//!
//! Collects every descriptor found in a sheet's cells into value bindings,
//! form control bindings and template regions.
//!
//! # Example
//!
//! ```rust
//! use cellbind::prelude::*;
//!
//! let cells = [
//!     (CellPosition::new(1, 1), "Template:Header:A1:C2"),
//!     (CellPosition::new(1, 2), "Value:Header:Customer.Name"),
//!     (CellPosition::new(2, 2), "CheckBox:Paid:Invoice.IsPaid"),
//!     (CellPosition::new(5, 1), "Total"),
//! ];
//!
//! let bindings = SheetBindings::scan(cells, &ScanOptions::default()).unwrap();
//! assert_eq!(bindings.values().len(), 1);
//! assert_eq!(bindings.controls().len(), 1);
//! assert_eq!(bindings.values_in("Header").count(), 1);
//! ```

use cellbind_core::{CellPosition, Rectangle};
use cellbind_template::{
    Descriptor, FormControlType, ModelPath, TemplateCatalog, TemplateError, TemplateResult,
};
use log::{debug, warn};

/// Leading tokens that mark a cell as carrying a descriptor
const DESCRIPTOR_KEYWORDS: [&str; 4] = ["Value", "Template", "CheckBox", "DropDown"];

/// Options for scanning a sheet
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Fail on cells that look like descriptors but are malformed or declare
    /// an already declared template (default: false, such cells are skipped)
    pub strict: bool,
    /// Fail if two template regions share cells (default: true)
    pub reject_overlaps: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            strict: false,
            reject_overlaps: true,
        }
    }
}

/// A cell bound to a model value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueBinding {
    /// Cell carrying the descriptor
    pub position: CellPosition,
    /// Label of the descriptor (usually the enclosing template)
    pub name: String,
    /// Bound model path
    pub path: ModelPath,
}

/// A form control bound to a model value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    /// Cell carrying the descriptor
    pub position: CellPosition,
    /// Kind of control
    pub control_type: FormControlType,
    /// Control name
    pub control_name: String,
    /// Bound model path
    pub path: ModelPath,
}

/// Everything declared in a sheet
#[derive(Debug, Default)]
pub struct SheetBindings {
    values: Vec<ValueBinding>,
    controls: Vec<FormBinding>,
    catalog: TemplateCatalog,
}

impl SheetBindings {
    /// Scan `(position, text)` pairs for descriptors
    ///
    /// Cells whose text doesn't start with a descriptor keyword are ordinary
    /// content and ignored.
    pub fn scan<'a, I>(cells: I, options: &ScanOptions) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = (CellPosition, &'a str)>,
    {
        let mut bindings = Self::default();

        for (position, text) in cells {
            if !looks_like_descriptor(text) {
                continue;
            }

            let descriptor = match Descriptor::parse(text) {
                Ok(descriptor) => descriptor,
                Err(e) if options.strict => return Err(e),
                Err(e) => {
                    warn!("Skipping descriptor at {}: {}", position, e);
                    continue;
                }
            };

            match descriptor {
                Descriptor::Value { name, path } => bindings.values.push(ValueBinding {
                    position,
                    name,
                    path,
                }),
                Descriptor::Form {
                    control_type,
                    control_name,
                    path,
                } => bindings.controls.push(FormBinding {
                    position,
                    control_type,
                    control_name,
                    path,
                }),
                Descriptor::Template { name, region } => {
                    match bindings.catalog.insert_region(name, region) {
                        Ok(()) => {}
                        Err(e) if options.strict => return Err(e),
                        Err(e) => warn!("Skipping template at {}: {}", position, e),
                    }
                }
            }
        }

        if options.reject_overlaps {
            if let Some((first, second)) = bindings.catalog.overlaps().into_iter().next() {
                return Err(TemplateError::OverlappingTemplates(
                    first.to_string(),
                    second.to_string(),
                ));
            }
        }

        debug!(
            "Scanned {} value bindings, {} form controls, {} templates",
            bindings.values.len(),
            bindings.controls.len(),
            bindings.catalog.len()
        );
        Ok(bindings)
    }

    /// Value bindings in scan order
    pub fn values(&self) -> &[ValueBinding] {
        &self.values
    }

    /// Form control bindings in scan order
    pub fn controls(&self) -> &[FormBinding] {
        &self.controls
    }

    /// Declared template regions
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Value bindings placed inside a template's region
    pub fn values_in<'a>(&'a self, template: &str) -> impl Iterator<Item = &'a ValueBinding> + 'a {
        let region: Option<Rectangle> = self.catalog.get(template);
        self.values
            .iter()
            .filter(move |binding| region.map_or(false, |r| r.contains(&binding.position)))
    }
}

fn looks_like_descriptor(text: &str) -> bool {
    text.split_once(':')
        .map_or(false, |(head, _)| DESCRIPTOR_KEYWORDS.contains(&head))
}
