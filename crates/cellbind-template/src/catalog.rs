//! Template catalog
//!
//! Collects the template regions declared on a sheet by `Template:` descriptors
//! and checks them against each other.

use ahash::AHashMap;
use cellbind_core::{CellPosition, Rectangle};
use log::debug;

use crate::descriptor::Descriptor;
use crate::error::{TemplateError, TemplateResult};

/// A named template region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegion {
    /// Template name
    pub name: String,
    /// Cells covered by the template
    pub region: Rectangle,
}

/// Template regions by name, in declaration order
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    regions: Vec<TemplateRegion>,
    index_map: AHashMap<String, usize>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from template descriptors
    pub fn from_descriptors<'a, I>(descriptors: I) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.insert(descriptor)?;
        }
        Ok(catalog)
    }

    /// Declare a template from its descriptor
    ///
    /// Returns the region the template covers.
    pub fn insert(&mut self, descriptor: &str) -> TemplateResult<Rectangle> {
        match Descriptor::parse(descriptor)? {
            Descriptor::Template { name, region } => {
                self.insert_region(name, region)?;
                Ok(region)
            }
            _ => Err(TemplateError::MalformedDescriptor(descriptor.to_string())),
        }
    }

    /// Declare a template region directly
    pub fn insert_region(
        &mut self,
        name: impl Into<String>,
        region: Rectangle,
    ) -> TemplateResult<()> {
        let name = name.into();
        if self.index_map.contains_key(&name) {
            return Err(TemplateError::DuplicateTemplate(name));
        }

        debug!("Template '{}' declared at {}", name, region);
        self.index_map.insert(name.clone(), self.regions.len());
        self.regions.push(TemplateRegion { name, region });
        Ok(())
    }

    /// Region of a template by name
    pub fn get(&self, name: &str) -> Option<Rectangle> {
        self.index_map
            .get(name)
            .map(|&idx| self.regions[idx].region)
    }

    /// First declared template covering a cell
    pub fn find_at(&self, position: &CellPosition) -> Option<&TemplateRegion> {
        self.regions
            .iter()
            .find(|template| template.region.contains(position))
    }

    /// Every pair of templates sharing at least one cell, in declaration order
    pub fn overlaps(&self) -> Vec<(&str, &str)> {
        let mut overlaps = Vec::new();
        for (i, first) in self.regions.iter().enumerate() {
            for second in &self.regions[i + 1..] {
                if first.region.intersects(&second.region) {
                    overlaps.push((first.name.as_str(), second.name.as_str()));
                }
            }
        }
        overlaps
    }

    /// Iterate over templates in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &TemplateRegion> {
        self.regions.iter()
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if no template has been declared
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
