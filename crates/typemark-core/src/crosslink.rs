//! Cross-reference link table
//!
//! Before any Markdown is rendered, the whole reflection document is
//! walked once to record which module every linkable entity lives in.
//! The resulting table is immutable for the rest of the run and is
//! handed to the renderer as an explicit argument.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::reflection::{Entity, ReflectionDocument};

/// Where a linkable entity lives
#[derive(Debug, Clone, Copy)]
pub struct LinkEntry<'a> {
    /// The id the entity declared
    pub id: u64,
    /// The entity itself
    pub entity: &'a Entity,
    /// Absolute source path of the module that owns the entity
    pub module_path: &'a str,
}

/// Immutable id-to-module index, built once per run
#[derive(Debug, Default)]
pub struct LinkTable<'a> {
    entries: HashMap<u64, LinkEntry<'a>>,
}

impl<'a> LinkTable<'a> {
    /// Build the table from a full reflection document
    ///
    /// Only direct children of modules are indexed: cross-references may
    /// target top-level declarations only, so nested entities (such as a
    /// property on an interface) never enter the table. Entities without
    /// an id are skipped. An id declared by two entities is rejected as
    /// malformed input.
    pub fn build(document: &'a ReflectionDocument) -> Result<Self, RenderError> {
        let mut entries: HashMap<u64, LinkEntry<'a>> = HashMap::new();

        for module in &document.children {
            for entity in &module.children {
                let Some(id) = entity.id else { continue };
                if let Some(existing) = entries.get(&id) {
                    return Err(RenderError::DuplicateId {
                        id,
                        first: existing.module_path.to_string(),
                        second: module.original_name.clone(),
                    });
                }
                entries.insert(
                    id,
                    LinkEntry {
                        id,
                        entity,
                        module_path: &module.original_name,
                    },
                );
            }
        }

        Ok(Self { entries })
    }

    /// Look up the entry for an entity id
    pub fn resolve(&self, id: u64) -> Option<&LinkEntry<'a>> {
        self.entries.get(&id)
    }

    /// Number of linkable entities in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
