//! Documentation generation entry point
//!
//! Wires the two passes together: build the link table over the whole
//! document, then render each module in document order. The caller gets
//! back one (path, content) pair per module and decides how to persist
//! them.

use std::collections::HashMap;

use crate::crosslink::LinkTable;
use crate::error::RenderError;
use crate::markdown::MarkdownRenderer;
use crate::paths::PathResolver;
use crate::reflection::ReflectionDocument;

/// Configuration for a documentation run
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Absolute directory that output paths are computed relative to
    pub working_root: String,
    /// Prefix prepended verbatim to every generated link URL
    ///
    /// No separator is inserted between the base and the module path;
    /// include a trailing slash in the base when one is needed.
    pub url_base: String,
}

/// One rendered Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    /// Output path relative to the working root
    pub path: String,
    /// Rendered Markdown
    pub content: String,
}

/// Renders a reflection document into per-module Markdown files
pub struct DocGenerator {
    config: DocConfig,
    paths: PathResolver,
}

impl DocGenerator {
    /// Create a generator from its configuration
    pub fn new(config: DocConfig) -> Self {
        let paths = PathResolver::new(&config.working_root);
        Self { config, paths }
    }

    /// Render every module in the document
    ///
    /// The link table is built once before any rendering, so module
    /// order never affects link resolution. Entities that render to
    /// nothing are dropped; the rest are joined by a blank line. The
    /// first failure aborts the whole run with no partial output.
    pub fn generate(&self, document: &ReflectionDocument) -> Result<Vec<DocFile>, RenderError> {
        let links = LinkTable::build(document)?;
        let renderer = MarkdownRenderer::new(&links, &self.paths, &self.config.url_base);

        let mut seen_paths: HashMap<String, &str> = HashMap::new();
        let mut files = Vec::with_capacity(document.children.len());

        for module in &document.children {
            let path = self.paths.resolve(&module.original_name);
            if let Some(first) = seen_paths.insert(path.clone(), &module.original_name) {
                return Err(RenderError::PathCollision {
                    path,
                    first: first.to_string(),
                    second: module.original_name.clone(),
                });
            }

            let mut sections = Vec::new();
            for entity in &module.children {
                let rendered = renderer.render_entity(entity)?;
                if !rendered.is_empty() {
                    sections.push(rendered);
                }
            }

            files.push(DocFile {
                path,
                content: sections.join("\n\n"),
            });
        }

        Ok(files)
    }
}
