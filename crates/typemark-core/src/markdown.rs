//! Markdown rendering of reflection entities
//!
//! Each entity kind renders into a fixed Setext-heading layout. Type
//! references resolve through the prebuilt [`LinkTable`]; the compact
//! call-shape line inside fenced code blocks deliberately suppresses
//! links so it stays copy-pasteable.

use std::fmt::Write;

use crate::crosslink::{LinkEntry, LinkTable};
use crate::error::RenderError;
use crate::paths::PathResolver;
use crate::reflection::{Entity, EntityKind, Parameter, Signature, TypeParameter, TypeRef};

/// Renders entities to Markdown against a prebuilt link table
pub struct MarkdownRenderer<'a> {
    links: &'a LinkTable<'a>,
    paths: &'a PathResolver,
    url_base: &'a str,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer over an already-built link table
    pub fn new(links: &'a LinkTable<'a>, paths: &'a PathResolver, url_base: &'a str) -> Self {
        Self {
            links,
            paths,
            url_base,
        }
    }

    /// Render a single entity
    ///
    /// Dispatches on the entity kind. Functions render their first
    /// signature only; additional overloads are intentionally dropped.
    /// Kinds outside the documented set produce an empty string.
    pub fn render_entity(&self, entity: &Entity) -> Result<String, RenderError> {
        match entity.kind {
            EntityKind::Function => {
                let signature = entity
                    .signatures
                    .first()
                    .ok_or_else(|| RenderError::MissingSignature(entity.name.clone()))?;
                self.render_function(signature)
            }
            EntityKind::Interface => self.render_interface(entity),
            EntityKind::Property | EntityKind::Unknown(_) => Ok(String::new()),
        }
    }

    /// Render a function signature document
    ///
    /// Layout, in order: heading with generic parameter list, Signature
    /// section with the fenced call shape, optional Description section,
    /// and a Parameters section that is omitted entirely when the
    /// signature takes no parameters.
    fn render_function(&self, signature: &Signature) -> Result<String, RenderError> {
        let mut output = String::new();

        let type_params = render_type_params(&signature.type_parameters);
        writeln!(output, "Function [{}{}]", signature.name, type_params).unwrap();
        writeln!(output, "===").unwrap();
        writeln!(output).unwrap();

        writeln!(output, "Signature").unwrap();
        writeln!(output, "---").unwrap();
        self.write_signature_code(&mut output, signature)?;

        if let Some(text) = signature.comment.as_ref().and_then(|c| c.short_text.as_deref()) {
            writeln!(output).unwrap();
            writeln!(output, "Description").unwrap();
            writeln!(output, "---").unwrap();
            writeln!(output, "{text}").unwrap();
        }

        if !signature.parameters.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "Parameters").unwrap();
            writeln!(output, "---").unwrap();
            for param in &signature.parameters {
                self.write_parameter(&mut output, param)?;
            }
        }

        Ok(finish(output))
    }

    /// Render an interface document
    ///
    /// Layout, in order: anchor marker when the interface is linkable,
    /// heading, Signature section from the first call signature when one
    /// exists, and a Properties section listing property-kind children.
    fn render_interface(&self, entity: &Entity) -> Result<String, RenderError> {
        let mut output = String::new();

        if let Some(id) = entity.id {
            writeln!(output, "<a name=\"id-{id}\"></a>").unwrap();
        }
        writeln!(output, "Interface [{}]", entity.name).unwrap();
        writeln!(output, "===").unwrap();

        if let Some(signature) = entity.signatures.first() {
            writeln!(output).unwrap();
            writeln!(output, "Signature").unwrap();
            writeln!(output, "---").unwrap();
            self.write_signature_code(&mut output, signature)?;
        }

        let properties: Vec<&Entity> = entity
            .children
            .iter()
            .filter(|child| child.kind == EntityKind::Property)
            .collect();
        if !properties.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "Properties").unwrap();
            writeln!(output, "---").unwrap();
            for property in properties {
                let ty = property
                    .ty
                    .as_ref()
                    .ok_or_else(|| RenderError::MissingType(property.name.clone()))?;
                let rendered = self.render_type(ty, true)?;
                writeln!(output, "- {}: {}", property.name, rendered).unwrap();
            }
        }

        Ok(finish(output))
    }

    /// Write the fenced code block holding the compact call shape
    ///
    /// Both the argument types and the return type render with links
    /// suppressed; the one-line form must stay link free.
    fn write_signature_code(
        &self,
        output: &mut String,
        signature: &Signature,
    ) -> Result<(), RenderError> {
        let return_type = signature
            .return_type
            .as_ref()
            .ok_or_else(|| RenderError::MissingReturnType(signature.name.clone()))?;
        let args = self.render_args(&signature.parameters)?;
        let result = self.render_type(return_type, false)?;

        writeln!(output, "```typescript").unwrap();
        writeln!(output, "({args}) => {result}").unwrap();
        writeln!(output, "```").unwrap();
        Ok(())
    }

    /// Render the comma-separated argument list of the compact call shape
    fn render_args(&self, parameters: &[Parameter]) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(parameters.len());
        for param in parameters {
            let ty = param
                .ty
                .as_ref()
                .ok_or_else(|| RenderError::MissingType(param.name.clone()))?;
            parts.push(format!("{}: {}", param.name, self.render_type(ty, false)?));
        }
        Ok(parts.join(", "))
    }

    /// Write one parameter bullet, with its type link-resolved
    fn write_parameter(&self, output: &mut String, param: &Parameter) -> Result<(), RenderError> {
        let ty = param
            .ty
            .as_ref()
            .ok_or_else(|| RenderError::MissingType(param.name.clone()))?;
        let rendered = self.render_type(ty, true)?;
        match param.comment.as_ref().and_then(|c| c.text.as_deref()) {
            Some(text) => writeln!(output, "- **{}**: {} - {}", param.name, rendered, text).unwrap(),
            None => writeln!(output, "- **{}**: {}", param.name, rendered).unwrap(),
        }
        Ok(())
    }

    /// Render a type expression
    ///
    /// The type name renders verbatim. When links are allowed and the
    /// type is a reference, the target id must resolve through the link
    /// table; a missing entry is a hard failure, never a broken link.
    /// Generic arguments on a reference are accepted but contribute
    /// nothing to the rendered string.
    pub fn render_type(&self, ty: &TypeRef, allow_links: bool) -> Result<String, RenderError> {
        if allow_links {
            if let Some(id) = ty.reference_id() {
                let entry = self.links.resolve(id).ok_or_else(|| {
                    RenderError::UnresolvedReference {
                        id,
                        name: ty.name.clone(),
                    }
                })?;
                return Ok(self.build_link(entry, &ty.name));
            }
        }
        Ok(ty.name.clone())
    }

    /// Build a Markdown link to a linkable entity
    ///
    /// The URL is the configured base, the target module's output path,
    /// and the `id-<n>` fragment joined with no inserted separators: a
    /// base that needs a trailing slash must bring its own.
    pub fn build_link(&self, entry: &LinkEntry<'_>, text: &str) -> String {
        let path = self.paths.resolve(entry.module_path);
        format!("[{}]({}{}#id-{})", text, self.url_base, path, entry.id)
    }
}

/// Render a generic parameter list as escaped `\<T, U\>`
fn render_type_params(type_parameters: &[TypeParameter]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = type_parameters.iter().map(|p| p.name.as_str()).collect();
    format!("\\<{}\\>", names.join(", "))
}

/// Drop the trailing newline left by line-oriented writing
fn finish(mut output: String) -> String {
    output.truncate(output.trim_end_matches('\n').len());
    output
}
