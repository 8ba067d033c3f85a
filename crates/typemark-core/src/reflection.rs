//! Typed model of the analyzer's reflection document
//!
//! The external analyzer dumps a hierarchical module/entity tree as JSON;
//! this module mirrors that shape with serde so the boundary collaborator
//! can materialize a [`ReflectionDocument`] and hand it to the generator.
//! Field names follow the analyzer's JSON (`originalName`, `shortText`,
//! `typeParameter`, ...) via serde renames.

use serde::Deserialize;

/// Analyzer kind code for functions
const KIND_FUNCTION: u32 = 64;
/// Analyzer kind code for interfaces
const KIND_INTERFACE: u32 = 256;
/// Analyzer kind code for properties
const KIND_PROPERTY: u32 = 1024;

/// Root of a reflection document: an ordered sequence of modules
#[derive(Debug, Clone, Deserialize)]
pub struct ReflectionDocument {
    /// Documented modules in document order
    #[serde(default)]
    pub children: Vec<Module>,
}

impl ReflectionDocument {
    /// Parse a reflection document from the analyzer's JSON dump
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One source file in the reflection document
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    /// Absolute path of the source file, used to derive the output path
    #[serde(rename = "originalName")]
    pub original_name: String,
    /// Documented entities declared at the top level of the module
    #[serde(default)]
    pub children: Vec<Entity>,
}

/// A documented symbol
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Stable identifier, present on entities that may be link targets
    #[serde(default)]
    pub id: Option<u64>,
    /// Entity kind tag
    pub kind: EntityKind,
    /// Declared name
    pub name: String,
    /// Short description attached to the declaration
    #[serde(default)]
    pub comment: Option<Comment>,
    /// Call signatures (functions and callable interfaces)
    #[serde(default)]
    pub signatures: Vec<Signature>,
    /// Child entities (properties of an interface)
    #[serde(default)]
    pub children: Vec<Entity>,
    /// Declared type (properties)
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
}

/// Entity kinds understood by the renderer
///
/// The analyzer tags entities with numeric kind codes; the closed set
/// below covers the kinds this renderer documents. Every other code is
/// carried as `Unknown` and renders to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u32")]
pub enum EntityKind {
    Function,
    Interface,
    Property,
    Unknown(u32),
}

impl From<u32> for EntityKind {
    fn from(code: u32) -> Self {
        match code {
            KIND_FUNCTION => EntityKind::Function,
            KIND_INTERFACE => EntityKind::Interface,
            KIND_PROPERTY => EntityKind::Property,
            other => EntityKind::Unknown(other),
        }
    }
}

impl EntityKind {
    /// Get the display name for the entity kind
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Function => "Function",
            EntityKind::Interface => "Interface",
            EntityKind::Property => "Property",
            EntityKind::Unknown(_) => "Unknown",
        }
    }
}

/// Documentation comment attached to an entity, signature, or parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    /// Brief summary shown in Description sections
    #[serde(rename = "shortText", default)]
    pub short_text: Option<String>,
    /// Inline text shown next to parameter bullets
    #[serde(default)]
    pub text: Option<String>,
}

/// One call signature of a function or callable interface
#[derive(Debug, Clone, Deserialize)]
pub struct Signature {
    /// Name of the declaring function
    pub name: String,
    /// Description attached to this signature
    #[serde(default)]
    pub comment: Option<Comment>,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Generic type parameters in declaration order
    #[serde(rename = "typeParameter", default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Return type
    #[serde(rename = "type", default)]
    pub return_type: Option<TypeRef>,
}

/// A function parameter
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter type
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
    /// Per-parameter documentation
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// A generic type parameter
#[derive(Debug, Clone, Deserialize)]
pub struct TypeParameter {
    /// Type parameter name
    pub name: String,
}

/// A type expression in parameter, property, or return position
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    /// Type flavor tag from the analyzer
    #[serde(rename = "type", default)]
    pub flavor: TypeFlavor,
    /// Type name, rendered verbatim
    pub name: String,
    /// Target entity id, present on reference types
    #[serde(default)]
    pub id: Option<u64>,
    /// Generic arguments; recognized but not expanded into rendered text
    #[serde(rename = "typeArguments", default)]
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// The target id when this type is a resolvable reference
    pub fn reference_id(&self) -> Option<u64> {
        if self.flavor == TypeFlavor::Reference {
            self.id
        } else {
            None
        }
    }
}

/// Flavor of a type expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFlavor {
    /// A primitive or otherwise plainly named type
    #[default]
    Intrinsic,
    /// A pointer at another documented entity
    Reference,
    /// Any flavor the renderer does not treat specially
    #[serde(other)]
    Other,
}
