//! # Structural Model
//!
//! The output of extraction: classes and interfaces with their own members,
//! plus the heritage edges between them.
//!
//! No cross-references are materialized as pointers. Edges carry names, and
//! consumers re-join them against [`Declaration::name`]. An edge may name a
//! declaration that lies outside the analyzed set (an external base class);
//! such dangling edges are legal and reported by
//! [`StructuralModel::dangling_edges`].

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use crate::base::FileId;

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Whether a declaration is a class or an interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum DeclarationKind {
    Class,
    Interface,
}

impl DeclarationKind {
    /// Get a display label for this declaration kind.
    pub fn display(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "Class",
            DeclarationKind::Interface => "Interface",
        }
    }
}

/// A property declared directly on a class or interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct PropertyDetail {
    pub name: String,
    /// Display name of the declared type, if it could be determined
    #[cfg_attr(
        feature = "interchange",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub ty: Option<String>,
}

impl PropertyDetail {
    pub fn new(name: impl Into<String>, ty: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct ParameterDetail {
    pub name: String,
    #[cfg_attr(
        feature = "interchange",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub ty: Option<String>,
}

impl ParameterDetail {
    pub fn new(name: impl Into<String>, ty: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method declared directly on a class or interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "camelCase"))]
pub struct MethodDetail {
    pub name: String,
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub return_type: Option<String>,
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub parameters: Vec<ParameterDetail>,
}

impl MethodDetail {
    pub fn new(name: impl Into<String>, return_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterDetail>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// One class or interface.
///
/// Identity is the name string. Two files declaring the same name produce
/// two declarations with equal names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Name including any generic parameter suffix, e.g. `Box<T>`
    pub name: String,
    /// File the declaration was extracted from
    pub file: FileId,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub properties: Vec<PropertyDetail>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub methods: Vec<MethodDetail>,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, name: impl Into<String>, file: FileId) -> Self {
        Self {
            kind,
            name: name.into(),
            file,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDetail> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDetail> {
        self.methods.iter().find(|m| m.name == name)
    }
}

// ============================================================================
// HERITAGE
// ============================================================================

/// The kind of a heritage edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum HeritageKind {
    /// Derived class → base class
    Extends,
    /// Implementor → interface, and (by default) interface → base interface
    Implements,
    /// Interface → base interface, only when selected via
    /// [`InterfaceExtendsTag::InterfaceExtends`](crate::extract::InterfaceExtendsTag)
    InterfaceExtends,
}

impl HeritageKind {
    /// Get a display label for this heritage kind.
    pub fn display(&self) -> &'static str {
        match self {
            HeritageKind::Extends => "extends",
            HeritageKind::Implements => "implements",
            HeritageKind::InterfaceExtends => "interface extends",
        }
    }
}

/// A directed heritage relationship between two declaration names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct HeritageEdge {
    pub source: String,
    pub target: String,
    pub kind: HeritageKind,
}

impl HeritageEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: HeritageKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

impl std::fmt::Display for HeritageEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.source, self.kind.display(), self.target)
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// A declaration left out of the model under the skip policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct SkippedDeclaration {
    pub file: FileId,
    pub reason: String,
}

/// The assembled output of one extraction run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct StructuralModel {
    #[cfg_attr(feature = "interchange", serde(default))]
    pub classes: Vec<Declaration>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub interfaces: Vec<Declaration>,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub edges: Vec<HeritageEdge>,
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub skipped: Vec<SkippedDeclaration>,
}

impl StructuralModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.interfaces.is_empty() && self.edges.is_empty()
    }

    /// Classes first, then interfaces.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.classes.iter().chain(self.interfaces.iter())
    }

    /// First declaration with the given name.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations().find(|d| d.name == name)
    }

    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a HeritageEdge> {
        self.edges.iter().filter(move |e| e.source == source)
    }

    pub fn edges_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a HeritageEdge> {
        self.edges.iter().filter(move |e| e.target == target)
    }

    /// Edges whose source or target names no declaration of this model.
    pub fn dangling_edges(&self) -> Vec<&HeritageEdge> {
        let known: FxHashSet<&str> = self.declarations().map(|d| d.name.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !known.contains(e.source.as_str()) || !known.contains(e.target.as_str()))
            .collect()
    }

    /// Remove exact duplicate edges, keeping the first occurrence of each.
    ///
    /// Returns the number of edges removed.
    pub fn dedup_edges(&mut self) -> usize {
        let before = self.edges.len();
        let unique: IndexSet<HeritageEdge> = self.edges.drain(..).collect();
        self.edges = unique.into_iter().collect();
        before - self.edges.len()
    }

    /// Append another model's contents after this one's.
    pub fn extend(&mut self, other: StructuralModel) {
        self.classes.extend(other.classes);
        self.interfaces.extend(other.interfaces);
        self.edges.extend(other.edges);
        self.skipped.extend(other.skipped);
    }
}
