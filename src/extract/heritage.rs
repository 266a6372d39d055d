//! Heritage edge resolution.
//!
//! Classes contribute at most one `Extends` edge (single inheritance).
//! Interfaces contribute one edge per base interface, then one edge per
//! implementing class found anywhere in the table. Implementors are reported
//! by the table as `(file, name text)` and re-identified through a
//! [`ClassIndex`] built once per run.
//!
//! No graph validation happens here: cycles in malformed input pass through.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::{DeclId, FileId};
use crate::model::{HeritageEdge, HeritageKind};
use crate::table::{DeclKind, DeclScope, DeclarationTable, Implementation};

use super::error::Result;
use super::naming::{declaration_name, simple_name};
use super::options::InterfaceExtendsTag;

// ============================================================================
// CLASS INDEX
// ============================================================================

/// Lookup of class declarations by `(file, simple name)`.
///
/// Covers every class declared at file scope or inside a namespace of the
/// file, exported or not. Block-scoped classes are not indexed. On a name
/// collision within one file the first declaration wins.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    by_file: FxHashMap<FileId, FxHashMap<String, DeclId>>,
    len: usize,
}

impl ClassIndex {
    /// Index every file of the table.
    pub fn build<T>(table: &T) -> Self
    where
        T: DeclarationTable + ?Sized,
    {
        let mut index = Self::default();
        for file in table.files() {
            for decl in table.file_declarations(file) {
                index.visit(table, file, decl);
            }
        }
        trace!("class index holds {} classes", index.len);
        index
    }

    fn visit<T>(&mut self, table: &T, file: FileId, decl: DeclId)
    where
        T: DeclarationTable + ?Sized,
    {
        if table.decl_scope(decl) == DeclScope::Block {
            return;
        }
        match table.decl_kind(decl) {
            DeclKind::Class => {
                if let Some(name) = simple_name(table, decl) {
                    let names = self.by_file.entry(file).or_default();
                    if !names.contains_key(&name) {
                        names.insert(name, decl);
                        self.len += 1;
                    }
                }
            }
            DeclKind::Namespace => {
                for member in table.namespace_members(decl) {
                    self.visit(table, file, member);
                }
            }
            _ => {}
        }
    }

    pub fn lookup(&self, file: FileId, name: &str) -> Option<DeclId> {
        self.by_file.get(&file)?.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Computes heritage edges for single declarations.
pub struct HeritageResolver<'a, T: ?Sized> {
    table: &'a T,
    index: &'a ClassIndex,
    interface_extends: InterfaceExtendsTag,
}

impl<'a, T> HeritageResolver<'a, T>
where
    T: DeclarationTable + ?Sized,
{
    pub fn new(table: &'a T, index: &'a ClassIndex) -> Self {
        Self {
            table,
            index,
            interface_extends: InterfaceExtendsTag::default(),
        }
    }

    pub fn with_interface_extends(mut self, tag: InterfaceExtendsTag) -> Self {
        self.interface_extends = tag;
        self
    }

    /// Zero or one `Extends` edge: `class → base class`.
    pub fn resolve_class_heritage(&self, class: DeclId) -> Result<Vec<HeritageEdge>> {
        let class_name = declaration_name(self.table, class)?;
        let Some(base) = self.table.base_class(class) else {
            return Ok(Vec::new());
        };
        let base_name = declaration_name(self.table, base)?;
        Ok(vec![HeritageEdge::new(
            class_name,
            base_name,
            HeritageKind::Extends,
        )])
    }

    /// Base-interface edges followed by implementor edges.
    pub fn resolve_interface_heritage(&self, interface: DeclId) -> Result<Vec<HeritageEdge>> {
        let interface_name = declaration_name(self.table, interface)?;
        let mut edges = Vec::new();

        for base in self.table.base_declarations(interface) {
            let base_name = declaration_name(self.table, base)?;
            if !base_name.is_empty() {
                edges.push(HeritageEdge::new(
                    interface_name.clone(),
                    base_name,
                    self.interface_extends.kind(),
                ));
            }
        }

        for implementation in self.table.implementations(interface) {
            let Some(class) = self.find_implementor(&implementation) else {
                debug!(
                    "implementor '{}' of '{}' not found in {}",
                    implementation.text, interface_name, implementation.file
                );
                continue;
            };
            let class_name = declaration_name(self.table, class)?;
            edges.push(HeritageEdge::new(
                class_name,
                interface_name.clone(),
                HeritageKind::Implements,
            ));
        }

        Ok(edges)
    }

    fn find_implementor(&self, implementation: &Implementation) -> Option<DeclId> {
        self.index.lookup(implementation.file, implementation.text.trim())
    }
}
