//! # Declaration Table
//!
//! The read-only view over analyzed source files that the extraction passes
//! consume. A static-analysis front end implements [`DeclarationTable`]; the
//! extractor never mutates it and never assumes eager resolution.
//!
//! Every accessor may answer "absent" (`None` or an empty list). Absence is
//! routine: type tables commonly contain entries that resolve lazily or not
//! at all (ambient declarations, external libraries). Only the callers decide
//! whether a particular absence is an error.
//!
//! [`MemoryTable`] is an owned implementation populated through
//! [`TableBuilder`], used by front ends that resolve everything up front and
//! by tests.

mod memory;

pub use memory::{DeclBuilder, MemoryTable, TableBuilder};

use smol_str::SmolStr;

use crate::base::{DeclId, FileId, MemberId, SymbolId, TypeId};

/// Syntactic kind of a declaration node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    TypeAlias,
    Namespace,
    /// A heritage clause target written as an expression, e.g. `Base<string>`
    /// in `class A extends Base<string>`.
    TypeArgumentExpression,
    /// Anything else the front end reports (functions, variables, enums).
    Other,
}

/// Where a declaration sits relative to its source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclScope {
    /// Directly at file scope
    File,
    /// Inside a namespace (module) body
    Namespace,
    /// Inside a function or other block
    Block,
}

/// A class reported as implementing an interface.
///
/// Carries the implementor's file and the text of its name node, not a
/// declaration id: the implementor is re-identified by name within the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implementation {
    pub file: FileId,
    pub text: SmolStr,
}

impl Implementation {
    pub fn new(file: FileId, text: impl Into<SmolStr>) -> Self {
        Self {
            file,
            text: text.into(),
        }
    }
}

/// Read-only capability over a resolved declaration/symbol/type table.
pub trait DeclarationTable {
    // ============================================================
    // Files
    // ============================================================

    /// All source files, in a stable iteration order.
    fn files(&self) -> Vec<FileId>;

    /// Path of a file as the front end knows it.
    fn file_path(&self, file: FileId) -> Option<SmolStr>;

    /// Declarations reported for a file, in source order.
    ///
    /// Namespace members are reached through [`namespace_members`](Self::namespace_members).
    fn file_declarations(&self, file: FileId) -> Vec<DeclId>;

    // ============================================================
    // Declarations
    // ============================================================

    fn decl_kind(&self, decl: DeclId) -> DeclKind;

    fn decl_scope(&self, decl: DeclId) -> DeclScope;

    fn decl_file(&self, decl: DeclId) -> Option<FileId>;

    /// True if the declaration carries an export modifier.
    fn is_exported(&self, decl: DeclId) -> bool;

    /// Direct members of a namespace body, in source order.
    fn namespace_members(&self, decl: DeclId) -> Vec<DeclId>;

    /// The symbol that defines the declaration.
    fn decl_symbol(&self, decl: DeclId) -> Option<SymbolId>;

    /// Names of declared type parameters, in declaration order.
    fn type_parameters(&self, decl: DeclId) -> Vec<SmolStr>;

    /// Raw source text of the node.
    fn decl_text(&self, decl: DeclId) -> Option<SmolStr>;

    /// Own (not inherited) property slots.
    fn properties(&self, decl: DeclId) -> Vec<MemberId>;

    /// Own (not inherited) method slots.
    fn methods(&self, decl: DeclId) -> Vec<MemberId>;

    /// The base class of a class, if any.
    fn base_class(&self, decl: DeclId) -> Option<DeclId>;

    /// Declarations an interface directly extends.
    fn base_declarations(&self, decl: DeclId) -> Vec<DeclId>;

    /// Classes implementing an interface, program-wide.
    fn implementations(&self, decl: DeclId) -> Vec<Implementation>;

    // ============================================================
    // Members
    // ============================================================

    fn member_symbol(&self, member: MemberId) -> Option<SymbolId>;

    /// Return type of a method slot.
    fn return_type(&self, member: MemberId) -> Option<TypeId>;

    /// Parameter symbols of a method slot, in declaration order.
    fn parameters(&self, member: MemberId) -> Vec<SymbolId>;

    // ============================================================
    // Symbols and types
    // ============================================================

    fn symbol_name(&self, symbol: SymbolId) -> Option<SmolStr>;

    /// Declared type of the symbol's value declaration.
    fn symbol_type(&self, symbol: SymbolId) -> Option<TypeId>;

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId>;

    /// Raw textual form of the type.
    fn type_text(&self, ty: TypeId) -> Option<SmolStr>;

    fn is_array(&self, ty: TypeId) -> bool;

    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId>;
}
