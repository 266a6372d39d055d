//! # classmap-base
//!
//! Core library for extracting a language-agnostic structural model
//! (classes, interfaces, members, heritage edges) from a typed declaration
//! table, for downstream diagram and documentation generation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON/YAML serialization of the model (feature "interchange")
//!   ↓
//! extract     → Type names, members, naming, heritage, model assembly
//!   ↓
//! model       → Declarations, members, heritage edges, StructuralModel
//! table       → DeclarationTable trait, in-memory table and builder
//!   ↓
//! base        → Primitives (FileId, DeclId, MemberId, SymbolId, TypeId)
//! ```
//!
//! ## Example
//!
//! ```
//! use classmap::extract::build_model;
//! use classmap::model::HeritageKind;
//! use classmap::table::TableBuilder;
//!
//! let mut builder = TableBuilder::new();
//! let file = builder.add_file("shapes.ts");
//! let number = builder.text_type("number");
//! let shape = builder.interface(file, "Shape").exported().id();
//! builder
//!     .class(file, "Circle")
//!     .exported()
//!     .implements(shape)
//!     .property("radius", Some(number));
//! let table = builder.finish();
//!
//! let model = build_model(&table).unwrap();
//! assert_eq!(model.classes[0].name, "Circle");
//! assert_eq!(model.edges[0].kind, HeritageKind::Implements);
//! ```

// ============================================================================
// MODULES (dependency order: base → table/model → extract → interchange)
// ============================================================================

/// Foundation types: arena identifiers
pub mod base;

/// Declaration table: the read-only input capability
pub mod table;

/// Structural model: the extraction output
pub mod model;

/// Extraction passes and model assembly
pub mod extract;

/// Model interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{DeclId, FileId, MemberId, SymbolId, TypeId};

// Re-export the main entry points
pub use extract::{ExtractError, ExtractOptions, ModelBuilder, build_model};
pub use model::{
    Declaration, DeclarationKind, HeritageEdge, HeritageKind, MethodDetail, ParameterDetail,
    PropertyDetail, StructuralModel,
};
pub use table::{DeclarationTable, MemoryTable, TableBuilder};
