//! Structural model extraction from a declaration table.
//!
//! # Module structure
//!
//! - [`type_name`] - Type reference → display string (arrays, generics)
//! - [`members`] - Own properties and methods of a declaration
//! - [`naming`] - Canonical declaration names with generic parameters
//! - [`heritage`] - Extends/implements edges and the class index
//! - [`assemble`] - Model assembly over every included declaration
//! - [`options`] - Extraction options
//! - [`error`] - Extraction errors
//!
//! ```text
//! DeclarationTable
//!     │
//!     ├── naming ─────┐
//!     ├── members ────┤   (per declaration)
//!     │               ▼
//!     ├── heritage ── edges
//!     │               ▼
//!     └── assemble ── StructuralModel
//! ```
//!
//! Member slots that cannot be resolved are skipped; a declaration without a
//! defining symbol is an [`ExtractError`].

mod assemble;
mod error;
mod heritage;
mod members;
mod naming;
mod options;
mod type_name;


pub use assemble::{ModelBuilder, build_model};
pub use error::{ExtractError, Result};
pub use heritage::{ClassIndex, HeritageResolver};
pub use members::{Members, extract_members};
pub use naming::declaration_name;
pub use options::{ExtractOptions, InterfaceExtendsTag, MissingSymbolPolicy};
pub use type_name::resolve_type_name;
