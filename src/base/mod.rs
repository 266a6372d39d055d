//! Foundation types for classmap.
//!
//! This module provides the arena identifiers shared by the declaration
//! table and the extraction passes:
//! - [`FileId`] - A source file known to the table
//! - [`DeclId`] - A declaration node (class, interface, namespace, ...)
//! - [`MemberId`] - A property or method slot of a declaration
//! - [`SymbolId`] - A resolved symbol
//! - [`TypeId`] - A resolved type reference
//!
//! This module has NO dependencies on other classmap modules.

mod ids;

pub use ids::{DeclId, FileId, MemberId, SymbolId, TypeId};
