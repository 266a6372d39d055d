//! Extraction tests
//!
//! Tests for the extraction passes over in-memory declaration tables:
//! - Type name resolution (arrays, generics, fallbacks)
//! - Member extraction
//! - Declaration naming
//! - Heritage resolution, including reverse implementor discovery
//! - End-to-end model assembly

pub mod tests_model_build;
pub mod tests_naming;
pub mod tests_type_names;
