//! Error types for extraction.

use thiserror::Error;

use crate::base::{DeclId, FileId};

/// Structural invariant violations of the declaration table.
///
/// Routine absence (an unresolved member symbol, an unnamed type, an
/// implementor that cannot be re-found) is never an error; only a
/// declaration that cannot be named at all is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A class, interface or type alias has no defining symbol (or its
    /// symbol has no name).
    #[error("declaration {decl} has no defining symbol{}", in_file(.file))]
    MissingSymbol { decl: DeclId, file: Option<FileId> },

    /// A heritage type-argument expression has no source text.
    #[error("type argument expression {decl} has no source text{}", in_file(.file))]
    MissingSourceText { decl: DeclId, file: Option<FileId> },
}

impl ExtractError {
    pub fn missing_symbol(decl: DeclId, file: Option<FileId>) -> Self {
        Self::MissingSymbol { decl, file }
    }

    pub fn missing_source_text(decl: DeclId, file: Option<FileId>) -> Self {
        Self::MissingSourceText { decl, file }
    }

    /// The declaration the error is about.
    pub fn decl(&self) -> DeclId {
        match self {
            ExtractError::MissingSymbol { decl, .. }
            | ExtractError::MissingSourceText { decl, .. } => *decl,
        }
    }

    pub fn file(&self) -> Option<FileId> {
        match self {
            ExtractError::MissingSymbol { file, .. }
            | ExtractError::MissingSourceText { file, .. } => *file,
        }
    }
}

fn in_file(file: &Option<FileId>) -> String {
    match file {
        Some(file) => format!(" (in {file})"),
        None => String::new(),
    }
}

/// Result alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
