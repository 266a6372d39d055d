//! Common trait for model interchange formats.

use crate::model::{DeclarationKind, StructuralModel};

use super::InterchangeError;

/// Trait for model interchange formats.
///
/// Implementations serialize the [`StructuralModel`] handed to external
/// renderers and read it back.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read a model from bytes.
    ///
    /// The result is checked with [`validate_model`].
    fn read(&self, input: &[u8]) -> Result<StructuralModel, InterchangeError>;

    /// Write a model to bytes.
    fn write(&self, model: &StructuralModel) -> Result<Vec<u8>, InterchangeError>;

    /// Quick well-formedness check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::validation(format!("Invalid UTF-8: {e}")))?;
        if content.trim().is_empty() {
            return Err(InterchangeError::validation(format!(
                "Empty {} content",
                self.name()
            )));
        }
        Ok(())
    }
}

/// Check that every declaration sits in the list matching its kind and has
/// a name, and that every edge names both ends.
pub fn validate_model(model: &StructuralModel) -> Result<(), InterchangeError> {
    let lists = [
        (DeclarationKind::Class, &model.classes),
        (DeclarationKind::Interface, &model.interfaces),
    ];
    for (expected, declarations) in lists {
        for declaration in declarations {
            if declaration.kind != expected {
                return Err(InterchangeError::validation(format!(
                    "'{}' has kind {} but is listed as {}",
                    declaration.name,
                    declaration.kind.display(),
                    expected.display()
                )));
            }
            if declaration.name.is_empty() {
                return Err(InterchangeError::validation(format!(
                    "unnamed {} declaration",
                    expected.display()
                )));
            }
        }
    }

    if let Some(edge) = model
        .edges
        .iter()
        .find(|e| e.source.is_empty() || e.target.is_empty())
    {
        return Err(InterchangeError::validation(format!(
            "heritage edge with an empty end: '{edge}'"
        )));
    }
    Ok(())
}
