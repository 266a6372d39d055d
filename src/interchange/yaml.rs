//! YAML format support.
//!
//! Same structure as the JSON format, in YAML syntax.
//!
//! ```yaml
//! classes:
//! - kind: Class
//!   name: Circle
//!   file: 0
//!   properties:
//!   - name: radius
//!     type: number
//! edges:
//! - source: Circle
//!   target: Shape
//!   kind: Implements
//! ```

use crate::model::StructuralModel;

use super::{InterchangeError, ModelFormat, validate_model};

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl ModelFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn read(&self, input: &[u8]) -> Result<StructuralModel, InterchangeError> {
        let model: StructuralModel = serde_yaml::from_slice(input)
            .map_err(|e| InterchangeError::yaml(format!("YAML parse error: {e}")))?;
        validate_model(&model)?;
        Ok(model)
    }

    fn write(&self, model: &StructuralModel) -> Result<Vec<u8>, InterchangeError> {
        serde_yaml::to_string(model)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(e.to_string()))
    }
}
