//! JSON format support.
//!
//! ```json
//! {
//!   "classes": [
//!     {
//!       "kind": "Class",
//!       "name": "Circle",
//!       "file": 0,
//!       "properties": [{ "name": "radius", "type": "number" }],
//!       "methods": [{ "name": "area", "returnType": "number" }]
//!     }
//!   ],
//!   "interfaces": [{ "kind": "Interface", "name": "Shape", "file": 0 }],
//!   "edges": [{ "source": "Circle", "target": "Shape", "kind": "Implements" }]
//! }
//! ```

use crate::model::StructuralModel;

use super::{InterchangeError, ModelFormat, validate_model};

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json {
    /// Pretty-print the output
    pub pretty: bool,
}

impl Json {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read(&self, input: &[u8]) -> Result<StructuralModel, InterchangeError> {
        let model: StructuralModel = serde_json::from_slice(input)
            .map_err(|e| InterchangeError::json(format!("JSON parse error: {e}")))?;
        validate_model(&model)?;
        Ok(model)
    }

    fn write(&self, model: &StructuralModel) -> Result<Vec<u8>, InterchangeError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(model)
        } else {
            serde_json::to_vec(model)
        };
        bytes.map_err(|e| InterchangeError::json(e.to_string()))
    }

    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::json(format!("Invalid UTF-8: {e}")))?;
        if !content.trim_start().starts_with('{') {
            return Err(InterchangeError::json("Expected a JSON object"));
        }
        Ok(())
    }
}
