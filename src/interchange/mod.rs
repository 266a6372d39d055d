//! Model interchange formats for the structural model.
//!
//! Renderers and documentation generators usually live in another process
//! or language; this module hands them the [`StructuralModel`] as:
//!
//! - **JSON** - [`Json`]
//! - **YAML** - [`Yaml`]
//!
//! ## Usage
//!
//! ```ignore
//! use classmap::interchange::{Json, ModelFormat};
//!
//! let bytes = Json::pretty().write(&model)?;
//! std::fs::write("model.json", bytes)?;
//! ```

mod error;
mod format;
mod json;
mod yaml;

use std::path::Path;

use crate::model::StructuralModel;

pub use error::InterchangeError;
pub use format::{ModelFormat, validate_model};
pub use json::Json;
pub use yaml::Yaml;

/// Pick a format from a file's extension.
pub fn detect_format(path: &Path) -> Option<Box<dyn ModelFormat>> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(Box::new(Json::pretty())),
        "yaml" | "yml" => Some(Box::new(Yaml)),
        _ => None,
    }
}

/// Serialize a model as pretty-printed JSON.
pub fn to_json(model: &StructuralModel) -> Result<String, InterchangeError> {
    let bytes = Json::pretty().write(model)?;
    String::from_utf8(bytes).map_err(|e| InterchangeError::json(e.to_string()))
}

/// Parse and validate a JSON model.
pub fn from_json(input: &str) -> Result<StructuralModel, InterchangeError> {
    let json = Json::default();
    json.validate(input.as_bytes())?;
    json.read(input.as_bytes())
}

/// Serialize a model as YAML.
pub fn to_yaml(model: &StructuralModel) -> Result<String, InterchangeError> {
    let bytes = Yaml.write(model)?;
    String::from_utf8(bytes).map_err(|e| InterchangeError::yaml(e.to_string()))
}

/// Parse and validate a YAML model.
pub fn from_yaml(input: &str) -> Result<StructuralModel, InterchangeError> {
    Yaml.validate(input.as_bytes())?;
    Yaml.read(input.as_bytes())
}

/// Read a model from a file, detecting the format from its extension.
pub fn read_model(path: &Path) -> Result<StructuralModel, InterchangeError> {
    let format = format_for(path)?;
    let bytes = std::fs::read(path)?;
    format.validate(&bytes)?;
    format.read(&bytes)
}

/// Write a model to a file, detecting the format from its extension.
pub fn write_model(path: &Path, model: &StructuralModel) -> Result<(), InterchangeError> {
    let format = format_for(path)?;
    let bytes = format.write(model)?;
    std::fs::write(path, bytes)?;
    tracing::debug!("wrote {} model to {}", format.name(), path.display());
    Ok(())
}

fn format_for(path: &Path) -> Result<Box<dyn ModelFormat>, InterchangeError> {
    detect_format(path).ok_or_else(|| {
        InterchangeError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("?")
                .to_string(),
        )
    })
}
