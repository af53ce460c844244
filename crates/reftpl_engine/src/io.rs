/*
SPDX-License-Identifier: MPL-2.0
*/

use std::fs;
use std::path::Path;

use reftpl_core::{DataDictionary, TemplateNode};

use crate::error::EngineError;

/// Load a template from a file.
///
/// `.json` and `.yaml`/`.yml` files parse as template trees; any other
/// extension is read verbatim as a text template.
pub fn load_template(path: &Path) -> Result<TemplateNode, EngineError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_str(&content)
                .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string()))?;
            serde_json::from_str(&content)
                .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string()))
        }
        "yaml" | "yml" => {
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string()))?;
            serde_yaml::from_str(&content)
                .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string()))
        }
        _ => Ok(TemplateNode::Text(content)),
    }
}

/// Load a data dictionary from a YAML or JSON file, keyed by extension
/// (anything that is not `.json` parses as YAML, which is a JSON superset).
pub fn load_data(path: &Path) -> Result<DataDictionary, EngineError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string())),
        _ => serde_yaml::from_str(&content)
            .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string())),
    }
}
