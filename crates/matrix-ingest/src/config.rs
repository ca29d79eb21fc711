//! Configuration file loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use matrix_model::CategoryConfig;

use crate::error::{IngestError, Result};
use crate::tabular::FieldMapping;

/// Contents of a `market-matrix.toml` file.
///
/// ```toml
/// [categories]
/// order = ["Law Firms", "Contractors"]
///
/// [categories.layout]
/// column_count = 1
///
/// [fields]
/// name = "Company Name"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub categories: CategoryConfig,
    pub fields: FieldMapping,
}

impl MatrixConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| IngestError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load configuration from `path`, or defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<MatrixConfig> {
    let Some(path) = path else {
        return Ok(MatrixConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let config = MatrixConfig::from_toml_str(&content, path)?;
    debug!(
        path = %path.display(),
        preferred = config.categories.order.len(),
        "loaded matrix config"
    );
    Ok(config)
}
