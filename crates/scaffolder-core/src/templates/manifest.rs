//! Template manifest (templates/template.yaml)

use crate::error::ScaffoldError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the manifest inside the templates directory
pub const MANIFEST_FILE: &str = "template.yaml";

fn default_root() -> String {
    "vanilla".to_string()
}

/// Describes the template shipped in the templates directory
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Template root, relative to the templates directory
    #[serde(default = "default_root")]
    pub root: String,
}

impl TemplateManifest {
    /// Read `template.yaml` out of a templates directory
    pub fn load(templates_dir: &Path) -> Result<Self, ScaffoldError> {
        if !templates_dir.is_dir() {
            return Err(ScaffoldError::SourceMissing(templates_dir.to_path_buf()));
        }

        let path = templates_dir.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| ScaffoldError::Manifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Manifest {
            path,
            reason: e.to_string(),
        })
    }

    /// Absolute template root for this manifest
    pub fn template_root(&self, templates_dir: &Path) -> PathBuf {
        templates_dir.join(&self.root)
    }
}
