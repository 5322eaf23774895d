//! Loading the base package manifest and lint config from the template root

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;
use serde_json::Value;
use std::path::Path;

/// Package manifest used for JavaScript projects (also the output file name)
pub const PACKAGE_JSON: &str = "package.json";
/// Package manifest used for TypeScript projects
pub const PACKAGE_TS_JSON: &str = "package-ts.json";
/// Lint config used for JavaScript projects (also the output file name)
pub const ESLINTRC_JSON: &str = ".eslintrc.json";
/// Lint config used for TypeScript projects
pub const ESLINTRC_TS_JSON: &str = ".eslintrc-ts.json";
pub const PRETTIERRC_JSON: &str = ".prettierrc.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";

/// Package manifest and lint config as loaded, before augmentation
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfigs {
    pub package_json: Value,
    pub eslint_config: Value,
}

/// Read and parse a JSON file
pub fn load_json_config(path: &Path) -> Result<Value, ScaffoldError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ScaffoldError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the language-specific base configs and stamp the project name
pub fn select_base_configs(
    template_root: &Path,
    answers: &AnswerSet,
) -> Result<BaseConfigs, ScaffoldError> {
    let (package_file, eslint_file) = if answers.use_typescript {
        (PACKAGE_TS_JSON, ESLINTRC_TS_JSON)
    } else {
        (PACKAGE_JSON, ESLINTRC_JSON)
    };

    let package_path = template_root.join(package_file);
    let mut package_json = load_json_config(&package_path)?;
    let eslint_config = load_json_config(&template_root.join(eslint_file))?;

    match package_json.as_object_mut() {
        Some(manifest) => {
            manifest.insert("name".to_string(), Value::String(answers.name.clone()));
        }
        None => {
            return Err(ScaffoldError::ConfigLoad {
                path: package_path,
                reason: "package manifest is not a JSON object".to_string(),
            })
        }
    }

    Ok(BaseConfigs {
        package_json,
        eslint_config,
    })
}
