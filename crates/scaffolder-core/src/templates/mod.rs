//! Template resolution, planning, and copying
//!
//! This module provides:
//! - Templates directory resolution (env override or install-relative default)
//! - The template manifest and CLI version compatibility check
//! - The materialization plan (exclusion rules and overrides)
//! - Tree copying driven by that plan

pub mod copier;
pub mod manifest;
pub mod plan;
pub mod version;

use crate::product::ProductConfig;
use std::path::PathBuf;

pub use copier::{materialize, MaterializeReport};
pub use manifest::TemplateManifest;
pub use plan::{ExcludeRule, MaterializationPlan, Override};
pub use version::check_compatibility;

/// Templates directory: the product's env override if set, else its default
pub fn resolve_templates_dir<C: ProductConfig>(config: &C) -> PathBuf {
    std::env::var_os(config.templates_dir_env())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| config.default_templates_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use std::path::Path;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test-create"
        }
        fn display_name(&self) -> &'static str {
            "Test Create"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn templates_dir_env(&self) -> &'static str {
            "SCAFFOLDER_CORE_TEST_TEMPLATES"
        }
        fn default_templates_dir(&self) -> PathBuf {
            PathBuf::from("bundled/templates")
        }
        fn upgrade_command(&self) -> &'static str {
            "true"
        }
        fn next_steps(&self, _dir: &Path, _answers: &AnswerSet) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_resolve_templates_dir_env_then_default() {
        std::env::remove_var("SCAFFOLDER_CORE_TEST_TEMPLATES");
        assert_eq!(
            resolve_templates_dir(&TestConfig),
            PathBuf::from("bundled/templates")
        );

        std::env::set_var("SCAFFOLDER_CORE_TEST_TEMPLATES", "/opt/templates");
        assert_eq!(
            resolve_templates_dir(&TestConfig),
            PathBuf::from("/opt/templates")
        );

        std::env::set_var("SCAFFOLDER_CORE_TEST_TEMPLATES", "");
        assert_eq!(
            resolve_templates_dir(&TestConfig),
            PathBuf::from("bundled/templates")
        );
        std::env::remove_var("SCAFFOLDER_CORE_TEST_TEMPLATES");
    }
}
