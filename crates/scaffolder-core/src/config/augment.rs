//! Answer-driven augmentation of the base configs
//!
//! Each step takes the previous value by reference and returns a new one, so
//! every intermediate config can be inspected on its own.

use super::fragments::{lint_deps, PRETTIER_DEPS_FRAGMENT, PRETTIER_LINT_EXTENSION};
use super::loader::BaseConfigs;
use super::merge::merge_config;
use crate::answers::AnswerSet;
use serde_json::Value;

/// Final package manifest and lint config handed to the materializer
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedConfigs {
    pub package_json: Value,
    /// Only written to disk when linting was selected
    pub eslint_config: Value,
}

/// Add lint dependencies to the manifest when ESLint is selected
pub fn with_lint_deps(package_json: &Value, answers: &AnswerSet) -> Value {
    if answers.use_eslint {
        merge_config(package_json, lint_deps(answers.use_typescript))
    } else {
        package_json.clone()
    }
}

/// Add Prettier to the manifest and the lint config when Prettier is selected.
///
/// Applies regardless of the ESLint answer; without ESLint the lint config is
/// simply never written.
pub fn with_prettier(
    package_json: &Value,
    eslint_config: &Value,
    answers: &AnswerSet,
) -> (Value, Value) {
    if answers.use_prettier {
        (
            merge_config(package_json, &PRETTIER_DEPS_FRAGMENT),
            merge_config(eslint_config, &PRETTIER_LINT_EXTENSION),
        )
    } else {
        (package_json.clone(), eslint_config.clone())
    }
}

pub fn augment(base: &BaseConfigs, answers: &AnswerSet) -> AugmentedConfigs {
    let package_json = with_lint_deps(&base.package_json, answers);
    let (package_json, eslint_config) = with_prettier(&package_json, &base.eslint_config, answers);
    AugmentedConfigs {
        package_json,
        eslint_config,
    }
}
