//! What to copy: exclusion rules and content overrides derived from the answers
//!
//! Policy only. The copier consumes a [`MaterializationPlan`] without knowing
//! why any rule exists.

use crate::answers::AnswerSet;
use crate::config::loader::{
    ESLINTRC_JSON, ESLINTRC_TS_JSON, PACKAGE_JSON, PACKAGE_TS_JSON, PRETTIERRC_JSON,
    TSCONFIG_JSON,
};
use crate::config::AugmentedConfigs;
use crate::error::ScaffoldError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde_json::Value;
use std::path::PathBuf;

/// A glob matched against `/`-separated paths relative to the template root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludeRule {
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// A file written from a config value instead of the template's own content
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub path: &'static str,
    pub content: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterializationPlan {
    pub source_root: PathBuf,
    pub destination_name: String,
    pub excludes: Vec<ExcludeRule>,
    pub overrides: Vec<Override>,
}

const fn rule(pattern: &'static str, reason: &'static str) -> ExcludeRule {
    ExcludeRule { pattern, reason }
}

/// Exclusion rules for a set of answers, in a fixed order
pub fn exclusion_rules(answers: &AnswerSet) -> Vec<ExcludeRule> {
    let mut rules = vec![
        rule(PACKAGE_TS_JSON, "base config input"),
        rule(ESLINTRC_TS_JSON, "base config input"),
    ];

    if answers.use_typescript {
        rules.push(rule("**/*.js", "TypeScript project"));
    } else {
        rules.push(rule("**/*.ts", "JavaScript project"));
        rules.push(rule(TSCONFIG_JSON, "JavaScript project"));
    }

    if !answers.use_eslint {
        rules.push(rule(ESLINTRC_JSON, "linting disabled"));
        rules.push(rule(PRETTIERRC_JSON, "linting disabled"));
    }

    rules
}

/// Overrides for a set of answers: the manifest always, the lint config with ESLint
pub fn overrides(answers: &AnswerSet, configs: AugmentedConfigs) -> Vec<Override> {
    let mut overrides = vec![Override {
        path: PACKAGE_JSON,
        content: configs.package_json,
    }];

    if answers.use_eslint {
        overrides.push(Override {
            path: ESLINTRC_JSON,
            content: configs.eslint_config,
        });
    }

    overrides
}

impl MaterializationPlan {
    pub fn new(source_root: PathBuf, answers: &AnswerSet, configs: AugmentedConfigs) -> Self {
        Self {
            source_root,
            destination_name: answers.name.clone(),
            excludes: exclusion_rules(answers),
            overrides: overrides(answers, configs),
        }
    }

    pub fn ignore_globs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.excludes.iter().map(|r| r.pattern)
    }

    /// Compile the exclusion rules. `*` never crosses a `/`; `**/` also matches the root.
    pub fn exclude_set(&self) -> Result<GlobSet, ScaffoldError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in self.ignore_globs() {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| ScaffoldError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ScaffoldError::InvalidPattern {
            pattern: self.ignore_globs().collect::<Vec<_>>().join(", "),
            source,
        })
    }

    pub fn override_for(&self, relative_path: &str) -> Option<&Value> {
        self.overrides
            .iter()
            .find(|o| o.path == relative_path)
            .map(|o| &o.content)
    }
}
