//! Dependency and lint fragments merged into the template configs

use serde_json::{json, Map, Value};
use std::sync::LazyLock;

/// Lint dependencies shared by the JavaScript and TypeScript setups
const LINT_DEPS: &[(&str, &str)] = &[
    ("eslint", "^7.32.0 || ^8.2.0"),
    ("eslint-config-airbnb-base", "^15.0.0"),
    ("eslint-config-airbnb-typescript", "^17.0.0"),
    ("eslint-plugin-import", "^2.25.2"),
];

/// Extra lint dependencies for TypeScript projects
const TYPESCRIPT_LINT_DEPS: &[(&str, &str)] = &[
    ("@typescript-eslint/eslint-plugin", "^5.42.0"),
    ("@typescript-eslint/parser", "^5.42.0"),
];

const PRETTIER_DEPS: &[(&str, &str)] = &[
    ("eslint-plugin-prettier", "^4.2.1"),
    ("eslint-config-prettier", "^8.5.0"),
    ("prettier", "^2.7.1"),
];

/// ESLint preset that hands formatting over to Prettier
pub const PRETTIER_ESLINT_PRESET: &str = "plugin:prettier/recommended";

/// `{ devDependencies: {...} }` for linting plain JavaScript
pub static VANILLA_LINT_DEPS: LazyLock<Value> = LazyLock::new(|| dev_dependencies(&[LINT_DEPS]));

/// `{ devDependencies: {...} }` for linting TypeScript
pub static TYPESCRIPT_LINT_DEPS_FRAGMENT: LazyLock<Value> =
    LazyLock::new(|| dev_dependencies(&[LINT_DEPS, TYPESCRIPT_LINT_DEPS]));

/// `{ devDependencies: {...} }` for Prettier and its ESLint bridge
pub static PRETTIER_DEPS_FRAGMENT: LazyLock<Value> =
    LazyLock::new(|| dev_dependencies(&[PRETTIER_DEPS]));

/// `{ extends: ["plugin:prettier/recommended"] }`
pub static PRETTIER_LINT_EXTENSION: LazyLock<Value> =
    LazyLock::new(|| json!({ "extends": [PRETTIER_ESLINT_PRESET] }));

/// Lint dependency fragment for the chosen language
pub fn lint_deps(use_typescript: bool) -> &'static Value {
    if use_typescript {
        &*TYPESCRIPT_LINT_DEPS_FRAGMENT
    } else {
        &*VANILLA_LINT_DEPS
    }
}

fn dev_dependencies(tables: &[&[(&str, &str)]]) -> Value {
    let deps: Map<String, Value> = tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|(name, range)| (name.to_string(), Value::String(range.to_string())))
        .collect();
    json!({ "devDependencies": deps })
}
