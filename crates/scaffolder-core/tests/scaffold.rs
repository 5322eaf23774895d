use scaffolder_core::{scaffold, AnswerSet, ScaffoldError, TemplateManifest};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn template_root() -> PathBuf {
    let dir = templates_dir();
    TemplateManifest::load(&dir).unwrap().template_root(&dir)
}

fn answers(name: &str, use_typescript: bool, use_eslint: bool, use_prettier: bool) -> AnswerSet {
    AnswerSet {
        name: name.to_string(),
        use_typescript,
        use_eslint,
        use_prettier,
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn files_under(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn all_answers(name: &str) -> Vec<AnswerSet> {
    let mut all = Vec::new();
    for ts in [false, true] {
        for eslint in [false, true] {
            for prettier in [false, true] {
                all.push(answers(name, ts, eslint, prettier));
            }
        }
    }
    all
}

#[tokio::test]
async fn test_typescript_eslint_prettier_scenario() {
    let out = TempDir::new().unwrap();

    let report = scaffold(&answers("demo", true, true, true), &template_root(), out.path())
        .await
        .unwrap();

    let demo = out.path().join("demo");
    assert_eq!(report.destination, demo);
    assert!(demo.is_dir());

    let manifest = read_json(&demo.join("package.json"));
    assert_eq!(manifest["name"], "demo");
    for dep in ["eslint", "@typescript-eslint/parser", "prettier", "eslint-config-prettier"] {
        assert!(manifest["devDependencies"][dep].is_string(), "missing {dep}");
    }

    let files = files_under(&demo);
    assert!(files.iter().all(|f| !f.ends_with(".js")), "{files:?}");
    assert!(demo.join("tsconfig.json").is_file());
    assert!(demo.join("src/index.ts").is_file());
    assert!(!demo.join("package-ts.json").exists());
    assert!(!demo.join(".eslintrc-ts.json").exists());

    let eslint = read_json(&demo.join(".eslintrc.json"));
    let extends: Vec<&str> = eslint["extends"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(extends.contains(&"plugin:prettier/recommended"));
    assert!(extends.contains(&"airbnb-typescript/base"));
    assert_eq!(eslint["parser"], "@typescript-eslint/parser");
}

#[tokio::test]
async fn test_bare_javascript_scenario() {
    let out = TempDir::new().unwrap();
    let root = template_root();

    scaffold(&answers("x", false, false, false), &root, out.path())
        .await
        .unwrap();

    let x = out.path().join("x");
    assert!(!x.join(".eslintrc.json").exists());
    assert!(!x.join(".prettierrc.json").exists());
    assert!(!x.join("tsconfig.json").exists());
    assert!(x.join("src/index.js").is_file());

    let manifest = read_json(&x.join("package.json"));
    let base = read_json(&root.join("package.json"));
    assert_eq!(manifest["name"], "x");
    assert_eq!(manifest["devDependencies"], base["devDependencies"]);
    assert_eq!(manifest["scripts"], base["scripts"]);
}

#[tokio::test]
async fn test_language_filter_holds_for_every_answer_set() {
    for answers in all_answers("proj") {
        let out = TempDir::new().unwrap();
        scaffold(&answers, &template_root(), out.path())
            .await
            .unwrap();

        let files = files_under(&out.path().join("proj"));
        if answers.use_typescript {
            assert!(files.iter().all(|f| !f.ends_with(".js")), "{answers:?}: {files:?}");
        } else {
            assert!(files.iter().all(|f| !f.ends_with(".ts")), "{answers:?}: {files:?}");
            assert!(!files.contains(&"tsconfig.json".to_string()));
        }
        if !answers.use_eslint {
            assert!(!files.contains(&".eslintrc.json".to_string()), "{answers:?}");
            assert!(!files.contains(&".prettierrc.json".to_string()), "{answers:?}");
        }
        assert!(files.contains(&"package.json".to_string()));
        assert!(files.contains(&".gitignore".to_string()));
    }
}

#[tokio::test]
async fn test_prettier_without_eslint_adds_deps_only() {
    let out = TempDir::new().unwrap();

    scaffold(&answers("fmt", false, false, true), &template_root(), out.path())
        .await
        .unwrap();

    let fmt = out.path().join("fmt");
    let manifest = read_json(&fmt.join("package.json"));
    assert!(manifest["devDependencies"]["prettier"].is_string());
    assert!(manifest["devDependencies"]["eslint"].is_null());
    assert!(!fmt.join(".eslintrc.json").exists());
}

#[tokio::test]
async fn test_name_with_spaces_kept_verbatim() {
    let out = TempDir::new().unwrap();

    scaffold(&answers(" my app", false, true, true), &template_root(), out.path())
        .await
        .unwrap();

    let manifest = read_json(&out.path().join(" my app").join("package.json"));
    assert_eq!(manifest["name"], " my app");
}

#[tokio::test]
async fn test_existing_destination_rejected() {
    let out = TempDir::new().unwrap();
    let existing = out.path().join("demo");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("notes.txt"), "keep").unwrap();

    let err = scaffold(&answers("demo", true, true, true), &template_root(), out.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::DestinationExists(_)));
    assert_eq!(files_under(&existing), vec!["notes.txt".to_string()]);
}

#[tokio::test]
async fn test_missing_template_root() {
    let out = TempDir::new().unwrap();

    let err = scaffold(
        &answers("demo", false, true, true),
        &out.path().join("missing"),
        out.path(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), "SourceMissingError");
    assert!(!out.path().join("demo").exists());
}

#[tokio::test]
async fn test_broken_base_config_writes_nothing() {
    let template = TempDir::new().unwrap();
    fs::write(template.path().join("package.json"), "{ broken").unwrap();
    fs::write(template.path().join(".eslintrc.json"), "{}").unwrap();
    let out = TempDir::new().unwrap();

    let err = scaffold(&answers("demo", false, true, true), template.path(), out.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "ConfigLoadError");
    assert!(!out.path().join("demo").exists());
}
