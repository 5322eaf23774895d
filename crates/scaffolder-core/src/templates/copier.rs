//! Template tree copying with glob exclusion and content overrides

use crate::error::ScaffoldError;
use crate::templates::plan::MaterializationPlan;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// What ended up on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub destination: PathBuf,
    /// Relative paths written, in walk order, overrides without a template file last
    pub written: Vec<String>,
    /// Relative paths left out by an exclusion rule
    pub skipped: Vec<String>,
}

/// `/`-separated form of a path relative to the template root
fn relative_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Every regular file under `root`, sorted, with its relative key
fn template_files(root: &Path) -> Result<Vec<(String, PathBuf)>, ScaffoldError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop in template"));
            ScaffoldError::materialization(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| ScaffoldError::materialization(entry.path(), io::Error::other(e)))?;
        files.push((relative_key(relative), entry.path().to_path_buf()));
    }

    Ok(files)
}

async fn write_override(target: &Path, content: &serde_json::Value) -> Result<(), ScaffoldError> {
    let mut body = serde_json::to_string_pretty(content)
        .map_err(|e| ScaffoldError::materialization(target, io::Error::from(e)))?;
    body.push('\n');
    fs::write(target, body)
        .await
        .map_err(|e| ScaffoldError::materialization(target, e))
}

async fn ensure_parent(target: &Path) -> Result<(), ScaffoldError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::materialization(parent, e))?;
    }
    Ok(())
}

/// Copy the plan's template root into `parent/<destination_name>`.
///
/// Fails before writing anything if the source is absent or the destination
/// exists. A failure mid-copy leaves already written files in place.
pub async fn materialize(
    plan: &MaterializationPlan,
    parent: &Path,
) -> Result<MaterializeReport, ScaffoldError> {
    if !plan.source_root.is_dir() {
        return Err(ScaffoldError::SourceMissing(plan.source_root.clone()));
    }

    let destination = parent.join(&plan.destination_name);
    if fs::symlink_metadata(&destination).await.is_ok() {
        return Err(ScaffoldError::DestinationExists(destination));
    }

    let excludes = plan.exclude_set()?;
    let files = template_files(&plan.source_root)?;

    fs::create_dir_all(&destination)
        .await
        .map_err(|e| ScaffoldError::materialization(&destination, e))?;

    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for (key, source) in files {
        if excludes.is_match(&key) {
            skipped.push(key);
            continue;
        }

        let target = destination.join(&key);
        ensure_parent(&target).await?;

        match plan.override_for(&key) {
            Some(content) => write_override(&target, content).await?,
            None => {
                fs::copy(&source, &target)
                    .await
                    .map_err(|e| ScaffoldError::materialization(&target, e))?;
            }
        }
        written.push(key);
    }

    for o in &plan.overrides {
        if written.iter().any(|w| w == o.path) {
            continue;
        }
        let target = destination.join(o.path);
        ensure_parent(&target).await?;
        write_override(&target, &o.content).await?;
        written.push(o.path.to_string());
    }

    Ok(MaterializeReport {
        destination,
        written,
        skipped,
    })
}
