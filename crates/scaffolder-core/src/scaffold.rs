//! The non-interactive part of a run: configs in, project directory out

use crate::answers::AnswerSet;
use crate::config::{augment, select_base_configs};
use crate::error::ScaffoldError;
use crate::templates::{materialize, MaterializationPlan, MaterializeReport};
use std::path::Path;

/// Load, augment, plan, and copy, strictly in that order
pub async fn scaffold(
    answers: &AnswerSet,
    template_root: &Path,
    parent: &Path,
) -> Result<MaterializeReport, ScaffoldError> {
    if !template_root.is_dir() {
        return Err(ScaffoldError::SourceMissing(template_root.to_path_buf()));
    }

    let base = select_base_configs(template_root, answers)?;
    let configs = augment(&base, answers);
    let plan = MaterializationPlan::new(template_root.to_path_buf(), answers, configs);

    materialize(&plan, parent).await
}
