//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to name itself, point at its templates and
//! describe what the user should do once the project exists.

use crate::answers::AnswerSet;
use std::path::{Path, PathBuf};

/// Configuration trait for a scaffolding product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the templates directory
    fn templates_dir_env(&self) -> &'static str;

    /// Templates directory shipped with the installation
    fn default_templates_dir(&self) -> PathBuf;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, answers: &AnswerSet) -> Vec<String>;
}
