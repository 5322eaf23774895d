//! Scaffolder Core - project scaffolding for JavaScript/TypeScript starters
//!
//! A run asks four questions, loads the template's base package manifest and
//! lint config, merges in the lint/format dependency fragments the answers
//! call for, and copies the template tree into a new directory named after the
//! project.
//!
//! # Architecture
//!
//! - **Core Operations** - `config` (load, merge, augment) and `templates`
//!   (manifest, plan, copy), all free of terminal I/O
//! - **Orchestration** - [`scaffold`] runs the non-interactive pipeline for a
//!   given [`AnswerSet`]; [`ProductConfig`] describes the binary
//! - **CLI/TUI Interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{scaffold, AnswerSet};
//!
//! let answers = AnswerSet::with_defaults("demo");
//! let report = scaffold(&answers, Path::new("templates/vanilla"), Path::new(".")).await?;
//! println!("wrote {} files", report.written.len());
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod product;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{validate_name, AnswerSet};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use scaffold::scaffold;
pub use templates::{materialize, MaterializationPlan, MaterializeReport, TemplateManifest};

#[cfg(feature = "tui")]
pub use tui::run;
