//! Vanilla Create - scaffold a JavaScript or TypeScript starter project

use anyhow::Result;
use clap::Parser;
use scaffolder_core::{AnswerSet, ProductConfig, ScaffoldError};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vanilla product configuration
#[derive(Clone)]
pub struct VanillaConfig;

impl ProductConfig for VanillaConfig {
    fn name(&self) -> &'static str {
        "vanilla-create"
    }

    fn display_name(&self) -> &'static str {
        "Vanilla Create"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a JavaScript or TypeScript project with optional ESLint and Prettier"
    }

    fn templates_dir_env(&self) -> &'static str {
        "VANILLA_CREATE_TEMPLATES"
    }

    /// `templates/` next to the executable, else `../share/vanilla-create/templates`.
    ///
    /// The source-tree path is a last resort for `cargo run` and tests. It is
    /// fixed at compile time, so a `cargo install`ed binary whose build
    /// directory is gone needs one of the installed layouts or
    /// `VANILLA_CREATE_TEMPLATES`.
    fn default_templates_dir(&self) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        exe_dir
            .iter()
            .flat_map(|dir| {
                [
                    dir.join("templates"),
                    dir.join("../share/vanilla-create/templates"),
                ]
            })
            .find(|dir| dir.is_dir())
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"))
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install vanilla-create --force"
    }

    fn next_steps(&self, dir: &Path, answers: &AnswerSet) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", answers.name));
        }

        steps.push("npm install".to_string());

        if answers.use_typescript {
            steps.push("npm run build".to_string());
        }

        if answers.use_eslint {
            steps.push("npm run lint".to_string());
        }

        steps.push("npm start".to_string());

        steps
    }
}

/// No flags: every choice is made through the prompts
#[derive(Parser, Debug)]
#[command(name = "vanilla-create")]
#[command(about = "Scaffold a JavaScript or TypeScript project with optional ESLint and Prettier")]
#[command(version)]
pub struct Args {}

/// `<class>: <message>` line for pipeline errors; other errors keep anyhow's report
fn error_line(err: &anyhow::Error) -> Option<String> {
    err.downcast_ref::<ScaffoldError>().map(|e| format!("{}: {}", e.kind(), e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    Args::parse();
    let config = VanillaConfig;

    let result = scaffolder_core::run(&config, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Some(line) = result.as_ref().err().and_then(error_line) {
        let _ = cliclack::log::error(line);
        std::process::exit(1);
    }

    result
}
