//! Charm-style CLI prompts using cliclack

use crate::answers::{validate_name, AnswerSet};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::scaffold::scaffold;
use crate::templates::{self, version, MaterializeReport, TemplateManifest};
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Locate templates and check compatibility before asking anything
    let (manifest, template_root) = load_template(config, cli_version)?;

    // Step 2: Ask the questions
    let answers = collect_answers()?;

    // Step 3: Create project
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let report = create_project(&answers, &template_root, &current_dir).await?;

    // Step 4: Show next steps
    print_next_steps(config, &report.destination, &answers, &manifest)?;

    Ok(())
}

fn load_template<C: ProductConfig>(
    config: &C,
    cli_version: &str,
) -> Result<(TemplateManifest, PathBuf)> {
    let templates_dir = templates::resolve_templates_dir(config);
    let manifest = TemplateManifest::load(&templates_dir)?;
    let template_root = manifest.template_root(&templates_dir);

    cliclack::log::info(templates_notice(&templates_dir))?;
    cliclack::log::info(format!(
        "Template: {} - {}",
        manifest.name, manifest.description
    ))?;

    if let Some(warning) =
        version::check_compatibility(cli_version, &manifest.version, config.upgrade_command())
    {
        cliclack::log::warning(warning)?;
    }

    Ok((manifest, template_root))
}

fn templates_notice(templates_dir: &Path) -> String {
    format!("Using templates from {}", templates_dir.display())
}

fn aborted(_: std::io::Error) -> ScaffoldError {
    ScaffoldError::AbortedInput
}

/// Ask the four scaffold questions in order
pub fn collect_answers() -> Result<AnswerSet, ScaffoldError> {
    let (ts_default, eslint_default, prettier_default) = AnswerSet::DEFAULT_TOGGLES;

    let name: String = cliclack::input("Project name?")
        .validate(|input: &String| validate_name(input))
        .interact()
        .map_err(aborted)?;

    let use_typescript: bool = cliclack::confirm("Use TypeScript for type-checking?")
        .initial_value(ts_default)
        .interact()
        .map_err(aborted)?;

    let use_eslint: bool = cliclack::confirm("Use ESLint for code quality?")
        .initial_value(eslint_default)
        .interact()
        .map_err(aborted)?;

    let use_prettier: bool = cliclack::confirm("Use Prettier for code style?")
        .initial_value(prettier_default)
        .interact()
        .map_err(aborted)?;

    Ok(AnswerSet {
        name,
        use_typescript,
        use_eslint,
        use_prettier,
    })
}

async fn create_project(
    answers: &AnswerSet,
    template_root: &Path,
    parent: &Path,
) -> Result<MaterializeReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match scaffold(answers, template_root, parent).await {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files in {}",
                report.written.len(),
                report.destination.display()
            ));
            if !report.skipped.is_empty() {
                cliclack::log::info(format!(
                    "Skipped {} template files not used by this setup",
                    report.skipped.len()
                ))?;
            }
            Ok(report)
        }
        Err(e) => {
            spinner.stop("Project creation failed");
            if let ScaffoldError::Materialization { .. } = e {
                cliclack::log::warning("Files written before the failure were left in place")?;
            }
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    answers: &AnswerSet,
    manifest: &TemplateManifest,
) -> Result<()> {
    let steps = config.next_steps(project_dir, answers);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}  {}", format!("{}.", i + 1).cyan(), step);
    }

    cliclack::outro(format!("Happy coding with {}!", manifest.name))?;

    Ok(())
}
