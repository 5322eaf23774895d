//! Version comparison for CLI and template compatibility

use semver::Version;

/// Parse a version string, tolerating a leading `v`
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}

/// Compare CLI version against template version
/// Returns a warning message if the CLI is older than the template expects
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    // Can't compare, skip warning
    let cli_ver = parse_version(cli_version)?;
    let template_ver = parse_version(template_version)?;

    (cli_ver < template_ver).then(|| {
        format!(
            "Template requires CLI {} or newer, you are running {}. Upgrade with: {}",
            template_ver, cli_ver, upgrade_command
        )
    })
}
