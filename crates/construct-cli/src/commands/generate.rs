//! Implementation of the `construct generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core scaffold service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use construct_adapters::{GitCli, LocalFilesystem};
use construct_core::{
    application::{ScaffoldService, VcsStatus},
    domain::{
        DEFAULT_NAMESPACE, GenerationRequest, License, OptionSet, ProjectName, Resolved,
        TestingFramework,
    },
    generator::Generator,
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `construct generate` command.
///
/// Dispatch sequence:
/// 1. Validate the project name (the one hard failure)
/// 2. Resolve license / testing framework with warning-on-fallback
/// 3. Early-exit if `--dry-run`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name: fatal on mismatch, nothing is written.
    let name = ProjectName::parse(&args.name).map_err(construct_core::error::ConstructError::from)?;

    // 2. Option resolution (CLI flag > config default > built-in default).
    let testing = resolve_option::<TestingFramework>(
        args.test.as_deref().or(config.defaults.test.as_deref()),
        "testing framework",
        &output,
    )?;
    let license = resolve_option::<License>(
        args.license.as_deref().or(config.defaults.license.as_deref()),
        "license",
        &output,
    )?;
    let namespace = args
        .namespace
        .or(config.defaults.namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

    let request = GenerationRequest::new(name.clone(), testing, license, namespace, args.git);

    debug!(
        testing = %request.testing(),
        license = %request.license(),
        namespace = %request.namespace(),
        git = request.git(),
        "request resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let manifest = Generator::new().generate(&request);
        output.info(&format!(
            "Dry run: would create '{}' with {} files",
            manifest.root().display(),
            manifest.entry_count(),
        ))?;
        for entry in manifest.entries() {
            output.print(&format!("  {}", manifest.root().join(&entry.path).display()))?;
        }
        return Ok(());
    }

    // 4. Scaffold through the real adapters.
    let service = ScaffoldService::new(
        Generator::new(),
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new()),
    );

    info!(project = %name, "scaffold started");
    let summary = service.scaffold(&request).map_err(CliError::Core)?;

    if let VcsStatus::Failed(reason) = &summary.vcs {
        output.warning(&format!(
            "Could not initialize a git repo in \"{}\": {reason}",
            summary.root.display()
        ))?;
    }

    // 5. Success + next steps
    output.success(&format!("Project \"{name}\" constructed."))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", summary.root.display()))?;
        output.print("  composer install")?;
        output.print(&format!("  {}", request.testing().run_command()))?;
    }

    Ok(())
}

/// Resolve a raw option value against its allow-list, emitting the fallback
/// warning when the input is unrecognized.
fn resolve_option<T: OptionSet>(
    raw: Option<&str>,
    what: &str,
    output: &OutputManager,
) -> CliResult<T> {
    let Some(raw) = raw else {
        return Ok(T::default());
    };

    let Resolved { value, rejected } = T::resolve(raw);
    if let Some(rejected) = rejected {
        output.warning(&format!(
            "Warning: \"{rejected}\" is not a known {what}, yet. Using {} by default.",
            T::default().token()
        ))?;
    }
    Ok(value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn absent_option_resolves_to_default_silently() {
        let testing: TestingFramework =
            resolve_option(None, "testing framework", &quiet_output()).unwrap();
        assert_eq!(testing, TestingFramework::Phpunit);

        let license: License = resolve_option(None, "license", &quiet_output()).unwrap();
        assert_eq!(license, License::Mit);
    }

    #[test]
    fn known_option_passes_through() {
        let license: License =
            resolve_option(Some("GPL-2.0"), "license", &quiet_output()).unwrap();
        assert_eq!(license, License::Gpl2);
    }

    #[test]
    fn unknown_option_falls_back() {
        let license: License =
            resolve_option(Some("GPL-4.0"), "license", &quiet_output()).unwrap();
        assert_eq!(license, License::Mit);

        let testing: TestingFramework =
            resolve_option(Some("jest"), "testing framework", &quiet_output()).unwrap();
        assert_eq!(testing, TestingFramework::Phpunit);
    }
}
