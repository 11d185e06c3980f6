//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "construct",
    bin_name = "construct",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Generate a basic PHP project",
    long_about = "Construct scaffolds a composer-ready PHP library: manifest, \
                  license, README, source stub, and a test setup for your \
                  preferred framework.",
    after_help = "EXAMPLES:\n\
        \x20 construct generate acme/widget\n\
        \x20 construct generate acme/widget --test behat --license Apache-2.0\n\
        \x20 construct generate acme/widget --namespace 'Acme\\Widget' --git\n\
        \x20 construct completions bash > /usr/share/bash-completion/completions/construct",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a basic PHP project.
    #[command(
        visible_alias = "g",
        about = "Generate a basic PHP project",
        after_help = "EXAMPLES:\n\
            \x20 construct generate acme/widget\n\
            \x20 construct generate acme/widget -t phpspec -l GPL-3.0\n\
            \x20 construct generate acme/widget -s 'Acme\\Widget' --git"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 construct completions bash > ~/.local/share/bash-completion/completions/construct\n\
            \x20 construct completions zsh  > ~/.zfunc/_construct\n\
            \x20 construct completions fish > ~/.config/fish/completions/construct.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `construct generate`.
///
/// The license and testing-framework options are free strings on purpose:
/// unknown values fall back to a default with a warning instead of a clap
/// parse error, so scaffolding still succeeds.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// The `vendor/project` name.
    #[arg(value_name = "NAME", help = "The vendor/project name")]
    pub name: String,

    /// Testing framework.
    #[arg(
        short = 't',
        long = "test",
        value_name = "FRAMEWORK",
        help = "Testing framework (one of: phpunit, behat, phpspec, codeception) [default: phpunit]"
    )]
    pub test: Option<String>,

    /// Open source license.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        help = "License (one of: MIT, Apache-2.0, GPL-2.0, GPL-3.0) [default: MIT]"
    )]
    pub license: Option<String>,

    /// Project namespace, used verbatim in generated sources.
    #[arg(
        short = 's',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Project namespace [default: Vendor\\Project]"
    )]
    pub namespace: Option<String>,

    /// Initialize an empty git repo in the output directory.
    #[arg(short = 'g', long = "git", help = "Initialize an empty git repo")]
    pub git: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `construct completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["construct", "generate", "acme/widget"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.name, "acme/widget");
                assert!(args.test.is_none());
                assert!(args.license.is_none());
                assert!(!args.git);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["construct", "g", "acme/widget"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn short_options_parse() {
        let cli = Cli::parse_from([
            "construct",
            "generate",
            "acme/widget",
            "-t",
            "behat",
            "-l",
            "GPL-3.0",
            "-s",
            "Acme\\Widget",
            "-g",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.test.as_deref(), Some("behat"));
            assert_eq!(args.license.as_deref(), Some("GPL-3.0"));
            assert_eq!(args.namespace.as_deref(), Some("Acme\\Widget"));
            assert!(args.git);
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn unknown_option_values_are_not_parse_errors() {
        // The fallback policy lives in the core, not in clap.
        let cli = Cli::try_parse_from([
            "construct", "generate", "acme/widget", "--license", "GPL-4.0",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["construct", "--quiet", "--verbose", "generate", "a/b"]);
        assert!(result.is_err());
    }
}
