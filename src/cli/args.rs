//! CLI argument definitions
//!
//! All Clap derive structs for `docsmith` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Documentation conversion and package scaffolding toolkit.
#[derive(Parser, Debug)]
#[command(name = "docsmith", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DOCSMITH_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert HTML documentation pages to Markdown with frontmatter.
    Convert(ConvertArgs),

    /// Generate the boilerplate skeleton for a new package.
    Scaffold(ScaffoldArgs),

    /// Remove duplicate page entries from navigation JSON files.
    DedupeNav(DedupeNavArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Convert Command
// ============================================================================

/// Arguments for `convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory to scan for HTML files.
    #[arg(short, long, default_value = ".", env = "DOCSMITH_SOURCE")]
    pub source: PathBuf,

    /// Directory to write converted Markdown files into.
    #[arg(short, long, default_value = "output", env = "DOCSMITH_OUTPUT")]
    pub output: PathBuf,
}

// ============================================================================
// Scaffold Command
// ============================================================================

/// Arguments for `scaffold`.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Base directory to scaffold the package into.
    #[arg(
        short,
        long,
        default_value = "./packages/auth0-acul-react",
        env = "DOCSMITH_SCAFFOLD_BASE"
    )]
    pub base: PathBuf,
}

// ============================================================================
// Dedupe-Nav Command
// ============================================================================

/// Arguments for `dedupe-nav`.
#[derive(Args, Debug)]
pub struct DedupeNavArgs {
    /// Navigation JSON files to clean in place.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["docsmith", "convert"]).unwrap();
        if let Commands::Convert(args) = cli.command {
            assert_eq!(args.source, PathBuf::from("."));
            assert_eq!(args.output, PathBuf::from("output"));
            return;
        }
        panic!("Expected ConvertArgs");
    }

    #[test]
    fn test_convert_with_paths() {
        let cli = Cli::try_parse_from([
            "docsmith", "convert", "--source", "docs", "--output", "out",
        ]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_scaffold_default_base() {
        let cli = Cli::try_parse_from(["docsmith", "scaffold"]).unwrap();
        if let Commands::Scaffold(args) = cli.command {
            assert_eq!(args.base, PathBuf::from("./packages/auth0-acul-react"));
            return;
        }
        panic!("Expected ScaffoldArgs");
    }

    #[test]
    fn test_dedupe_nav_requires_files() {
        let result = Cli::try_parse_from(["docsmith", "dedupe-nav"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_dedupe_nav_multiple_files() {
        let cli = Cli::try_parse_from(["docsmith", "dedupe-nav", "a.json", "b.json"]).unwrap();
        if let Commands::DedupeNav(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            return;
        }
        panic!("Expected DedupeNavArgs");
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["docsmith", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["docsmith", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["docsmith", "--color", variant, "convert"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["docsmith", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["docsmith", "-vvv", "convert"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["docsmith", "--quiet", "scaffold"]).unwrap();
        assert!(cli.quiet);
    }
}
