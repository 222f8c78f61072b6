use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, InspectArgs, ScanArgs};

/// Top-level CLI parser for the `godmt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "godmt",
    version,
    about = "Extract Go struct, const and var declarations into a neutral model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "godmt",
            "scan",
            "./pkg",
            "--out",
            "models",
            "--diagnostics",
            "--include-tests",
            "--exclude",
            "gen/**",
            "--exclude",
            "mocks/",
        ])
        .expect("cli should parse");

        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.path, PathBuf::from("./pkg"));
        assert_eq!(args.out, Some(PathBuf::from("models")));
        assert!(args.diagnostics);
        assert!(args.include_tests);
        assert_eq!(args.exclude, vec!["gen/**".to_string(), "mocks/".to_string()]);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["godmt", "--format", "raw", "--verbose", "inspect", "a.go"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["godmt", "inspect", "a.go", "-q"]).expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.global_flags().format, OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["godmt", "--format", "table", "inspect", "a.go"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn scan_requires_a_path() {
        assert!(Cli::try_parse_from(["godmt", "scan"]).is_err());
    }
}
