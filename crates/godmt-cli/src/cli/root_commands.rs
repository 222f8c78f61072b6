use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract every Go file under a path into per-file result files.
    Scan(ScanArgs),
    /// Extract one Go file and print its model.
    Inspect(InspectArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Directory or single Go file to scan.
    pub path: PathBuf,

    /// Results root (defaults to `output.root` from config).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Record omitted declarations and fields in each result.
    #[arg(long)]
    pub diagnostics: bool,

    /// Also scan `*_test.go` files and `testdata/` trees.
    #[arg(long)]
    pub include_tests: bool,

    /// Additional gitignore-style globs to skip (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Go source file to extract.
    pub file: PathBuf,

    /// Include omitted declarations and fields in the output.
    #[arg(long)]
    pub diagnostics: bool,
}
