use anyhow::Context;
use godmt_config::GodmtConfig;
use godmt_parser::{ExtractOptions, extract_path, is_go_source};

use crate::cli::{GlobalFlags, InspectArgs};
use crate::output::output;

pub fn handle(
    args: &InspectArgs,
    flags: &GlobalFlags,
    config: &GodmtConfig,
) -> anyhow::Result<()> {
    if !is_go_source(&args.file) {
        anyhow::bail!("'{}' is not a .go file", args.file.display());
    }
    let options = ExtractOptions {
        diagnostics: args.diagnostics || config.scan.diagnostics,
    };
    let scanned = extract_path(&args.file, options)
        .with_context(|| format!("failed to extract '{}'", args.file.display()))?;
    output(&scanned, flags.format)
}
