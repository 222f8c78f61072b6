use godmt_config::GodmtConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod inspect;
pub mod scan;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &GodmtConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Scan(args) => scan::handle(args, flags, config),
        Commands::Inspect(args) => inspect::handle(args, flags, config),
    }
}
