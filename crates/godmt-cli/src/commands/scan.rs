use std::path::PathBuf;

use anyhow::Context;
use godmt_config::GodmtConfig;
use godmt_parser::ExtractOptions;

use crate::cli::{GlobalFlags, ScanArgs};
use crate::output::output;
use crate::pipeline::ScanPipeline;
use crate::{walk, writer};

/// Effective scan settings: flags win over config.
#[derive(Debug, PartialEq, Eq)]
struct ScanPlan {
    out: PathBuf,
    include_tests: bool,
    diagnostics: bool,
    exclude: Vec<String>,
}

impl ScanPlan {
    fn resolve(args: &ScanArgs, config: &GodmtConfig) -> Self {
        let mut exclude = config.scan.exclude.clone();
        exclude.extend(args.exclude.iter().cloned());
        Self {
            out: args.out.clone().unwrap_or_else(|| config.output.root.clone()),
            include_tests: args.include_tests || config.scan.include_tests,
            diagnostics: args.diagnostics || config.scan.diagnostics,
            exclude,
        }
    }
}

pub fn handle(
    args: &ScanArgs,
    flags: &GlobalFlags,
    config: &GodmtConfig,
) -> anyhow::Result<()> {
    if !args.path.exists() {
        anyhow::bail!("scan path '{}' does not exist", args.path.display());
    }
    let plan = ScanPlan::resolve(args, config);

    let files = walk::go_files(&args.path, plan.include_tests, &plan.exclude)
        .with_context(|| format!("failed to walk '{}'", args.path.display()))?;
    writer::create_result_folder(&plan.out)?;

    let pipeline = ScanPipeline::new(
        args.path.clone(),
        plan.out,
        ExtractOptions {
            diagnostics: plan.diagnostics,
        },
        config.output.pretty,
    );
    let summary = pipeline.run(&files);
    output(&summary, flags.format)
}
