//! `jaxbify run` - annotate a source tree

use crate::options::{ConfigArgs, ReportFormat};
use anyhow::Result;
use jaxbify_core::{Annotator, AnnotatorConfig, DiskTree, DryRunTree, RunReport};
use tracing::info;

pub fn run(args: &ConfigArgs, report: ReportFormat) -> Result<()> {
    let config = args.to_config()?;
    let summary = annotate(config)?;

    match report {
        ReportFormat::Text => println!("{summary}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

/// Run against the real filesystem, or against a write-suppressing view of it
pub fn annotate(config: AnnotatorConfig) -> Result<RunReport> {
    info!(
        base = %config.base_dir.display(),
        pairs = config.pairs.len(),
        dry_run = config.dry_run,
        "starting annotation run"
    );
    let report = if config.dry_run {
        Annotator::new(config, DryRunTree::new(DiskTree::new())).run()?
    } else {
        Annotator::new(config, DiskTree::new()).run()?
    };
    Ok(report)
}
