//! Run orchestration.
//!
//! Every interface directory is processed in pair order, then every
//! implementation directory in pair order. The configuration is validated
//! against the tree first, so a configuration error never leaves a
//! half-annotated tree behind. The first I/O failure aborts the run.

use crate::config::{AnnotatorConfig, package_name};
use crate::error::AnnotateResult;
use crate::implementation::{ImplementationAnnotator, ImplementationOutcome};
use crate::interface::{InterfaceAnnotator, InterfaceOutcome, PackageContext};
use crate::source_tree::SourceTree;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub interfaces_seen: usize,
    pub interfaces_annotated: usize,
    pub not_interfaces: usize,
    pub already_annotated: usize,
    pub enum_discriminators: usize,
    pub sub_interfaces_rewritten: usize,
    pub adapters_created: usize,
    pub adapters_kept: usize,
    pub implementations_seen: usize,
    pub implementations_rewritten: usize,
    pub implementations_skipped: usize,
    /// Files written, or that would have been written on a dry run.
    pub files_written: usize,
}

impl RunReport {
    fn record_interface(&mut self, outcome: &InterfaceOutcome) {
        self.interfaces_seen += 1;
        if outcome.not_an_interface {
            self.not_interfaces += 1;
            return;
        }
        if outcome.already_annotated {
            self.already_annotated += 1;
        }
        if outcome.rewritten {
            self.interfaces_annotated += 1;
            self.files_written += 1;
        }
        self.enum_discriminators += outcome.enums_indexed;
        self.sub_interfaces_rewritten += outcome.sub_interfaces_rewritten.len();
        self.adapters_created += outcome.adapters_created.len();
        self.adapters_kept += outcome.adapters_kept.len();
        self.files_written += outcome.adapters_created.len();
    }

    fn record_implementation(&mut self, outcome: &ImplementationOutcome) {
        self.implementations_seen += 1;
        if outcome.skipped {
            self.implementations_skipped += 1;
        }
        if outcome.rewritten {
            self.implementations_rewritten += 1;
            self.files_written += 1;
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            writeln!(f, "Dry run: no files were modified")?;
        }
        writeln!(
            f,
            "Interfaces:      {} seen, {} annotated, {} already annotated, {} not interfaces",
            self.interfaces_seen,
            self.interfaces_annotated,
            self.already_annotated,
            self.not_interfaces
        )?;
        writeln!(
            f,
            "Enums:           {} discriminators assigned",
            self.enum_discriminators
        )?;
        writeln!(
            f,
            "Nested:          {} sub-interfaces rewritten",
            self.sub_interfaces_rewritten
        )?;
        writeln!(
            f,
            "Adapters:        {} created, {} kept",
            self.adapters_created, self.adapters_kept
        )?;
        writeln!(
            f,
            "Implementations: {} seen, {} rewritten, {} skipped",
            self.implementations_seen, self.implementations_rewritten, self.implementations_skipped
        )?;
        write!(f, "Files written:   {}", self.files_written)
    }
}

/// Runs both annotators over every configured directory pair.
pub struct Annotator<T> {
    config: AnnotatorConfig,
    tree: T,
}

impl<T: SourceTree> Annotator<T> {
    pub fn new(config: AnnotatorConfig, tree: T) -> Self {
        Self { config, tree }
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn into_tree(self) -> T {
        self.tree
    }

    /// Validate the configuration, then annotate interfaces and implementations.
    pub fn run(&self) -> AnnotateResult<RunReport> {
        self.config.validate(&self.tree)?;

        let mut report = RunReport {
            dry_run: self.config.dry_run,
            ..RunReport::default()
        };

        let interfaces = InterfaceAnnotator::new(&self.tree, &self.config);
        for pair in &self.config.pairs {
            let ctx = PackageContext {
                dir: pair.interfaces.clone(),
                package: package_name(&self.config.base_dir, &pair.interfaces)?,
                impl_package: package_name(&self.config.base_dir, &pair.impls)?,
            };
            info!(dir = %ctx.dir.display(), package = %ctx.package, "processing interfaces");
            for path in self.tree.list_source_files(&pair.interfaces)? {
                let outcome = interfaces.annotate(&path, &ctx)?;
                report.record_interface(&outcome);
            }
        }

        let implementations = ImplementationAnnotator::new(&self.tree, self.config.naming());
        for pair in &self.config.pairs {
            info!(dir = %pair.impls.display(), "processing implementations");
            for path in self.tree.list_source_files(&pair.impls)? {
                let outcome = implementations.annotate(&path, pair.xml_type_prefix.as_deref())?;
                report.record_implementation(&outcome);
            }
        }

        info!(
            files_written = report.files_written,
            adapters_created = report.adapters_created,
            dry_run = report.dry_run,
            "annotation run complete"
        );
        Ok(report)
    }
}
