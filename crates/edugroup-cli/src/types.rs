use std::path::PathBuf;

use edugroup_core::GroupingMode;
use edugroup_model::{Group, GroupingSummary};
use edugroup_output::OutputFormat;

/// One grouping job as requested on the command line.
#[derive(Debug, Clone)]
pub struct GroupingRequest {
    /// Subject roster or flat student list, depending on `mode`.
    pub roster: PathBuf,
    pub exclusions: Option<PathBuf>,
    pub mode: GroupingMode,
    pub seed: Option<u64>,
    /// Destination file; derived from `roster` when unset.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RunResult {
    pub mode: GroupingMode,
    pub seed: u64,
    pub groups: Vec<Group>,
    pub summary: GroupingSummary,
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
}
