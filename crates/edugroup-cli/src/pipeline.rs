//! Grouping pipeline with explicit stages.
//!
//! 1. **Ingest**: read the roster and exclusion CSV files
//! 2. **Group**: run the selected grouping policy
//! 3. **Verify**: re-check every group against the constraints
//! 4. **Export**: write the groups as CSV or JSON
//!
//! Nothing is written when verification finds a violation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{error, info, info_span};

use edugroup_core::{GroupingMode, GroupingOptions, GroupingOutcome, ViolationKind};
use edugroup_ingest::{load_student_data, load_subject_data};
use edugroup_model::GroupingData;
use edugroup_output::{default_output_path, group_label, write_groups};

use crate::types::{GroupingRequest, RunResult};

/// Run every stage for `request`.
pub fn run_grouping(request: &GroupingRequest) -> Result<RunResult> {
    let span = info_span!("run", roster = %request.roster.display());
    let _guard = span.enter();

    let data = ingest(request)?;
    let outcome = group(&data, request)?;
    verify(&outcome, &data)?;
    let output = if request.dry_run {
        info!("dry run, skipping export");
        None
    } else {
        Some(export(&outcome, request)?)
    };

    Ok(RunResult {
        mode: outcome.mode,
        seed: outcome.seed,
        summary: outcome.summary(),
        groups: outcome.groups,
        output,
    })
}

pub fn ingest(request: &GroupingRequest) -> Result<GroupingData> {
    let exclusions = request.exclusions.as_deref();
    let data = match request.mode {
        GroupingMode::BySubject => load_subject_data(&request.roster, exclusions),
        GroupingMode::FixedCount(_) => load_student_data(&request.roster, exclusions),
    }
    .with_context(|| format!("failed to load {}", request.roster.display()))?;
    Ok(data)
}

pub fn group(data: &GroupingData, request: &GroupingRequest) -> Result<GroupingOutcome> {
    let mut options = GroupingOptions::by_subject().with_mode(request.mode);
    if let Some(seed) = request.seed {
        options = options.with_seed(seed);
    }
    let outcome = edugroup_core::run(data, &options).context("grouping failed")?;
    info!(
        seed = outcome.seed,
        groups = outcome.groups.len(),
        "grouping finished"
    );
    Ok(outcome)
}

/// Fail when any group breaks the placement rule.
pub fn verify(outcome: &GroupingOutcome, data: &GroupingData) -> Result<()> {
    let violations = outcome.violations(data);
    if violations.is_empty() {
        return Ok(());
    }
    for violation in &violations {
        let reason = match violation.kind {
            ViolationKind::SharedExclusion => "share an exclusion set",
            ViolationKind::SharedSubject => "share a subject",
        };
        error!(
            group = %group_label(violation.group),
            first = %violation.first,
            second = %violation.second,
            reason,
            "constraint violation"
        );
    }
    bail!(
        "{} constraint violation(s) found, refusing to write groups (seed {})",
        violations.len(),
        outcome.seed
    );
}

pub fn export(outcome: &GroupingOutcome, request: &GroupingRequest) -> Result<PathBuf> {
    let path = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.roster, request.format));
    write_groups(&outcome.groups, &path, request.format)?;
    Ok(path)
}
