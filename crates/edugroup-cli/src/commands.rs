use std::path::Path;

use anyhow::Result;
use tracing::info;

use edugroup_cli::pipeline::run_grouping;
use edugroup_cli::types::{GroupingRequest, RunResult};
use edugroup_core::GroupingMode;
use edugroup_output::OutputFormat;

use crate::cli::{FixedArgs, OutputFormatArg, RunArgs, SubjectsArgs};

pub fn run_subjects(args: &SubjectsArgs) -> Result<RunResult> {
    run_grouping(&request(&args.roster, GroupingMode::BySubject, &args.run))
}

pub fn run_fixed(args: &FixedArgs) -> Result<RunResult> {
    let mode = GroupingMode::from_count(args.count);
    if mode == GroupingMode::BySubject {
        info!("group count 0, reading the input as a subject roster");
    }
    run_grouping(&request(&args.students, mode, &args.run))
}

fn request(roster: &Path, mode: GroupingMode, args: &RunArgs) -> GroupingRequest {
    GroupingRequest {
        roster: roster.to_path_buf(),
        exclusions: args.exclusions.clone(),
        mode,
        seed: args.seed,
        output: args.output.clone(),
        format: match args.format {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        dry_run: args.dry_run,
    }
}
