//! CLI argument definitions for EduGroup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "edugroup",
    version,
    about = "EduGroup - Split a class roster into constraint-aware groups",
    long_about = "Split a class roster into groups.\n\n\
                  `subjects` keeps students of the same subject apart and opens as many\n\
                  groups as that takes. `fixed` builds an exact number of balanced groups.\n\
                  Both honour exclusion sets: students listed together never share a group."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Group a subject roster so no group holds two students of one subject.
    Subjects(SubjectsArgs),

    /// Split a student list into a fixed number of balanced groups.
    Fixed(FixedArgs),
}

#[derive(Parser)]
pub struct SubjectsArgs {
    /// CSV with subject labels in the first row and students below.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Parser)]
pub struct FixedArgs {
    /// Number of groups to build (0 groups the roster by subject instead).
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// CSV whose first column lists the students.
    #[arg(value_name = "STUDENTS")]
    pub students: PathBuf,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Options shared by both grouping commands.
#[derive(Args)]
pub struct RunArgs {
    /// CSV where every column is one exclusion set.
    #[arg(long = "exclusions", short = 'x', value_name = "FILE")]
    pub exclusions: Option<PathBuf>,

    /// Output file (default: <INPUT>_groups.<ext> next to the input).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format to write.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Seed for the shuffle; reuse a reported seed to reproduce a run.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Group and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
