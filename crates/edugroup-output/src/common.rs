use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use edugroup_model::Group;

use crate::csv_output::write_csv;
use crate::json_output::write_json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// 1-based display name of the group at `index`.
pub fn group_label(index: usize) -> String {
    format!("Group {}", index + 1)
}

/// `<stem>_groups.<ext>` next to the input file.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster");
    input.with_file_name(format!("{stem}_groups.{}", format.extension()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    Ok(())
}

/// Write `groups` to `path` in `format`.
pub fn write_groups(groups: &[Group], path: &Path, format: OutputFormat) -> Result<()> {
    ensure_parent_dir(path)?;
    match format {
        OutputFormat::Csv => write_csv(groups, path)?,
        OutputFormat::Json => write_json(groups, path)?,
    }
    info!(
        path = %path.display(),
        groups = groups.len(),
        format = format.extension(),
        "groups exported"
    );
    Ok(())
}
