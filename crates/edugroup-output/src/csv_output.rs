//! CSV output: one ragged row per group.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use edugroup_model::Group;

use crate::common::group_label;

fn write_rows<W: std::io::Write>(groups: &[Group], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for (index, group) in groups.iter().enumerate() {
        let mut record = Vec::with_capacity(group.len() + 1);
        record.push(group_label(index));
        record.extend(group.iter().map(str::to_string));
        writer.write_record(&record).context("write group row")?;
    }
    writer.flush().context("flush csv writer")?;
    Ok(())
}

pub fn render_csv(groups: &[Group]) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(groups, &mut buffer)?;
    String::from_utf8(buffer).context("csv output is not utf-8")
}

pub fn write_csv(groups: &[Group], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    write_rows(groups, file).with_context(|| format!("write csv: {}", path.display()))
}
