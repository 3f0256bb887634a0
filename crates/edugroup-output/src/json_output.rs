//! JSON output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use edugroup_model::Group;

use crate::common::group_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedGroup {
    pub name: String,
    pub students: Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsDocument {
    pub groups: Vec<NamedGroup>,
}

impl GroupsDocument {
    pub fn from_groups(groups: &[Group]) -> Self {
        Self {
            groups: groups
                .iter()
                .enumerate()
                .map(|(index, group)| NamedGroup {
                    name: group_label(index),
                    students: group.clone(),
                })
                .collect(),
        }
    }
}

pub fn render_json(groups: &[Group]) -> Result<String> {
    serde_json::to_string_pretty(&GroupsDocument::from_groups(groups)).context("serialize groups")
}

pub fn write_json(groups: &[Group], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create json: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &GroupsDocument::from_groups(groups))
        .with_context(|| format!("write json: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush json: {}", path.display()))
}
