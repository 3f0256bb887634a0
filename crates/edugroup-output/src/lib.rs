//! Group export.
//!
//! - **CSV**: one row per group, `Group <n>` followed by its members
//! - **JSON**: a `groups` array of named member lists

mod common;
mod csv_output;
mod json_output;

pub use common::{OutputFormat, default_output_path, group_label, write_groups};
pub use csv_output::{render_csv, write_csv};
pub use json_output::{GroupsDocument, NamedGroup, render_json, write_json};
