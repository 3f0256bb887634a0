//! Roster ingestion for grouping runs.
//!
//! Reads CSV files into [`GroupingData`](edugroup_model::GroupingData):
//!
//! - **Subject rosters**: subject labels in the first row, students below
//! - **Student lists**: one student per row in the first column
//! - **Exclusions**: one exclusion set per column
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use edugroup_ingest::load_subject_data;
//!
//! let data = load_subject_data(Path::new("roster.csv"), Some(Path::new("exclusions.csv")))?;
//! ```

mod error;
mod grid;
mod roster;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use grid::{CsvGrid, read_csv_grid};

// === Loaders ===
pub use roster::{
    load_exclusions, load_student_data, load_student_list, load_subject_data, load_subject_roster,
};
