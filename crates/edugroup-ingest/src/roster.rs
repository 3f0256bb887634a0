//! Turning CSV grids into grouping input.
//!
//! The layouts follow the two-sheet workbook the tool grew out of, one CSV
//! file per sheet:
//!
//! - subject roster: subject labels across the first row, each column lists
//!   that subject's students below its label;
//! - student list: the first column, every cell a student;
//! - exclusions: every column is one exclusion set, no header row.

use std::path::Path;

use tracing::{debug, info, warn};

use edugroup_model::{ExclusionSet, GroupingData, SubjectRoster, is_blank};

use crate::error::{IngestError, Result};
use crate::grid::read_csv_grid;

pub fn load_subject_roster(path: &Path) -> Result<SubjectRoster> {
    let grid = read_csv_grid(path)?;
    if grid.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    // The first record is the label row even when all of it is blank.
    let Some((labels, body)) = grid.rows.split_first() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let mut roster = SubjectRoster::new();
    for (column, label) in labels.iter().enumerate() {
        if is_blank(label) {
            continue;
        }
        roster.add_subject(label);
        for row in body {
            let Some(student) = row.get(column) else {
                continue;
            };
            if !is_blank(student) {
                roster.insert(label, student.clone());
            }
        }
    }
    if roster.is_empty() {
        return Err(IngestError::NoSubjects {
            path: path.to_path_buf(),
        });
    }

    let ignored = body
        .iter()
        .flat_map(|row| row.iter().enumerate())
        .filter(|(column, value)| {
            !is_blank(value) && labels.get(*column).is_none_or(|label| is_blank(label))
        })
        .count();
    if ignored > 0 {
        warn!(
            path = %path.display(),
            ignored,
            "ignored roster cells under columns without a subject label"
        );
    }
    info!(
        path = %path.display(),
        subjects = roster.subjects().len(),
        students = roster.student_count(),
        "loaded subject roster"
    );
    Ok(roster)
}

pub fn load_student_list(path: &Path) -> Result<Vec<String>> {
    let grid = read_csv_grid(path)?;
    let students: Vec<String> = grid
        .column(0)
        .into_iter()
        .filter(|name| !is_blank(name))
        .map(str::to_string)
        .collect();
    if students.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), students = students.len(), "loaded student list");
    Ok(students)
}

/// Load exclusion sets. A missing path means no exclusions.
pub fn load_exclusions(path: Option<&Path>) -> Result<Vec<ExclusionSet>> {
    let Some(path) = path else {
        debug!("no exclusions file given");
        return Ok(Vec::new());
    };
    let grid = read_csv_grid(path)?;
    let sets: Vec<ExclusionSet> = grid
        .columns()
        .into_iter()
        .map(|column| ExclusionSet::new(column.into_iter().filter(|name| !is_blank(name))))
        .filter(|set| !set.is_empty())
        .collect();
    info!(path = %path.display(), sets = sets.len(), "loaded exclusion sets");
    Ok(sets)
}

/// Subject roster plus optional exclusions.
pub fn load_subject_data(roster: &Path, exclusions: Option<&Path>) -> Result<GroupingData> {
    let roster = load_subject_roster(roster)?;
    let exclusions = load_exclusions(exclusions)?;
    Ok(GroupingData::by_subject(roster, exclusions))
}

/// Flat student list plus optional exclusions.
pub fn load_student_data(students: &Path, exclusions: Option<&Path>) -> Result<GroupingData> {
    let students = load_student_list(students)?;
    let exclusions = load_exclusions(exclusions)?;
    Ok(GroupingData::by_students(students, exclusions))
}
