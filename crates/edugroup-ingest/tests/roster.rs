use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use edugroup_ingest::{
    IngestError, load_exclusions, load_student_data, load_student_list, load_subject_data,
    load_subject_roster, read_csv_grid,
};
use edugroup_model::{Roster, SubjectRoster};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn students_of<'a>(roster: &'a SubjectRoster, subject: &str) -> &'a [String] {
    roster
        .subjects()
        .iter()
        .find(|entry| entry.subject == subject)
        .map(|entry| entry.students.as_slice())
        .unwrap_or_default()
}

#[test]
fn reads_subject_columns() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "roster.csv",
        "Math,Science,Art\nAna,Ben,Cleo\nDan,,Eva\n,Finn,\n",
    );
    let roster = load_subject_roster(&path).expect("load roster");

    let labels: Vec<&str> = roster
        .subjects()
        .iter()
        .map(|entry| entry.subject.as_str())
        .collect();
    assert_eq!(labels, vec!["Math", "Science", "Art"]);
    assert_eq!(students_of(&roster, "Math"), vec!["Ana", "Dan"]);
    assert_eq!(students_of(&roster, "Science"), vec!["Ben", "Finn"]);
    assert_eq!(students_of(&roster, "Art"), vec!["Cleo", "Eva"]);
}

#[test]
fn skips_unlabelled_columns_and_merges_repeated_labels() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "roster.csv",
        "\u{feff}Math,,Math\nAna,Stray,Ben\n",
    );
    let roster = load_subject_roster(&path).expect("load roster");
    assert_eq!(roster.subjects().len(), 1);
    assert_eq!(students_of(&roster, "Math"), vec!["Ana", "Ben"]);
}

#[test]
fn roster_without_labels_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "roster.csv", ",,\nAna,Ben,\n");
    let err = load_subject_roster(&path).unwrap_err();
    assert!(matches!(err, IngestError::NoSubjects { .. }));
}

#[test]
fn blank_label_row_does_not_promote_students_to_subjects() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "roster.csv", ",,\nAna,Ben,\nCleo,Dan,\n");
    let err = load_subject_roster(&path).unwrap_err();
    assert!(matches!(err, IngestError::NoSubjects { .. }));
}

#[test]
fn blank_rows_below_labels_are_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "roster.csv", "Math,Art\n , \nAna,Ben\n,\nCleo,\n");
    let roster = load_subject_roster(&path).expect("load roster");
    assert_eq!(students_of(&roster, "Math"), vec!["Ana", "Cleo"]);
    assert_eq!(students_of(&roster, "Art"), vec!["Ben"]);
}

#[test]
fn blank_file_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "roster.csv", "\n , \n");
    assert!(read_csv_grid(&path).unwrap().is_empty());
    assert!(matches!(
        load_subject_roster(&path).unwrap_err(),
        IngestError::EmptyCsv { .. }
    ));
    assert!(matches!(
        load_student_list(&path).unwrap_err(),
        IngestError::EmptyCsv { .. }
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_student_list(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn student_list_reads_first_column_only() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "students.csv", "Ana,ignored\n\nBen\n  Cleo  \n");
    let students = load_student_list(&path).expect("load students");
    assert_eq!(students, vec!["Ana", "Ben", "Cleo"]);
}

#[test]
fn exclusions_are_read_by_column() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(dir.path(), "exclusions.csv", "Ana,Ben,\nDan,,\n,Eva,\n");
    let sets = load_exclusions(Some(path.as_path())).expect("load exclusions");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].members, vec!["Ana", "Dan"]);
    assert_eq!(sets[1].members, vec!["Ben", "Eva"]);
}

#[test]
fn no_exclusions_file_means_no_exclusions() {
    assert!(load_exclusions(None).expect("load exclusions").is_empty());
}

#[test]
fn loads_both_input_shapes() {
    let dir = TempDir::new().expect("temp dir");
    let roster = write(dir.path(), "roster.csv", "Math\nAna\n");
    let students = write(dir.path(), "students.csv", "Ana\nBen\n");
    let exclusions = write(dir.path(), "exclusions.csv", "Ana\nBen\n");

    let subject_data = load_subject_data(&roster, Some(exclusions.as_path())).expect("subject data");
    assert!(matches!(subject_data.roster, Roster::BySubject(_)));
    assert_eq!(subject_data.exclusions.len(), 1);

    let student_data = load_student_data(&students, None).expect("student data");
    assert_eq!(
        student_data.roster,
        Roster::Students(vec!["Ana".to_string(), "Ben".to_string()])
    );
    assert!(student_data.exclusions.is_empty());
}
