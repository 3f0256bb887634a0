//! Tests for edugroup-model types.

use edugroup_model::{ExclusionSet, Group, GroupingData, Roster, SubjectRoster};

#[test]
fn subject_roster_keeps_first_seen_order() {
    let roster = SubjectRoster::new()
        .with_subject("Sci", ["C"])
        .with_subject("Math", ["A", "B"])
        .with_subject("Sci", ["D"]);

    let labels: Vec<&str> = roster
        .subjects()
        .iter()
        .map(|entry| entry.subject.as_str())
        .collect();
    assert_eq!(labels, vec!["Sci", "Math"]);
    assert_eq!(roster.students().collect::<Vec<_>>(), vec!["C", "D", "A", "B"]);
}

#[test]
fn subject_roster_flattens_into_students() {
    let data = GroupingData::by_subject(
        SubjectRoster::new()
            .with_subject("Math", ["A", ""])
            .with_subject("Sci", ["B"]),
        Vec::new(),
    );
    assert!(matches!(data.roster, Roster::BySubject(_)));
    assert_eq!(data.roster.students(), vec!["A", "B"]);
}

#[test]
fn exclusion_set_keeps_members_in_order() {
    let set = ExclusionSet::new(["B", "A"]);
    assert_eq!(set.members, vec!["B", "A"]);
    assert!(!set.is_empty());
    assert!(ExclusionSet::new(Vec::<String>::new()).is_empty());
}

#[test]
fn group_serializes_as_plain_list() {
    let group: Group = ["A", "B"].into_iter().collect();
    let json = serde_json::to_string(&group).expect("serialize group");
    assert_eq!(json, r#"["A","B"]"#);
}
