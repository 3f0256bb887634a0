//! Property tests for the grouping invariants.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use proptest::prelude::*;

use edugroup_core::{GroupingOptions, run};
use edugroup_model::{ExclusionSet, GroupingData, GroupingError, SubjectRoster};

fn student_name(index: usize) -> String {
    format!("S{index:02}")
}

/// Roster of up to 24 students spread over up to 5 subjects, plus up to 4
/// exclusion sets drawn from the same names.
fn subject_data() -> impl Strategy<Value = GroupingData> {
    (1usize..24, 1usize..6).prop_flat_map(|(students, subjects)| {
        (
            prop::collection::vec(0..subjects, students),
            prop::collection::vec(prop::collection::vec(0..students, 0..5), 0..4),
        )
            .prop_map(move |(assignment, sets)| {
                let mut roster = SubjectRoster::new();
                for (student, subject) in assignment.iter().enumerate() {
                    roster.insert(&format!("Subject {subject}"), student_name(student));
                }
                let exclusions = sets
                    .into_iter()
                    .map(|members| ExclusionSet::new(members.into_iter().map(student_name)))
                    .collect();
                GroupingData::by_subject(roster, exclusions)
            })
    })
}

fn flat_data() -> impl Strategy<Value = GroupingData> {
    (1usize..30).prop_flat_map(|students| {
        prop::collection::vec(prop::collection::vec(0..students, 0..4), 0..4).prop_map(
            move |sets| {
                let roster = (0..students).map(student_name).collect();
                let exclusions = sets
                    .into_iter()
                    .map(|members| ExclusionSet::new(members.into_iter().map(student_name)))
                    .collect();
                GroupingData::by_students(roster, exclusions)
            },
        )
    })
}

fn placed_names(groups: &[edugroup_model::Group]) -> Vec<&str> {
    groups.iter().flat_map(|group| group.iter()).collect()
}

proptest! {
    #[test]
    fn subject_groups_hold_every_student_once(data in subject_data(), seed in any::<u64>()) {
        let outcome = run(&data, &GroupingOptions::by_subject().with_seed(seed)).unwrap();
        prop_assert!(outcome.violations(&data).is_empty());

        let placed = placed_names(&outcome.groups);
        let unique: BTreeSet<&str> = placed.iter().copied().collect();
        prop_assert_eq!(unique.len(), placed.len());
        let expected: BTreeSet<&str> = data.roster.students().into_iter().collect();
        prop_assert_eq!(unique, expected);
        prop_assert!(outcome.groups.iter().all(|group| !group.is_empty()));
    }

    #[test]
    fn fixed_count_is_exact_or_unsatisfiable(
        data in flat_data(),
        count in 1usize..6,
        seed in any::<u64>(),
    ) {
        let count = NonZeroUsize::new(count).unwrap();
        let options = GroupingOptions::fixed_count(count).with_seed(seed);
        match run(&data, &options) {
            Ok(outcome) => {
                prop_assert_eq!(outcome.groups.len(), count.get());
                prop_assert!(outcome.violations(&data).is_empty());

                let placed = placed_names(&outcome.groups);
                let unique: BTreeSet<&str> = placed.iter().copied().collect();
                prop_assert_eq!(unique.len(), placed.len());
                let roster: BTreeSet<&str> = data.roster.students().into_iter().collect();
                prop_assert_eq!(unique, roster);
            }
            Err(GroupingError::Unsatisfiable { group_count, .. }) => {
                prop_assert_eq!(group_count, count.get());
                let largest_set = data
                    .exclusions
                    .iter()
                    .map(|set| set.members.iter().collect::<BTreeSet<_>>().len())
                    .max()
                    .unwrap_or(0);
                // Failing needs at least one conflicting pair.
                prop_assert!(largest_set > 1);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn fixed_count_without_exclusions_is_balanced(
        students in 0usize..40,
        count in 1usize..8,
        seed in any::<u64>(),
    ) {
        let data = GroupingData::by_students((0..students).map(student_name).collect(), Vec::new());
        let count = NonZeroUsize::new(count).unwrap();
        let outcome = run(&data, &GroupingOptions::fixed_count(count).with_seed(seed)).unwrap();
        let summary = outcome.summary();
        prop_assert_eq!(summary.group_count, count.get());
        prop_assert_eq!(summary.student_count, students);
        prop_assert!(summary.spread() <= 1);
    }
}
