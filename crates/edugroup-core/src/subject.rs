//! Subject grouping: as many groups as the constraints force.
//!
//! Students are placed first-fit into the earliest group that holds nobody
//! of the same subject and nobody from a shared exclusion set. When no group
//! qualifies a new one is opened, so this mode never fails.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace};

use edugroup_model::{ExclusionSet, Group, SubjectRoster};

use crate::constraints::{Constraints, ExclusionIndex, SubjectIndex};
use crate::shuffled_exclusions;

pub fn group_by_subject<R>(
    roster: &SubjectRoster,
    exclusions: &[ExclusionSet],
    rng: &mut R,
) -> Vec<Group>
where
    R: Rng + ?Sized,
{
    let shuffled_sets = shuffled_exclusions(exclusions, rng);
    let mut shuffled_subjects: Vec<(&str, Vec<&str>)> = Vec::with_capacity(roster.subjects().len());
    for entry in roster.subjects() {
        let mut students: Vec<&str> = entry.students.iter().map(String::as_str).collect();
        students.shuffle(rng);
        shuffled_subjects.push((entry.subject.as_str(), students));
    }

    let subjects: SubjectIndex<'_> = shuffled_subjects
        .iter()
        .flat_map(|(subject, students)| students.iter().map(move |student| (*student, *subject)))
        .collect();
    debug!(
        subjects = shuffled_subjects.len(),
        students = subjects.len(),
        exclusion_sets = shuffled_sets.len(),
        "subject grouping started"
    );
    let constraints = Constraints::new(ExclusionIndex::new(exclusions)).with_subjects(subjects);

    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut processed: BTreeSet<&str> = BTreeSet::new();

    // Exclusion-set members go first, set by set.
    for set in &shuffled_sets {
        for &student in set {
            if processed.insert(student) {
                place_first_fit(&constraints, &mut groups, student);
            }
        }
    }
    debug!(groups = groups.len(), "placed exclusion-set members");

    let remaining: Vec<&str> = shuffled_subjects
        .iter()
        .flat_map(|(_, students)| students.iter().copied())
        .filter(|student| !processed.contains(student))
        .collect();
    for student in remaining {
        if processed.insert(student) {
            place_first_fit(&constraints, &mut groups, student);
        }
    }

    let groups: Vec<Group> = groups
        .into_iter()
        .map(|members| members.into_iter().collect())
        .collect();
    info!(
        groups = groups.len(),
        students = groups.iter().map(Group::len).sum::<usize>(),
        "subject grouping complete"
    );
    groups
}

fn place_first_fit<'a>(constraints: &Constraints<'a>, groups: &mut Vec<Vec<&'a str>>, student: &'a str) {
    let Some(subject) = constraints.subject_of(student) else {
        trace!(student, "skipping student without subject");
        return;
    };
    let slot = groups
        .iter()
        .position(|members| constraints.admits(student, members.iter().copied()));
    match slot {
        Some(index) => {
            groups[index].push(student);
            trace!(student, subject, group = index + 1, "added to group");
        }
        None => {
            groups.push(vec![student]);
            trace!(student, subject, group = groups.len(), "opened new group");
        }
    }
}
