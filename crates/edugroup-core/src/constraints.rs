//! Placement rules shared by both groupers.
//!
//! An [`ExclusionIndex`] answers "do these two students share an exclusion
//! set?" without rescanning every set. A [`SubjectIndex`] maps students to the
//! subject they were enrolled under. [`Constraints`] combines the two into the
//! first-fit admission check, and [`check_groups`] re-runs that check over a
//! finished set of groups.

use std::collections::{BTreeMap, BTreeSet};

use edugroup_model::{ExclusionSet, Group, SubjectRoster, is_blank};
use serde::Serialize;

/// Student name to the indices of every exclusion set naming them.
#[derive(Debug, Clone, Default)]
pub struct ExclusionIndex<'a> {
    sets_by_student: BTreeMap<&'a str, BTreeSet<usize>>,
}

impl<'a> ExclusionIndex<'a> {
    pub fn new(exclusions: &'a [ExclusionSet]) -> Self {
        let mut sets_by_student: BTreeMap<&'a str, BTreeSet<usize>> = BTreeMap::new();
        for (set_index, set) in exclusions.iter().enumerate() {
            for member in &set.members {
                if is_blank(member) {
                    continue;
                }
                sets_by_student
                    .entry(member.as_str())
                    .or_default()
                    .insert(set_index);
            }
        }
        Self { sets_by_student }
    }

    /// True when two distinct students appear together in some exclusion set.
    pub fn conflicts(&self, left: &str, right: &str) -> bool {
        if left == right {
            return false;
        }
        match (
            self.sets_by_student.get(left),
            self.sets_by_student.get(right),
        ) {
            (Some(left_sets), Some(right_sets)) => !left_sets.is_disjoint(right_sets),
            _ => false,
        }
    }
}

/// Student name to subject label. The first subject a student is listed under
/// keeps them.
#[derive(Debug, Clone, Default)]
pub struct SubjectIndex<'a> {
    subject_by_student: BTreeMap<&'a str, &'a str>,
}

impl<'a> SubjectIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `student` under `subject` unless the student already has one.
    /// Blank names and blank subjects are ignored.
    pub fn assign(&mut self, student: &'a str, subject: &'a str) {
        if is_blank(student) || is_blank(subject) {
            return;
        }
        self.subject_by_student.entry(student).or_insert(subject);
    }

    /// Index a roster in its listed order.
    pub fn from_roster(roster: &'a SubjectRoster) -> Self {
        roster
            .subjects()
            .iter()
            .flat_map(|entry| {
                entry
                    .students
                    .iter()
                    .map(move |student| (student.as_str(), entry.subject.as_str()))
            })
            .collect()
    }

    pub fn subject_of(&self, student: &str) -> Option<&'a str> {
        self.subject_by_student.get(student).copied()
    }

    pub fn len(&self) -> usize {
        self.subject_by_student.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject_by_student.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SubjectIndex<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (student, subject) in iter {
            index.assign(student, subject);
        }
        index
    }
}

/// Admission rule for first-fit placement.
#[derive(Debug, Clone, Default)]
pub struct Constraints<'a> {
    exclusions: ExclusionIndex<'a>,
    subjects: Option<SubjectIndex<'a>>,
}

impl<'a> Constraints<'a> {
    pub fn new(exclusions: ExclusionIndex<'a>) -> Self {
        Self {
            exclusions,
            subjects: None,
        }
    }

    /// Also forbid two students of the same subject in one group.
    pub fn with_subjects(mut self, subjects: SubjectIndex<'a>) -> Self {
        self.subjects = Some(subjects);
        self
    }

    pub fn subject_of(&self, student: &str) -> Option<&'a str> {
        self.subjects.as_ref()?.subject_of(student)
    }

    /// Why `student` may not join a group holding `member`, if anything.
    pub fn conflict(&self, student: &str, member: &str) -> Option<ViolationKind> {
        if let Some(subjects) = &self.subjects {
            let shared = match (subjects.subject_of(student), subjects.subject_of(member)) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            };
            if shared {
                return Some(ViolationKind::SharedSubject);
            }
        }
        if self.exclusions.conflicts(student, member) {
            return Some(ViolationKind::SharedExclusion);
        }
        None
    }

    /// True iff `student` is compatible with every current member.
    pub fn admits<'m, I>(&self, student: &str, members: I) -> bool
    where
        I: IntoIterator<Item = &'m str>,
    {
        members
            .into_iter()
            .all(|member| self.conflict(student, member).is_none())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    SharedExclusion,
    SharedSubject,
}

/// Two members of one group that the placement rule would have kept apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub group: usize,
    pub first: String,
    pub second: String,
    pub kind: ViolationKind,
}

/// Re-run the placement rule over every member pair of every group.
///
/// An empty result means the groups satisfy the exclusion invariant and,
/// when `subjects` is given, the subject invariant.
pub fn check_groups(
    groups: &[Group],
    exclusions: &[ExclusionSet],
    subjects: Option<&SubjectIndex<'_>>,
) -> Vec<Violation> {
    let mut constraints = Constraints::new(ExclusionIndex::new(exclusions));
    if let Some(subjects) = subjects {
        constraints = constraints.with_subjects(subjects.clone());
    }
    let mut violations = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        let members = group.students();
        for (position, first) in members.iter().enumerate() {
            for second in &members[position + 1..] {
                if let Some(kind) = constraints.conflict(first, second) {
                    violations.push(Violation {
                        group: group_index,
                        first: first.clone(),
                        second: second.clone(),
                        kind,
                    });
                }
            }
        }
    }
    violations
}
