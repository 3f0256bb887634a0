//! Greedy, constraint-aware grouping of a student roster.
//!
//! Two policies share one placement rule:
//!
//! - [`group_by_subject`]: no two students of a subject or of an exclusion
//!   set share a group; groups are opened as needed.
//! - [`group_into`]: exactly `n` size-balanced groups honouring exclusion
//!   sets, or [`GroupingError::Unsatisfiable`].
//!
//! Randomness only decides iteration order and is always injected, so a
//! fixed seed reproduces a run exactly.
//!
//! ```ignore
//! use edugroup_core::{GroupingOptions, run};
//!
//! let outcome = run(&data, &GroupingOptions::by_subject().with_seed(7))?;
//! assert!(outcome.violations(&data).is_empty());
//! ```

pub mod constraints;
pub mod fixed;
pub mod options;
pub mod subject;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info_span;

use edugroup_model::{
    ExclusionSet, Group, GroupingData, GroupingError, GroupingSummary, Result, Roster, is_blank,
};

pub use constraints::{
    Constraints, ExclusionIndex, SubjectIndex, Violation, ViolationKind, check_groups,
};
pub use fixed::group_into;
pub use options::{GroupingMode, GroupingOptions, seeded_rng};
pub use subject::group_by_subject;

/// Result of one grouping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingOutcome {
    pub groups: Vec<Group>,
    pub mode: GroupingMode,
    /// Seed that reproduces this run.
    pub seed: u64,
}

impl GroupingOutcome {
    pub fn summary(&self) -> GroupingSummary {
        GroupingSummary::from_groups(&self.groups)
    }

    /// Pairs that break the placement rule for `data`. Empty for every
    /// outcome produced by [`run`].
    pub fn violations(&self, data: &GroupingData) -> Vec<Violation> {
        match (&data.roster, self.mode) {
            (Roster::BySubject(roster), GroupingMode::BySubject) => {
                let subjects = SubjectIndex::from_roster(roster);
                check_groups(&self.groups, &data.exclusions, Some(&subjects))
            }
            _ => check_groups(&self.groups, &data.exclusions, None),
        }
    }
}

/// Group `data` according to `options`.
///
/// Fixed-count runs accept either roster shape; a subject roster is
/// flattened in listed order. Subject runs need a subject roster.
///
/// # Errors
///
/// [`GroupingError::SubjectsRequired`] for a subject run over a flat roster,
/// [`GroupingError::Unsatisfiable`] when a fixed-count run cannot place a
/// student.
pub fn run(data: &GroupingData, options: &GroupingOptions) -> Result<GroupingOutcome> {
    let seed = options.resolve_seed();
    let span = info_span!("grouping", seed, mode = ?options.mode);
    let _guard = span.enter();
    let mut rng = seeded_rng(seed);

    let groups = match options.mode {
        GroupingMode::BySubject => match &data.roster {
            Roster::BySubject(roster) => group_by_subject(roster, &data.exclusions, &mut rng),
            Roster::Students(_) => return Err(GroupingError::SubjectsRequired),
        },
        GroupingMode::FixedCount(count) => {
            group_into(&data.roster.students(), &data.exclusions, count, &mut rng)?
        }
    };

    Ok(GroupingOutcome {
        groups,
        mode: options.mode,
        seed,
    })
}

/// Exclusion-set members with blanks dropped, each set shuffled on its own.
pub(crate) fn shuffled_exclusions<'a, R>(exclusions: &'a [ExclusionSet], rng: &mut R) -> Vec<Vec<&'a str>>
where
    R: Rng + ?Sized,
{
    let mut shuffled = Vec::with_capacity(exclusions.len());
    for set in exclusions {
        let mut members: Vec<&str> = set
            .members
            .iter()
            .map(String::as_str)
            .filter(|member| !is_blank(member))
            .collect();
        members.shuffle(rng);
        shuffled.push(members);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use edugroup_model::SubjectRoster;

    use super::*;

    #[test]
    fn shuffle_keeps_membership() {
        let exclusions = vec![ExclusionSet::new(["A", "", "B", "C"])];
        let shuffled = shuffled_exclusions(&exclusions, &mut seeded_rng(3));
        let mut members = shuffled[0].clone();
        members.sort_unstable();
        assert_eq!(members, vec!["A", "B", "C"]);
    }

    #[test]
    fn subject_run_rejects_flat_roster() {
        let data = GroupingData::by_students(vec!["A".to_string()], Vec::new());
        let err = run(&data, &GroupingOptions::by_subject().with_seed(1)).unwrap_err();
        assert_eq!(err, GroupingError::SubjectsRequired);
    }

    #[test]
    fn fixed_run_flattens_subject_roster() {
        let data = GroupingData::by_subject(
            SubjectRoster::new()
                .with_subject("Math", ["A", "B"])
                .with_subject("Sci", ["C", "A"]),
            Vec::new(),
        );
        let options = GroupingOptions::fixed_count(NonZeroUsize::new(3).unwrap()).with_seed(5);
        let outcome = run(&data, &options).unwrap();
        assert_eq!(outcome.groups.len(), 3);
        assert_eq!(outcome.summary().student_count, 3);
        assert!(outcome.groups.iter().all(|group| group.len() == 1));
    }

    #[test]
    fn outcome_reports_seed_used() {
        let data = GroupingData::by_subject(SubjectRoster::new().with_subject("Math", ["A"]), Vec::new());
        let outcome = run(&data, &GroupingOptions::by_subject().with_seed(99)).unwrap();
        assert_eq!(outcome.seed, 99);
        assert_eq!(outcome.mode, GroupingMode::BySubject);
        assert!(outcome.violations(&data).is_empty());
    }
}
