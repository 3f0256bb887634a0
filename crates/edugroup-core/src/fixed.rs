//! Fixed-count grouping: exactly `n` groups, kept close in size.
//!
//! Before every placement the groups are stably re-sorted by size so the
//! smallest compatible group takes the student. Only exclusion sets
//! constrain placement here; subjects play no part.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, trace, warn};

use edugroup_model::{ExclusionSet, Group, GroupingError, Result, is_blank};

use crate::constraints::{Constraints, ExclusionIndex};
use crate::shuffled_exclusions;

/// Distribute `students` into exactly `group_count` groups.
///
/// Exclusion-set members are placed before everyone else. Names that appear
/// only in an exclusion set are placed as well.
///
/// # Errors
///
/// Returns [`GroupingError::Unsatisfiable`] as soon as a student fits none of
/// the groups. No partial result is returned.
pub fn group_into<S, R>(
    students: &[S],
    exclusions: &[ExclusionSet],
    group_count: NonZeroUsize,
    rng: &mut R,
) -> Result<Vec<Group>>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let shuffled_sets = shuffled_exclusions(exclusions, rng);
    let mut order: Vec<&str> = students
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| !is_blank(name))
        .collect();
    order.shuffle(rng);
    debug!(
        group_count = group_count.get(),
        students = order.len(),
        exclusion_sets = shuffled_sets.len(),
        "fixed-count grouping started"
    );

    let constraints = Constraints::new(ExclusionIndex::new(exclusions));
    let mut groups: Vec<Vec<&str>> = vec![Vec::new(); group_count.get()];
    let mut processed: BTreeSet<&str> = BTreeSet::new();

    for set in &shuffled_sets {
        for &student in set {
            if processed.insert(student) {
                place_in_smallest(&constraints, &mut groups, student)?;
            }
        }
    }
    debug!(placed = processed.len(), "placed exclusion-set members");

    let remaining: Vec<&str> = order
        .into_iter()
        .filter(|student| !processed.contains(student))
        .collect();
    for student in remaining {
        if processed.insert(student) {
            place_in_smallest(&constraints, &mut groups, student)?;
        }
    }

    let groups: Vec<Group> = groups
        .into_iter()
        .map(|members| members.into_iter().collect())
        .collect();
    info!(
        groups = groups.len(),
        students = processed.len(),
        "fixed-count grouping complete"
    );
    Ok(groups)
}

fn place_in_smallest<'a>(
    constraints: &Constraints<'a>,
    groups: &mut [Vec<&'a str>],
    student: &'a str,
) -> Result<()> {
    // Stable: equal sizes keep their current relative order.
    groups.sort_by_key(Vec::len);
    let group_count = groups.len();
    let slot = groups
        .iter_mut()
        .enumerate()
        .find(|(_, members)| constraints.admits(student, members.iter().copied()));
    match slot {
        Some((index, members)) => {
            members.push(student);
            trace!(student, group = index + 1, size = members.len(), "added to group");
            Ok(())
        }
        None => {
            warn!(group_count, "no group can take student without breaking an exclusion set");
            Err(GroupingError::Unsatisfiable {
                student: student.to_string(),
                group_count,
            })
        }
    }
}
