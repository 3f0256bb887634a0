use serde::{Deserialize, Serialize};

/// An ordered set of students placed together.
///
/// Groups only grow by appending while a run is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    students: Vec<String>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, student: impl Into<String>) {
        self.students.push(student.into());
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn contains(&self, student: &str) -> bool {
        self.students.iter().any(|member| member == student)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Group {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Size statistics for a finished set of groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingSummary {
    pub group_count: usize,
    pub student_count: usize,
    pub smallest: usize,
    pub largest: usize,
}

impl GroupingSummary {
    pub fn from_groups(groups: &[Group]) -> Self {
        let sizes = groups.iter().map(Group::len);
        Self {
            group_count: groups.len(),
            student_count: sizes.clone().sum(),
            smallest: sizes.clone().min().unwrap_or(0),
            largest: sizes.max().unwrap_or(0),
        }
    }

    /// Difference between the largest and smallest group.
    pub fn spread(&self) -> usize {
        self.largest - self.smallest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_uneven_groups() {
        let groups: Vec<Group> = vec![
            ["A", "B", "C"].into_iter().collect(),
            ["D"].into_iter().collect(),
            Group::new(),
        ];
        let summary = GroupingSummary::from_groups(&groups);
        assert_eq!(summary.group_count, 3);
        assert_eq!(summary.student_count, 4);
        assert_eq!(summary.smallest, 0);
        assert_eq!(summary.largest, 3);
        assert_eq!(summary.spread(), 3);
    }

    #[test]
    fn summary_of_no_groups_is_zeroed() {
        assert_eq!(GroupingSummary::from_groups(&[]), GroupingSummary::default());
    }
}
