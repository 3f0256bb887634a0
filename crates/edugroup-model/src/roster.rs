//! Input side of a grouping run.
//!
//! A roster is either organised by subject (one list of students per subject
//! label, in the order the subjects were first seen) or a flat list of
//! students. Exclusion sets are shared by both shapes.

use serde::{Deserialize, Serialize};

/// Returns true for names that carry no student (empty or whitespace only).
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Students enrolled under one subject label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStudents {
    pub subject: String,
    pub students: Vec<String>,
}

/// Subjects in first-seen order.
///
/// Inserting under an existing label appends to that subject's list, so a
/// label that appears twice in the source keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRoster {
    subjects: Vec<SubjectStudents>,
}

impl SubjectRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subject label without students. Returns its position.
    pub fn add_subject(&mut self, subject: &str) -> usize {
        if let Some(index) = self.position(subject) {
            return index;
        }
        self.subjects.push(SubjectStudents {
            subject: subject.to_string(),
            students: Vec::new(),
        });
        self.subjects.len() - 1
    }

    pub fn insert(&mut self, subject: &str, student: impl Into<String>) {
        let index = self.add_subject(subject);
        self.subjects[index].students.push(student.into());
    }

    pub fn with_subject<I, S>(mut self, subject: &str, students: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = self.add_subject(subject);
        self.subjects[index]
            .students
            .extend(students.into_iter().map(Into::into));
        self
    }

    pub fn subjects(&self) -> &[SubjectStudents] {
        &self.subjects
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Number of non-blank student entries across all subjects.
    pub fn student_count(&self) -> usize {
        self.students().count()
    }

    /// Non-blank students across all subjects in roster order.
    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.subjects
            .iter()
            .flat_map(|entry| entry.students.iter())
            .map(String::as_str)
            .filter(|name| !is_blank(name))
    }

    fn position(&self, subject: &str) -> Option<usize> {
        self.subjects
            .iter()
            .position(|entry| entry.subject == subject)
    }
}

/// Students who must never share a group with one another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    pub members: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roster {
    BySubject(SubjectRoster),
    Students(Vec<String>),
}

impl Roster {
    /// Non-blank students in roster order, whatever the roster shape.
    pub fn students(&self) -> Vec<&str> {
        match self {
            Self::BySubject(roster) => roster.students().collect(),
            Self::Students(students) => students
                .iter()
                .map(String::as_str)
                .filter(|name| !is_blank(name))
                .collect(),
        }
    }
}

/// Everything a grouping run consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingData {
    pub roster: Roster,
    pub exclusions: Vec<ExclusionSet>,
}

impl GroupingData {
    pub fn by_subject(roster: SubjectRoster, exclusions: Vec<ExclusionSet>) -> Self {
        Self {
            roster: Roster::BySubject(roster),
            exclusions,
        }
    }

    pub fn by_students(students: Vec<String>, exclusions: Vec<ExclusionSet>) -> Self {
        Self {
            roster: Roster::Students(students),
            exclusions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_subject_label_merges_into_first() {
        let mut roster = SubjectRoster::new();
        roster.insert("Math", "A");
        roster.insert("Sci", "B");
        roster.insert("Math", "C");

        let labels: Vec<&str> = roster
            .subjects()
            .iter()
            .map(|entry| entry.subject.as_str())
            .collect();
        assert_eq!(labels, vec!["Math", "Sci"]);
        assert_eq!(roster.subjects()[0].students, vec!["A", "C"]);
    }

    #[test]
    fn student_count_skips_blank_names() {
        let roster = SubjectRoster::new()
            .with_subject("Math", ["A", "", "  "])
            .with_subject("Sci", ["B"]);
        assert_eq!(roster.student_count(), 2);
    }

    #[test]
    fn flat_roster_students_skip_blanks() {
        let roster = Roster::Students(vec!["A".to_string(), " ".to_string(), "B".to_string()]);
        assert_eq!(roster.students(), vec!["A", "B"]);
    }
}
