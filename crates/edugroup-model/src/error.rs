use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// No group among the fixed count accepts the student without
    /// breaking an exclusion set.
    #[error("exclusion constraints cannot be met for {student} with {group_count} groups")]
    Unsatisfiable { student: String, group_count: usize },

    /// Subject grouping was requested for a roster without subjects.
    #[error("subject grouping requires a roster organised by subject")]
    SubjectsRequired,
}

pub type Result<T> = std::result::Result<T, GroupingError>;
