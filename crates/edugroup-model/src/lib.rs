pub mod error;
pub mod group;
pub mod roster;

pub use error::{GroupingError, Result};
pub use group::{Group, GroupingSummary};
pub use roster::{ExclusionSet, GroupingData, Roster, SubjectRoster, SubjectStudents, is_blank};
