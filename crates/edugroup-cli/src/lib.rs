//! CLI library components for EduGroup.

pub mod logging;
pub mod pipeline;
pub mod types;
