use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Which grouping policy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// One group per compatible cluster; the count follows from constraints.
    BySubject,
    /// Exactly this many size-balanced groups.
    FixedCount(NonZeroUsize),
}

impl GroupingMode {
    /// `0` selects subject grouping, any other count a fixed-count run.
    pub fn from_count(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(count) => Self::FixedCount(count),
            None => Self::BySubject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingOptions {
    pub mode: GroupingMode,
    /// Seed for the shuffle that randomises iteration order. A fresh seed is
    /// drawn when unset.
    pub seed: Option<u64>,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            mode: GroupingMode::BySubject,
            seed: None,
        }
    }
}

impl GroupingOptions {
    pub fn by_subject() -> Self {
        Self::default()
    }

    pub fn fixed_count(count: NonZeroUsize) -> Self {
        Self {
            mode: GroupingMode::FixedCount(count),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GroupingMode) -> Self {
        self.mode = mode;
        self
    }

    /// The seed this run will use, drawing one from the OS-seeded thread
    /// generator when none was configured.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

/// Deterministic generator for a resolved seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
