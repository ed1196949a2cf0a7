// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters describing one enumeration run: how many masks were looked at,
//! why the rejected ones were dropped, and how many orbit members were folded
//! into a single representative. Each run owns its own counters.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;
use strum_macros::{EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Masks in 1..=62 tested against the filter.
    MasksExamined,
    /// Rejected because the edges do not form one connected piece.
    RejectedDisconnected,
    /// Rejected because a face is complete.
    RejectedFace,
    /// Passed the filter.
    Accepted,
    /// Accepted masks dropped because another member of their orbit represents them.
    OrbitsCollapsed,
    /// Records in the result.
    Emitted,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Increase the specified counter by `n`.
    pub(crate) fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_starts_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_counters_are_independent() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Accepted);
        stats.increment_counter(Counters::Accepted);
        stats.add(Counters::RejectedFace, 5);
        assert_eq!(stats.get(Counters::Accepted), 2);
        assert_eq!(stats.get(Counters::RejectedFace), 5);
        assert_eq!(stats.get(Counters::Emitted), 0);
    }

    #[test]
    fn test_counter_names() {
        let name: &'static str = Counters::OrbitsCollapsed.into();
        assert_eq!(name, "OrbitsCollapsed");
    }
}
