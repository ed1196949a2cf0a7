// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of incomplete tetrahedra.
//!
//! This is the entry point for whatever displays the subsets. A request
//! names a filter mode and whether to keep only one representative per
//! rotation orbit; the answer is an ordered list of [`ClassifiedSubset`]
//! records.
//!
//! The empty mask (0) and the complete graph (63) are never enumerated:
//! only masks 1..=62 are tested against the filter.
//!
//! | mode               | keeps                                     |
//! |--------------------|-------------------------------------------|
//! | `all`              | every mask                                |
//! | `connected`        | masks whose edges form one connected piece |
//! | `connected_noface` | connected masks with no complete face     |
//!
//! # Examples
//!
//! ```
//! use incomplete_tetrahedra::enumerate::{generate, generate_named, FilterMode};
//!
//! let shapes = generate(FilterMode::ConnectedNoFace, true);
//! let masks: Vec<u8> = shapes.iter().map(|s| s.mask.bits()).collect();
//! assert_eq!(masks, vec![1, 3, 7, 13, 14, 30]);
//!
//! assert_eq!(generate_named("all", false).unwrap().len(), 62);
//! assert!(generate_named("faces", false).is_err());
//! ```

pub mod burnside;
pub mod statistics;

pub use burnside::{count_orbits, OrbitCounts};
pub use statistics::{Counters, Statistics};

use crate::classify::{has_complete_face, is_connected, ClassifiedSubset};
use crate::error::{Result, TetraError};
use crate::geometry::constants::FULL_MASK;
use crate::geometry::EdgeSet;
use crate::symmetry::RotationGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use strum_macros::EnumCount as EnumCountMacro;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which masks an enumeration keeps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum FilterMode {
    /// Every non-empty, non-complete subset.
    #[strum(to_string = "all")]
    #[serde(rename = "all")]
    All,

    /// Subsets that are connected on the vertices they touch.
    #[strum(to_string = "connected")]
    #[serde(rename = "connected")]
    Connected,

    /// Connected subsets with no complete triangular face.
    #[strum(to_string = "connected_noface")]
    #[serde(rename = "connected_noface")]
    ConnectedNoFace,
}

impl FilterMode {
    /// Parse a mode name, rejecting anything but the three known names.
    pub fn parse(name: &str) -> Result<FilterMode> {
        FilterMode::from_str(name).map_err(|_| TetraError::InvalidMode {
            mode: name.to_string(),
        })
    }

    /// Is `mask` inside the enumerated range 1..=62?
    pub fn in_range(mask: EdgeSet) -> bool {
        !mask.is_empty() && mask != EdgeSet::full()
    }

    /// The counter explaining why `mask` fails this mode, or None if it passes.
    ///
    /// Range is not checked here; see [`FilterMode::in_range`].
    pub fn rejection(self, mask: EdgeSet) -> Option<Counters> {
        match self {
            FilterMode::All => None,
            FilterMode::Connected => (!is_connected(mask)).then_some(Counters::RejectedDisconnected),
            FilterMode::ConnectedNoFace => {
                if !is_connected(mask) {
                    Some(Counters::RejectedDisconnected)
                } else if has_complete_face(mask) {
                    Some(Counters::RejectedFace)
                } else {
                    None
                }
            }
        }
    }

    /// Does `mask` pass this mode's filter?
    pub fn accepts(self, mask: EdgeSet) -> bool {
        self.rejection(mask).is_none()
    }
}

/// The parameters of one enumeration.
///
/// This is the only configuration the engine has. The default matches the
/// usual starting view: connected, face-free shapes, one per orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumerationRequest {
    pub mode: FilterMode,
    pub canonical_only: bool,
}

impl Default for EnumerationRequest {
    fn default() -> Self {
        Self {
            mode: FilterMode::ConnectedNoFace,
            canonical_only: true,
        }
    }
}

impl EnumerationRequest {
    pub fn new(mode: FilterMode, canonical_only: bool) -> Self {
        Self {
            mode,
            canonical_only,
        }
    }

    /// Build a request from an untyped mode name.
    pub fn parse(mode: &str, canonical_only: bool) -> Result<Self> {
        Ok(Self::new(FilterMode::parse(mode)?, canonical_only))
    }
}

/// The result of one enumeration run.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub request: EnumerationRequest,
    pub subsets: Vec<ClassifiedSubset>,
    pub statistics: Statistics,
}

/// Runs one [`EnumerationRequest`].
#[derive(Debug)]
pub struct Enumerator {
    request: EnumerationRequest,
    statistics: Statistics,
}

impl Enumerator {
    pub fn new(request: EnumerationRequest) -> Self {
        Self {
            request,
            statistics: Statistics::new(),
        }
    }

    /// Filter masks 1..=62, optionally reduce to canonical forms, and classify.
    ///
    /// Output is in ascending mask order. With `canonical_only`, each record's
    /// `mask` is the canonical form itself, so records are ascending in
    /// canonical value.
    pub fn run(mut self) -> Enumeration {
        let EnumerationRequest {
            mode,
            canonical_only,
        } = self.request;

        let mut accepted = Vec::new();
        for bits in 1..FULL_MASK {
            let mask = EdgeSet::new(bits);
            self.statistics.increment_counter(Counters::MasksExamined);
            match mode.rejection(mask) {
                Some(reason) => self.statistics.increment_counter(reason),
                None => {
                    self.statistics.increment_counter(Counters::Accepted);
                    accepted.push(mask);
                }
            }
        }

        let representatives: Vec<EdgeSet> = if canonical_only {
            let group = RotationGroup::get();
            let canonical: BTreeSet<EdgeSet> =
                accepted.iter().map(|&m| group.canonical_form(m)).collect();
            self.statistics.add(
                Counters::OrbitsCollapsed,
                (accepted.len() - canonical.len()) as u64,
            );
            canonical.into_iter().collect()
        } else {
            accepted
        };

        let subsets: Vec<ClassifiedSubset> = representatives
            .into_iter()
            .enumerate()
            .map(|(idx, mask)| ClassifiedSubset::classify(idx, mask))
            .collect();
        self.statistics
            .add(Counters::Emitted, subsets.len() as u64);

        log::debug!(
            "[Enumerator] mode={} canonical_only={}: examined {}, accepted {}, emitted {}",
            mode,
            canonical_only,
            self.statistics.get(Counters::MasksExamined),
            self.statistics.get(Counters::Accepted),
            self.statistics.get(Counters::Emitted)
        );

        Enumeration {
            request: self.request,
            subsets,
            statistics: self.statistics,
        }
    }
}

/// Enumerate and classify the subsets selected by `mode`.
///
/// Pure: the same arguments always give the same sequence.
pub fn generate(mode: FilterMode, canonical_only: bool) -> Vec<ClassifiedSubset> {
    Enumerator::new(EnumerationRequest::new(mode, canonical_only))
        .run()
        .subsets
}

/// [`generate`] with the mode given by name.
///
/// Returns [`TetraError::InvalidMode`] for anything other than `all`,
/// `connected` or `connected_noface`.
pub fn generate_named(mode: &str, canonical_only: bool) -> Result<Vec<ClassifiedSubset>> {
    let request = EnumerationRequest::parse(mode, canonical_only)?;
    Ok(Enumerator::new(request).run().subsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_mode_names() {
        let names: Vec<String> = FilterMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names, vec!["all", "connected", "connected_noface"]);
        assert_eq!(FilterMode::COUNT, 3);
    }

    #[test]
    fn test_parse_round_trip() {
        for mode in FilterMode::iter() {
            assert_eq!(FilterMode::parse(&mode.to_string()), Ok(mode));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            FilterMode::parse("connected_no_face"),
            Err(TetraError::InvalidMode {
                mode: "connected_no_face".to_string()
            })
        );
        assert!(FilterMode::parse("").is_err());
        assert!(FilterMode::parse("ALL").is_err());
    }

    #[test]
    fn test_in_range() {
        assert!(!FilterMode::in_range(EdgeSet::empty()));
        assert!(!FilterMode::in_range(EdgeSet::full()));
        assert!(FilterMode::in_range(EdgeSet::new(1)));
        assert!(FilterMode::in_range(EdgeSet::new(62)));
    }

    #[test]
    fn test_rejection_reasons() {
        let disjoint = EdgeSet::new(0b100001);
        let triangle = EdgeSet::new(0b001011);
        assert_eq!(FilterMode::All.rejection(disjoint), None);
        assert_eq!(
            FilterMode::Connected.rejection(disjoint),
            Some(Counters::RejectedDisconnected)
        );
        assert_eq!(FilterMode::Connected.rejection(triangle), None);
        assert_eq!(
            FilterMode::ConnectedNoFace.rejection(triangle),
            Some(Counters::RejectedFace)
        );
    }

    #[test]
    fn test_degenerate_masks() {
        // 0 fails both connected filters; 63 passes `connected` but not `connected_noface`.
        assert!(!FilterMode::Connected.accepts(EdgeSet::empty()));
        assert!(!FilterMode::ConnectedNoFace.accepts(EdgeSet::empty()));
        assert!(FilterMode::All.accepts(EdgeSet::full()));
        assert!(FilterMode::Connected.accepts(EdgeSet::full()));
        assert!(!FilterMode::ConnectedNoFace.accepts(EdgeSet::full()));

        for mode in FilterMode::iter() {
            for record in generate(mode, false) {
                assert_ne!(record.mask, EdgeSet::empty());
                assert_ne!(record.mask, EdgeSet::full());
            }
        }
    }

    #[test]
    fn test_default_request() {
        let request = EnumerationRequest::default();
        assert_eq!(request.mode, FilterMode::ConnectedNoFace);
        assert!(request.canonical_only);
    }

    #[test]
    fn test_statistics_connected_noface() {
        let run = Enumerator::new(EnumerationRequest::new(FilterMode::ConnectedNoFace, true)).run();
        let stats = &run.statistics;
        assert_eq!(stats.get(Counters::MasksExamined), 62);
        assert_eq!(stats.get(Counters::RejectedDisconnected), 3);
        assert_eq!(stats.get(Counters::RejectedFace), 22);
        assert_eq!(stats.get(Counters::Accepted), 37);
        assert_eq!(stats.get(Counters::OrbitsCollapsed), 31);
        assert_eq!(stats.get(Counters::Emitted), 6);
    }

    #[test]
    fn test_statistics_without_reduction() {
        let run = Enumerator::new(EnumerationRequest::new(FilterMode::All, false)).run();
        assert_eq!(run.statistics.get(Counters::Accepted), 62);
        assert_eq!(run.statistics.get(Counters::OrbitsCollapsed), 0);
        assert_eq!(run.statistics.get(Counters::Emitted), 62);
        assert_eq!(run.request, EnumerationRequest::new(FilterMode::All, false));
    }

    #[test]
    fn test_indices_are_sequential() {
        for record in generate(FilterMode::Connected, true).iter().enumerate() {
            assert_eq!(record.0, record.1.idx);
        }
    }
}
