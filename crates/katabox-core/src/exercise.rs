//! The exercise catalog.
//!
//! Every exercise katabox ships a driver for, keyed by a stable slug.
//! The catalog is the single source of truth for slugs, display titles,
//! and difficulty tiers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Difficulty tiers of the exercise catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// The exercises with built-in drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    /// Binary search in an ascending array rotated by an unknown pivot.
    RotatedSearch,
    /// Coalesce overlapping closed intervals.
    MergeIntervals,
    /// Character-multiset containment of a note in a magazine.
    RansomNote,
    /// The absent value in a permutation of `0..=n` missing one element.
    MissingNumber,
    /// Largest sum over non-empty contiguous subarrays.
    MaxSubarray,
    /// Distinct values present in both of two arrays.
    Intersection,
}

impl Exercise {
    /// All exercises, in catalog order.
    pub const ALL: [Exercise; 6] = [
        Exercise::RotatedSearch,
        Exercise::MergeIntervals,
        Exercise::RansomNote,
        Exercise::MissingNumber,
        Exercise::MaxSubarray,
        Exercise::Intersection,
    ];

    /// Stable identifier used on the command line and in case files.
    pub fn slug(&self) -> &'static str {
        match self {
            Exercise::RotatedSearch => "rotated-search",
            Exercise::MergeIntervals => "merge-intervals",
            Exercise::RansomNote => "ransom-note",
            Exercise::MissingNumber => "missing-number",
            Exercise::MaxSubarray => "max-subarray",
            Exercise::Intersection => "intersection",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Exercise::RotatedSearch => "Search in Rotated Sorted Array",
            Exercise::MergeIntervals => "Merge Intervals",
            Exercise::RansomNote => "Ransom Note",
            Exercise::MissingNumber => "Missing Number",
            Exercise::MaxSubarray => "Maximum Subarray",
            Exercise::Intersection => "Intersection of Two Arrays",
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Exercise::RotatedSearch | Exercise::MergeIntervals => Difficulty::Medium,
            _ => Difficulty::Easy,
        }
    }

    /// Look up an exercise by slug.
    pub fn from_slug(slug: &str) -> Result<Exercise> {
        Exercise::ALL
            .into_iter()
            .find(|e| e.slug() == slug)
            .ok_or_else(|| Error::UnknownExercise(slug.to_string()))
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
