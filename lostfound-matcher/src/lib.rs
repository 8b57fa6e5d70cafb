//! Heuristic matching of lost-item reports against found-item reports.
//!
//! Every (lost, found) pair earns points from four signals:
//! - **Category**: identical category labels.
//! - **Date proximity**: the two calendar days fall within a near or far
//!   window of each other.
//! - **Location overlap**: one lower-cased location contains the other.
//! - **Keyword overlap**: each sufficiently long word of the lost report's
//!   name and description that overlaps a word on the found side.
//!
//! Pairs whose total reaches the admission threshold become
//! [`MatchCandidate`]s, ranked best first. Claimed found items are never
//! scored.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::date;
//! use lostfound_core::{FoundItem, FoundStatus, LostItem};
//! use lostfound_matcher::compute_matches;
//!
//! let lost = vec![LostItem::new(
//!     "L1", "Phone", "black phone", "Electronics", "Library", date(2025, 4, 1),
//! )];
//! let found = vec![FoundItem::new(
//!     "F1",
//!     "Smartphone",
//!     "black smartphone found",
//!     "Electronics",
//!     "Library 2nd floor",
//!     date(2025, 4, 2),
//!     FoundStatus::Verified,
//! )];
//!
//! let candidates = compute_matches(&lost, &found);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].id(), "L1-F1");
//! ```

#![forbid(unsafe_code)]

use log::{debug, trace};
use lostfound_core::{FoundItem, LostItem, MatchCandidate, Matcher, ScoreBreakdown};

mod error;
mod keywords;
mod signals;
mod weights;

pub use error::MatchWeightsError;
pub use weights::MatchWeights;

/// [`Matcher`] combining category, date, location and keyword signals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicMatcher {
    weights: MatchWeights,
}

impl HeuristicMatcher {
    /// Build a matcher from validated weights.
    ///
    /// # Errors
    /// Returns [`MatchWeightsError`] when `weights` fail
    /// [`MatchWeights::validate`].
    pub fn new(weights: MatchWeights) -> Result<Self, MatchWeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Weights this matcher scores with.
    #[must_use]
    pub const fn weights(&self) -> &MatchWeights {
        &self.weights
    }
}

impl Matcher for HeuristicMatcher {
    fn score_pair(&self, lost: &LostItem, found: &FoundItem) -> ScoreBreakdown {
        let breakdown = ScoreBreakdown {
            category: signals::category_signal(lost, found, &self.weights),
            date: signals::date_signal(lost, found, &self.weights),
            location: signals::location_signal(lost, found, &self.weights),
            keywords: keywords::keyword_signal(lost, found, &self.weights),
        };
        trace!(
            "scored {}-{}: {breakdown:?} (total {})",
            lost.id,
            found.id,
            breakdown.total()
        );
        breakdown
    }

    fn admission_threshold(&self) -> u32 {
        self.weights.admission_threshold
    }
}

/// Rank `lost_items` against `found_items` with the default weights.
///
/// Returns only pairs scoring at least 3, sorted by descending score with
/// ties in generation order (lost items outer, found items inner). Empty
/// inputs yield an empty list.
#[must_use]
pub fn compute_matches<'a>(
    lost_items: &'a [LostItem],
    found_items: &'a [FoundItem],
) -> Vec<MatchCandidate<'a>> {
    compute_matches_with(&HeuristicMatcher::default(), lost_items, found_items)
}

/// Rank with an arbitrary [`Matcher`], logging a summary of the run.
#[must_use]
pub fn compute_matches_with<'a, M>(
    matcher: &M,
    lost_items: &'a [LostItem],
    found_items: &'a [FoundItem],
) -> Vec<MatchCandidate<'a>>
where
    M: Matcher + ?Sized,
{
    let candidates = matcher.rank(lost_items, found_items);
    debug!(
        "admitted {} candidate(s) from {} lost and {} found item(s) at threshold {}",
        candidates.len(),
        lost_items.len(),
        found_items.len(),
        matcher.admission_threshold()
    );
    candidates
}
