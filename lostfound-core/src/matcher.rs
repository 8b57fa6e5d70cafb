//! Pair lost reports with found reports.
//!
//! The `Matcher` trait scores a single (lost, found) pair. Its provided
//! [`Matcher::rank`] method turns those pair scores into an ordered
//! candidate list for admin review.

use std::cmp::Reverse;

use crate::{FoundItem, LostItem, MatchCandidate, ScoreBreakdown};

/// Score lost/found pairs and rank the plausible ones.
///
/// Implementations must be pure: scoring the same pair twice yields the same
/// breakdown, and records are never mutated. Matchers must be `Send + Sync`
/// so concurrent admin sessions can share one instance.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lostfound_core::{FoundItem, FoundStatus, LostItem, Matcher, ScoreBreakdown};
///
/// struct SameCategory;
///
/// impl Matcher for SameCategory {
///     fn score_pair(&self, lost: &LostItem, found: &FoundItem) -> ScoreBreakdown {
///         ScoreBreakdown {
///             category: if lost.category == found.category { 3 } else { 0 },
///             ..ScoreBreakdown::default()
///         }
///     }
///
///     fn admission_threshold(&self) -> u32 {
///         3
///     }
/// }
///
/// let lost = vec![LostItem::new("L1", "Pen", "", "Stationery", "Hall", date(2025, 5, 1))];
/// let found = vec![FoundItem::new(
///     "F1", "Pen", "", "Stationery", "Hall", date(2025, 5, 2), FoundStatus::Verified,
/// )];
/// let ranked = SameCategory.rank(&lost, &found);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].id(), "L1-F1");
/// ```
pub trait Matcher: Send + Sync {
    /// Return the per-signal score for `lost` against `found`.
    fn score_pair(&self, lost: &LostItem, found: &FoundItem) -> ScoreBreakdown;

    /// Minimum aggregate score a pair needs to become a candidate.
    fn admission_threshold(&self) -> u32;

    /// Score every pair and return the admitted candidates, best first.
    ///
    /// Pairs are generated with lost items as the outer loop and found items
    /// as the inner loop, both in input order. Claimed found items are never
    /// scored. The sort is stable, so equal scores keep generation order.
    fn rank<'a>(
        &self,
        lost_items: &'a [LostItem],
        found_items: &'a [FoundItem],
    ) -> Vec<MatchCandidate<'a>> {
        let threshold = self.admission_threshold();
        let mut candidates: Vec<MatchCandidate<'a>> = lost_items
            .iter()
            .flat_map(|lost| {
                found_items
                    .iter()
                    .filter(|found| !found.status.is_claimed())
                    .map(move |found| (lost, found))
            })
            .filter_map(|(lost, found)| {
                let breakdown = self.score_pair(lost, found);
                (breakdown.total() >= threshold)
                    .then(|| MatchCandidate::new(lost, found, breakdown))
            })
            .collect();
        candidates.sort_by_key(|candidate| Reverse(candidate.score()));
        candidates
    }
}
