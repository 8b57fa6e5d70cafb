//! Scored pairings of a lost report with a found report.

use crate::{FoundItem, LostItem};

/// Points contributed by each matching signal.
///
/// # Examples
/// ```
/// use lostfound_core::ScoreBreakdown;
///
/// let breakdown = ScoreBreakdown {
///     category: 3,
///     date: 2,
///     location: 0,
///     keywords: 1,
/// };
/// assert_eq!(breakdown.total(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Points for identical categories.
    pub category: u32,
    /// Points for the lost and found days being close together.
    pub date: u32,
    /// Points for overlapping location descriptions.
    pub location: u32,
    /// Points for shared keywords in name and description.
    pub keywords: u32,
}

impl ScoreBreakdown {
    /// Sum of all signals, saturating at `u32::MAX`.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.category
            .saturating_add(self.date)
            .saturating_add(self.location)
            .saturating_add(self.keywords)
    }
}

/// A lost report paired with a found report that cleared the admission
/// threshold.
///
/// Candidates borrow the records they pair and live only as long as the
/// caller's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    /// The lost-item side of the pairing.
    pub lost_item: &'a LostItem,
    /// The found-item side of the pairing.
    pub found_item: &'a FoundItem,
    /// Per-signal contributions to [`MatchCandidate::score`].
    pub breakdown: ScoreBreakdown,
}

impl<'a> MatchCandidate<'a> {
    /// Pair two records with their computed breakdown.
    #[must_use]
    pub const fn new(
        lost_item: &'a LostItem,
        found_item: &'a FoundItem,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            lost_item,
            found_item,
            breakdown,
        }
    }

    /// Aggregate compatibility score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.breakdown.total()
    }

    /// Composite key `"{lost id}-{found id}"`.
    ///
    /// # Examples
    /// ```
    /// use jiff::civil::date;
    /// use lostfound_core::{FoundItem, FoundStatus, LostItem, MatchCandidate, ScoreBreakdown};
    ///
    /// let lost = LostItem::new("L7", "Bag", "", "Bags", "Gym", date(2025, 1, 1));
    /// let found = FoundItem::new(
    ///     "F9", "Bag", "", "Bags", "Gym", date(2025, 1, 1), FoundStatus::Verified,
    /// );
    /// let candidate = MatchCandidate::new(&lost, &found, ScoreBreakdown::default());
    /// assert_eq!(candidate.id(), "L7-F9");
    /// ```
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.lost_item.id, self.found_item.id)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MatchCandidate<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MatchCandidate", 5)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("breakdown", &self.breakdown)?;
        state.serialize_field("lostItem", self.lost_item)?;
        state.serialize_field("foundItem", self.found_item)?;
        state.end()
    }
}
