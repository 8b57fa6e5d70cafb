//! Tunable weights and windows for the heuristic matcher.
#![forbid(unsafe_code)]

use crate::MatchWeightsError;

/// Points and cut-offs applied to each matching signal.
///
/// The defaults reproduce the portal's long-standing behaviour and should be
/// kept unless the admin team agrees to re-tune them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    /// Points for identical categories.
    pub category: u32,
    /// Points when the days differ by at most `near_window_days`.
    pub date_near: u32,
    /// Points when the days differ by at most `far_window_days`.
    pub date_far: u32,
    /// Points when one location contains the other.
    pub location: u32,
    /// Points per lost-side keyword that overlaps a found-side keyword.
    pub keyword: u32,
    /// Upper bound, inclusive, of the near date window.
    pub near_window_days: u32,
    /// Upper bound, inclusive, of the far date window.
    pub far_window_days: u32,
    /// Shortest token, in characters, that counts as a keyword.
    pub min_keyword_chars: usize,
    /// Minimum total score for a pair to be admitted.
    pub admission_threshold: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            category: 3,
            date_near: 2,
            date_far: 1,
            location: 2,
            keyword: 1,
            near_window_days: 3,
            far_window_days: 7,
            min_keyword_chars: 4,
            admission_threshold: 3,
        }
    }
}

impl MatchWeights {
    /// Return a copy with a different admission threshold.
    ///
    /// # Examples
    /// ```
    /// use lostfound_matcher::MatchWeights;
    ///
    /// let strict = MatchWeights::default().with_admission_threshold(6);
    /// assert_eq!(strict.admission_threshold, 6);
    /// assert_eq!(strict.category, 3);
    /// ```
    #[must_use]
    pub const fn with_admission_threshold(mut self, threshold: u32) -> Self {
        self.admission_threshold = threshold;
        self
    }

    /// Check that the windows and keyword length are coherent.
    ///
    /// # Errors
    /// Returns [`MatchWeightsError`] when the near window is wider than the
    /// far window or the keyword length is zero.
    pub const fn validate(&self) -> Result<(), MatchWeightsError> {
        if self.near_window_days > self.far_window_days {
            return Err(MatchWeightsError::InvertedDateWindows {
                near: self.near_window_days,
                far: self.far_window_days,
            });
        }
        if self.min_keyword_chars == 0 {
            return Err(MatchWeightsError::ZeroKeywordLength);
        }
        Ok(())
    }
}
