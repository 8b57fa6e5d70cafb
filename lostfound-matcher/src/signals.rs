//! Individual matching signals.
//!
//! Each function inspects one aspect of a (lost, found) pair and returns the
//! points it earns under the supplied weights.
#![forbid(unsafe_code)]

use jiff::civil::Date;
use lostfound_core::{FoundItem, LostItem};

use crate::MatchWeights;

/// Exact, case-sensitive category equality.
pub(crate) fn category_signal(lost: &LostItem, found: &FoundItem, weights: &MatchWeights) -> u32 {
    if lost.category == found.category {
        weights.category
    } else {
        0
    }
}

/// Points for how close together the lost and found days are.
pub(crate) fn date_signal(lost: &LostItem, found: &FoundItem, weights: &MatchWeights) -> u32 {
    let days = days_between(lost.lost_date, found.found_date);
    if days <= weights.near_window_days {
        weights.date_near
    } else if days <= weights.far_window_days {
        weights.date_far
    } else {
        0
    }
}

/// Absolute number of whole days separating two calendar days.
pub(crate) fn days_between(lhs: Date, rhs: Date) -> u32 {
    // Civil dates span under 7.4M days, so the span always fits; saturate
    // rather than fail if that ever changes.
    lhs.since(rhs)
        .map_or(u32::MAX, |span| span.get_days().unsigned_abs())
}

/// Points when either lower-cased location contains the other.
pub(crate) fn location_signal(lost: &LostItem, found: &FoundItem, weights: &MatchWeights) -> u32 {
    let lost_location = lost.lost_location.to_lowercase();
    let found_location = found.found_location.to_lowercase();
    if lost_location.contains(found_location.as_str())
        || found_location.contains(lost_location.as_str())
    {
        weights.location
    } else {
        0
    }
}
