//! Facade crate for the campus lost-and-found matching engine.
//!
//! This crate re-exports the core record and candidate types and exposes the
//! heuristic matcher behind a feature flag.

#![forbid(unsafe_code)]

pub use lostfound_core::{
    CalendarDayError, FoundItem, FoundItemFilter, FoundStatus, FoundStatusParseError, ItemKind,
    ItemSnapshot, LostItem, MatchCandidate, Matcher, RecordValidationError, ScoreBreakdown,
    parse_calendar_day,
};

#[cfg(feature = "matcher-heuristic")]
pub use lostfound_matcher::{
    HeuristicMatcher, MatchWeights, MatchWeightsError, compute_matches, compute_matches_with,
};
