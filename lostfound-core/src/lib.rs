//! Core domain types for the lost-and-found matching engine.
//!
//! The crate models lost and found reports, the candidates produced when a
//! pair of reports looks like the same object, and the [`Matcher`] trait that
//! ranks them. Scoring heuristics live in downstream crates; this crate only
//! fixes the contract they share.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod date;
mod matcher;
mod record;
mod snapshot;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use candidate::{MatchCandidate, ScoreBreakdown};
pub use date::{CalendarDayError, parse_calendar_day};
pub use matcher::Matcher;
pub use record::{FoundItem, FoundStatus, FoundStatusParseError, LostItem};
pub use snapshot::{FoundItemFilter, ItemKind, ItemSnapshot, RecordValidationError};
