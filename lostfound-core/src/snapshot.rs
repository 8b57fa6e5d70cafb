//! A consistent read of both report collections.
//!
//! The matcher trusts its input. `ItemSnapshot::validate` is the place where
//! callers reject malformed records before ranking.

use std::collections::HashSet;

use thiserror::Error;

use crate::{FoundItem, FoundStatus, LostItem};

/// Lost and found collections fetched together.
///
/// # Examples
/// ```
/// use jiff::civil::date;
/// use lostfound_core::{FoundItem, FoundItemFilter, ItemSnapshot, LostItem};
/// use lostfound_core::FoundStatus::{Pending, Verified};
///
/// let mut snapshot = ItemSnapshot::new(
///     vec![LostItem::new("L1", "Scarf", "red wool", "Clothing", "Hall", date(2025, 1, 8))],
///     vec![
///         FoundItem::new("F1", "Scarf", "", "Clothing", "Hall", date(2025, 1, 9), Pending),
///         FoundItem::new("F2", "Scarf", "", "Clothing", "Hall", date(2025, 1, 9), Verified),
///     ],
/// );
/// snapshot.validate()?;
/// snapshot.retain_eligible_found(FoundItemFilter::Verified);
/// assert_eq!(snapshot.found_items.len(), 1);
/// # Ok::<(), lostfound_core::RecordValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ItemSnapshot {
    /// Every lost-item report.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lost_items: Vec<LostItem>,
    /// Found-item reports, possibly including unverified or claimed ones.
    #[cfg_attr(feature = "serde", serde(default))]
    pub found_items: Vec<FoundItem>,
}

/// Which found items take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FoundItemFilter {
    /// Only items an admin has verified.
    #[default]
    Verified,
    /// Everything except claimed items.
    Unclaimed,
}

impl FoundItemFilter {
    /// Report whether `item` passes the filter.
    #[must_use]
    pub const fn admits(self, item: &FoundItem) -> bool {
        match self {
            Self::Verified => matches!(item.status, FoundStatus::Verified),
            Self::Unclaimed => !item.status.is_claimed(),
        }
    }
}

/// The collection a rejected record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// The lost-item collection.
    Lost,
    /// The found-item collection.
    Found,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Lost => "lost item",
            Self::Found => "found item",
        })
    }
}

/// Errors returned by [`ItemSnapshot::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordValidationError {
    /// A record's identifier is empty or whitespace.
    #[error("{kind} at position {index} has a blank id")]
    BlankId {
        /// Collection holding the record.
        kind: ItemKind,
        /// Position of the record in its collection.
        index: usize,
    },
    /// Two records in the same collection share an identifier.
    #[error("{kind} id {id:?} appears more than once")]
    DuplicateId {
        /// Collection holding the records.
        kind: ItemKind,
        /// Repeated identifier.
        id: String,
    },
    /// A record's category is empty or whitespace.
    #[error("{kind} {id:?} has a blank category")]
    BlankCategory {
        /// Collection holding the record.
        kind: ItemKind,
        /// Identifier of the offending record.
        id: String,
    },
}

impl ItemSnapshot {
    /// Bundle two collections into a snapshot.
    #[must_use]
    pub const fn new(lost_items: Vec<LostItem>, found_items: Vec<FoundItem>) -> Self {
        Self {
            lost_items,
            found_items,
        }
    }

    /// Check the preconditions the matcher relies on.
    ///
    /// # Errors
    /// Returns the first [`RecordValidationError`] found, checking lost items
    /// before found items.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_records(
            ItemKind::Lost,
            self.lost_items
                .iter()
                .map(|item| (item.id.as_str(), item.category.as_str())),
        )?;
        check_records(
            ItemKind::Found,
            self.found_items
                .iter()
                .map(|item| (item.id.as_str(), item.category.as_str())),
        )
    }

    /// Drop found items that `filter` does not admit.
    pub fn retain_eligible_found(&mut self, filter: FoundItemFilter) {
        self.found_items.retain(|item| filter.admits(item));
    }
}

fn check_records<'a, I>(kind: ItemKind, records: I) -> Result<(), RecordValidationError>
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    let mut seen = HashSet::new();
    for (index, (id, category)) in records.enumerate() {
        if id.trim().is_empty() {
            return Err(RecordValidationError::BlankId { kind, index });
        }
        if !seen.insert(id) {
            return Err(RecordValidationError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
        if category.trim().is_empty() {
            return Err(RecordValidationError::BlankCategory {
                kind,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}
