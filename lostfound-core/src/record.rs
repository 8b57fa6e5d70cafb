//! Lost and found item reports.
//!
//! Both record shapes are read-only to the matcher. The data layer is
//! expected to normalise field names and dates before building them.

use std::str::FromStr;

use jiff::civil::Date;
use thiserror::Error;

/// A report describing an item a user believes they lost.
///
/// # Examples
/// ```
/// use jiff::civil::date;
/// use lostfound_core::LostItem;
///
/// let item = LostItem::new(
///     "L1",
///     "Phone",
///     "black phone",
///     "Electronics",
///     "Library",
///     date(2025, 4, 1),
/// );
/// assert_eq!(item.category, "Electronics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LostItem {
    /// Identifier, unique within the lost-item collection.
    pub id: String,
    /// Short name given by the reporter.
    pub item_name: String,
    /// Free-text description.
    pub description: String,
    /// Category label, compared case-sensitively.
    pub category: String,
    /// Where the item was last seen.
    pub lost_location: String,
    /// Calendar day the item went missing.
    #[cfg_attr(feature = "serde", serde(with = "crate::date::calendar_day"))]
    pub lost_date: Date,
}

impl LostItem {
    /// Construct a [`LostItem`] from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        lost_location: impl Into<String>,
        lost_date: Date,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            description: description.into(),
            category: category.into(),
            lost_location: lost_location.into(),
            lost_date,
        }
    }
}

/// A report describing an item someone turned in.
///
/// # Examples
/// ```
/// use jiff::civil::date;
/// use lostfound_core::{FoundItem, FoundStatus};
///
/// let item = FoundItem::new(
///     "F1",
///     "Smartphone",
///     "black smartphone found",
///     "Electronics",
///     "Library 2nd floor",
///     date(2025, 4, 2),
///     FoundStatus::Verified,
/// );
/// assert!(!item.status.is_claimed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FoundItem {
    /// Identifier, unique within the found-item collection.
    pub id: String,
    /// Short name given by the finder.
    pub item_name: String,
    /// Free-text description.
    pub description: String,
    /// Category label, compared case-sensitively.
    pub category: String,
    /// Where the item was found.
    pub found_location: String,
    /// Calendar day the item was found.
    #[cfg_attr(feature = "serde", serde(with = "crate::date::calendar_day"))]
    pub found_date: Date,
    /// Review state of the report.
    pub status: FoundStatus,
}

impl FoundItem {
    /// Construct a [`FoundItem`] from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        found_location: impl Into<String>,
        found_date: Date,
        status: FoundStatus,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            description: description.into(),
            category: category.into(),
            found_location: found_location.into(),
            found_date,
            status,
        }
    }
}

/// Review state of a found-item report.
///
/// # Examples
/// ```
/// use lostfound_core::FoundStatus;
///
/// assert_eq!(FoundStatus::Claimed.as_str(), "claimed");
/// assert_eq!("verified".parse::<FoundStatus>(), Ok(FoundStatus::Verified));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FoundStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Checked by an admin and eligible for matching.
    Verified,
    /// Dismissed by an admin.
    Rejected,
    /// Returned to its owner; never matched again.
    Claimed,
}

impl FoundStatus {
    /// Return the status as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::Claimed => "claimed",
        }
    }

    /// Report whether the item has already been claimed or resolved.
    #[must_use]
    pub const fn is_claimed(self) -> bool {
        matches!(self, Self::Claimed)
    }
}

impl std::fmt::Display for FoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`FoundStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown found-item status {0:?}")]
pub struct FoundStatusParseError(pub String);

impl FromStr for FoundStatus {
    type Err = FoundStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            "claimed" => Ok(Self::Claimed),
            other => Err(FoundStatusParseError(other.to_owned())),
        }
    }
}
