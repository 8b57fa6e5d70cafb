//! Test-only record builders and a minimal `Matcher` used by unit and
//! behaviour tests.

use jiff::civil::{Date, date};

use crate::{FoundItem, FoundStatus, LostItem, Matcher, ScoreBreakdown};

/// Day every sample record is dated unless a test overrides it.
pub const SAMPLE_DAY: Date = date(2025, 4, 1);

/// Build a lost item with placeholder text fields.
#[must_use]
pub fn lost_item(id: &str, category: &str) -> LostItem {
    LostItem::new(id, "item", "", category, "somewhere", SAMPLE_DAY)
}

/// Build a found item with placeholder text fields.
#[must_use]
pub fn found_item(id: &str, category: &str, status: FoundStatus) -> FoundItem {
    FoundItem::new(id, "item", "", category, "elsewhere", SAMPLE_DAY, status)
}

/// `Matcher` awarding three points for equal categories and nothing else.
#[derive(Default, Debug, Copy, Clone)]
pub struct CategoryMatcher;

impl Matcher for CategoryMatcher {
    fn score_pair(&self, lost: &LostItem, found: &FoundItem) -> ScoreBreakdown {
        ScoreBreakdown {
            category: if lost.category == found.category { 3 } else { 0 },
            ..ScoreBreakdown::default()
        }
    }

    fn admission_threshold(&self) -> u32 {
        3
    }
}
