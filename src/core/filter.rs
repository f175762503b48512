use chrono::{DateTime, NaiveDate, Utc};

use crate::core::tz::TzNormalizer;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// 1-based page number; anything below 1 (or missing) becomes 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Page size: missing or non-positive means the default, oversized requests
/// are capped at the maximum.
pub fn clamp_page_size(size: Option<i64>) -> i64 {
    match size {
        Some(s) if s > 0 => s.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Which identities a filtered query covers.
///
/// An explicit user id is taken verbatim as the sole identity filter and any
/// department/position filters are ignored entirely. Otherwise department
/// and/or position restrict the candidate set via the directory; with no
/// filters at all every known employee is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityScope {
    Single(u64),
    Members {
        department_id: Option<u64>,
        position_id: Option<u64>,
    },
    All,
}

impl IdentityScope {
    pub fn compose(
        user_id: Option<u64>,
        department_id: Option<u64>,
        position_id: Option<u64>,
    ) -> Self {
        if let Some(id) = user_id {
            return IdentityScope::Single(id);
        }
        if department_id.is_some() || position_id.is_some() {
            return IdentityScope::Members {
                department_id,
                position_id,
            };
        }
        IdentityScope::All
    }
}

/// Local-date range filter shifted into UTC bounds. The upper bound covers
/// the whole ending local day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateWindow {
    pub from_utc: Option<DateTime<Utc>>,
    pub to_utc: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn new(tz: &TzNormalizer, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from_utc: from.map(|d| tz.utc_lower_bound(d)),
            to_utc: to.map(|d| tz.utc_upper_bound(d)),
        }
    }

    /// Closed month window, both bounds set.
    pub fn for_month(tz: &TzNormalizer, first: NaiveDate, last: NaiveDate) -> Self {
        Self::new(tz, Some(first), Some(last))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(from) = self.from_utc {
            if instant < from {
                return false;
            }
        }
        if let Some(to) = self.to_utc {
            if instant > to {
                return false;
            }
        }
        true
    }
}
