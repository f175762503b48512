pub mod mysql;

use chrono::NaiveDate;

use crate::core::filter::DateWindow;
use crate::error::CoreError;
use crate::model::directory::DirectoryEntry;
use crate::model::leave::LeaveRow;
use crate::model::punch::{PunchListRow, PunchRow};
use crate::model::schedule::CustomScheduleRow;

/// Raw punch rows, keyed by employee email.
pub trait PunchSource {
    async fn for_employee(
        &self,
        email: &str,
        window: DateWindow,
    ) -> Result<Vec<PunchRow>, CoreError>;

    /// One page of punches joined with the directory, ordered by check-in
    /// instant descending, plus the total count of the filtered set.
    /// `identities = None` means no identity filter at all.
    async fn page(
        &self,
        identities: Option<&[String]>,
        window: DateWindow,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PunchListRow>, i64), CoreError>;
}

/// Read-only employee directory.
pub trait DirectorySource {
    async fn by_id(&self, id: u64) -> Result<Option<DirectoryEntry>, CoreError>;

    /// Directory entries restricted by department and/or position; both
    /// `None` returns everyone. An unknown id simply matches nobody.
    async fn members(
        &self,
        department_id: Option<u64>,
        position_id: Option<u64>,
    ) -> Result<Vec<DirectoryEntry>, CoreError>;
}

/// Custom working-time schedules. Implementations exclude soft-deleted rows
/// and rows whose parent work week is soft-deleted.
pub trait ScheduleSource {
    async fn active_for_employee(&self, employee_id: u64)
    -> Result<Vec<CustomScheduleRow>, CoreError>;
}

/// Approved leave requests overlapping a date range. The upstream store keys
/// leave by the employee's full name; this seam keeps that join key swappable.
pub trait LeaveSource {
    async fn covering(
        &self,
        full_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRow>, CoreError>;
}
