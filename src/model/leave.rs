use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An approved leave request covering a date range. The upstream system
/// keys these by the employee's full name rather than a stable id.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRow {
    pub id: u64,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: String,
    pub note: Option<String>,
}

impl LeaveRow {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
