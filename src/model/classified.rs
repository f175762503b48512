use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use super::schedule::WeekdayLabel;

/// Present/Absent/OnLeave verdict for one business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DayStatus {
    Present,
    Absent,
    OnLeave,
}

/// Early/Late/OnTime verdict for a single check-in or check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Timeliness {
    Early,
    Late,
    OnTime,
}

/// One classified (employee, business day) row. Instants are local wall
/// clock. Timeliness fields are null for Absent and OnLeave days, and for
/// a missing check-out on an otherwise present day.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassifiedDay {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "2024-03-04", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub weekday: WeekdayLabel,
    pub status: DayStatus,
    #[schema(example = "2024-03-04T08:55:00", value_type = String, nullable = true)]
    pub check_in: Option<NaiveDateTime>,
    #[schema(example = "2024-03-04T17:05:00", value_type = String, nullable = true)]
    pub check_out: Option<NaiveDateTime>,
    pub check_in_class: Option<Timeliness>,
    pub check_out_class: Option<Timeliness>,
    #[schema(example = "sick", nullable = true)]
    pub leave_type: Option<String>,
    #[schema(nullable = true)]
    pub leave_note: Option<String>,
}

impl ClassifiedDay {
    /// A synthesized record for a business day with no punch: identity and
    /// date only, every attendance field empty.
    pub fn absent(employee_id: u64, email: &str, full_name: &str, date: NaiveDate) -> Self {
        Self {
            employee_id,
            email: email.to_owned(),
            full_name: full_name.to_owned(),
            date,
            weekday: date.into(),
            status: DayStatus::Absent,
            check_in: None,
            check_out: None,
            check_in_class: None,
            check_out_class: None,
            leave_type: None,
            leave_note: None,
        }
    }
}
