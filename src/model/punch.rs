use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One raw check-in/check-out event as stored upstream. Instants are UTC;
/// `anchor_date` is the business day the punch belongs to, which can differ
/// from the UTC calendar date once the local offset is applied.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PunchRow {
    pub id: u64,
    pub email: String,
    pub anchor_date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub early_in_minutes: Option<f64>,
    pub late_in_minutes: Option<f64>,
    pub early_out_minutes: Option<f64>,
    pub late_out_minutes: Option<f64>,
}

impl PunchRow {
    /// A row with both instants missing carries no attendance evidence.
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none()
    }
}

/// Punch joined with the directory for list views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PunchListRow {
    pub email: String,
    pub full_name: String,
    pub anchor_date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub early_in_minutes: Option<f64>,
    pub late_in_minutes: Option<f64>,
    pub early_out_minutes: Option<f64>,
    pub late_out_minutes: Option<f64>,
}

/// One row of the paginated attendance list, instants already shifted to
/// the organization's local wall clock.
#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceRow {
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "2024-03-04", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "2024-03-04T08:55:00", value_type = String, nullable = true)]
    pub check_in: Option<NaiveDateTime>,
    #[schema(example = "2024-03-04T17:05:00", value_type = String, nullable = true)]
    pub check_out: Option<NaiveDateTime>,
    #[schema(example = 5.0, nullable = true)]
    pub early_in_minutes: Option<f64>,
    #[schema(example = 0.0, nullable = true)]
    pub late_in_minutes: Option<f64>,
    #[schema(example = 0.0, nullable = true)]
    pub early_out_minutes: Option<f64>,
    #[schema(example = 5.0, nullable = true)]
    pub late_out_minutes: Option<f64>,
}
