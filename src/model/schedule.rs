use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Closed weekday enumeration shared by the calendar generator and the
/// schedule resolver, so the two sides can never disagree on labels the
/// way locale-dependent weekday strings can.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum WeekdayLabel {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekdayLabel {
    pub fn is_weekend(self) -> bool {
        matches!(self, WeekdayLabel::Saturday | WeekdayLabel::Sunday)
    }
}

impl From<Weekday> for WeekdayLabel {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => WeekdayLabel::Monday,
            Weekday::Tue => WeekdayLabel::Tuesday,
            Weekday::Wed => WeekdayLabel::Wednesday,
            Weekday::Thu => WeekdayLabel::Thursday,
            Weekday::Fri => WeekdayLabel::Friday,
            Weekday::Sat => WeekdayLabel::Saturday,
            Weekday::Sun => WeekdayLabel::Sunday,
        }
    }
}

impl From<NaiveDate> for WeekdayLabel {
    fn from(d: NaiveDate) -> Self {
        chrono::Datelike::weekday(&d).into()
    }
}

/// Per-employee, per-weekday override of the expected working hours.
/// Start/end thresholds are fractional hours of the day (9.5 = 09:30).
/// Soft-deleted rows (own flag or the parent work week's) are inactive.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CustomScheduleRow {
    pub id: u64,
    pub employee_id: u64,
    pub weekday: String,
    pub morning_start: f64,
    pub morning_end: f64,
    pub afternoon_start: f64,
    pub afternoon_end: f64,
    pub work_week_id: Option<u64>,
    pub is_deleted: bool,
    pub work_week_deleted: bool,
    pub modified_at: Option<DateTime<Utc>>,
}
