use std::str::FromStr;

use chrono::NaiveTime;
use chrono::Timelike;

use crate::model::schedule::{CustomScheduleRow, WeekdayLabel};

/// Pick the active custom schedule for (employee, weekday) out of the rows
/// already fetched for that employee, or `None` meaning "use the punch's
/// pre-computed default flags".
///
/// Rows are inactive when soft-deleted themselves or when their parent work
/// week is. If more than one active row matches the same weekday, the most
/// recently modified wins; rows without a modification stamp lose to rows
/// with one, and a full tie keeps the later match.
pub fn resolve(
    rows: &[CustomScheduleRow],
    employee_id: u64,
    weekday: WeekdayLabel,
) -> Option<&CustomScheduleRow> {
    rows.iter()
        .filter(|r| r.employee_id == employee_id && !r.is_deleted && !r.work_week_deleted)
        .filter(|r| match WeekdayLabel::from_str(&r.weekday) {
            Ok(label) => label == weekday,
            Err(_) => {
                tracing::warn!(schedule_id = r.id, weekday = %r.weekday, "unparseable weekday label, skipping schedule");
                false
            }
        })
        .max_by_key(|r| r.modified_at)
}

/// Fractional hours of day (9.5 = 09:30) as whole seconds from midnight.
pub fn threshold_seconds(fractional_hours: f64) -> i64 {
    (fractional_hours * 3600.0).round() as i64
}

/// Local wall-clock time as whole seconds from midnight.
pub fn time_seconds(t: NaiveTime) -> i64 {
    t.num_seconds_from_midnight() as i64
}
