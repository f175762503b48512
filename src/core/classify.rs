use chrono::NaiveDate;

use crate::core::schedule::{self, threshold_seconds, time_seconds};
use crate::core::tz::TzNormalizer;
use crate::model::classified::{ClassifiedDay, DayStatus, Timeliness};
use crate::model::directory::DirectoryEntry;
use crate::model::leave::LeaveRow;
use crate::model::punch::PunchRow;
use crate::model::schedule::CustomScheduleRow;

/// Everything the classifier needs for one (employee, month) request, already
/// materialized in memory by the service layer.
pub struct MonthContext<'a> {
    pub employee: &'a DirectoryEntry,
    pub days: &'a [NaiveDate],
    pub punches: &'a [PunchRow],
    pub schedules: &'a [CustomScheduleRow],
    pub leaves: &'a [LeaveRow],
    pub tz: &'a TzNormalizer,
}

/// Classify every expected business day of the month.
///
/// Per day: a covering leave wins and suppresses timeliness; otherwise a day
/// with no punch evidence is Absent; otherwise Present, with check-in judged
/// against the resolved custom schedule's morning-start and check-out against
/// its afternoon-end. When no custom schedule resolves for that weekday the
/// punch's pre-computed early/late minute fields decide instead. A resolving
/// schedule always overrides those fields, even when they disagree.
/// Days without punches are synthesized as Absent; the result is ascending by
/// date.
pub fn classify_month(ctx: &MonthContext) -> Vec<ClassifiedDay> {
    let mut out: Vec<ClassifiedDay> = ctx
        .days
        .iter()
        .map(|&day| classify_day(ctx, day))
        .collect();
    out.sort_by_key(|d| d.date);
    out
}

fn classify_day(ctx: &MonthContext, day: NaiveDate) -> ClassifiedDay {
    let employee = ctx.employee;

    if let Some(leave) = ctx
        .leaves
        .iter()
        .find(|l| l.employee_name == employee.full_name && l.covers(day))
    {
        let mut row = ClassifiedDay::absent(employee.id, &employee.email, &employee.full_name, day);
        row.status = DayStatus::OnLeave;
        row.leave_type = Some(leave.leave_type.clone());
        row.leave_note = leave.note.clone();
        return row;
    }

    let punch = ctx
        .punches
        .iter()
        .find(|p| p.email == employee.email && p.anchor_date == day && !p.is_empty());

    let Some(punch) = punch else {
        return ClassifiedDay::absent(employee.id, &employee.email, &employee.full_name, day);
    };

    let resolved = schedule::resolve(ctx.schedules, employee.id, day.into());

    let check_in = punch.check_in.map(|i| ctx.tz.to_local(i));
    let check_out = punch.check_out.map(|i| ctx.tz.to_local(i));

    let check_in_class = check_in.map(|local| match resolved {
        Some(s) => judge(time_seconds(local.time()), threshold_seconds(s.morning_start)),
        None => judge_defaults(punch.late_in_minutes, punch.early_in_minutes),
    });
    let check_out_class = check_out.map(|local| match resolved {
        Some(s) => judge(time_seconds(local.time()), threshold_seconds(s.afternoon_end)),
        None => judge_defaults(punch.late_out_minutes, punch.early_out_minutes),
    });

    ClassifiedDay {
        employee_id: employee.id,
        email: employee.email.clone(),
        full_name: employee.full_name.clone(),
        date: day,
        weekday: day.into(),
        status: DayStatus::Present,
        check_in,
        check_out,
        check_in_class,
        check_out_class,
        leave_type: None,
        leave_note: None,
    }
}

/// Strictly after the threshold is Late, strictly before is Early. This holds
/// for both ends of the day: a check-out after afternoon-end is Late, before
/// it is Early.
fn judge(actual_seconds: i64, threshold_seconds: i64) -> Timeliness {
    if actual_seconds > threshold_seconds {
        Timeliness::Late
    } else if actual_seconds < threshold_seconds {
        Timeliness::Early
    } else {
        Timeliness::OnTime
    }
}

fn judge_defaults(late_minutes: Option<f64>, early_minutes: Option<f64>) -> Timeliness {
    if late_minutes.unwrap_or(0.0) > 0.0 {
        Timeliness::Late
    } else if early_minutes.unwrap_or(0.0) > 0.0 {
        Timeliness::Early
    } else {
        Timeliness::OnTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::business_days;
    use chrono::{NaiveDateTime, NaiveTime, TimeZone, Utc};

    fn employee() -> DirectoryEntry {
        DirectoryEntry {
            id: 5,
            email: "jane.roe@company.com".into(),
            full_name: "Jane Roe".into(),
            department_id: 1,
            position_id: 2,
        }
    }

    fn tz() -> TzNormalizer {
        TzNormalizer::new(7)
    }

    /// Build a punch whose local wall-clock times land on the given day.
    fn punch_local(
        day: NaiveDate,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
    ) -> PunchRow {
        let to_utc = |t: NaiveTime| {
            let local: NaiveDateTime = day.and_time(t);
            Utc.from_utc_datetime(&(local - chrono::Duration::hours(7)))
        };
        PunchRow {
            id: 1,
            email: "jane.roe@company.com".into(),
            anchor_date: day,
            check_in: check_in.map(to_utc),
            check_out: check_out.map(to_utc),
            early_in_minutes: Some(0.0),
            late_in_minutes: Some(0.0),
            early_out_minutes: Some(0.0),
            late_out_minutes: Some(0.0),
        }
    }

    fn schedule_row(weekday: &str, morning_start: f64, afternoon_end: f64) -> CustomScheduleRow {
        CustomScheduleRow {
            id: 9,
            employee_id: 5,
            weekday: weekday.to_string(),
            morning_start,
            morning_end: 12.0,
            afternoon_start: 13.0,
            afternoon_end,
            work_week_id: Some(1),
            is_deleted: false,
            work_week_deleted: false,
            modified_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ctx<'a>(
        employee: &'a DirectoryEntry,
        days: &'a [NaiveDate],
        punches: &'a [PunchRow],
        schedules: &'a [CustomScheduleRow],
        leaves: &'a [LeaveRow],
        tz: &'a TzNormalizer,
    ) -> MonthContext<'a> {
        MonthContext {
            employee,
            days,
            punches,
            schedules,
            leaves,
            tz,
        }
    }

    #[test]
    fn default_flags_classify_early_check_in() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4); // a Monday
        let mut punch = punch_local(day, Some(time(8, 55)), Some(time(17, 0)));
        punch.early_in_minutes = Some(5.0);
        let days = [day];
        let punches = [punch];
        let result = classify_month(&ctx(&emp, &days, &punches, &[], &[], &tz));
        assert_eq!(result[0].status, DayStatus::Present);
        assert_eq!(result[0].check_in_class, Some(Timeliness::Early));
    }

    #[test]
    fn custom_schedule_overrides_nonzero_default_late_flag() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        // Upstream flagged this check-in as 30 minutes late against the
        // default hours, but the Monday schedule starts at 10:00.
        let mut punch = punch_local(day, Some(time(8, 55)), None);
        punch.late_in_minutes = Some(30.0);
        let days = [day];
        let punches = [punch];
        let schedules = [schedule_row("Monday", 10.0, 17.0)];
        let result = classify_month(&ctx(&emp, &days, &punches, &schedules, &[], &tz));
        assert_eq!(result[0].check_in_class, Some(Timeliness::Early));
    }

    #[test]
    fn check_out_polarity_against_afternoon_end() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        let days = [day];
        let schedules = [schedule_row("Monday", 9.0, 17.0)];

        let late = [punch_local(day, Some(time(9, 0)), Some(time(17, 5)))];
        let result = classify_month(&ctx(&emp, &days, &late, &schedules, &[], &tz));
        assert_eq!(result[0].check_out_class, Some(Timeliness::Late));

        let early = [punch_local(day, Some(time(9, 0)), Some(time(16, 50)))];
        let result = classify_month(&ctx(&emp, &days, &early, &schedules, &[], &tz));
        assert_eq!(result[0].check_out_class, Some(Timeliness::Early));

        let on_time = [punch_local(day, Some(time(9, 0)), Some(time(17, 0)))];
        let result = classify_month(&ctx(&emp, &days, &on_time, &schedules, &[], &tz));
        assert_eq!(result[0].check_out_class, Some(Timeliness::OnTime));
        assert_eq!(result[0].check_in_class, Some(Timeliness::OnTime));
    }

    #[test]
    fn covering_leave_wins_and_suppresses_timeliness() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        let days = [day];
        let punches = [punch_local(day, Some(time(9, 0)), Some(time(17, 0)))];
        let leaves = [LeaveRow {
            id: 1,
            employee_name: "Jane Roe".into(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 5),
            leave_type: "sick".into(),
            note: Some("flu".into()),
        }];
        let result = classify_month(&ctx(&emp, &days, &punches, &[], &leaves, &tz));
        assert_eq!(result[0].status, DayStatus::OnLeave);
        assert_eq!(result[0].leave_type.as_deref(), Some("sick"));
        assert_eq!(result[0].leave_note.as_deref(), Some("flu"));
        assert!(result[0].check_in.is_none());
        assert!(result[0].check_in_class.is_none());
    }

    #[test]
    fn leave_for_another_name_does_not_match() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        let days = [day];
        let leaves = [LeaveRow {
            id: 1,
            employee_name: "John Doe".into(),
            start_date: day,
            end_date: day,
            leave_type: "annual".into(),
            note: None,
        }];
        let result = classify_month(&ctx(&emp, &days, &[], &[], &leaves, &tz));
        assert_eq!(result[0].status, DayStatus::Absent);
    }

    #[test]
    fn punch_with_both_instants_null_counts_as_absent() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        let days = [day];
        let punches = [punch_local(day, None, None)];
        let result = classify_month(&ctx(&emp, &days, &punches, &[], &[], &tz));
        assert_eq!(result[0].status, DayStatus::Absent);
    }

    #[test]
    fn missing_check_out_leaves_its_classification_empty() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4);
        let days = [day];
        let punches = [punch_local(day, Some(time(9, 0)), None)];
        let result = classify_month(&ctx(&emp, &days, &punches, &[], &[], &tz));
        assert_eq!(result[0].status, DayStatus::Present);
        assert!(result[0].check_in_class.is_some());
        assert!(result[0].check_out.is_none());
        assert!(result[0].check_out_class.is_none());
    }

    #[test]
    fn zero_punches_in_march_2024_yields_21_absent_days_ascending() {
        let emp = employee();
        let tz = tz();
        let days = business_days(2024, 3, date(2025, 1, 1)).unwrap();
        let result = classify_month(&ctx(&emp, &days, &[], &[], &[], &tz));
        assert_eq!(result.len(), 21);
        assert!(result.iter().all(|d| d.status == DayStatus::Absent));
        assert!(result.iter().all(|d| d.check_in.is_none()));
        assert!(result.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(result[0].full_name, "Jane Roe");
    }

    #[test]
    fn schedule_for_a_different_weekday_falls_back_to_defaults() {
        let emp = employee();
        let tz = tz();
        let day = date(2024, 3, 4); // Monday
        let days = [day];
        let mut punch = punch_local(day, Some(time(8, 0)), None);
        punch.late_in_minutes = Some(10.0);
        let punches = [punch];
        let schedules = [schedule_row("Tuesday", 10.0, 17.0)];
        let result = classify_month(&ctx(&emp, &days, &punches, &schedules, &[], &tz));
        assert_eq!(result[0].check_in_class, Some(Timeliness::Late));
    }
}
