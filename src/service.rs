use chrono::{NaiveDate, Utc};
use sqlx::MySqlPool;

use crate::core::calendar::business_days;
use crate::core::classify::{MonthContext, classify_month};
use crate::core::filter::{DateWindow, IdentityScope, clamp_page, clamp_page_size};
use crate::core::tz::TzNormalizer;
use crate::error::CoreError;
use crate::model::classified::ClassifiedDay;
use crate::model::page::Paginated;
use crate::model::punch::AttendanceRow;
use crate::source::mysql::{
    MySqlDirectorySource, MySqlLeaveSource, MySqlPunchSource, MySqlScheduleSource,
};
use crate::source::{DirectorySource, LeaveSource, PunchSource, ScheduleSource};

/// Filters for the paginated attendance list. All fields optional; an
/// explicit `user_id` makes the department/position filters irrelevant.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub user_id: Option<u64>,
    pub department_id: Option<u64>,
    pub position_id: Option<u64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Read-only façade over the four collaborator sources and the pure core.
/// Stateless; classification is recomputed per request.
#[derive(Clone)]
pub struct AttendanceService<P, D, S, L> {
    punches: P,
    directory: D,
    schedules: S,
    leaves: L,
    tz: TzNormalizer,
}

/// The service as wired in production, every source backed by MySQL.
pub type AppService =
    AttendanceService<MySqlPunchSource, MySqlDirectorySource, MySqlScheduleSource, MySqlLeaveSource>;

impl AppService {
    pub fn mysql(pool: MySqlPool, tz: TzNormalizer) -> Self {
        Self::new(
            MySqlPunchSource::new(pool.clone()),
            MySqlDirectorySource::new(pool.clone()),
            MySqlScheduleSource::new(pool.clone()),
            MySqlLeaveSource::new(pool),
            tz,
        )
    }
}

impl<P, D, S, L> AttendanceService<P, D, S, L>
where
    P: PunchSource,
    D: DirectorySource,
    S: ScheduleSource,
    L: LeaveSource,
{
    pub fn new(punches: P, directory: D, schedules: S, leaves: L, tz: TzNormalizer) -> Self {
        Self {
            punches,
            directory,
            schedules,
            leaves,
            tz,
        }
    }

    /// Every expected business day of the month classified for one employee,
    /// ascending by date. An unknown employee is a hard NotFound; a future
    /// month is an empty sequence; a month with no punches at all is a valid
    /// all-absent result.
    pub async fn classified_month(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> Result<Vec<ClassifiedDay>, CoreError> {
        let employee = self
            .directory
            .by_id(employee_id)
            .await?
            .ok_or(CoreError::NotFound("employee"))?;

        let today = self.tz.local_today(Utc::now());
        let days = business_days(year, month, today)?;
        let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
            return Ok(Vec::new());
        };

        let window = DateWindow::for_month(&self.tz, first, last);
        let (punches, schedules, leaves) = futures::try_join!(
            self.punches.for_employee(&employee.email, window),
            self.schedules.active_for_employee(employee.id),
            self.leaves.covering(&employee.full_name, first, last),
        )?;

        Ok(classify_month(&MonthContext {
            employee: &employee,
            days: &days,
            punches: &punches,
            schedules: &schedules,
            leaves: &leaves,
            tz: &self.tz,
        }))
    }

    /// One page of raw punches under the composed filters, most recent
    /// check-in first, instants shifted to local time for display.
    pub async fn filtered_page(
        &self,
        request: &PageRequest,
    ) -> Result<Paginated<AttendanceRow>, CoreError> {
        let page = clamp_page(request.page);
        let size = clamp_page_size(request.page_size);

        let scope =
            IdentityScope::compose(request.user_id, request.department_id, request.position_id);
        let identities: Option<Vec<String>> = match scope {
            IdentityScope::Single(id) => Some(
                self.directory
                    .by_id(id)
                    .await?
                    .map(|e| vec![e.email])
                    .unwrap_or_default(),
            ),
            IdentityScope::Members {
                department_id,
                position_id,
            } => Some(
                self.directory
                    .members(department_id, position_id)
                    .await?
                    .into_iter()
                    .map(|e| e.email)
                    .collect(),
            ),
            IdentityScope::All => None,
        };

        let window = DateWindow::new(&self.tz, request.from_date, request.to_date);
        let (rows, total) = self
            .punches
            .page(identities.as_deref(), window, size, (page - 1) * size)
            .await?;

        let items = rows
            .into_iter()
            .map(|r| AttendanceRow {
                email: r.email,
                full_name: r.full_name,
                date: r.anchor_date,
                check_in: r.check_in.map(|i| self.tz.to_local(i)),
                check_out: r.check_out.map(|i| self.tz.to_local(i)),
                early_in_minutes: r.early_in_minutes,
                late_in_minutes: r.late_in_minutes,
                early_out_minutes: r.early_out_minutes,
                late_out_minutes: r.late_out_minutes,
            })
            .collect();

        Ok(Paginated::new(items, page, size, total))
    }
}
