use chrono::{DateTime, NaiveDate, Utc};
use sqlx::MySqlPool;
use tracing::debug;

use crate::core::filter::DateWindow;
use crate::error::CoreError;
use crate::model::directory::DirectoryEntry;
use crate::model::leave::LeaveRow;
use crate::model::punch::{PunchListRow, PunchRow};
use crate::model::schedule::CustomScheduleRow;

use super::{DirectorySource, LeaveSource, PunchSource, ScheduleSource};

/// Bindable value for dynamically composed WHERE clauses.
enum Bind {
    Str(String),
    U64(u64),
    Instant(DateTime<Utc>),
}

macro_rules! bind_all {
    ($query:expr, $bindings:expr) => {{
        let mut query = $query;
        for value in $bindings {
            query = match value {
                Bind::Str(v) => query.bind(v.as_str()),
                Bind::U64(v) => query.bind(*v),
                Bind::Instant(v) => query.bind(*v),
            };
        }
        query
    }};
}

#[derive(Clone)]
pub struct MySqlPunchSource {
    pool: MySqlPool,
}

impl MySqlPunchSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl PunchSource for MySqlPunchSource {
    async fn for_employee(
        &self,
        email: &str,
        window: DateWindow,
    ) -> Result<Vec<PunchRow>, CoreError> {
        let mut conditions = vec!["email = ?"];
        let mut bindings = vec![Bind::Str(email.to_owned())];

        // Window on the punch's effective instant: a check-out-only punch
        // still belongs to the range (check_in alone would be NULL and fail
        // both predicates).
        if let Some(from) = window.from_utc {
            conditions.push("COALESCE(check_in, check_out) >= ?");
            bindings.push(Bind::Instant(from));
        }
        if let Some(to) = window.to_utc {
            conditions.push("COALESCE(check_in, check_out) <= ?");
            bindings.push(Bind::Instant(to));
        }

        let sql = format!(
            "SELECT id, email, anchor_date, check_in, check_out, \
             early_in_minutes, late_in_minutes, early_out_minutes, late_out_minutes \
             FROM punches WHERE {} ORDER BY anchor_date",
            conditions.join(" AND ")
        );
        debug!(sql = %sql, email, "fetching punches for employee");

        let rows = bind_all!(sqlx::query_as::<_, PunchRow>(&sql), &bindings)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn page(
        &self,
        identities: Option<&[String]>,
        window: DateWindow,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<PunchListRow>, i64), CoreError> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bindings: Vec<Bind> = Vec::new();

        if let Some(emails) = identities {
            if emails.is_empty() {
                return Ok((Vec::new(), 0));
            }
            let placeholders = vec!["?"; emails.len()].join(", ");
            conditions.push(format!("p.email IN ({placeholders})"));
            bindings.extend(emails.iter().cloned().map(Bind::Str));
        }
        if let Some(from) = window.from_utc {
            conditions.push("COALESCE(p.check_in, p.check_out) >= ?".into());
            bindings.push(Bind::Instant(from));
        }
        if let Some(to) = window.to_utc {
            conditions.push("COALESCE(p.check_in, p.check_out) <= ?".into());
            bindings.push(Bind::Instant(to));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!(
            "SELECT COUNT(*) FROM punches p \
             JOIN employees e ON e.email = p.email {where_clause}"
        );
        debug!(sql = %count_sql, "counting filtered punches");

        let total = bind_all!(sqlx::query_scalar::<_, i64>(&count_sql), &bindings)
            .fetch_one(&self.pool)
            .await?;

        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let data_sql = format!(
            "SELECT p.email, e.full_name, p.anchor_date, p.check_in, p.check_out, \
             p.early_in_minutes, p.late_in_minutes, p.early_out_minutes, p.late_out_minutes \
             FROM punches p JOIN employees e ON e.email = p.email \
             {where_clause} ORDER BY p.check_in DESC LIMIT ? OFFSET ?"
        );
        debug!(sql = %data_sql, limit, offset, "fetching punch page");

        let rows = bind_all!(sqlx::query_as::<_, PunchListRow>(&data_sql), &bindings)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok((rows, total))
    }
}

#[derive(Clone)]
pub struct MySqlDirectorySource {
    pool: MySqlPool,
}

impl MySqlDirectorySource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl DirectorySource for MySqlDirectorySource {
    async fn by_id(&self, id: u64) -> Result<Option<DirectoryEntry>, CoreError> {
        let entry = sqlx::query_as::<_, DirectoryEntry>(
            "SELECT id, email, full_name, department_id, position_id \
             FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn members(
        &self,
        department_id: Option<u64>,
        position_id: Option<u64>,
    ) -> Result<Vec<DirectoryEntry>, CoreError> {
        let mut conditions = Vec::new();
        let mut bindings = Vec::new();

        if let Some(department_id) = department_id {
            conditions.push("department_id = ?");
            bindings.push(Bind::U64(department_id));
        }
        if let Some(position_id) = position_id {
            conditions.push("position_id = ?");
            bindings.push(Bind::U64(position_id));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT id, email, full_name, department_id, position_id \
             FROM employees {where_clause} ORDER BY id"
        );
        debug!(sql = %sql, "resolving directory members");

        let rows = bind_all!(sqlx::query_as::<_, DirectoryEntry>(&sql), &bindings)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct MySqlScheduleSource {
    pool: MySqlPool,
}

impl MySqlScheduleSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl ScheduleSource for MySqlScheduleSource {
    async fn active_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<CustomScheduleRow>, CoreError> {
        let rows = sqlx::query_as::<_, CustomScheduleRow>(
            "SELECT cs.id, cs.employee_id, cs.weekday, \
             cs.morning_start, cs.morning_end, cs.afternoon_start, cs.afternoon_end, \
             cs.work_week_id, cs.is_deleted, \
             COALESCE(ww.is_deleted, FALSE) AS work_week_deleted, cs.modified_at \
             FROM custom_schedules cs \
             LEFT JOIN work_weeks ww ON ww.id = cs.work_week_id \
             WHERE cs.employee_id = ? AND cs.is_deleted = 0 \
             AND COALESCE(ww.is_deleted, 0) = 0",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct MySqlLeaveSource {
    pool: MySqlPool,
}

impl MySqlLeaveSource {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl LeaveSource for MySqlLeaveSource {
    async fn covering(
        &self,
        full_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRow>, CoreError> {
        let rows = sqlx::query_as::<_, LeaveRow>(
            "SELECT id, employee_name, start_date, end_date, leave_type, note \
             FROM leave_requests \
             WHERE employee_name = ? AND status = 'approved' \
             AND start_date <= ? AND end_date >= ?",
        )
        .bind(full_name)
        .bind(to)
        .bind(from)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
