use std::str::FromStr;

use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};

use crate::model::schedule::{CustomScheduleRow, WeekdayLabel};

#[derive(Deserialize, ToSchema)]
pub struct CreateSchedule {
    #[schema(example = 7)]
    pub employee_id: u64,
    #[schema(example = "Monday")]
    pub weekday: String,
    #[schema(example = 9.0)]
    pub morning_start: f64,
    #[schema(example = 12.0)]
    pub morning_end: f64,
    #[schema(example = 13.0)]
    pub afternoon_start: f64,
    #[schema(example = 17.5)]
    pub afternoon_end: f64,
    #[schema(example = 1, nullable = true)]
    pub work_week_id: Option<u64>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateSchedule {
    pub weekday: Option<String>,
    pub morning_start: Option<f64>,
    pub morning_end: Option<f64>,
    pub afternoon_start: Option<f64>,
    pub afternoon_end: Option<f64>,
    pub work_week_id: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ScheduleFilter {
    /// Filter by employee ID
    #[schema(example = 7)]
    pub employee_id: Option<u64>,
}

fn validate_hours(pairs: &[(f64, f64)]) -> Result<(), String> {
    for &(start, end) in pairs {
        if !(0.0..=24.0).contains(&start) || !(0.0..=24.0).contains(&end) {
            return Err("hours must be fractional hours of day between 0 and 24".into());
        }
        if start >= end {
            return Err("each working window must start before it ends".into());
        }
    }
    Ok(())
}

/// Create a custom schedule
#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = CreateSchedule,
    responses(
        (status = 200, description = "Schedule created", body = Object, example = json!({
            "message": "Schedule created"
        })),
        (status = 400, description = "Invalid weekday or hours"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn create_schedule(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateSchedule>,
) -> actix_web::Result<impl Responder> {
    if WeekdayLabel::from_str(&payload.weekday).is_err() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "weekday must be one of Monday..Sunday"
        })));
    }
    if let Err(msg) = validate_hours(&[
        (payload.morning_start, payload.morning_end),
        (payload.afternoon_start, payload.afternoon_end),
    ]) {
        return Ok(HttpResponse::BadRequest().json(json!({ "message": msg })));
    }

    sqlx::query(
        "INSERT INTO custom_schedules \
         (employee_id, weekday, morning_start, morning_end, afternoon_start, afternoon_end, work_week_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.employee_id)
    .bind(&payload.weekday)
    .bind(payload.morning_start)
    .bind(payload.morning_end)
    .bind(payload.afternoon_start)
    .bind(payload.afternoon_end)
    .bind(payload.work_week_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id = payload.employee_id, "Failed to create schedule");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Schedule created"
    })))
}

/// List active custom schedules
#[utoipa::path(
    get,
    path = "/api/v1/schedules",
    params(ScheduleFilter),
    responses(
        (status = 200, description = "Active schedules, soft-deleted rows excluded"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn list_schedules(
    pool: web::Data<MySqlPool>,
    query: web::Query<ScheduleFilter>,
) -> actix_web::Result<impl Responder> {
    let mut sql = String::from(
        "SELECT cs.id, cs.employee_id, cs.weekday, \
         cs.morning_start, cs.morning_end, cs.afternoon_start, cs.afternoon_end, \
         cs.work_week_id, cs.is_deleted, \
         COALESCE(ww.is_deleted, FALSE) AS work_week_deleted, cs.modified_at \
         FROM custom_schedules cs \
         LEFT JOIN work_weeks ww ON ww.id = cs.work_week_id \
         WHERE cs.is_deleted = 0 AND COALESCE(ww.is_deleted, 0) = 0",
    );
    if query.employee_id.is_some() {
        sql.push_str(" AND cs.employee_id = ?");
    }
    sql.push_str(" ORDER BY cs.employee_id, cs.weekday");
    debug!(sql = %sql, "listing schedules");

    let mut data_query = sqlx::query_as::<_, CustomScheduleRow>(&sql);
    if let Some(employee_id) = query.employee_id {
        data_query = data_query.bind(employee_id);
    }

    let rows = data_query.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to list schedules");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(rows))
}

/// Update a custom schedule
#[utoipa::path(
    put,
    path = "/api/v1/schedules/{schedule_id}",
    params(("schedule_id", Path, description = "Schedule ID")),
    request_body = UpdateSchedule,
    responses(
        (status = 200, description = "Schedule updated", body = Object, example = json!({
            "message": "Schedule updated"
        })),
        (status = 400, description = "No fields or invalid values"),
        (status = 404, description = "Schedule not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn update_schedule(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<UpdateSchedule>,
) -> actix_web::Result<impl Responder> {
    let schedule_id = path.into_inner();

    if let Some(weekday) = &payload.weekday {
        if WeekdayLabel::from_str(weekday).is_err() {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "weekday must be one of Monday..Sunday"
            })));
        }
    }
    for value in [
        payload.morning_start,
        payload.morning_end,
        payload.afternoon_start,
        payload.afternoon_end,
    ]
    .into_iter()
    .flatten()
    {
        if !(0.0..=24.0).contains(&value) {
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": "hours must be fractional hours of day between 0 and 24"
            })));
        }
    }

    let mut sets = Vec::new();
    if payload.weekday.is_some() {
        sets.push("weekday = ?");
    }
    if payload.morning_start.is_some() {
        sets.push("morning_start = ?");
    }
    if payload.morning_end.is_some() {
        sets.push("morning_end = ?");
    }
    if payload.afternoon_start.is_some() {
        sets.push("afternoon_start = ?");
    }
    if payload.afternoon_end.is_some() {
        sets.push("afternoon_end = ?");
    }
    if payload.work_week_id.is_some() {
        sets.push("work_week_id = ?");
    }
    if sets.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "No fields provided for update"
        })));
    }

    let sql = format!(
        "UPDATE custom_schedules SET {}, modified_at = NOW() WHERE id = ? AND is_deleted = 0",
        sets.join(", ")
    );
    debug!(sql = %sql, schedule_id, "updating schedule");

    let mut update = sqlx::query(&sql);
    if let Some(weekday) = &payload.weekday {
        update = update.bind(weekday);
    }
    for value in [
        payload.morning_start,
        payload.morning_end,
        payload.afternoon_start,
        payload.afternoon_end,
    ]
    .into_iter()
    .flatten()
    {
        update = update.bind(value);
    }
    if let Some(work_week_id) = payload.work_week_id {
        update = update.bind(work_week_id);
    }
    update = update.bind(schedule_id);

    let result = update.execute(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, schedule_id, "Failed to update schedule");
        ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Schedule not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Schedule updated"
    })))
}

/// Soft-delete a custom schedule
#[utoipa::path(
    delete,
    path = "/api/v1/schedules/{schedule_id}",
    params(("schedule_id", Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule deleted", body = Object, example = json!({
            "message": "Schedule deleted"
        })),
        (status = 404, description = "Schedule not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedules"
)]
pub async fn delete_schedule(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let schedule_id = path.into_inner();

    // Soft delete only; schedule rows are never removed
    let result = sqlx::query(
        "UPDATE custom_schedules SET is_deleted = 1, modified_at = NOW() \
         WHERE id = ? AND is_deleted = 0",
    )
    .bind(schedule_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, schedule_id, "Failed to delete schedule");
        ErrorInternalServerError("Internal Server Error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Schedule not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Schedule deleted"
    })))
}
