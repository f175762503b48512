use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::CoreError;
use crate::service::{AppService, PageRequest};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AttendanceQuery {
    /// Filter by a single employee id; when set, department and position
    /// filters are ignored
    #[schema(example = 7)]
    pub user_id: Option<u64>,
    /// Filter by department membership
    #[schema(example = 2)]
    pub department_id: Option<u64>,
    /// Filter by position membership
    #[schema(example = 3)]
    pub position_id: Option<u64>,
    /// Local start date (inclusive)
    #[schema(example = "2024-03-01", format = "date", value_type = String)]
    pub from_date: Option<NaiveDate>,
    /// Local end date (inclusive of the whole day)
    #[schema(example = "2024-03-31", format = "date", value_type = String)]
    pub to_date: Option<NaiveDate>,
    /// Pagination page number (1-based)
    #[schema(example = 1)]
    pub page: Option<i64>,
    /// Items per page (defaults to 10, capped at 100)
    #[schema(example = 10)]
    pub per_page: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    /// Calendar month, 1-12
    #[schema(example = 3)]
    pub month: u32,
    /// Calendar year
    #[schema(example = 2024)]
    pub year: i32,
}

/// Paginated attendance list
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "One page of punches, most recent check-in first"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    service: web::Data<AppService>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, CoreError> {
    let request = PageRequest {
        user_id: query.user_id,
        department_id: query.department_id,
        position_id: query.position_id,
        from_date: query.from_date,
        to_date: query.to_date,
        page: query.page,
        page_size: query.per_page,
    };
    let page = service.filtered_page(&request).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Classified month for one employee
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{employee_id}/calendar",
    params(
        ("employee_id", Path, description = "Employee ID"),
        CalendarQuery
    ),
    responses(
        (status = 200, description = "One classified row per expected business day, ascending"),
        (status = 400, description = "Invalid month", body = Object, example = json!({
            "message": "invalid argument: month must be between 1 and 12, got 13"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn classified_month(
    service: web::Data<AppService>,
    path: web::Path<u64>,
    query: web::Query<CalendarQuery>,
) -> Result<impl Responder, CoreError> {
    let employee_id = path.into_inner();
    let days = service
        .classified_month(employee_id, query.month, query.year)
        .await?;
    Ok(HttpResponse::Ok().json(days))
}
