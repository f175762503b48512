use actix_web::{HttpResponse, Responder, web};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::attendance::CalendarQuery;
use crate::error::CoreError;
use crate::model::classified::{ClassifiedDay, DayStatus, Timeliness};
use crate::model::schedule::WeekdayLabel;
use crate::service::AppService;

/// One flattened row for the spreadsheet templating sink. Carries no logic
/// of its own; the template layout is an external concern.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportRow {
    #[schema(example = 1)]
    pub serial: usize,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com")]
    pub email: String,
    #[schema(example = "2024-03-04", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub weekday: WeekdayLabel,
    pub status: DayStatus,
    #[schema(value_type = String, nullable = true)]
    pub check_in: Option<NaiveDateTime>,
    #[schema(value_type = String, nullable = true)]
    pub check_out: Option<NaiveDateTime>,
    pub check_in_class: Option<Timeliness>,
    pub check_out_class: Option<Timeliness>,
    #[schema(nullable = true)]
    pub leave_type: Option<String>,
    #[schema(nullable = true)]
    pub leave_note: Option<String>,
}

impl ReportRow {
    fn from_day(serial: usize, day: ClassifiedDay) -> Self {
        Self {
            serial,
            full_name: day.full_name,
            email: day.email,
            date: day.date,
            weekday: day.weekday,
            status: day.status,
            check_in: day.check_in,
            check_out: day.check_out,
            check_in_class: day.check_in_class,
            check_out_class: day.check_out_class,
            leave_type: day.leave_type,
            leave_note: day.leave_note,
        }
    }
}

/// Monthly attendance report rows for one employee
#[utoipa::path(
    get,
    path = "/api/v1/reports/monthly/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        CalendarQuery
    ),
    responses(
        (status = 200, description = "Report rows ready for spreadsheet templating", body = [ReportRow]),
        (status = 400, description = "Invalid month"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
pub async fn monthly_report(
    service: web::Data<AppService>,
    path: web::Path<u64>,
    query: web::Query<CalendarQuery>,
) -> Result<impl Responder, CoreError> {
    let employee_id = path.into_inner();
    let days = service
        .classified_month(employee_id, query.month, query.year)
        .await?;
    let rows: Vec<ReportRow> = days
        .into_iter()
        .enumerate()
        .map(|(i, day)| ReportRow::from_day(i + 1, day))
        .collect();
    Ok(HttpResponse::Ok().json(rows))
}
