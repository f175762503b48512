use crate::api::attendance::{AttendanceQuery, CalendarQuery};
use crate::api::report::ReportRow;
use crate::api::schedule::{CreateSchedule, ScheduleFilter, UpdateSchedule};
use crate::model::classified::{ClassifiedDay, DayStatus, Timeliness};
use crate::model::directory::DirectoryEntry;
use crate::model::punch::AttendanceRow;
use crate::model::schedule::WeekdayLabel;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rollcall Attendance API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Tracking & Reporting

This API powers attendance auditing for administrative/HR staff.

### 🔹 Key Features
- **Attendance Queries**
  - Paginated punch lists filtered by employee, department, position, and date range
- **Attendance Classification**
  - Per business day: Present / Absent / On Leave, with Early / Late / On Time
    verdicts for check-in and check-out against custom per-weekday schedules
- **Schedule Management**
  - Create, update, list, and soft-delete per-employee working-time overrides
- **Reporting**
  - Flattened monthly rows ready for spreadsheet templating

### 📦 Response Format
- JSON-based RESTful responses
- Pagination supported for list endpoints
- All stored instants are UTC; responses carry local wall-clock time

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::list_attendance,
        crate::api::attendance::classified_month,

        crate::api::schedule::create_schedule,
        crate::api::schedule::list_schedules,
        crate::api::schedule::update_schedule,
        crate::api::schedule::delete_schedule,

        crate::api::report::monthly_report
    ),
    components(
        schemas(
            AttendanceQuery,
            CalendarQuery,
            AttendanceRow,
            ClassifiedDay,
            DayStatus,
            Timeliness,
            WeekdayLabel,
            DirectoryEntry,
            CreateSchedule,
            UpdateSchedule,
            ScheduleFilter,
            ReportRow
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance query and classification APIs"),
        (name = "Schedules", description = "Custom working-time schedule APIs"),
        (name = "Reports", description = "Spreadsheet-bound report row APIs"),
    )
)]
pub struct ApiDoc;
