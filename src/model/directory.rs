use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read-only projection of the employee directory. Email is the join key
/// against punches; the id is only used for single-employee lookups.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "email": "john.doe@company.com",
        "full_name": "John Doe",
        "department_id": 10,
        "position_id": 3
    })
)]
pub struct DirectoryEntry {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = 10)]
    pub department_id: u64,

    #[schema(example = 3)]
    pub position_id: u64,
}
