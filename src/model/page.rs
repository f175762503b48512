use serde::Serialize;
use utoipa::ToSchema;

/// Generic pagination envelope. Page numbers are 1-based; an empty result
/// set has zero total pages no matter which page was requested.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[schema(example = 1)]
    pub page: i64,
    #[schema(example = 10)]
    pub page_size: i64,
    #[schema(example = 42)]
    pub total_count: i64,
    #[schema(example = 5)]
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total_count: i64) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + page_size - 1) / page_size
        };
        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages,
            has_previous: page > 1 && total_pages > 0,
            has_next: page < total_pages,
        }
    }

    pub fn empty(page: i64, page_size: i64) -> Self {
        Self::new(Vec::new(), page, page_size, 0)
    }
}
