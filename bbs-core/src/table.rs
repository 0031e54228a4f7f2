//! Sortable, paginated data table payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rows per page in every dashboard table.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    pub id: String,
}

/// Table data in records orientation, one JSON object per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    pub heading: String,
    pub explanation: String,
    pub columns: Vec<TableColumn>,
    pub data: Vec<Map<String, Value>>,
    /// Always `"native"`: the page sorts rows itself.
    pub sort_action: String,
    pub page_size: usize,
}

impl TablePayload {
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.data.len().div_ceil(self.page_size).max(1)
    }
}

/// Rows of page `page` (zero based) out of `rows`, clamped to the last page.
///
/// Takes the rows separately so the page can slice a re-sorted copy.
pub fn page_of<T>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    let size = page_size.max(1);
    let last = rows.len().saturating_sub(1) / size;
    let start = page.min(last) * size;
    let end = (start + size).min(rows.len());
    &rows[start.min(end)..end]
}
