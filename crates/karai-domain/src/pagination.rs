//! Pagination and sort direction types.

use serde::{Deserialize, Serialize};

/// Generic sort direction. Wire format: lowercase (`"asc"` / `"desc"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Pagination block returned alongside list payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u64,
    /// 1-based.
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl PageInfo {
    /// Fallback block for error paths: empty first page with the requested
    /// limit.
    pub fn empty(limit: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            limit,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_sort_order_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }

    #[test]
    fn should_deserialize_page_info_from_camel_case() {
        let json = r#"{"total": 42, "page": 2, "limit": 10, "totalPages": 5}"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.total, 42);
        assert_eq!(info.total_pages, 5);
    }

    #[test]
    fn should_build_empty_page_info() {
        let info = PageInfo::empty(10);
        assert_eq!(info.total, 0);
        assert_eq!(info.page, 1);
        assert_eq!(info.limit, 10);
    }
}
