//! Query parameters for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::MAX_PAGE_SIZE;

/// List query parameters, parsed leniently.
///
/// Values arrive as raw strings; anything missing or non-numeric
/// collapses to zero, which repositories read as "no pagination". The
/// sort hint is handed through to the repository uninterpreted.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Page size
    pub limit: Option<String>,
    /// Sort direction hint ("asc" or "desc")
    pub sort: Option<String>,
}

impl ListQuery {
    /// Requested page, zero when absent or unparsable
    pub fn page(&self) -> u64 {
        parse_or_zero(self.page.as_deref())
    }

    /// Requested page size, capped at the configured maximum
    pub fn limit(&self) -> u64 {
        parse_or_zero(self.limit.as_deref()).min(MAX_PAGE_SIZE)
    }

    /// Raw sort hint
    pub fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or_default()
    }
}

fn parse_or_zero(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
            sort: sort.map(String::from),
        }
    }

    #[test]
    fn test_numeric_values_parse() {
        let q = query(Some("2"), Some("10"), Some("desc"));
        assert_eq!(q.page(), 2);
        assert_eq!(q.limit(), 10);
        assert_eq!(q.sort(), "desc");
    }

    #[test]
    fn test_non_numeric_values_default_to_zero() {
        let q = query(Some("two"), Some("-5"), None);
        assert_eq!(q.page(), 0);
        assert_eq!(q.limit(), 0);
        assert_eq!(q.sort(), "");
    }

    #[test]
    fn test_missing_values_default_to_zero() {
        let q = ListQuery::default();
        assert_eq!(q.page(), 0);
        assert_eq!(q.limit(), 0);
    }

    #[test]
    fn test_limit_is_capped() {
        let q = query(None, Some("5000"), None);
        assert_eq!(q.limit(), MAX_PAGE_SIZE);
    }
}
