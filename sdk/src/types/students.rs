//! Student listing parameters.

use serde::{Deserialize, Serialize};

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 10;

/// Query parameters for listing students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentsQuery {
    /// Organization whose students are listed.
    pub organization_id: String,

    /// Page number, starting at 1.
    pub page: u32,

    /// Page size.
    pub limit: u32,

    /// Free-text search. An empty string is still sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl StudentsQuery {
    /// Creates a query for the first page with the default page size.
    #[must_use]
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_students_query_defaults() {
        let query = StudentsQuery::new("org-1");
        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            value,
            json!({"organization_id": "org-1", "page": 1, "limit": 10})
        );
    }

    #[test]
    fn test_students_query_empty_search_is_sent() {
        let query = StudentsQuery::new("org-1").with_search("").with_page(0);
        let value = serde_json::to_value(&query).expect("serialize");
        assert_eq!(value["search"], json!(""));
        assert_eq!(value["page"], json!(0));
    }
}
