use serde::{Deserialize, Serialize};

/// Uniform wrapper around every API response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope codes mirror HTTP statuses; anything >= 400 is a failure
    pub fn is_failure(&self) -> bool {
        self.code >= 400
    }
}

/// One page of a paginated listing (0-based page index)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size: 0,
            total_elements: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        let pages = self.total_elements.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_arithmetic() {
        let page: Page<u8> = Page {
            content: vec![1, 2, 3],
            page: 0,
            size: 3,
            total_elements: 7,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(!page.has_previous());

        let last = Page { page: 2, ..page };
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn zero_sized_page_has_no_pages() {
        let page: Page<u8> = Page::empty();
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next());
    }

    #[test]
    fn envelope_tolerates_missing_optional_fields() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"code":200,"data":5}"#).unwrap();
        assert_eq!(envelope.data, Some(5));
        assert!(envelope.errors.is_none());
        assert!(!envelope.is_failure());

        let failed: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"code":409,"message":"Seat taken","data":null}"#).unwrap();
        assert!(failed.is_failure());
        assert_eq!(failed.data, None);
    }
}
