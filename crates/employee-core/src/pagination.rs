//! Page-number pagination over a full, ordered result set.
//!
//! A list response carries one page of records plus the information a
//! client needs to walk the rest:
//!
//! ```json
//! {
//!     "total": 42,
//!     "count": 10,
//!     "next": "http://host/api/employees/?page=3",
//!     "previous": "http://host/api/employees/",
//!     "results": [ ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size a client may ask for. Larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 100;

/// Query parameter selecting the page number (1-based).
pub const PAGE_QUERY_PARAM: &str = "page";

/// Query parameter selecting the page size.
pub const PAGE_SIZE_QUERY_PARAM: &str = "page_size";

/// Message of a successful list envelope.
pub const LIST_SUCCESS_MESSAGE: &str = "Data retrieved successfully";

/// Page size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// The page a client asked for, after defaults and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    /// Records per page, between 1 and the configured maximum.
    pub page_size: usize,
}

impl PageRequest {
    /// Reads `page` and `page_size` from decoded query pairs.
    ///
    /// Anything that is not a positive integer falls back to the default;
    /// page sizes above the maximum are clamped to it.
    pub fn from_query(params: &[(String, String)], config: &PaginationConfig) -> Self {
        let lookup = |name: &str| {
            params
                .iter()
                .rev()
                .find(|(key, _)| key == name)
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
        };

        let page = lookup(PAGE_QUERY_PARAM).unwrap_or(1);
        let page_size = lookup(PAGE_SIZE_QUERY_PARAM)
            .map(|size| size.min(config.max_page_size))
            .unwrap_or(config.default_page_size)
            .max(1);

        Self { page, page_size }
    }

    /// Number of records skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Builds `next`/`previous` links from the URL of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    base_url: String,
    params: Vec<(String, String)>,
}

impl PageLinks {
    /// `base_url` is the request URL without its query string; `params` are
    /// the request's decoded query pairs, in order.
    pub fn new(base_url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            base_url: base_url.into(),
            params,
        }
    }

    /// Link to `page`, keeping every other query parameter.
    ///
    /// Page 1 is linked without a `page` parameter.
    pub fn link(&self, page: usize) -> String {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(self.params.len() + 1);
        let mut placed = page == 1;

        for (key, value) in &self.params {
            if key == PAGE_QUERY_PARAM {
                if !placed {
                    params.push((PAGE_QUERY_PARAM, page.to_string()));
                    placed = true;
                }
                continue;
            }
            params.push((key.as_str(), value.clone()));
        }
        if !placed {
            params.push((PAGE_QUERY_PARAM, page.to_string()));
        }

        let query = serde_urlencoded::to_string(&params).unwrap_or_default();
        if query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, query)
        }
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of records across all pages.
    pub total: usize,
    /// Number of records on this page.
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// A page with no records and no links.
    pub fn empty() -> Self {
        Self {
            total: 0,
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// Splits result sets into pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Resolves the page a client asked for.
    pub fn request(&self, params: &[(String, String)]) -> PageRequest {
        PageRequest::from_query(params, &self.config)
    }

    /// Cuts the requested page out of `items`.
    ///
    /// A page past the end yields no results and no `next` link.
    pub fn page<T>(&self, items: Vec<T>, request: PageRequest, links: &PageLinks) -> Page<T> {
        let total = items.len();
        if total == 0 {
            return Page::empty();
        }

        let page_count = total.div_ceil(request.page_size);
        let results: Vec<T> = items
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();

        let next = (request.page < page_count).then(|| links.link(request.page + 1));
        let previous =
            (request.page > 1).then(|| links.link((request.page - 1).min(page_count)));

        Page {
            total,
            count: results.len(),
            next,
            previous,
            results,
        }
    }

    /// Cuts the requested page out of `items` and wraps it in the list
    /// envelope.
    pub fn paginate<T>(
        &self,
        items: Vec<T>,
        request: PageRequest,
        links: &PageLinks,
    ) -> Envelope<Page<T>> {
        Envelope::success(LIST_SUCCESS_MESSAGE, 200, self.page(items, request, links))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &[(&str, &str)]) -> Vec<(String, String)> {
        query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn links() -> PageLinks {
        PageLinks::new("http://testserver/api/employees/", Vec::new())
    }

    #[test]
    fn test_request_defaults() {
        let request = PageRequest::from_query(&[], &PaginationConfig::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_request_clamps_page_size() {
        let config = PaginationConfig::default();
        let request = PageRequest::from_query(&pairs(&[("page_size", "500")]), &config);
        assert_eq!(request.page_size, 100);

        let request = PageRequest::from_query(&pairs(&[("page_size", "25")]), &config);
        assert_eq!(request.page_size, 25);
    }

    #[test]
    fn test_request_ignores_bad_numbers() {
        let config = PaginationConfig::default();
        for bad in ["0", "-3", "abc", ""] {
            let request =
                PageRequest::from_query(&pairs(&[("page", bad), ("page_size", bad)]), &config);
            assert_eq!(request, PageRequest::default(), "input {:?}", bad);
        }
    }

    #[test]
    fn test_request_custom_config() {
        let config = PaginationConfig {
            default_page_size: 3,
            max_page_size: 5,
        };
        assert_eq!(PageRequest::from_query(&[], &config).page_size, 3);
        assert_eq!(
            PageRequest::from_query(&pairs(&[("page_size", "9")]), &config).page_size,
            5
        );
    }

    #[test]
    fn test_links_replace_page_and_keep_other_params() {
        let links = PageLinks::new(
            "http://testserver/api/employees/",
            pairs(&[("page_size", "2"), ("page", "2"), ("q", "a b")]),
        );
        assert_eq!(
            links.link(3),
            "http://testserver/api/employees/?page_size=2&page=3&q=a+b"
        );
        assert_eq!(
            links.link(1),
            "http://testserver/api/employees/?page_size=2&q=a+b"
        );
    }

    #[test]
    fn test_links_without_params() {
        assert_eq!(links().link(1), "http://testserver/api/employees/");
        assert_eq!(links().link(2), "http://testserver/api/employees/?page=2");
    }

    #[test]
    fn test_empty_result_set() {
        let paginator = Paginator::default();
        let request = PageRequest {
            page: 3,
            page_size: 10,
        };
        let page = paginator.page(Vec::<u32>::new(), request, &links());
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_middle_page() {
        let paginator = Paginator::default();
        let request = PageRequest {
            page: 2,
            page_size: 10,
        };
        let page = paginator.page((1..=25).collect(), request, &links());

        assert_eq!(page.total, 25);
        assert_eq!(page.count, 10);
        assert_eq!(page.results, (11..=20).collect::<Vec<_>>());
        assert_eq!(
            page.next.as_deref(),
            Some("http://testserver/api/employees/?page=3")
        );
        assert_eq!(
            page.previous.as_deref(),
            Some("http://testserver/api/employees/")
        );
    }

    #[test]
    fn test_last_page_is_short() {
        let paginator = Paginator::default();
        let request = PageRequest {
            page: 3,
            page_size: 10,
        };
        let page = paginator.page((1..=25).collect(), request, &links());
        assert_eq!(page.count, 5);
        assert!(page.next.is_none());
        assert!(page.previous.is_some());
    }

    #[test]
    fn test_page_past_the_end() {
        let paginator = Paginator::default();
        let request = PageRequest {
            page: 9,
            page_size: 10,
        };
        let page = paginator.page((1..=25).collect(), request, &links());

        assert_eq!(page.total, 25);
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
        assert!(page.next.is_none());
        assert_eq!(
            page.previous.as_deref(),
            Some("http://testserver/api/employees/?page=3")
        );
    }

    #[test]
    fn test_pages_cover_everything_once() {
        let paginator = Paginator::default();
        for total in [0usize, 1, 9, 10, 11, 57, 100] {
            for page_size in [1usize, 3, 10, 100] {
                let items: Vec<usize> = (0..total).collect();
                let page_count = total.div_ceil(page_size);
                let mut seen = Vec::new();

                for page in 1..=page_count.max(1) {
                    let request = PageRequest { page, page_size };
                    let result = paginator.page(items.clone(), request, &links());
                    assert_eq!(result.total, total);
                    assert!(result.count <= page_size);
                    assert_eq!(result.next.is_some(), page < page_count);
                    seen.extend(result.results);
                }

                assert_eq!(seen, items, "total={} page_size={}", total, page_size);
            }
        }
    }

    #[test]
    fn test_paginate_envelope() {
        let paginator = Paginator::default();
        let envelope = paginator.paginate(vec!["a", "b"], PageRequest::default(), &links());

        assert_eq!(envelope.message, LIST_SUCCESS_MESSAGE);
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.sub_code, "0");
        assert!(envelope.errors.is_none());

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"]["total"], 2);
        assert_eq!(value["data"]["count"], 2);
        assert!(value["data"]["next"].is_null());
        assert!(value["data"]["previous"].is_null());
        assert_eq!(value["data"]["results"], serde_json::json!(["a", "b"]));
    }
}
