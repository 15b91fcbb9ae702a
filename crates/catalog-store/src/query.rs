/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A 1-based page request.
///
/// Zero values fall back to the defaults, so a constructed request always
/// has `page >= 1` and `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a page request, replacing zero values with the defaults.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Builds a request from raw query-string values.
    ///
    /// Absent, unparsable or non-positive values fall back to the defaults
    /// instead of failing the request.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(lenient_parse(page), lenient_parse(limit))
    }

    /// The requested page, starting at 1.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The maximum number of items on a page.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

fn lenient_parse(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// One page of results plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// The page number that was requested.
    pub fn current(&self) -> u32 {
        self.request.page()
    }

    /// Total number of pages for the requested page size.
    pub fn pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.request.limit()))
    }
}
