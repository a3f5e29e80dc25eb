use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 7;

const MAX_OFFSET: u64 = i64::MAX as u64;

/// A normalized page window. Both `page` and `limit` are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v as u64)
}

impl PageRequest {
    /// Zero values fall back to page 1 and the default page size.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_PAGE_SIZE } else { limit },
        }
        .clamped()
    }

    /// Builds a window from raw query-string values. Anything missing,
    /// unparsable or below 1 falls back to the defaults.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: u64) -> Self {
        let default_limit = default_limit.max(1);
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(default_limit),
        }
        .clamped()
    }

    pub fn with_max_limit(mut self, max_limit: u64) -> Self {
        self.limit = self.limit.min(max_limit.max(1));
        self.clamped()
    }

    /// Keeps `offset()` representable as a signed 64-bit SQL value.
    fn clamped(mut self) -> Self {
        self.limit = self.limit.min(MAX_OFFSET);
        self.page = self.page.min(MAX_OFFSET / self.limit + 1);
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Rows to skip before this page: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }

    /// Whether this window starts past the last row of `total`.
    pub fn is_past_end(&self, total: u64) -> bool {
        self.page > self.total_pages(total)
    }
}

/// One page of results together with the size of the full result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
            total_pages: request.total_pages(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, 1, 7)]
    #[case(Some("2"), Some("10"), 2, 10)]
    #[case(Some("0"), Some("-5"), 1, 7)]
    #[case(Some("abc"), Some("1.5"), 1, 7)]
    #[case(Some(" 3 "), Some(""), 3, 7)]
    fn normalizes_query_values(
        #[case] page: Option<&str>,
        #[case] limit: Option<&str>,
        #[case] expected_page: u64,
        #[case] expected_limit: u64,
    ) {
        let req = PageRequest::from_query(page, limit, DEFAULT_PAGE_SIZE);
        assert_eq!(req.page(), expected_page);
        assert_eq!(req.limit(), expected_limit);
    }

    #[test]
    fn caps_limit() {
        let req = PageRequest::from_query(None, Some("500"), 7).with_max_limit(100);
        assert_eq!(req.limit(), 100);
    }

    fn window(rows: &[usize], req: PageRequest) -> Vec<usize> {
        rows.iter()
            .skip(req.offset() as usize)
            .take(req.limit() as usize)
            .copied()
            .collect()
    }

    #[test]
    fn ten_rows_in_pages_of_seven() {
        let rows: Vec<usize> = (0..10).collect();

        let first = PageRequest::new(1, 7);
        assert_eq!(first.offset(), 0);
        assert_eq!(window(&rows, first).len(), 7);
        assert_eq!(first.total_pages(10), 2);

        let second = PageRequest::new(2, 7);
        assert_eq!(second.offset(), 7);
        assert_eq!(window(&rows, second), vec![7, 8, 9]);

        let third = PageRequest::new(3, 7);
        assert!(third.is_past_end(10));
        assert!(window(&rows, third).is_empty());
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page = Page::<u32>::new(vec![], 0, PageRequest::default());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(PageRequest::default().is_past_end(0));
    }

    #[rstest]
    #[case(Some("9223372036854775807"), None)]
    #[case(Some("2000000000000000000"), Some("100"))]
    #[case(Some("9223372036854775807"), Some("9223372036854775807"))]
    fn huge_pages_keep_the_offset_in_range(#[case] page: Option<&str>, #[case] limit: Option<&str>) {
        let req = PageRequest::from_query(page, limit, DEFAULT_PAGE_SIZE);
        assert!(req.offset() <= i64::MAX as u64);
        assert!(req.is_past_end(1_000));

        let capped = req.with_max_limit(100);
        assert!(capped.offset() <= i64::MAX as u64);
    }

    proptest! {
        #[test]
        fn pages_partition_the_result_set(total in 0usize..60, limit in 1u64..15) {
            let rows: Vec<usize> = (0..total).collect();
            let pages = PageRequest::new(1, limit).total_pages(total as u64);
            let mut seen = Vec::new();
            for p in 1..=pages + 1 {
                let req = PageRequest::new(p, limit);
                let items = window(&rows, req);
                prop_assert!(items.len() as u64 <= limit);
                prop_assert_eq!(req.is_past_end(total as u64), p > pages);
                seen.extend(items);
            }
            prop_assert_eq!(seen, rows);
        }

        #[test]
        fn any_parsable_page_has_a_representable_offset(page in 1i64.., limit in 1i64..) {
            let req = PageRequest::from_query(Some(&page.to_string()), Some(&limit.to_string()), 7);
            prop_assert!(req.offset() <= i64::MAX as u64);
        }
    }
}
