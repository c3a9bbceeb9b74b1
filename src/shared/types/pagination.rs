use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset the stores accept as a signed 64-bit bind value.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Raw pagination parameters as supplied by the caller.
///
/// Both fields absent means "return everything, unwrapped".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// A resolved page window: 1-based page, clamped size and row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self { page, page_size }
    }

    /// Everything, no envelope.
    pub fn all() -> Self {
        Self::default()
    }

    /// Resolve to a window, or `None` when no pagination was requested.
    /// Non-positive values fall back to the defaults; size is capped.
    pub fn window(&self) -> Option<PageWindow> {
        if self.page.is_none() && self.page_size.is_none() {
            return None;
        }
        let page = match self.page {
            Some(p) if p > 0 => p as u64,
            _ => DEFAULT_PAGE,
        };
        let page_size = match self.page_size {
            Some(s) if s > 0 => (s as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Some(PageWindow { page, page_size })
    }
}

impl PageWindow {
    /// Rows to skip. Pages past the addressable range saturate, which
    /// yields an empty page rather than an error.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    /// Filtered row count before the window was applied.
    pub total: u64,
}

/// Result of a list query: either the bare filtered set or a page of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    All(Vec<T>),
    Page(PaginatedResult<T>),
}

impl<T> Listing<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Self::All(items) => Listing::All(items.into_iter().map(f).collect()),
            Self::Page(page) => Listing::Page(PaginatedResult {
                items: page.items.into_iter().map(f).collect(),
                total: page.total,
            }),
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Listing<U>, E> {
        Ok(match self {
            Self::All(items) => Listing::All(items.into_iter().map(f).collect::<Result<_, E>>()?),
            Self::Page(page) => Listing::Page(PaginatedResult {
                items: page.items.into_iter().map(f).collect::<Result<_, E>>()?,
                total: page.total,
            }),
        })
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::All(items) => items,
            Self::Page(page) => &page.items,
        }
    }

    /// Total filtered rows; for an unwrapped listing that is its length.
    pub fn total(&self) -> u64 {
        match self {
            Self::All(items) => items.len() as u64,
            Self::Page(page) => page.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_means_no_window() {
        assert_eq!(PageRequest::all().window(), None);
    }

    #[test]
    fn one_param_enables_defaults_for_the_other() {
        let w = PageRequest::new(Some(3), None).window().unwrap();
        assert_eq!(w, PageWindow { page: 3, page_size: 10 });
        assert_eq!(w.offset(), 20);

        let w = PageRequest::new(None, Some(25)).window().unwrap();
        assert_eq!(w, PageWindow { page: 1, page_size: 25 });
    }

    #[test]
    fn non_positive_values_are_coerced() {
        let w = PageRequest::new(Some(0), Some(-5)).window().unwrap();
        assert_eq!(w, PageWindow { page: 1, page_size: 10 });
    }

    #[test]
    fn page_size_is_capped() {
        let w = PageRequest::new(Some(1), Some(1000)).window().unwrap();
        assert_eq!(w.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn huge_page_saturates_the_offset() {
        let w = PageRequest::new(Some(i64::MAX), Some(100)).window().unwrap();
        assert_eq!(w.page, i64::MAX as u64);
        assert_eq!(w.offset(), i64::MAX as u64);
    }

    #[test]
    fn listing_serializes_bare_or_enveloped() {
        let bare = Listing::All(vec![1, 2]);
        assert_eq!(serde_json::to_string(&bare).unwrap(), "[1,2]");

        let page = Listing::Page(PaginatedResult { items: vec![3], total: 21 });
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"items":[3],"total":21}"#
        );
        assert_eq!(page.map(|n| n * 2).items(), &[6]);
    }

    #[test]
    fn try_map_keeps_total_and_stops_at_first_error() {
        let page = Listing::Page(PaginatedResult { items: vec!["1", "2"], total: 12 });
        let parsed = page.try_map(|s| s.parse::<i32>()).unwrap();
        assert_eq!(parsed.total(), 12);
        assert_eq!(parsed.items(), &[1, 2]);

        let bad = Listing::All(vec!["1", "x"]);
        assert!(bad.try_map(|s| s.parse::<i32>()).is_err());
    }
}
