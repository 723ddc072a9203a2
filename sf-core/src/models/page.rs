/// A request for one page of a listing.
///
/// Pages are numbered from 1. Use [`PageRequest::new`] to construct a request
/// from untrusted input; the paginator rejects zero values as well, so a
/// hand-built request cannot yield a negative-length slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// The 1-based page number
    pub page: usize,
    /// The number of items per page
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a validated page request
    pub fn new(page: usize, page_size: usize) -> Result<Self, PageError> {
        let request = Self { page, page_size };
        request.validate()?;
        Ok(request)
    }

    /// Checks that the page number and page size are both positive
    pub fn validate(&self) -> Result<(), PageError> {
        if self.page == 0 {
            return Err(PageError::ZeroPage);
        }
        if self.page_size == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(())
    }

    /// The index of the first item on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// The number of arranged items needed to fill every page up to and including this one
    pub fn target(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// The request for the following page
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            page_size: self.page_size,
        }
    }
}

/// Errors that can occur when a caller asks for an impossible page
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Error when the page number is below 1
    #[error("page number must be at least 1")]
    ZeroPage,
    /// Error when the page size is not positive
    #[error("page size must be positive")]
    ZeroPageSize,
}

/// One page of a listing, with enough metadata to drive a pagination control.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// The items on this page, in display order
    pub results: Vec<T>,
    /// The 1-based page number
    pub page: usize,
    /// The requested page size
    pub page_size: usize,
    /// The number of items across all pages
    pub total: usize,
    /// The number of non-empty pages
    pub total_pages: usize,
    /// The request for the next page, if there is one
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub more: Option<PageRequest>,
}

impl<T> Page<T> {
    /// Assemble a page from its results and the listing's total size
    pub fn new(results: Vec<T>, request: PageRequest, total: usize) -> Self {
        let total_pages = total.div_ceil(request.page_size.max(1));
        Self {
            results,
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages,
            more: (request.page < total_pages).then(|| request.next()),
        }
    }

    /// Transform every result, keeping the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            more: self.more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_values() {
        assert_eq!(PageRequest::new(0, 10).unwrap_err(), PageError::ZeroPage);
        assert_eq!(PageRequest::new(1, 0).unwrap_err(), PageError::ZeroPageSize);
        assert!(PageRequest::new(1, 1).is_ok());
    }

    #[test]
    fn test_offset_and_target() {
        let request = PageRequest::new(3, 20).unwrap();
        assert_eq!(request.offset(), 40);
        assert_eq!(request.target(), 60);
        assert_eq!(request.next(), PageRequest::new(4, 20).unwrap());
    }

    #[test]
    fn test_target_saturates() {
        let request = PageRequest {
            page: usize::MAX,
            page_size: 2,
        };
        assert_eq!(request.target(), usize::MAX);
    }

    #[test]
    fn test_page_metadata() {
        let request = PageRequest::new(2, 2).unwrap();
        let page = Page::new(vec!['c', 'd'], request, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.more, Some(PageRequest::new(3, 2).unwrap()));

        let last = Page::new(vec!['e'], request.next(), 5);
        assert_eq!(last.more, None);
    }

    #[test]
    fn test_empty_listing_has_no_pages() {
        let page = Page::<u8>::new(Vec::new(), PageRequest::new(1, 10).unwrap(), 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.more, None);
    }

    #[test]
    fn test_more_is_omitted_from_json() {
        let page = Page::new(vec![1], PageRequest::new(1, 10).unwrap(), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("more").is_none());
        assert_eq!(json["total_pages"], 1);
    }
}
