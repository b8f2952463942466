//! Page-aligned pagination primitives shared by list endpoints.
//!
//! List endpoints accept `from` (zero-based element index) and `size`
//! (page length). These parameters do NOT describe a raw row offset: the
//! effective offset is the start of the page containing `from`, i.e.
//! `(from / size) * size`. Callers that want predictable windows should pass
//! `from` as a multiple of `size`. The convention is inherited from the
//! service's public API and must not be reinterpreted as a plain offset.

use thiserror::Error;

/// Validation failures for [`PageBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageBoundsError {
    /// `from` must be zero or positive.
    #[error("from must not be negative, got {from}")]
    NegativeFrom { from: i64 },
    /// `size` must be strictly positive.
    #[error("size must be positive, got {size}")]
    NonPositiveSize { size: i64 },
}

/// Validated pagination window for repository queries.
///
/// # Examples
/// ```
/// use pagination::PageBounds;
///
/// let bounds = PageBounds::new(25, 10).expect("valid bounds");
/// assert_eq!(bounds.page(), 2);
/// assert_eq!(bounds.offset(), 20);
/// assert_eq!(bounds.limit(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    from: i64,
    size: i64,
}

impl PageBounds {
    /// Validate raw `from`/`size` parameters.
    ///
    /// # Errors
    /// Returns [`PageBoundsError`] when `from` is negative or `size` is not
    /// strictly positive.
    pub const fn new(from: i64, size: i64) -> Result<Self, PageBoundsError> {
        if from < 0 {
            return Err(PageBoundsError::NegativeFrom { from });
        }
        if size <= 0 {
            return Err(PageBoundsError::NonPositiveSize { size });
        }
        Ok(Self { from, size })
    }

    /// Zero-based page index containing `from`.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.from / self.size
    }

    /// Row offset of the page start.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.from / self.size) * self.size
    }

    /// Page length.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0, 0)]
    #[case(10, 10, 1, 10)]
    #[case(25, 10, 2, 20)]
    #[case(7, 3, 2, 6)]
    #[case(1, 20, 0, 0)]
    fn offset_snaps_to_page_start(
        #[case] from: i64,
        #[case] size: i64,
        #[case] page: i64,
        #[case] offset: i64,
    ) {
        let bounds = PageBounds::new(from, size).expect("valid bounds");
        assert_eq!(bounds.page(), page);
        assert_eq!(bounds.offset(), offset);
        assert_eq!(bounds.limit(), size);
    }

    #[rstest]
    fn rejects_negative_from() {
        let error = PageBounds::new(-1, 10).expect_err("negative from");
        assert_eq!(error, PageBoundsError::NegativeFrom { from: -1 });
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn rejects_non_positive_size(#[case] size: i64) {
        let error = PageBounds::new(0, size).expect_err("bad size");
        assert_eq!(error, PageBoundsError::NonPositiveSize { size });
    }
}
