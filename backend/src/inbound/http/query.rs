//! Shared query-parameter parsing for list endpoints.

use pagination::PageBounds;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::Error;

/// Raw `from`/`size` pagination parameters as they arrive on the wire.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Zero-based index of the first element to return.
    pub from: Option<i64>,
    /// Page length.
    pub size: Option<i64>,
}

impl PageQuery {
    /// Validate into [`PageBounds`], defaulting `from` to 0 and `size` to
    /// `default_size`.
    ///
    /// # Errors
    /// Rejects negative `from` and non-positive `size` with an invalid
    /// request error.
    pub fn bounds(self, default_size: i64) -> Result<PageBounds, Error> {
        PageBounds::new(self.from.unwrap_or(0), self.size.unwrap_or(default_size))
            .map_err(|err| Error::invalid_request(err.to_string()))
    }
}
