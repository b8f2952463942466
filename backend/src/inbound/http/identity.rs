//! Caller identity extracted from the `X-Sharer-User-Id` header.
//!
//! The service trusts an upstream gateway for authentication; every request
//! names its user through this header. A missing or malformed value is
//! rejected before the handler body runs.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::Error;

/// Header carrying the calling user's id.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Caller identity for handlers that require one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdentity(pub i64);

impl UserIdentity {
    /// The identified user's id.
    #[must_use]
    pub const fn id(self) -> i64 {
        self.0
    }
}

fn identity_from(req: &HttpRequest) -> Result<UserIdentity, Error> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| Error::invalid_request("X-Sharer-User-Id header is required"))?;

    let text = value
        .to_str()
        .map_err(|_| Error::invalid_request("X-Sharer-User-Id header must be valid text"))?;

    text.trim()
        .parse::<i64>()
        .map(UserIdentity)
        .map_err(|_| Error::invalid_request("X-Sharer-User-Id header must be an integer"))
}

impl FromRequest for UserIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identity_from(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn header_value_is_parsed() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "42"))
            .to_http_request();
        assert_eq!(identity_from(&req).expect("valid header"), UserIdentity(42));
    }

    #[rstest]
    fn missing_header_is_rejected() {
        let req = TestRequest::default().to_http_request();
        let error = identity_from(&req).expect_err("missing header");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case("abc")]
    #[case("12.5")]
    #[case("")]
    fn malformed_header_is_rejected(#[case] value: &str) {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, value))
            .to_http_request();
        let error = identity_from(&req).expect_err("malformed header");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
