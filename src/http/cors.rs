//! CORS header injection
//!
//! Wraps the request handler so every response leaves with the same three
//! permissive headers, whatever its status. Intended for local development
//! only: any origin is allowed and nothing is authenticated.

use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::Response;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Insert the CORS headers, replacing any existing values
pub fn apply<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

#[cfg(test)]
pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers[ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_headers_added_for_any_status() {
        for status in [StatusCode::OK, StatusCode::NOT_FOUND, StatusCode::NOT_IMPLEMENTED] {
            let resp = Response::builder().status(status).body(()).unwrap();
            let resp = apply(resp);
            assert_eq!(resp.status(), status);
            assert_cors_headers(&resp);
        }
    }

    #[test]
    fn test_existing_values_are_replaced() {
        let resp = Response::builder()
            .header(ACCESS_CONTROL_ALLOW_ORIGIN, "https://example.com")
            .body(())
            .unwrap();
        let resp = apply(resp);
        assert_eq!(resp.headers().get_all(ACCESS_CONTROL_ALLOW_ORIGIN).iter().count(), 1);
        assert_cors_headers(&resp);
    }
}
