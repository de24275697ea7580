//! HTTP response building module
//!
//! Builders for each status the file server emits. CORS headers are not
//! added here; see `http::cors`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{ALLOW, CONTENT_LENGTH, CONTENT_TYPE, LAST_MODIFIED, LOCATION};
use hyper::{Response, StatusCode};

pub type HttpResponse = Response<Full<Bytes>>;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Build 200 response for file contents
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: Option<&str>,
    is_head: bool,
) -> HttpResponse {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length);
    if let Some(date) = last_modified {
        builder = builder.header(LAST_MODIFIED, date);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 200 HTML response (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> HttpResponse {
    build_file_response(Bytes::from(content), HTML_CONTENT_TYPE, None, is_head)
}

/// Build 204 response to a CORS preflight
pub fn build_options_response() -> HttpResponse {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(ALLOW, "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("204", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect (directory requested without trailing slash)
pub fn build_moved_permanently(location: &str) -> HttpResponse {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .header(CONTENT_LENGTH, 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: &str) -> HttpResponse {
    Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(LAST_MODIFIED, last_modified)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> HttpResponse {
    build_error_response(StatusCode::NOT_FOUND, "File not found", is_head)
}

/// Build 501 response for methods a static server cannot handle
pub fn build_501_response(method: &str) -> HttpResponse {
    build_error_response(
        StatusCode::NOT_IMPLEMENTED,
        &format!("Unsupported method ('{method}')"),
        false,
    )
}

/// Error status with a small HTML explanation page
fn build_error_response(status: StatusCode, message: &str, is_head: bool) -> HttpResponse {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    let page = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Error response</title>\n</head>\n<body>\n<h1>Error response</h1>\n\
         <p>Error code: {code}</p>\n<p>Message: {}.</p>\n<p>Error code explanation: {code} - {reason}.</p>\n\
         </body>\n</html>\n",
        crate::handler::listing::escape_html(message)
    );
    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(&code.to_string(), &e);
            let mut resp = Response::new(Full::new(Bytes::new()));
            *resp.status_mut() = status;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(resp: HttpResponse) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_file_response() {
        let resp = build_file_response(
            Bytes::from_static(b"<h1>Hi</h1>"),
            "text/html; charset=utf-8",
            Some("Sun, 06 Nov 1994 08:49:37 GMT"),
            false,
        );
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "11");
        assert_eq!(resp.headers()[LAST_MODIFIED], "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(body_bytes(resp).await, "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_file_response(Bytes::from_static(b"abcdef"), "text/plain", None, true);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "6");
        assert!(resp.headers().get(LAST_MODIFIED).is_none());
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_404_page() {
        let resp = build_404_response(false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[CONTENT_TYPE], HTML_CONTENT_TYPE);
        let body = body_bytes(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("Error code: 404"));
        assert!(text.contains("File not found"));
    }

    #[tokio::test]
    async fn test_501_escapes_method() {
        let resp = build_501_response("<POST>");
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        let body = body_bytes(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("&lt;POST&gt;"));
    }

    #[test]
    fn test_redirect() {
        let resp = build_moved_permanently("/assets/");
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()[LOCATION], "/assets/");
    }

    #[test]
    fn test_options() {
        let resp = build_options_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers()[ALLOW], "GET, HEAD, OPTIONS");
    }
}
