//! Request dispatch module
//!
//! Entry point for HTTP request processing: method check, then static file
//! lookup. Every response passes through `cors::apply` on the way out.

use hyper::header::IF_MODIFIED_SINCE;
use hyper::http::request::Parts;
use hyper::{Method, Request};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, cors, HttpResponse};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) request path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_modified_since: Option<String>,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body: a static file server never reads it.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<HttpResponse, Infallible> {
    let (parts, _) = req.into_parts();
    Ok(cors::apply(dispatch(&parts, &state).await))
}

async fn dispatch(req: &Parts, state: &AppState) -> HttpResponse {
    let method = &req.method;

    match *method {
        Method::GET | Method::HEAD => {}
        Method::OPTIONS => return http::build_options_response(),
        _ => return http::build_501_response(method.as_str()),
    }

    let ctx = RequestContext {
        path: req.uri.path(),
        query: req.uri.query(),
        is_head: *method == Method::HEAD,
        if_modified_since: req
            .headers
            .get(IF_MODIFIED_SINCE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    static_files::serve_path(&ctx, state).await
}
