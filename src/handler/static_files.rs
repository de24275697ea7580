//! Static file serving module
//!
//! Turns a resolved path into a response: file contents, directory
//! listing, redirect or 404.

use hyper::body::Bytes;
use std::path::Path;
use tokio::fs;

use super::listing;
use super::resolve::{resolve, Resolved};
use super::router::RequestContext;
use crate::config::AppState;
use crate::http::{self, cache, mime, response, HttpResponse};
use crate::logger;

/// Serve the request path from the base directory
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> HttpResponse {
    let files = state.files();
    match resolve(&state.root, ctx.path, ctx.query, &files.index_files).await {
        Resolved::File(path) => serve_file(ctx, &path).await,
        Resolved::Directory(path) if files.directory_listing => {
            serve_listing(ctx, &path).await
        }
        Resolved::Directory(_) | Resolved::NotFound => http::build_404_response(ctx.is_head),
        Resolved::Redirect(location) => http::build_moved_permanently(&location),
    }
}

/// Serve a single regular file
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> HttpResponse {
    let last_modified = match fs::metadata(path).await.and_then(|m| m.modified()) {
        Ok(modified) => {
            if cache::is_not_modified(ctx.if_modified_since.as_deref(), modified) {
                return http::build_304_response(&cache::format_http_date(modified));
            }
            Some(cache::format_http_date(modified))
        }
        Err(_) => None,
    };

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response(ctx.is_head);
        }
    };

    response::build_file_response(
        Bytes::from(content),
        mime::content_type_for(path),
        last_modified.as_deref(),
        ctx.is_head,
    )
}

async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> HttpResponse {
    match listing::list_directory(dir, ctx.path).await {
        Ok(html) => response::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_warning(&format!(
                "No permission to list directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response(ctx.is_head)
        }
    }
}
