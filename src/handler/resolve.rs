//! Request path resolution
//!
//! Maps a URL path onto the base directory. Anything that would leave the
//! base directory, whether through `..` segments, encoded separators or a
//! symlink pointing outside, resolves to `NotFound`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Bytes escaped in a single path segment of a link
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Outcome of resolving a request path
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Regular file to serve
    File(PathBuf),
    /// Directory with no index file (listing candidate)
    Directory(PathBuf),
    /// Directory requested without trailing slash; value is the `Location`
    Redirect(String),
    NotFound,
}

/// Resolve `uri_path` (still percent-encoded) against the canonical `root`
pub async fn resolve(
    root: &Path,
    uri_path: &str,
    query: Option<&str>,
    index_files: &[String],
) -> Resolved {
    let Some(segments) = safe_segments(uri_path) else {
        return Resolved::NotFound;
    };

    let target = segments.iter().fold(root.to_path_buf(), |p, s| p.join(s));
    let trailing_slash = uri_path.ends_with('/');

    if is_dir(&target).await {
        if !trailing_slash {
            let location = match query {
                Some(q) => format!("{uri_path}/?{q}"),
                None => format!("{uri_path}/"),
            };
            return Resolved::Redirect(location);
        }
        for index_file in index_files {
            let candidate = target.join(index_file);
            if is_file(&candidate).await {
                return contained(root, candidate)
                    .await
                    .map_or(Resolved::NotFound, Resolved::File);
            }
        }
        return contained(root, target)
            .await
            .map_or(Resolved::NotFound, Resolved::Directory);
    }

    // A trailing slash names a directory; a file there is not a match
    if trailing_slash || !is_file(&target).await {
        return Resolved::NotFound;
    }
    contained(root, target)
        .await
        .map_or(Resolved::NotFound, Resolved::File)
}

/// Decoded path segments with empty and `.` segments dropped.
///
/// The raw path is split on `/` before decoding, so `%2F` never acts as a
/// separator. `None` if any segment would step outside the base directory
/// or does not decode to UTF-8.
fn safe_segments(uri_path: &str) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    for raw in uri_path.split('/') {
        let segment = percent_decode(raw)?;
        match segment.as_str() {
            "" | "." => {}
            ".." => return None,
            s if s.contains(['/', '\\', '\0']) || is_drive_prefix(s) => return None,
            _ => segments.push(segment),
        }
    }
    Some(segments)
}

/// `C:`-style segment that `Path::join` would treat as a new root on Windows
fn is_drive_prefix(segment: &str) -> bool {
    cfg!(windows) && segment.len() >= 2 && segment.as_bytes()[1] == b':'
}

async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_file())
}

/// Canonicalize and require the result to stay under `root`
async fn contained(root: &Path, path: PathBuf) -> Option<PathBuf> {
    let canonical = fs::canonicalize(&path).await.ok()?;
    if canonical.starts_with(root) {
        Some(path)
    } else {
        crate::logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path.display(),
            canonical.display()
        ));
        None
    }
}

/// Decode `%XX` escapes. Malformed escapes are kept literally; `None` if the
/// result is not UTF-8.
pub fn percent_decode(input: &str) -> Option<String> {
    percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Percent-encode a single path segment for use in a link
pub fn percent_encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
