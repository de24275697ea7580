//! HTTP protocol layer module
//!
//! Response builders, header handling and content-type detection, kept
//! apart from path resolution in `handler`.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod response;

pub use response::{
    build_304_response, build_404_response, build_501_response, build_moved_permanently,
    build_options_response, HttpResponse,
};
