//! Request handler module
//!
//! Request dispatch and static file serving from the base directory.

pub mod listing;
pub mod resolve;
pub mod router;
pub mod static_files;

pub use router::handle_request;
