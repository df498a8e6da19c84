//! Shared provider utilities

pub mod http_response;

pub use http_response::HttpResponseUtils;
