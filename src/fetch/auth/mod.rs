//! Credential wrappers for [`HttpClient`](super::HttpClient).
//!
//! The Sheets values API takes an API key as the `key` query parameter
//! ([`UrlParam`]); the CSV export path needs no credentials at all.

mod url_param;

pub use url_param::UrlParam;
