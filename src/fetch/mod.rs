//! HTTP plumbing for worksheet sources.
//!
//! [`HttpClient`] is the seam the sheet sources fetch through; auth wrappers
//! compose over any client to attach credentials.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, anyhow};

/// Issues a GET for `url` and returns the response body.
///
/// Non-success statuses are errors carrying the status and a body snippet,
/// so auth failures and unknown worksheets surface with their cause.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(200).collect();
        return Err(anyhow!("request failed with status {status}: {snippet}"));
    }

    Ok(resp.bytes().await?.to_vec())
}
