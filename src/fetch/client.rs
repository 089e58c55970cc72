use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes one HTTP request. Sheet sources depend on this trait rather than
/// a concrete client so credentials can be layered on and tests can stub the
/// network out.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
