pub mod http;
pub mod models;

use async_trait::async_trait;

use crate::error::Result;
use models::Summary;

/// The profile analysis itself lives in an external service; this is the
/// seam the workflow talks to.
#[async_trait]
pub trait ProfileChecker: Send + Sync {
    /// Run a full check of the given profile URL.
    async fn check_profile_url(&self, profile_url: &str) -> Result<Summary>;
}
