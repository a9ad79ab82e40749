use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::CheckerConfig;
use crate::error::{AppError, Result};

use super::models::Summary;
use super::ProfileChecker;

/// Client for the profile checker service.
pub struct CheckerClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    profile_url: &'a str,
}

impl CheckerClient {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ProfileChecker for CheckerClient {
    async fn check_profile_url(&self, profile_url: &str) -> Result<Summary> {
        let mut request = self
            .client
            .post(format!("{}/check", self.base_url))
            .json(&CheckRequest { profile_url });

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CheckerApi(format!(
                "Checker returned {status}: {body}"
            )));
        }

        let summary = response.json::<Summary>().await?;
        Ok(summary)
    }
}
