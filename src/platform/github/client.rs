use async_trait::async_trait;
use octocrab::models::{CommentId, IssueState};
use octocrab::Octocrab;
use tokio::sync::RwLock;

use crate::config::GitHubConfig;
use crate::error::{AppError, Result};
use crate::platform::types::Issue;
use crate::platform::Platform;

use super::auth::app_jwt;
use super::mapper;

pub struct GitHubPlatform {
    config: GitHubConfig,
    /// Cached installation token and its expiry.
    token_cache: RwLock<Option<(String, chrono::DateTime<chrono::Utc>)>>,
}

impl GitHubPlatform {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        // Validate the private key exists
        if !config.private_key_path.exists() {
            return Err(AppError::Config(format!(
                "GitHub App private key not found at: {}",
                config.private_key_path.display()
            )));
        }

        Ok(Self {
            config: config.clone(),
            token_cache: RwLock::new(None),
        })
    }

    /// Get an installation-scoped access token, refreshing it when it is
    /// close to expiry.
    async fn get_access_token(&self) -> Result<String> {
        // Check cache
        {
            let cache = self.token_cache.read().await;
            if let Some((token, expiry)) = cache.as_ref() {
                if *expiry > chrono::Utc::now() + chrono::Duration::minutes(5) {
                    return Ok(token.clone());
                }
            }
        }

        // Exchange an App JWT for an installation token
        let key_pem = std::fs::read(&self.config.private_key_path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read private key at {}: {e}",
                self.config.private_key_path.display()
            ))
        })?;
        let jwt = app_jwt(self.config.app_id, &key_pem)?;

        let client = Octocrab::builder()
            .personal_token(jwt)
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build JWT client: {e}")))?;

        let url = format!(
            "/app/installations/{}/access_tokens",
            self.config.installation_id
        );
        let response: serde_json::Value = client
            .post(&url, None::<&()>)
            .await
            .map_err(|e| AppError::GitHubApi(format!("Failed to create installation token: {e}")))?;

        let token = response["token"]
            .as_str()
            .ok_or_else(|| AppError::GitHubApi("No token in response".to_string()))?
            .to_string();

        let expires_at = response["expires_at"]
            .as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .unwrap_or_else(|| chrono::Utc::now() + chrono::Duration::hours(1));

        let mut cache = self.token_cache.write().await;
        *cache = Some((token.clone(), expires_at));

        Ok(token)
    }

    /// Get an octocrab instance authenticated as the installation.
    async fn installation_client(&self) -> Result<Octocrab> {
        let token = self.get_access_token().await?;
        Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))
    }

    fn parse_repo(repo_full_name: &str) -> Result<(&str, &str)> {
        let parts: Vec<&str> = repo_full_name.splitn(2, '/').collect();
        if parts.len() != 2 {
            return Err(AppError::GitHubApi(format!(
                "Invalid repo name: {repo_full_name}"
            )));
        }
        Ok((parts[0], parts[1]))
    }
}

#[async_trait]
impl Platform for GitHubPlatform {
    async fn get_issue(&self, repo_full_name: &str, issue_number: u64) -> Result<Issue> {
        let client = self.installation_client().await?;
        let (owner, repo) = Self::parse_repo(repo_full_name)?;

        let issue = client.issues(owner, repo).get(issue_number).await?;

        Ok(mapper::map_issue(&issue))
    }

    async fn user_exists(&self, username: &str) -> Result<bool> {
        let client = self.installation_client().await?;

        let url = format!("/users/{username}");
        match client
            .get::<serde_json::Value, _, _>(&url, None::<&()>)
            .await
        {
            Ok(_) => Ok(true),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code.as_u16() == 404 =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_title(
        &self,
        repo_full_name: &str,
        issue_number: u64,
        title: &str,
    ) -> Result<()> {
        let client = self.installation_client().await?;
        let (owner, repo) = Self::parse_repo(repo_full_name)?;

        client
            .issues(owner, repo)
            .update(issue_number)
            .title(title)
            .send()
            .await?;

        Ok(())
    }

    async fn create_comment(
        &self,
        repo_full_name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        let client = self.installation_client().await?;
        let (owner, repo) = Self::parse_repo(repo_full_name)?;

        let comment = client
            .issues(owner, repo)
            .create_comment(issue_number, body)
            .await?;

        Ok(comment.id.into_inner())
    }

    async fn update_comment(
        &self,
        repo_full_name: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<()> {
        let client = self.installation_client().await?;
        let (owner, repo) = Self::parse_repo(repo_full_name)?;

        client
            .issues(owner, repo)
            .update_comment(CommentId(comment_id), body)
            .await?;

        Ok(())
    }

    async fn close_issue(&self, repo_full_name: &str, issue_number: u64) -> Result<()> {
        let client = self.installation_client().await?;
        let (owner, repo) = Self::parse_repo(repo_full_name)?;

        client
            .issues(owner, repo)
            .update(issue_number)
            .state(IssueState::Closed)
            .send()
            .await?;

        Ok(())
    }
}
