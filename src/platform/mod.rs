pub mod github;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::Issue;

#[async_trait]
pub trait Platform: Send + Sync {
    /// Fetch an issue.
    async fn get_issue(&self, repo_full_name: &str, issue_number: u64) -> Result<Issue>;

    /// Check whether a user account exists.
    async fn user_exists(&self, username: &str) -> Result<bool>;

    /// Set the title of an issue.
    async fn update_title(
        &self,
        repo_full_name: &str,
        issue_number: u64,
        title: &str,
    ) -> Result<()>;

    /// Post a comment on an issue, returning the comment id.
    async fn create_comment(
        &self,
        repo_full_name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;

    /// Replace the body of an existing comment.
    async fn update_comment(&self, repo_full_name: &str, comment_id: u64, body: &str)
        -> Result<()>;

    /// Close an issue.
    async fn close_issue(&self, repo_full_name: &str, issue_number: u64) -> Result<()>;
}
