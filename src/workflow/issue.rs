use crate::checker::ProfileChecker;
use crate::config::BotConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::workflow::report;
use crate::workflow::trigger;
use crate::workflow::types::{RunOutcome, SkipReason};

/// Process a single profile-check issue from fetch to close.
///
/// Validation failures log a warning and return `Skipped`; they never fail
/// the run. API errors propagate to the caller.
pub async fn process_issue(
    platform: &dyn Platform,
    checker: &dyn ProfileChecker,
    bot: &BotConfig,
    repo_full_name: &str,
    issue_number: u64,
    allowed_states: &[String],
    run_url: Option<&str>,
) -> Result<RunOutcome> {
    tracing::info!(
        repo = repo_full_name,
        issue = issue_number,
        "Fetching issue"
    );
    let issue = platform.get_issue(repo_full_name, issue_number).await?;

    if !allowed_states.iter().any(|s| *s == issue.state) {
        tracing::warn!(
            issue = issue_number,
            state = %issue.state,
            allowed = %allowed_states.join(","),
            "Issue state not allowed"
        );
        return Ok(RunOutcome::Skipped(SkipReason::StateNotAllowed));
    }

    if !issue.has_label(&bot.trigger_label) {
        tracing::warn!(
            issue = issue_number,
            label = %bot.trigger_label,
            "Issue is missing the trigger label"
        );
        return Ok(RunOutcome::Skipped(SkipReason::MissingLabel));
    }

    if issue.body.trim().is_empty() {
        tracing::warn!(issue = issue_number, "Issue body is empty");
        return Ok(RunOutcome::Skipped(SkipReason::EmptyBody));
    }

    let Some(username) = trigger::extract_username(&issue.body) else {
        tracing::warn!(issue = issue_number, "Issue body has no trigger phrase");
        return Ok(RunOutcome::Skipped(SkipReason::NoTrigger));
    };
    tracing::info!(issue = issue_number, username = %username, "Found trigger");

    let profile_url = format!("https://github.com/{username}");
    if !platform.user_exists(&username).await? {
        tracing::error!(profile_url = %profile_url, "Profile doesn't exist");
        platform
            .create_comment(
                repo_full_name,
                issue_number,
                &report::missing_profile_comment(&username, run_url),
            )
            .await?;
        platform.close_issue(repo_full_name, issue_number).await?;
        return Ok(RunOutcome::ProfileMissing);
    }

    let title = format!("Profile check: {username}");
    if issue.title != title {
        tracing::debug!(issue = issue_number, title = %title, "Updating title");
        platform
            .update_title(repo_full_name, issue_number, &title)
            .await?;
    }

    let comment_id = platform
        .create_comment(
            repo_full_name,
            issue_number,
            &report::working_comment(&username, run_url),
        )
        .await?;

    tracing::info!(profile_url = %profile_url, "Checking profile");
    let summary = checker.check_profile_url(&profile_url).await?;

    tracing::info!(comment = comment_id, "Posting summary");
    platform
        .update_comment(
            repo_full_name,
            comment_id,
            &report::summary_comment(&summary, &bot.escalation_login, run_url)?,
        )
        .await?;

    platform.close_issue(repo_full_name, issue_number).await?;

    Ok(RunOutcome::Completed)
}
