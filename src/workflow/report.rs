use crate::checker::models::Summary;
use crate::error::Result;

/// Comment posted while the check is running. Later replaced in place by
/// [`summary_comment`].
pub fn working_comment(username: &str, run_url: Option<&str>) -> String {
    let mut text = format!(
        "Hi!\n\n\
         🔬 Looks like you want feedback on the GitHub profile \
         [github.com/{username}](https://github.com/{username}). \
         I'm on it! Once I'm done, the results will show up here and \
         I'll close this issue.\n\n\
         ⏳ Going through large profiles can take a few minutes"
    );
    if let Some(run_url) = run_url {
        text += &format!(
            ", so if nothing happens for a while, you can [watch me work]({run_url})."
        );
    } else {
        text += ".";
    }
    text
}

/// Comment posted when the requested profile does not exist.
pub fn missing_profile_comment(username: &str, run_url: Option<&str>) -> String {
    let mut text = format!(
        "Hi! Looks like you want me to check the profile \
         [github.com/{username}](https://github.com/{username}), \
         but it doesn't seem to exist 🤷"
    );
    if let Some(run_url) = run_url {
        text += &run_footer(run_url);
    }
    text
}

/// Render the checker's summary as the final comment body.
pub fn summary_comment(
    summary: &Summary,
    escalation_login: &str,
    run_url: Option<&str>,
) -> Result<String> {
    let mut text = if let Some(error) = &summary.error {
        format!(
            "I had a look at the profile, but the check ended with an error 🤕\n\
             ```\n{error}\n```\n\
             @{escalation_login}, please take a look."
        )
    } else {
        let username = &summary.username;
        let mut text = format!(
            "I went through the whole profile \
             [github.com/{username}](https://github.com/{username}) \
             and here is my feedback 🔬\n\n\
             | Verdict | Finding | Details |\n\
             |---------|---------|---------|\n"
        );
        for outcome in &summary.outcomes {
            text += &format!(
                "| {} | {} | [Why?]({}) |\n",
                outcome.status.glyph(),
                outcome.message,
                outcome.docs_url,
            );
        }
        text
    };

    // Raw results for debugging, collapsed by default
    let json = serde_json::to_string_pretty(summary)?;
    text += &format!(
        "\n\n<details>\n\n\
         <summary>Results as JSON</summary>\n\n\
         ```json\n{json}\n```\n\n\
         </details>"
    );

    if let Some(run_url) = run_url {
        text += &run_footer(run_url);
    }
    Ok(text)
}

fn run_footer(run_url: &str) -> String {
    format!("\n\n---\n\n[Workflow run]({run_url})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::models::{Outcome, Status};

    fn success_summary() -> Summary {
        Summary {
            username: "alice".to_string(),
            error: None,
            outcomes: vec![
                Outcome {
                    status: Status::Done,
                    message: "Profile has a bio".to_string(),
                    docs_url: "https://example.com/docs/bio".to_string(),
                },
                Outcome {
                    status: Status::Warning,
                    message: "No pinned repositories".to_string(),
                    docs_url: "https://example.com/docs/pins".to_string(),
                },
            ],
            info: None,
        }
    }

    #[test]
    fn test_working_comment_mentions_profile() {
        let text = working_comment("alice", None);
        assert!(text.contains("[github.com/alice](https://github.com/alice)"));
        assert!(!text.contains("watch me work"));
    }

    #[test]
    fn test_working_comment_links_run() {
        let text = working_comment("alice", Some("https://github.com/o/r/actions/runs/42"));
        assert!(text.contains("[watch me work](https://github.com/o/r/actions/runs/42)"));
    }

    #[test]
    fn test_missing_profile_comment() {
        let text = missing_profile_comment("ghost", None);
        assert!(text.contains("[github.com/ghost](https://github.com/ghost)"));
        assert!(text.contains("doesn't seem to exist"));
    }

    #[test]
    fn test_summary_rows_in_order() {
        let text = summary_comment(&success_summary(), "maintainers", None).unwrap();
        let done = text.find("🟢 | Profile has a bio").unwrap();
        let warning = text.find("🟠 | No pinned repositories").unwrap();
        assert!(done < warning);
        assert!(text.contains("[Why?](https://example.com/docs/bio)"));
    }

    #[test]
    fn test_summary_always_embeds_json() {
        let text = summary_comment(&success_summary(), "maintainers", None).unwrap();
        assert!(text.contains("<details>"));
        assert!(text.contains("```json"));
        assert!(text.contains("\"username\": \"alice\""));
    }

    #[test]
    fn test_error_summary_quotes_error_and_escalates() {
        let summary = Summary {
            username: "alice".to_string(),
            error: Some("profile scrape timed out".to_string()),
            outcomes: vec![],
            info: None,
        };
        let text = summary_comment(&summary, "maintainers", None).unwrap();
        assert!(text.contains("```\nprofile scrape timed out\n```"));
        assert!(text.contains("@maintainers"));
        // JSON dump is present even for errors
        assert!(text.contains("<details>"));
    }

    #[test]
    fn test_run_footer_only_with_run_url() {
        let with = summary_comment(
            &success_summary(),
            "maintainers",
            Some("https://github.com/o/r/actions/runs/42"),
        )
        .unwrap();
        let without = summary_comment(&success_summary(), "maintainers", None).unwrap();
        assert!(with.contains("[Workflow run](https://github.com/o/r/actions/runs/42)"));
        assert!(!without.contains("Workflow run"));
    }
}
