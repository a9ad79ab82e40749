use octocrab::models::IssueState;

use crate::platform::types;

/// Map octocrab Issue to our platform Issue type.
pub fn map_issue(issue: &octocrab::models::issues::Issue) -> types::Issue {
    types::Issue {
        number: issue.number,
        title: issue.title.clone(),
        state: map_state(&issue.state),
        body: issue.body.clone().unwrap_or_default(),
        labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
    }
}

fn map_state(state: &IssueState) -> String {
    match state {
        IssueState::Open => "open",
        IssueState::Closed => "closed",
        _ => "unknown",
    }
    .to_string()
}
