use std::collections::BTreeSet;

use serde::Serialize;

use crate::checker::models::{Outcome, ProjectInfo, Status, Summary};
use crate::error::{AppError, Result};

use super::document::{Document, School, Topic};

/// A published catalog entry, merged from the hand-written document and the
/// checker's summary. Document fields win over scraped ones.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
    pub location: Option<String>,
    pub discord_id: Option<i64>,
    pub github_username: String,
    pub github_url: String,
    pub linkedin_url: Option<String>,
    pub topics: BTreeSet<Topic>,
    pub domains: Vec<String>,
    pub experience: BTreeSet<String>,
    pub secondary_school: Option<School>,
    pub university: Option<School>,
    pub languages: Vec<String>,
    pub issues: Vec<Outcome>,
    pub projects: Vec<ProjectInfo>,
    pub is_ready: bool,
}

impl Profile {
    pub fn create(document: Document, summary: Summary) -> Result<Self> {
        if let Some(error) = &summary.error {
            return Err(AppError::Catalog(format!(
                "Summary for {} contains an error: {error}",
                summary.username
            )));
        }
        let Some(info) = summary.info else {
            return Err(AppError::Catalog(format!(
                "Summary for {} contains no profile info",
                summary.username
            )));
        };
        if document.username != summary.username {
            return Err(AppError::Catalog(format!(
                "Usernames do not match: {} vs {}",
                document.username, summary.username
            )));
        }

        let issues: Vec<Outcome> = summary
            .outcomes
            .iter()
            .filter(|o| matches!(o.status, Status::Warning | Status::Error))
            .cloned()
            .collect();
        let is_ready = summary
            .outcomes
            .iter()
            .all(|o| o.status != Status::Error);

        let mut projects: Vec<ProjectInfo> = info
            .projects
            .into_iter()
            .filter(|p| p.priority <= 1)
            .collect();
        projects.sort_by_key(|p| p.priority);

        Ok(Self {
            name: document
                .name
                .or(info.name)
                .unwrap_or_else(|| document.username.clone()),
            bio: document.bio.or(info.bio),
            email: document.email.or(info.email),
            avatar_url: info.avatar_url,
            location: document.location.or(info.location),
            discord_id: document.discord_id,
            github_username: summary.username,
            github_url: document.github_url,
            linkedin_url: info.linkedin_url,
            topics: document.topics,
            domains: document.domains,
            experience: document.experience,
            secondary_school: document.secondary_school,
            university: document.university,
            languages: document.languages,
            issues,
            projects,
            is_ready,
        })
    }
}

/// The published catalog file.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub count: usize,
    pub items: Vec<Profile>,
}

impl Catalog {
    pub fn create(profiles: Vec<Profile>) -> Self {
        Self {
            count: profiles.len(),
            items: profiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::models::ProfileInfo;

    fn document(username: &str) -> Document {
        Document::parse(username, "topics: [backend]\nlanguages: [en]\n").unwrap()
    }

    fn info() -> ProfileInfo {
        ProfileInfo {
            name: Some("Scraped Name".to_string()),
            bio: Some("Scraped bio".to_string()),
            email: None,
            avatar_url: "https://example.com/avatar.png".to_string(),
            location: Some("Prague".to_string()),
            linkedin_url: None,
            projects: vec![],
        }
    }

    fn summary(username: &str) -> Summary {
        Summary {
            username: username.to_string(),
            error: None,
            outcomes: vec![],
            info: Some(info()),
        }
    }

    fn outcome(status: Status, message: &str) -> Outcome {
        Outcome {
            status,
            message: message.to_string(),
            docs_url: "https://example.com/docs".to_string(),
        }
    }

    #[test]
    fn test_document_fields_win_over_scraped() {
        let mut doc = document("alice");
        doc.name = Some("Alice".to_string());
        let profile = Profile::create(doc, summary("alice")).unwrap();

        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.bio, Some("Scraped bio".to_string()));
        assert_eq!(profile.location, Some("Prague".to_string()));
    }

    #[test]
    fn test_name_falls_back_to_username() {
        let mut s = summary("alice");
        s.info.as_mut().unwrap().name = None;
        let profile = Profile::create(document("alice"), s).unwrap();
        assert_eq!(profile.name, "alice");
    }

    #[test]
    fn test_issues_keep_only_warnings_and_errors() {
        let mut s = summary("alice");
        s.outcomes = vec![
            outcome(Status::Done, "bio present"),
            outcome(Status::Warning, "no pins"),
            outcome(Status::Info, "note"),
        ];
        let profile = Profile::create(document("alice"), s).unwrap();

        assert_eq!(profile.issues.len(), 1);
        assert_eq!(profile.issues[0].message, "no pins");
        assert!(profile.is_ready);
    }

    #[test]
    fn test_error_outcome_makes_profile_not_ready() {
        let mut s = summary("alice");
        s.outcomes = vec![outcome(Status::Error, "no readme")];
        let profile = Profile::create(document("alice"), s).unwrap();
        assert!(!profile.is_ready);
    }

    #[test]
    fn test_projects_filtered_and_sorted_by_priority() {
        let mut s = summary("alice");
        s.info.as_mut().unwrap().projects = vec![
            ProjectInfo {
                name: "later".to_string(),
                url: "https://github.com/alice/later".to_string(),
                priority: 1,
            },
            ProjectInfo {
                name: "ignored".to_string(),
                url: "https://github.com/alice/ignored".to_string(),
                priority: 2,
            },
            ProjectInfo {
                name: "first".to_string(),
                url: "https://github.com/alice/first".to_string(),
                priority: 0,
            },
        ];
        let profile = Profile::create(document("alice"), s).unwrap();

        let names: Vec<&str> = profile.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "later"]);
    }

    #[test]
    fn test_rejects_error_summary() {
        let mut s = summary("alice");
        s.error = Some("boom".to_string());
        assert!(Profile::create(document("alice"), s).is_err());
    }

    #[test]
    fn test_rejects_missing_info() {
        let mut s = summary("alice");
        s.info = None;
        assert!(Profile::create(document("alice"), s).is_err());
    }

    #[test]
    fn test_rejects_username_mismatch() {
        assert!(Profile::create(document("alice"), summary("bob")).is_err());
    }
}
