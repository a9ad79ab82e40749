use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Education level, self-declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum School {
    SecondaryUnfinished,
    Secondary,
    UniversityUnfinished,
    University,
    ItSecondaryUnfinished,
    ItSecondary,
    ItUniversityUnfinished,
    ItUniversity,
}

/// Area or technology a person wants to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    // General areas
    Frontend,
    Backend,
    Fullstack,
    Mobile,

    // Mobile technologies
    Swift,
    Kotlin,
    Flutter,
    Android,

    // Backend technologies
    Python,
    Java,
    Csharp,

    // Frontend technologies
    Typescript,
    React,
    Vue,
    Angular,
}

/// A hand-written profile document, one YAML file per person. The file stem
/// is the GitHub username.
#[derive(Debug, Clone)]
pub struct Document {
    pub username: String,
    pub github_url: String,
    pub discord_id: Option<i64>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub topics: BTreeSet<Topic>,
    pub domains: Vec<String>,
    pub experience: BTreeSet<String>,
    pub secondary_school: Option<School>,
    pub university: Option<School>,
    pub languages: Vec<String>,
}

// The YAML carries everything except the username, which comes from the
// file name. Unknown keys are schema violations.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentData {
    #[serde(default)]
    discord_id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    location: Option<String>,
    topics: BTreeSet<Topic>,
    #[serde(default)]
    domains: Vec<String>,
    #[serde(default)]
    experience: BTreeSet<String>,
    #[serde(default)]
    secondary_school: Option<School>,
    #[serde(default)]
    university: Option<School>,
    languages: Vec<String>,
}

impl Document {
    pub fn parse(username: &str, yaml_text: &str) -> Result<Self> {
        let data: DocumentData = serde_yaml::from_str(yaml_text)
            .map_err(|e| AppError::Catalog(format!("Invalid document for {username}: {e}")))?;

        Ok(Self {
            username: username.to_string(),
            github_url: format!("https://github.com/{username}"),
            discord_id: data.discord_id,
            name: data.name,
            bio: data.bio,
            email: data.email,
            location: data.location,
            topics: data.topics,
            domains: data.domains,
            experience: data.experience,
            secondary_school: data.secondary_school,
            university: data.university,
            languages: data.languages,
        })
    }
}
