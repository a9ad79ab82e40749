use serde::{Deserialize, Serialize};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Error,
    Warning,
    Info,
    Done,
}

impl Status {
    /// Display glyph used when rendering a finding on GitHub.
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Error => "🔴",
            Status::Warning => "🟠",
            Status::Info => "🔵",
            Status::Done => "🟢",
        }
    }
}

/// One finding from a profile check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
    pub docs_url: String,
}

/// A project the checker found on the profile. Lower priority means more
/// noteworthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub url: String,
    pub priority: u8,
}

/// Facts the checker scraped from the profile itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub avatar_url: String,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectInfo>,
}

/// Aggregate result of a profile check. Either `error` is set, or
/// `outcomes` holds the findings in the order the checker produced them,
/// with `info` describing the profile itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub username: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
    #[serde(default)]
    pub info: Option<ProfileInfo>,
}
