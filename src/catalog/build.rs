use std::collections::HashSet;
use std::path::Path;

use crate::checker::ProfileChecker;
use crate::error::{AppError, Result};

use super::document::Document;
use super::profile::{Catalog, Profile};

/// Build the profile catalog: load every YAML document, run the checker
/// over each profile, merge the results and write them as one JSON file.
///
/// Profiles are checked one at a time, in username order.
pub async fn build_catalog(
    checker: &dyn ProfileChecker,
    documents_dir: &Path,
    output_path: &Path,
) -> Result<Catalog> {
    let documents = load_documents(documents_dir)?;
    if documents.is_empty() {
        return Err(AppError::Catalog(format!(
            "No profile documents found in {}",
            documents_dir.display()
        )));
    }
    tracing::info!(count = documents.len(), "Loaded profile documents");

    let mut profiles = Vec::with_capacity(documents.len());
    for document in documents {
        tracing::info!(profile_url = %document.github_url, "Checking profile");
        let summary = checker.check_profile_url(&document.github_url).await?;
        if let Some(error) = &summary.error {
            return Err(AppError::Catalog(format!(
                "Checking {} failed: {error}",
                document.username
            )));
        }
        profiles.push(Profile::create(document, summary)?);
    }

    let catalog = Catalog::create(profiles);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!(
        count = catalog.count,
        output = %output_path.display(),
        "Writing catalog"
    );
    std::fs::write(output_path, serde_json::to_string_pretty(&catalog)?)?;

    Ok(catalog)
}

/// Load all `*.yml` documents from a directory, sorted by username. The
/// lowercased file stem is the username; duplicate stems are an error.
fn load_documents(documents_dir: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    let mut seen = HashSet::new();

    for entry in std::fs::read_dir(documents_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("yml") {
            tracing::warn!(path = %path.display(), "Ignoring non-document file");
            continue;
        }
        let username = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                AppError::Catalog(format!("Invalid document file name: {}", path.display()))
            })?
            .to_lowercase();
        if !seen.insert(username.clone()) {
            return Err(AppError::Catalog(format!(
                "Duplicate profile document for {username}"
            )));
        }
        let yaml_text = std::fs::read_to_string(&path)?;
        documents.push(Document::parse(&username, &yaml_text)?);
    }

    documents.sort_by(|a, b| a.username.cmp(&b.username));
    Ok(documents)
}
