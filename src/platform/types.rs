/// An issue as seen by the workflow, decoupled from the API models.
#[derive(Debug, Clone)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    /// "open" or "closed".
    pub state: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl Issue {
    pub fn has_label(&self, label_name: &str) -> bool {
        self.labels.iter().any(|l| l == label_name)
    }
}
