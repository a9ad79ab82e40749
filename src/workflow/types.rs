/// Outcome of a bot run.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Check finished; summary posted and issue closed.
    Completed,
    /// The requested profile does not exist; comment posted and issue closed.
    ProfileMissing,
    /// The issue was not actionable; nothing was touched.
    Skipped(SkipReason),
}

/// Why an issue was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    StateNotAllowed,
    MissingLabel,
    EmptyBody,
    NoTrigger,
}
