pub mod issue;
pub mod report;
pub mod trigger;
pub mod types;
