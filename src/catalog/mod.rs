pub mod build;
pub mod document;
pub mod profile;

pub use build::build_catalog;
