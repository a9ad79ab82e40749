pub mod catalog;
pub mod checker;
pub mod config;
pub mod error;
pub mod platform;
pub mod workflow;
