mod auth;
mod client;
mod mapper;

pub use client::GitHubPlatform;
