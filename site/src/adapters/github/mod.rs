//! GitHub adapter
//!
//! Lists releases from the GitHub REST API.

pub mod client;

pub use client::GithubReleaseClient;
