#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! GitHub-backed [`conform_git_provider::GitProvider`].
//!
//! Organization members come from the REST API; the pull request snapshot,
//! including `ProjectV2` field values, comes from a single GraphQL query.

mod client;
mod pagination;
pub mod pull_request;

pub use client::{GitHubProvider, TokenStatus};
pub use pagination::next_page;
