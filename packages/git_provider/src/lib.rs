#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fetcher abstraction consumed by the conformance checker.

mod error;
mod provider;

pub use error::ProviderError;
pub use provider::GitProvider;
