#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fixtures shared by the conform test suites.

mod event;
mod pull_request;
mod stub;

pub use event::EventBuilder;
pub use pull_request::PullRequestBuilder;
pub use stub::StubProvider;
