#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod member;
pub mod pr;

pub use member::Member;
pub use pr::{DEPENDABOT_LOGIN, Fields, PullRequest};
