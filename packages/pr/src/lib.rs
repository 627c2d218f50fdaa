#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod checker;
pub mod report;

pub use checker::{Checker, RunOutcome};
pub use report::{NonConformant, Reporter, TableReporter, render_table};
