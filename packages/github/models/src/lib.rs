#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod graphql;
pub mod rest;

pub use graphql::{
    Actor, AutoMergeRequest, Connection, FieldRef, GraphQlError, GraphQlRequest, GraphQlResponse,
    LabelNode, NodeData, ProjectField, ProjectFieldValue, ProjectItem, ProjectRef,
    PullRequestNode, RateLimit, Viewer, ViewerData,
};
pub use rest::{ApiErrorBody, SimpleUser};
