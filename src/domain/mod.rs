//! Domain logic - pure release-tag rules independent of git operations

pub mod tag;

pub use tag::{tag_name, ReleaseTag};
