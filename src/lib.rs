pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod sync;
pub mod ui;

pub use error::{Result, TagSyncError};
