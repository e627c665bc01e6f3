//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! tagsync needs: listing tags on a remote and driving a local working copy
//! (clone, fetch tags, checkout). The concrete implementations are:
//!
//! - [repository::Git2Driver]: the real implementation using the `git2` crate
//! - [mock::MockDriver]: an in-memory implementation for testing, with
//!   failure injection
//!
//! Code above this layer depends on the [GitDriver] trait rather than a
//! concrete implementation. Every method takes explicit paths; no
//! implementation may change the process working directory.

pub mod mock;
pub mod repository;

pub use mock::MockDriver;
pub use repository::Git2Driver;

use crate::error::Result;
use std::path::Path;

/// Narrow contract over a version-control tool.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result] and map underlying failures (like `git2::Error`)
/// to [crate::error::TagSyncError] variants; the sync layer re-labels them
/// with the failing step.
pub trait GitDriver: Send + Sync {
    /// List raw tag-reference names advertised by a remote repository.
    ///
    /// Entries are full ref paths under "refs/tags/" (e.g.
    /// "refs/tags/v1.2.3", plus "^{}"-suffixed peeled entries for annotated
    /// tags); other refs the remote advertises (HEAD, branches) are not
    /// included. Release-pattern filtering is the resolver's job, not ours.
    fn list_remote_tags(&self, url: &str) -> Result<Vec<String>>;

    /// Whether `path` holds an openable working copy.
    fn is_work_tree(&self, path: &Path) -> bool;

    /// Clone `url` into `path`, full history and tags.
    fn clone_repo(&self, url: &str, path: &Path) -> Result<()>;

    /// Fetch tag refs from the named remote into the working copy at `path`.
    fn fetch_tags(&self, path: &Path, remote: &str) -> Result<()>;

    /// Check out the given tag in the working copy at `path`, leaving HEAD
    /// detached at the tag's commit. Checking out the already-current tag
    /// is a no-op.
    fn checkout(&self, path: &Path, tag: &str) -> Result<()>;
}
