//! Repository sync: bring a local working copy to a resolved release tag.
//!
//! Two-state machine over the [GitDriver] contract:
//!
//! - `Absent` (no working copy at the path): clone fully, then check out.
//! - `Present`: fetch tag refs, then check out. Both steps run
//!   unconditionally; checking out the already-current tag is a no-op by the
//!   driver's contract, so idempotence is free and a retry after any failure
//!   reconciles whatever partial state was left behind.
//!
//! Every driver call takes the explicit path; the process working directory
//! is never consulted or changed.

use std::path::Path;

use crate::error::{Result, SyncStep, TagSyncError};
use crate::git::GitDriver;

/// What the sync had to do to reach the target tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// No working copy existed; a fresh clone was made
    Cloned,
    /// An existing working copy was fetched and moved
    Updated,
}

/// Result of a successful sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The tag the working copy is now checked out at
    pub tag: String,
    pub action: SyncAction,
}

/// Bring the working copy at `local_path` to exactly `target_tag`.
///
/// Success means the checkout completed; a fetch or clone without the
/// checkout is reported as failure. On failure the working copy is left
/// as the failing step left it, and the error names that step together
/// with the tool's diagnostic. No rollback is attempted; a subsequent
/// call re-fetches and re-checks out.
pub fn sync(
    driver: &dyn GitDriver,
    local_path: &Path,
    target_tag: &str,
    remote_url: &str,
    remote_name: &str,
) -> Result<SyncOutcome> {
    let action = if driver.is_work_tree(local_path) {
        // Fetch even when the target looks current, so a tag the clone
        // predates becomes locally known.
        driver
            .fetch_tags(local_path, remote_name)
            .map_err(|e| TagSyncError::sync(SyncStep::Fetch, e))?;
        SyncAction::Updated
    } else {
        driver
            .clone_repo(remote_url, local_path)
            .map_err(|e| TagSyncError::sync(SyncStep::Clone, e))?;
        SyncAction::Cloned
    };

    driver
        .checkout(local_path, target_tag)
        .map_err(|e| TagSyncError::sync(SyncStep::Checkout, e))?;

    Ok(SyncOutcome {
        tag: target_tag.to_string(),
        action,
    })
}
