//! Latest-release selection over a remote tag listing.
//!
//! Pure transform: no I/O, no side effects. Fetching the listing is the
//! git driver's job (see [crate::git::GitDriver::list_remote_tags]).

use crate::domain::{tag_name, ReleaseTag};
use crate::error::{Result, TagSyncError};

/// Select the single highest stable release tag from a remote tag listing.
///
/// Each entry may be a full ref path ("refs/tags/v1.2.3"); only the final
/// path segment is considered. Entries that do not match the release
/// pattern are discarded before comparison. Ordering is numeric over
/// (major, minor, patch), so "v10.0.0" beats "v9.9.9". Duplicate triples
/// are semantically equal; the first seen wins.
///
/// # Errors
/// [TagSyncError::NoMatchingVersion] when no entry survives filtering.
pub fn resolve_latest(tag_refs: &[String]) -> Result<ReleaseTag> {
    let mut best: Option<ReleaseTag> = None;

    for raw in tag_refs {
        let Some(candidate) = ReleaseTag::parse(tag_name(raw)) else {
            continue;
        };

        match &best {
            Some(current) if candidate.version <= current.version => {}
            _ => best = Some(candidate),
        }
    }

    best.ok_or(TagSyncError::NoMatchingVersion)
}
