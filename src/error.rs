use std::fmt;

use thiserror::Error;

/// Sub-operation of a repository sync that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    Clone,
    Fetch,
    Checkout,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStep::Clone => write!(f, "clone"),
            SyncStep::Fetch => write!(f, "fetch"),
            SyncStep::Checkout => write!(f, "checkout"),
        }
    }
}

/// Unified error type for tagsync operations
#[derive(Error, Debug)]
pub enum TagSyncError {
    /// No tag in the remote listing matched the release pattern.
    /// Never defaulted away: proceeding without a target version is unsafe.
    #[error("No release tag matching <marker>X.Y.Z found in remote listing")]
    NoMatchingVersion,

    /// A sync sub-operation failed. Carries which step and the underlying
    /// tool's diagnostic. The working copy is left as the failing step left
    /// it; a retry re-fetches and re-checks out.
    #[error("Sync failed during {step}: {message}")]
    Sync { step: SyncStep, message: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagsync
pub type Result<T> = std::result::Result<T, TagSyncError>;

impl TagSyncError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagSyncError::Config(msg.into())
    }

    /// Wrap a driver failure as a sync error for the given step,
    /// keeping only the underlying git diagnostic as the message.
    pub fn sync(step: SyncStep, cause: TagSyncError) -> Self {
        let message = match cause {
            TagSyncError::Git(e) => e.message().to_string(),
            other => other.to_string(),
        };
        TagSyncError::Sync { step, message }
    }

    /// Process exit code for this error. The CLI contract distinguishes
    /// resolution failures from sync failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagSyncError::NoMatchingVersion => 2,
            TagSyncError::Sync { .. } => 3,
            _ => 1,
        }
    }
}
