use crate::domain::tag_name;
use crate::error::{Result, SyncStep, TagSyncError};
use crate::git::GitDriver;
use std::path::Path;
use std::sync::Mutex;

/// Mock driver for testing without real git operations.
///
/// Tracks the working-copy state in memory and can be told to fail a
/// specific sub-operation to exercise the sync error paths.
pub struct MockDriver {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    remote_tags: Vec<String>,
    cloned: bool,
    checked_out: Option<String>,
    clone_count: usize,
    fetch_count: usize,
    fail_step: Option<SyncStep>,
}

impl MockDriver {
    /// Create an empty mock with no remote tags
    pub fn new() -> Self {
        MockDriver {
            state: Mutex::new(MockState::default()),
        }
    }

    /// Create a mock whose remote advertises the given tag refs
    pub fn with_remote_tags(tags: &[&str]) -> Self {
        let driver = Self::new();
        driver.state.lock().unwrap().remote_tags = tags.iter().map(|s| s.to_string()).collect();
        driver
    }

    /// Add a tag ref to the simulated remote
    pub fn add_remote_tag(&self, tag: impl Into<String>) {
        self.state.lock().unwrap().remote_tags.push(tag.into());
    }

    /// Make the named sub-operation fail until [Self::clear_failure]
    pub fn fail_on(&self, step: SyncStep) {
        self.state.lock().unwrap().fail_step = Some(step);
    }

    /// Restore normal operation
    pub fn clear_failure(&self) {
        self.state.lock().unwrap().fail_step = None;
    }

    /// Tag currently checked out, if any
    pub fn checked_out(&self) -> Option<String> {
        self.state.lock().unwrap().checked_out.clone()
    }

    /// Whether a clone has completed
    pub fn is_cloned(&self) -> bool {
        self.state.lock().unwrap().cloned
    }

    pub fn clone_count(&self) -> usize {
        self.state.lock().unwrap().clone_count
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetch_count
    }

    fn fail_if_requested(state: &MockState, step: SyncStep) -> Result<()> {
        if state.fail_step == Some(step) {
            return Err(TagSyncError::Git(git2::Error::from_str(&format!(
                "simulated {} failure",
                step
            ))));
        }
        Ok(())
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GitDriver for MockDriver {
    fn list_remote_tags(&self, _url: &str) -> Result<Vec<String>> {
        Ok(self.state.lock().unwrap().remote_tags.clone())
    }

    fn is_work_tree(&self, _path: &Path) -> bool {
        self.state.lock().unwrap().cloned
    }

    fn clone_repo(&self, _url: &str, _path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::fail_if_requested(&state, SyncStep::Clone)?;
        state.cloned = true;
        state.clone_count += 1;
        Ok(())
    }

    fn fetch_tags(&self, _path: &Path, _remote: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::fail_if_requested(&state, SyncStep::Fetch)?;
        state.fetch_count += 1;
        Ok(())
    }

    fn checkout(&self, _path: &Path, tag: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        Self::fail_if_requested(&state, SyncStep::Checkout)?;

        if !state.cloned {
            return Err(TagSyncError::Git(git2::Error::from_str(
                "not a git repository",
            )));
        }

        let known = state.remote_tags.iter().any(|t| tag_name(t) == tag);
        if !known {
            return Err(TagSyncError::Git(git2::Error::from_str(&format!(
                "reference 'refs/tags/{}' not found",
                tag
            ))));
        }

        state.checked_out = Some(tag.to_string());
        Ok(())
    }
}
