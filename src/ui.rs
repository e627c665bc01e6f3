use crate::sync::{SyncAction, SyncOutcome};

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_resolved_tag(url: &str, tag: &str) {
    println!("\n\x1b[1mLatest release of {}:\x1b[0m", url);
    println!("  \x1b[32m{}\x1b[0m", tag);
}

pub fn display_sync_outcome(outcome: &SyncOutcome, path: &std::path::Path) {
    match outcome.action {
        SyncAction::Cloned => display_success(&format!(
            "Cloned into {} and checked out {}",
            path.display(),
            outcome.tag
        )),
        SyncAction::Updated => display_success(&format!(
            "Updated {} to {}",
            path.display(),
            outcome.tag
        )),
    }
}
