use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tagsync::git::{Git2Driver, GitDriver};
use tagsync::{config, resolver, sync, ui, TagSyncError};

#[derive(Parser)]
#[command(
    name = "tagsync",
    about = "Pin a git-distributed tool to its latest release tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and print the latest release tag without syncing
    Latest {
        #[arg(short, long, help = "Remote repository URL")]
        url: Option<String>,
    },

    /// Resolve the latest release tag and bring the local checkout to it
    Sync {
        #[arg(short, long, help = "Remote repository URL")]
        url: Option<String>,

        #[arg(short, long, help = "Local checkout directory")]
        path: Option<PathBuf>,

        #[arg(long, help = "Remote name used for fetches in an existing checkout")]
        remote: Option<String>,

        #[arg(long, help = "Check out this tag instead of resolving the latest")]
        tag: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let driver = Git2Driver::new();

    match args.command {
        Command::Latest { url } => {
            let url = require_url(url.or(config.repository.url));
            run_latest(&driver, &url);
        }
        Command::Sync {
            url,
            path,
            remote,
            tag,
        } => {
            let url = require_url(url.or(config.repository.url));
            let path = match path.or(config.repository.path) {
                Some(p) => p,
                None => {
                    ui::display_error(
                        "No checkout path given (use --path or [repository].path in tagsync.toml)",
                    );
                    std::process::exit(1);
                }
            };
            let remote = remote.unwrap_or(config.repository.remote);
            run_sync(&driver, &url, &path, &remote, tag.as_deref());
        }
    }

    Ok(())
}

fn require_url(url: Option<String>) -> String {
    match url {
        Some(u) => u,
        None => {
            ui::display_error(
                "No repository URL given (use --url or [repository].url in tagsync.toml)",
            );
            std::process::exit(1);
        }
    }
}

fn run_latest(driver: &dyn GitDriver, url: &str) {
    let resolved = resolve_target(driver, url);
    ui::display_resolved_tag(url, &resolved);
}

fn run_sync(driver: &dyn GitDriver, url: &str, path: &Path, remote: &str, tag: Option<&str>) {
    let target = match tag {
        Some(t) => t.to_string(),
        None => resolve_target(driver, url),
    };

    ui::display_status(&format!("Syncing {} to {}", path.display(), target));
    match sync::sync(driver, path, &target, url, remote) {
        Ok(outcome) => ui::display_sync_outcome(&outcome, path),
        Err(e) => fail(e),
    }
}

/// Resolve the latest release tag advertised at `url`.
fn resolve_target(driver: &dyn GitDriver, url: &str) -> String {
    ui::display_status(&format!("Listing release tags on {}", url));
    let tags = match driver.list_remote_tags(url) {
        Ok(tags) => tags,
        Err(e) => fail(e),
    };

    match resolver::resolve_latest(&tags) {
        Ok(resolved) => resolved.name,
        Err(e) => fail(e),
    }
}

fn fail(e: TagSyncError) -> ! {
    ui::display_error(&e.to_string());
    std::process::exit(e.exit_code());
}
