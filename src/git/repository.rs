use crate::error::Result;
use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{Direction, FetchOptions, RemoteCallbacks, Repository};
use std::path::Path;

/// Real [super::GitDriver] backed by the `git2` crate.
///
/// Holds no open repository; every call opens the working copy at the path
/// it is given, so a single driver can serve any number of checkouts and the
/// process working directory is never involved.
pub struct Git2Driver;

impl Git2Driver {
    pub fn new() -> Self {
        Git2Driver
    }
}

impl Default for Git2Driver {
    fn default() -> Self {
        Self::new()
    }
}

/// Credentials callback shared by all remote operations.
///
/// Tries SSH keys from ~/.ssh/ in order of preference, then the SSH agent,
/// then whatever default credentials git configuration provides.
fn remote_callbacks() -> RemoteCallbacks<'static> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        if allowed_types.contains(git2::CredentialType::SSH_KEY) {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            let key_paths = vec![
                format!("{}/.ssh/id_ed25519", home),
                format!("{}/.ssh/id_rsa", home),
                format!("{}/.ssh/id_ecdsa", home),
            ];

            for key_path in key_paths {
                let path = std::path::Path::new(&key_path);
                if path.exists() {
                    if let Ok(cred) =
                        git2::Cred::ssh_key(username_from_url.unwrap_or("git"), None, path, None)
                    {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git")) {
                return Ok(cred);
            }
        }

        git2::Cred::default()
    });
    callbacks
}

impl super::GitDriver for Git2Driver {
    fn list_remote_tags(&self, url: &str) -> Result<Vec<String>> {
        let mut remote = git2::Remote::create_detached(url)?;
        let connection = remote.connect_auth(Direction::Fetch, Some(remote_callbacks()), None)?;

        // The remote advertises every ref (HEAD, branches, pull refs);
        // only tag refs belong in the listing, or a branch named like a
        // version would masquerade as a release.
        let names = connection
            .list()?
            .iter()
            .filter(|head| head.name().starts_with("refs/tags/"))
            .map(|head| head.name().to_string())
            .collect();

        Ok(names)
    }

    fn is_work_tree(&self, path: &Path) -> bool {
        Repository::open(path).is_ok()
    }

    fn clone_repo(&self, url: &str, path: &Path) -> Result<()> {
        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());
        fetch_options.download_tags(git2::AutotagOption::All);

        RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(url, path)?;

        Ok(())
    }

    fn fetch_tags(&self, path: &Path, remote: &str) -> Result<()> {
        let repo = Repository::open(path)?;
        let mut remote = repo.find_remote(remote)?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());

        // Forced tag refspec so tags the clone predates become known,
        // matching `git fetch --tags --force`.
        remote.fetch(
            &["+refs/tags/*:refs/tags/*"],
            Some(&mut fetch_options),
            None,
        )?;

        Ok(())
    }

    fn checkout(&self, path: &Path, tag: &str) -> Result<()> {
        let repo = Repository::open(path)?;

        let object = repo.revparse_single(&format!("refs/tags/{}", tag))?;
        // Peel through annotated tag objects to the commit
        let commit = object.peel(git2::ObjectType::Commit)?;

        let mut checkout = CheckoutBuilder::new();
        checkout.force();
        repo.checkout_tree(&commit, Some(&mut checkout))?;
        repo.set_head_detached(commit.id())?;

        Ok(())
    }
}
