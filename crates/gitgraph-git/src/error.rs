use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or opening a repository.
#[derive(Debug, Error)]
pub enum GitError {
    /// `GIT_DIR` (or an explicit path) does not hold a usable repository.
    #[error("cannot open repository at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: Box<gix::open::Error>,
    },

    /// No repository contains the starting directory.
    #[error("not a git repository (or any parent up to the filesystem root): {path}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: Box<gix::discover::Error>,
    },
}

pub type GitResult<T> = std::result::Result<T, GitError>;
