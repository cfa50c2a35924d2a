//! Repository location from the environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GitResult;
use crate::repository::GitRepository;

/// Environment variable naming the repository (object store) directory.
pub const GIT_DIR: &str = "GIT_DIR";
/// Environment variable naming the working tree directory.
pub const GIT_WORK_TREE: &str = "GIT_WORK_TREE";

/// Where to find the repository.
///
/// With a `git_dir` the repository is opened exactly there; otherwise it
/// is discovered upwards from `start`. The work tree is carried along for
/// diagnostics only: objects and refs all live under the git dir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryLocation {
    pub git_dir: Option<PathBuf>,
    pub work_tree: Option<PathBuf>,
    pub start: PathBuf,
}

impl Default for RepositoryLocation {
    fn default() -> Self {
        Self {
            git_dir: None,
            work_tree: None,
            start: PathBuf::from("."),
        }
    }
}

impl RepositoryLocation {
    /// Read `GIT_DIR` and `GIT_WORK_TREE` from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var_os(name))
    }

    /// Build a location from an arbitrary variable lookup. Empty values
    /// count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            git_dir: var(GIT_DIR),
            work_tree: var(GIT_WORK_TREE),
            ..Self::default()
        }
    }

    /// A location that opens `git_dir` directly.
    pub fn at(git_dir: impl AsRef<Path>) -> Self {
        Self {
            git_dir: Some(git_dir.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Open the repository this location names.
    pub fn open(&self) -> GitResult<GitRepository> {
        debug!(
            git_dir = ?self.git_dir,
            work_tree = ?self.work_tree,
            start = %self.start.display(),
            "locating repository"
        );
        match &self.git_dir {
            Some(git_dir) => GitRepository::open(git_dir),
            None => GitRepository::discover(&self.start),
        }
    }
}
