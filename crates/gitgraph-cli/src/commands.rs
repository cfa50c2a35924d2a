use anyhow::Context;
use tracing::info;

use gitgraph_git::RepositoryLocation;
use gitgraph_refs::RefStore;
use gitgraph_render::RenderConfig;
use gitgraph_store::ObjectStore;
use gitgraph_walk::Walker;

use crate::cli::Cli;
use crate::config;

/// Run one invocation and return the rendered graph.
///
/// Nothing is written here: the caller prints the result only when the
/// whole pipeline succeeded.
pub fn run(cli: &Cli, location: &RepositoryLocation) -> anyhow::Result<String> {
    let config = config::resolve(cli)?;
    let repo = location.open()?;
    info!(
        git_dir = %repo.git_dir().display(),
        work_tree = ?repo.work_dir(),
        roots = cli.roots.len(),
        "walking repository"
    );
    generate(&repo, &repo, &cli.roots, &config)
}

/// Walk `roots` (or everything) and render the result.
pub fn generate(
    objects: &dyn ObjectStore,
    refs: &dyn RefStore,
    roots: &[String],
    config: &RenderConfig,
) -> anyhow::Result<String> {
    let state = Walker::new(objects, refs).walk(roots)?;
    let output = gitgraph_render::render(&state, config)
        .with_context(|| format!("failed to render {} output", config.format))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gitgraph_refs::{InMemoryRefStore, Reference};
    use gitgraph_store::{Blob, Commit, EntryMode, InMemoryObjectStore, Tree, TreeEntry};

    fn repo() -> (InMemoryObjectStore, InMemoryRefStore) {
        let objects = InMemoryObjectStore::new();
        let refs = InMemoryRefStore::new();
        let blob = objects.write(&Blob::new(b"readme".to_vec()).into()).unwrap();
        let tree = objects
            .write(&Tree::new(vec![TreeEntry::new(EntryMode::Regular, "README", blob)]).into())
            .unwrap();
        let commit = objects.write(&Commit::new(tree, vec![], "init").into()).unwrap();
        refs.write_ref(Reference::direct("refs/heads/main", commit)).unwrap();
        refs.write_ref(Reference::symbolic("HEAD", "refs/heads/main")).unwrap();
        (objects, refs)
    }

    #[test]
    fn generate_from_head() {
        let (objects, refs) = repo();
        let dot = generate(&objects, &refs, &["HEAD".into()], &RenderConfig::default()).unwrap();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches(" -> ").count(), 4);
        assert!(dot.contains("\"HEAD\" -> \"refs/heads/main\";"));
    }

    #[test]
    fn generate_everything() {
        let (objects, refs) = repo();
        let dot = generate(&objects, &refs, &[], &RenderConfig::default()).unwrap();
        assert!(dot.contains("group=\"commits\""));
        assert!(dot.contains("shape=\"box\""));
    }

    #[test]
    fn dangling_symbolic_ref_is_an_error() {
        let (objects, refs) = repo();
        refs.write_ref(Reference::symbolic("refs/heads/broken", "refs/heads/gone"))
            .unwrap();
        let err = generate(&objects, &refs, &["broken".into()], &RenderConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("refs/heads/gone"));
    }

    #[test]
    fn unresolvable_root_is_reported() {
        let (objects, refs) = repo();
        let err = generate(&objects, &refs, &["no-such-thing".into()], &RenderConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("no-such-thing"));
    }

    #[test]
    fn run_against_missing_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["git-graphviz"]).unwrap();
        let location = RepositoryLocation::at(dir.path().join("missing.git"));
        assert!(run(&cli, &location).is_err());
    }

    #[test]
    fn run_against_unborn_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        gix::init_bare(dir.path()).unwrap();
        let cli = Cli::try_parse_from(["git-graphviz", "HEAD"]).unwrap();
        let location = RepositoryLocation::at(dir.path());
        assert!(run(&cli, &location).is_err());
    }

    #[test]
    fn run_against_empty_repository_in_exhaustive_mode() {
        let dir = tempfile::tempdir().unwrap();
        gix::init_bare(dir.path()).unwrap();
        let cli = Cli::try_parse_from(["git-graphviz", "--format", "json"]).unwrap();
        let location = RepositoryLocation::at(dir.path());
        // HEAD points at an unborn branch, which fails resolution.
        assert!(run(&cli, &location).is_err());
    }
}
