use std::path::PathBuf;

use clap::Parser;

use gitgraph_render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "git-graphviz",
    about = "Render the object graph of a git repository as Graphviz DOT",
    long_about = "Walks commits, trees, blobs, tags and references reachable from the given \
                  roots (reference names or full object hashes) and prints a graph description. \
                  With no roots, every object and every reference in the repository is included. \
                  The repository is taken from GIT_DIR when set, otherwise discovered from the \
                  current directory.",
    version
)]
pub struct Cli {
    /// Suppress filling graph nodes with color
    #[arg(long)]
    pub no_color: bool,

    /// Suppress labeling graph nodes with git object types
    #[arg(long)]
    pub no_types: bool,

    /// Output syntax [default: dot]
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// TOML file with a [render] table
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log traversal progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Reference names or object hashes to start from
    #[arg(value_name = "ROOTS")]
    pub roots: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Dot,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Dot => OutputFormat::Dot,
            Format::Json => OutputFormat::Json,
        }
    }
}
