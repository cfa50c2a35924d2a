//! Configuration layering: defaults, then the `--config` file, then flags.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use gitgraph_render::RenderConfig;

use crate::cli::Cli;

/// Contents of a `--config` file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub render: RenderConfig,
}

impl FileConfig {
    /// Parse a TOML config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Resolve the effective render configuration for this invocation.
pub fn resolve(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::load(path)?.render,
        None => RenderConfig::default(),
    };

    if config.font_name.trim().is_empty() {
        warn!("empty font_name in config, using the default font");
        config.font_name = RenderConfig::default().font_name;
    }

    if cli.no_color {
        config.suppress_color = true;
    }
    if cli.no_types {
        config.suppress_types = true;
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gitgraph_render::OutputFormat;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("git-graphviz").chain(args.iter().copied())).unwrap()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file_or_flags() {
        assert_eq!(resolve(&cli(&[])).unwrap(), RenderConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve(&cli(&["--no-color", "--no-types", "--format", "json"])).unwrap();
        assert!(config.suppress_color);
        assert!(config.suppress_types);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn file_values_are_applied() {
        let file = config_file(
            "[render]\nfont_name = \"Iosevka\"\nsuppress_types = true\n\n[render.palette]\ncommit = \"green\"\n",
        );
        let path = file.path().to_str().unwrap();
        let config = resolve(&cli(&["--config", path])).unwrap();
        assert_eq!(config.font_name, "Iosevka");
        assert!(config.suppress_types);
        assert_eq!(config.palette.commit, "green");
        assert_eq!(config.palette.tree, "tomato");
    }

    #[test]
    fn flags_override_file() {
        let file = config_file("[render]\nformat = \"json\"\nsuppress_color = false\n");
        let path = file.path().to_str().unwrap();
        let config = resolve(&cli(&["--config", path, "--format", "dot", "--no-color"])).unwrap();
        assert_eq!(config.format, OutputFormat::Dot);
        assert!(config.suppress_color);
    }

    #[test]
    fn empty_font_falls_back() {
        let file = config_file("[render]\nfont_name = \"\"\n");
        let path = file.path().to_str().unwrap();
        let config = resolve(&cli(&["--config", path])).unwrap();
        assert_eq!(config.font_name, "AnonymousPro");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = resolve(&cli(&["--config", "/nonexistent/graph.toml"])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = config_file("[render]\nsuppress_color = \"yes\"\n");
        let path = file.path().to_str().unwrap();
        let err = resolve(&cli(&["--config", path])).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn unknown_section_is_an_error() {
        let file = config_file("[walk]\ndepth = 3\n");
        let path = file.path().to_str().unwrap();
        assert!(resolve(&cli(&["--config", path])).is_err());
    }
}
