use std::fmt;

use serde::{Deserialize, Serialize};

/// Output syntax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Graphviz DOT, ready for `dot -Tsvg`.
    #[default]
    Dot,
    /// The node/edge model as JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dot => f.write_str("dot"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Fill colors per node kind. Any Graphviz color name or `#rrggbb` works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub commit: String,
    pub tree: String,
    pub blob: String,
    pub tag: String,
    pub reference: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            commit: "yellowgreen".into(),
            tree: "tomato".into(),
            blob: "gold".into(),
            tag: "orchid".into(),
            reference: "lightskyblue".into(),
        }
    }
}

/// Configuration for rendering a walk.
///
/// Every field has a default, so a partial `[render]` table in a config
/// file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Leave nodes unfilled.
    pub suppress_color: bool,
    /// Label nodes with the abbreviated hash only, without the kind name.
    pub suppress_types: bool,
    /// Font applied to every node.
    pub font_name: String,
    pub palette: Palette,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            suppress_color: false,
            suppress_types: false,
            font_name: "AnonymousPro".into(),
            palette: Palette::default(),
            format: OutputFormat::Dot,
        }
    }
}

impl RenderConfig {
    /// Plain monochrome output with bare hash labels.
    pub fn plain() -> Self {
        Self {
            suppress_color: true,
            suppress_types: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RenderConfig::default();
        assert!(!c.suppress_color);
        assert!(!c.suppress_types);
        assert_eq!(c.font_name, "AnonymousPro");
        assert_eq!(c.palette.commit, "yellowgreen");
        assert_eq!(c.palette.tree, "tomato");
        assert_eq!(c.palette.blob, "gold");
        assert_eq!(c.format, OutputFormat::Dot);
    }

    #[test]
    fn plain_config() {
        let c = RenderConfig::plain();
        assert!(c.suppress_color && c.suppress_types);
        assert_eq!(c.font_name, "AnonymousPro");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: RenderConfig =
            serde_json::from_str(r#"{"suppress_types": true, "palette": {"blob": "khaki"}}"#).unwrap();
        assert!(c.suppress_types);
        assert!(!c.suppress_color);
        assert_eq!(c.palette.blob, "khaki");
        assert_eq!(c.palette.commit, "yellowgreen");
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::Dot.to_string(), "dot");
        let f: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, OutputFormat::Json);
    }
}
