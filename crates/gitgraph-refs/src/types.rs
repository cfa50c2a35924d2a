//! Core reference types.

use std::fmt;

use serde::{Deserialize, Serialize};

use gitgraph_types::ObjectId;

/// What a reference points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefTarget {
    /// Points directly at an object.
    Direct(ObjectId),
    /// Points at another reference by its full name.
    Symbolic(String),
}

impl fmt::Display for RefTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(id) => write!(f, "{id}"),
            Self::Symbolic(name) => write!(f, "ref: {name}"),
        }
    }
}

/// A named reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Canonical full name (e.g. "refs/heads/main", "HEAD").
    pub name: String,
    /// The target of this reference.
    pub target: RefTarget,
}

impl Reference {
    /// A reference pointing directly at an object.
    pub fn direct(name: impl Into<String>, id: ObjectId) -> Self {
        Self {
            name: name.into(),
            target: RefTarget::Direct(id),
        }
    }

    /// A reference pointing at another reference.
    pub fn symbolic(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: RefTarget::Symbolic(target.into()),
        }
    }

    /// Returns `true` if this reference points at another reference.
    pub fn is_symbolic(&self) -> bool {
        matches!(self.target, RefTarget::Symbolic(_))
    }

    /// Short name without the `refs/heads/`, `refs/tags/` or
    /// `refs/remotes/` prefix.
    pub fn short_name(&self) -> &str {
        ["refs/heads/", "refs/tags/", "refs/remotes/"]
            .iter()
            .find_map(|prefix| self.name.strip_prefix(prefix))
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names() {
        let id = ObjectId::from_hash([0xc; 20]);
        assert_eq!(Reference::direct("refs/heads/main", id).short_name(), "main");
        assert_eq!(Reference::direct("refs/tags/v1.0.0", id).short_name(), "v1.0.0");
        assert_eq!(
            Reference::direct("refs/remotes/origin/main", id).short_name(),
            "origin/main"
        );
        assert_eq!(Reference::symbolic("HEAD", "refs/heads/main").short_name(), "HEAD");
    }

    #[test]
    fn symbolic_flag() {
        assert!(Reference::symbolic("HEAD", "refs/heads/main").is_symbolic());
        assert!(!Reference::direct("refs/heads/main", ObjectId::from_hash([0; 20])).is_symbolic());
    }

    #[test]
    fn target_display() {
        let target = RefTarget::Symbolic("refs/heads/main".into());
        assert_eq!(target.to_string(), "ref: refs/heads/main");
    }

    #[test]
    fn serde_roundtrip() {
        let reference = Reference::symbolic("HEAD", "refs/heads/main");
        let json = serde_json::to_string(&reference).unwrap();
        let parsed: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reference);
    }
}
