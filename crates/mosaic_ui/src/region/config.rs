//! Declarative region topology.
//!
//! A [`RegionConfig`] is an ordered tree of node specs consumed by a
//! generic builder. It can be written in code, parsed from a TOML layout
//! file, and validated before any tree is built. The reference topology
//! ships as the `Default` impl.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tree::{RegionId, RegionKind, RegionTree};

/// Errors that can occur while loading or validating a layout description.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Layout file could not be read.
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),

    /// Layout file is not valid TOML for this schema.
    #[error("failed to parse layout file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A node below the root declared itself a root.
    #[error("region `{0}` declares kind root below the root")]
    NestedRoot(String),

    /// A leaf carried children.
    #[error("leaf region `{0}` cannot have children")]
    LeafWithChildren(String),

    /// A group id was placed on a node kind that cannot carry one.
    #[error("region `{0}` of kind {1:?} cannot carry a group id")]
    GroupNotAllowed(String, RegionKind),
}

/// One node in a declarative layout description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Display name.
    pub name: String,
    /// Layout role.
    pub kind: RegionKind,
    /// Focus group id; only leaves and groups may carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Child specs in layout order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Creates a spec with no group and no children.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            group: None,
            children: Vec::new(),
        }
    }

    /// Sets the focus group id.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Appends child specs.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NodeSpec>) -> Self {
        self.children = children;
        self
    }
}

/// A complete layout description: a named root and its ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Root display name.
    #[serde(default = "default_root_name")]
    pub name: String,
    /// Top-level node specs, one band per entry.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_root_name() -> String {
    "Root".to_string()
}

impl RegionConfig {
    /// Parses and validates a layout description from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text is not valid TOML for this
    /// schema or the described topology is malformed.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a layout description from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "layout description loaded");
        Ok(config)
    }

    /// Checks the structural invariants of the description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a nested root, a leaf with children, or
    /// a group id on a node kind that cannot carry one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for child in &self.children {
            validate_spec(child)?;
        }
        Ok(())
    }

    /// Builds a fresh region tree from this description.
    #[must_use]
    pub fn build(&self) -> RegionTree {
        let mut tree = RegionTree::new();
        let root = tree.add_root(&self.name);
        for child in &self.children {
            build_spec(&mut tree, root, child);
        }
        tree
    }
}

fn validate_spec(spec: &NodeSpec) -> Result<(), ConfigError> {
    match spec.kind {
        RegionKind::Root => return Err(ConfigError::NestedRoot(spec.name.clone())),
        RegionKind::Leaf if !spec.children.is_empty() => {
            return Err(ConfigError::LeafWithChildren(spec.name.clone()));
        }
        RegionKind::Row if spec.group.is_some() => {
            return Err(ConfigError::GroupNotAllowed(spec.name.clone(), spec.kind));
        }
        _ => {}
    }
    for child in &spec.children {
        validate_spec(child)?;
    }
    Ok(())
}

fn build_spec(tree: &mut RegionTree, parent: RegionId, spec: &NodeSpec) {
    let id = tree.add_child(parent, spec.kind, &spec.name, spec.group.clone());
    for child in &spec.children {
        build_spec(tree, id, child);
    }
}

impl Default for RegionConfig {
    /// The reference topology: a plain row of two leaves over a row of two
    /// focus groups.
    fn default() -> Self {
        Self {
            name: default_root_name(),
            children: vec![
                NodeSpec::new("Row1", RegionKind::Row).with_children(vec![
                    NodeSpec::new("A1", RegionKind::Leaf),
                    NodeSpec::new("A2", RegionKind::Leaf),
                ]),
                NodeSpec::new("Row2", RegionKind::Row).with_children(vec![
                    NodeSpec::new("A1 Group", RegionKind::Group)
                        .with_group("A1")
                        .with_children(vec![
                            NodeSpec::new("A1B1", RegionKind::Leaf).with_group("A1"),
                            NodeSpec::new("A1B2", RegionKind::Leaf).with_group("A1"),
                        ]),
                    NodeSpec::new("A2 Group", RegionKind::Group)
                        .with_group("A2")
                        .with_children(vec![
                            NodeSpec::new("A2B1", RegionKind::Leaf).with_group("A2"),
                            NodeSpec::new("A2B2", RegionKind::Leaf).with_group("A2"),
                            NodeSpec::new("A2B3", RegionKind::Leaf).with_group("A2"),
                        ]),
                ]),
            ],
        }
    }
}
