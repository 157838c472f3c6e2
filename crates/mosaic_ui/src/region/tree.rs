//! Arena-backed region tree.
//!
//! Nodes are stored in one flat arena and addressed by copyable
//! [`RegionId`] handles; parent and child relations are index lookups,
//! never ownership edges. A rebuild replaces the whole arena.

use serde::{Deserialize, Serialize};

use crate::layout::Rect;

/// Produces unique string identifiers per logical name.
///
/// Identifiers are `"{prefix}#{n}"` with a monotonically increasing
/// counter; they are never reused within one generator. Each rebuilt tree
/// carries a fresh generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    /// Creates a generator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique identifier for the given prefix.
    pub fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}#{}", self.counter);
        self.counter += 1;
        id
    }
}

/// Handle addressing one node inside a [`RegionTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(usize);

impl RegionId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What role a region plays in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Tree root; children stack as horizontal bands.
    Root,
    /// A band; children split into equal-width columns.
    Row,
    /// A logical grouping; splits columns exactly like a row.
    Group,
    /// A terminal cell; the only kind that takes hover and clicks.
    Leaf,
}

impl RegionKind {
    /// Returns true for terminal cells.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        self == Self::Leaf
    }
}

/// One region record inside the arena.
#[derive(Debug, Clone)]
pub struct RegionNode {
    /// Unique string identifier.
    pub id: String,
    /// Display name, drawn as the cell label.
    pub name: String,
    /// Layout role.
    pub kind: RegionKind,
    /// Geometry, overwritten by every layout pass.
    pub rect: Rect,
    /// Mouse-over state, leaves only.
    pub hovered: bool,
    /// Focus state, set by the click fan-out.
    pub focused: bool,
    /// Focus group this node belongs to, if any.
    pub group: Option<String>,
    /// Parent handle; `None` for the root. Upward queries only.
    pub parent: Option<RegionId>,
    /// Child handles in layout order.
    children: Vec<RegionId>,
}

impl RegionNode {
    fn new(id: String, name: String, kind: RegionKind) -> Self {
        Self {
            id,
            name,
            kind,
            rect: Rect::ZERO,
            hovered: false,
            focused: false,
            group: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena of region nodes with exactly one root.
#[derive(Debug, Default)]
pub struct RegionTree {
    nodes: Vec<RegionNode>,
    root: Option<RegionId>,
    ids: IdGenerator,
}

impl RegionTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the root node, discarding any existing tree content.
    pub fn add_root(&mut self, name: &str) -> RegionId {
        self.nodes.clear();
        self.nodes
            .push(RegionNode::new("root".to_string(), name.to_string(), RegionKind::Root));
        let root = RegionId(0);
        self.root = Some(root);
        root
    }

    /// Adds a child region under `parent` and returns its handle.
    pub fn add_child(
        &mut self,
        parent: RegionId,
        kind: RegionKind,
        name: &str,
        group: Option<String>,
    ) -> RegionId {
        let id = RegionId(self.nodes.len());
        let mut node = RegionNode::new(self.ids.next_id(name), name.to_string(), kind);
        node.parent = Some(parent);
        node.group = group;
        self.nodes.push(node);

        if let Some(parent_node) = self.nodes.get_mut(parent.index()) {
            parent_node.children.push(id);
        }
        id
    }

    /// Returns the root handle, if a root has been installed.
    #[must_use]
    pub fn root(&self) -> Option<RegionId> {
        self.root
    }

    /// Gets a node by handle.
    #[must_use]
    pub fn get(&self, id: RegionId) -> Option<&RegionNode> {
        self.nodes.get(id.index())
    }

    /// Gets mutable access to a node.
    #[must_use]
    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut RegionNode> {
        self.nodes.get_mut(id.index())
    }

    /// Returns the children of a node in layout order.
    #[must_use]
    pub fn children(&self, id: RegionId) -> &[RegionId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |node| node.children.as_slice())
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all node handles in pre-order: parent before children,
    /// left to right among siblings.
    pub fn iter_dfs(&self) -> impl Iterator<Item = RegionId> + '_ {
        RegionDfsIterator {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Finds the first node whose string identifier matches, in pre-order.
    #[must_use]
    pub fn find(&self, target_id: &str) -> Option<RegionId> {
        self.iter_dfs()
            .find(|id| self.get(*id).is_some_and(|node| node.id == target_id))
    }

    /// Finds the first node with the given display name, in pre-order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<RegionId> {
        self.iter_dfs()
            .find(|id| self.get(*id).is_some_and(|node| node.name == name))
    }
}

/// Depth-first iterator over the region tree.
struct RegionDfsIterator<'a> {
    tree: &'a RegionTree,
    stack: Vec<RegionId>,
}

impl Iterator for RegionDfsIterator<'_> {
    type Item = RegionId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're visited left-to-right.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }

        Some(id)
    }
}
