use crate::constants::{GO_LEFT, GO_RIGHT, LEAF_FEATURE};
use log::debug;
use std::fmt;

/// Handle to a node stored in a [`Tree`](crate::tree::Tree).
///
/// The handle remembers which tree minted it, so passing it to another
/// tree is reported as an error rather than silently reading a stranger's node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: u64,
    pub(crate) idx: usize,
}

impl NodeId {
    /// Position of the node in its tree's storage.
    pub fn index(&self) -> usize {
        self.idx
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node {} of tree {}", self.idx, self.tree)
    }
}

/// A single vertex of the decision tree.
///
/// Leaf-ness is decided by the presence of a label, which is also what
/// prediction stops on. The feature index of a leaf is not consulted.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    feature_index: i64,
    label: Option<String>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    /// Create a node with both children unset.
    ///
    /// * `feature_index` - Position of the input vector tested by this node.
    /// * `label` - Classification returned when the walk stops here.
    pub fn new(feature_index: i64, label: Option<String>) -> Self {
        Node {
            feature_index,
            label,
            left: None,
            right: None,
        }
    }

    /// Create an internal node testing `feature_index`.
    pub fn internal(feature_index: i64) -> Self {
        Node::new(feature_index, None)
    }

    /// Create a leaf carrying `label`, with the sentinel feature index.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Node::new(LEAF_FEATURE, Some(label.into()))
    }

    pub fn feature_index(&self) -> i64 {
        self.feature_index
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.label.is_some()
    }

    /// Whether the feature index is the leaf sentinel. Informational only.
    pub fn has_leaf_sentinel(&self) -> bool {
        self.feature_index == LEAF_FEATURE
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Set the left child, unless one is already set.
    ///
    /// A second write is dropped without notice to the caller.
    pub fn set_left(&mut self, node: NodeId) {
        Self::set_once(&mut self.left, node, "left");
    }

    /// Set the right child, unless one is already set.
    ///
    /// A second write is dropped without notice to the caller.
    pub fn set_right(&mut self, node: NodeId) {
        Self::set_once(&mut self.right, node, "right");
    }

    fn set_once(slot: &mut Option<NodeId>, node: NodeId, side: &str) {
        match *slot {
            Some(current) => debug!("Ignoring {} child {}, slot already holds {}.", side, node, current),
            None => *slot = Some(node),
        }
    }

    /// Get the child the walk moves to for a given feature value.
    /// `None` means the value is neither 0 nor 1.
    pub(crate) fn get_child(&self, v: i64) -> Option<Option<NodeId>> {
        match v {
            GO_LEFT => Some(self.left),
            GO_RIGHT => Some(self.right),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let child = |c: Option<NodeId>| c.map_or_else(|| "-".to_string(), |id| id.idx.to_string());
        match &self.label {
            Some(label) => write!(f, "leaf={}", label),
            None => write!(
                f,
                "[x{} == 1] yes={},no={}",
                self.feature_index,
                child(self.left),
                child(self.right)
            ),
        }
    }
}
