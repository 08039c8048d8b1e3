use crate::config::TreeConfig;
use crate::errors::TreeError;
use crate::node::{Node, NodeId};
use log::debug;
use std::any::{type_name, Any};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Storage for the nodes of one or more decision trees.
///
/// Nodes are owned by the tree and linked through [`NodeId`] handles. The tree
/// does not remember which node is the root, the caller keeps the handle
/// returned by [`Tree::add_root`] and passes it to prediction.
#[derive(Clone, Debug)]
pub struct Tree {
    id: u64,
    pub(crate) nodes: Vec<Node>,
    pub(crate) config: TreeConfig,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Tree::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Tree {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of nodes stored, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that `id` refers to a node of this tree.
    pub fn check_instance(&self, id: NodeId) -> Result<(), TreeError> {
        if id.tree == self.id && id.idx < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::NotANode(id))
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.check_instance(id)?;
        Ok(&self.nodes[id.idx])
    }

    /// Mutable access to a node, e.g. to set a child link by hand.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.check_instance(id)?;
        Ok(&mut self.nodes[id.idx])
    }

    /// Add a node to the tree, optionally as a child of `parent`.
    ///
    /// * `obj` - Node or leaf to add.
    /// * `parent` - Node `obj` is attached to. With `None`, `obj` is stored
    ///   without a parent and its handle is meant to be used as a root.
    /// * `left` - Attach to the left slot of `parent` if true, the right otherwise.
    ///
    /// The handle of `obj` is returned even when the parent slot was already
    /// taken and the link was dropped.
    pub fn add_obj(&mut self, obj: Node, parent: Option<NodeId>, left: bool) -> Result<NodeId, TreeError> {
        let Some(p) = parent else {
            return Ok(self.add_root(obj));
        };
        self.check_instance(p)?;
        let id = self.push(obj);
        debug!("Added {} as the {} child of {}.", id, if left { "left" } else { "right" }, p);
        let parent_node = &mut self.nodes[p.idx];
        if left {
            parent_node.set_left(id);
        } else {
            parent_node.set_right(id);
        }
        Ok(id)
    }

    /// Add a value of any type, failing unless it is a [`Node`].
    ///
    /// This is the boundary for type-erased input, the checks and
    /// behaviour are otherwise those of [`Tree::add_obj`].
    pub fn add_any<T: Any>(&mut self, obj: T, parent: Option<NodeId>, left: bool) -> Result<NodeId, TreeError> {
        let boxed: Box<dyn Any> = Box::new(obj);
        match boxed.downcast::<Node>() {
            Ok(node) => self.add_obj(*node, parent, left),
            Err(_) => Err(TreeError::NotANodeValue(type_name::<T>().to_string())),
        }
    }

    /// Add a node without a parent.
    pub fn add_root(&mut self, obj: Node) -> NodeId {
        let id = self.push(obj);
        debug!("Added {} without a parent.", id);
        id
    }

    pub fn add_left(&mut self, obj: Node, parent: NodeId) -> Result<NodeId, TreeError> {
        self.add_obj(obj, Some(parent), true)
    }

    pub fn add_right(&mut self, obj: Node, parent: NodeId) -> Result<NodeId, TreeError> {
        self.add_obj(obj, Some(parent), false)
    }

    fn push(&mut self, obj: Node) -> NodeId {
        self.nodes.push(obj);
        NodeId {
            tree: self.id,
            idx: self.nodes.len() - 1,
        }
    }

    /// Find the node whose left or right slot holds `id`.
    pub fn parent_of(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.check_instance(id)?;
        Ok(self
            .nodes
            .iter()
            .position(|n| n.left() == Some(id) || n.right() == Some(id))
            .map(|idx| NodeId { tree: self.id, idx }))
    }

    /// Visit the subtree under `root` depth first, left before right,
    /// yielding each node with its depth. Reaching a node twice, through a
    /// cycle or a second parent, is an error.
    pub(crate) fn walk(&self, root: NodeId) -> Result<Vec<(NodeId, usize)>, TreeError> {
        self.check_instance(root)?;
        let mut seen = vec![false; self.nodes.len()];
        let mut visited = Vec::new();
        let mut stack = vec![(root, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id)?;
            if seen[id.idx] {
                return Err(TreeError::CycleDetected(root, visited.len()));
            }
            seen[id.idx] = true;
            visited.push((id, depth));
            if node.is_leaf() {
                continue;
            }
            if let Some(r) = node.right() {
                stack.push((r, depth + 1));
            }
            if let Some(l) = node.left() {
                stack.push((l, depth + 1));
            }
        }
        Ok(visited)
    }

    /// Length of the longest path from `root` to a node below it.
    pub fn depth(&self, root: NodeId) -> Result<usize, TreeError> {
        Ok(self.walk(root)?.iter().map(|(_, d)| *d).max().unwrap_or(0))
    }

    /// Number of labelled nodes reachable from `root`.
    pub fn n_leaves(&self, root: NodeId) -> Result<usize, TreeError> {
        Ok(self
            .walk(root)?
            .iter()
            .filter(|(id, _)| self.nodes[id.idx].is_leaf())
            .count())
    }

    /// Render the subtree under `root`, one node per line, indented by depth.
    pub fn display(&self, root: NodeId) -> Result<String, TreeError> {
        let mut r = String::new();
        for (id, depth) in self.walk(root)? {
            r += format!("{}{}:{}\n", "      ".repeat(depth), id.idx, self.nodes[id.idx]).as_str();
        }
        Ok(r)
    }
}
