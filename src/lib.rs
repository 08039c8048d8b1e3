//! # binary_decision_tree
//!
//! A binary decision tree over boolean feature vectors. Every internal node
//! tests one position of the input, a 1 leads left and a 0 leads right, and
//! labelled leaves end the walk.
//!
//! ```rust
//! use binary_decision_tree::{Node, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.add_root(Node::internal(0));
//! tree.add_left(Node::leaf("yes"), root).unwrap();
//! tree.add_right(Node::leaf("no"), root).unwrap();
//!
//! assert_eq!(tree.predict(root, &[1]).unwrap(), "yes");
//! assert_eq!(tree.predict(root, &[0]).unwrap(), "no");
//! ```

// Modules
pub mod config;
pub mod constants;
pub mod errors;
pub mod node;
pub mod tree;

// Individual classes, and functions
pub use config::{ConfigIO, TreeConfig};
pub use errors::TreeError;
pub use node::{Node, NodeId};
pub use tree::Tree;
