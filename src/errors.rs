//! Errors
//!
//! Custom error types used throughout the `binary_decision_tree` crate.
use crate::node::NodeId;
use thiserror::Error;

/// Errors that can occur while building or evaluating a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A handle that does not refer to a node of this tree.
    #[error("Object must be a node of this tree, but {0} was provided.")]
    NotANode(NodeId),
    /// A type-erased value that is not a `Node`.
    #[error("Object must be an instance of Node, but {0} was provided.")]
    NotANodeValue(String),
    /// First value is the feature index, second is the length of the input vector.
    #[error("Feature index {0} is out of bounds for an input vector of length {1}.")]
    FeatureIndexOutOfBounds(i64, usize),
    /// First value is the feature index, second is the value found there.
    #[error("Feature {0} has value {1}, expected 0 or 1.")]
    InvalidFeatureValue(usize, i64),
    /// A walk visited more nodes than the tree holds.
    #[error("Traversal starting at {0} revisited a node after {1} steps, the tree contains a cycle or a shared node.")]
    CycleDetected(NodeId, usize),
    /// Unable to read configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
    /// Unable to write configuration.
    #[error("Unable to write configuration: {0}")]
    UnableToWrite(String),
}
