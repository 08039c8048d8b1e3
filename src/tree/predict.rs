use super::tree::Tree;
use crate::errors::TreeError;
use crate::node::{Node, NodeId};
use log::{trace, warn};
use rayon::prelude::*;

impl Tree {
    /// Read the feature tested by `node` from `x`.
    fn feature_value(node: &Node, x: &[i64]) -> Result<(usize, i64), TreeError> {
        let feature_index = node.feature_index();
        usize::try_from(feature_index)
            .ok()
            .and_then(|i| x.get(i).map(|v| (i, *v)))
            .ok_or(TreeError::FeatureIndexOutOfBounds(feature_index, x.len()))
    }

    /// Walk from `root` until a labelled node is reached or the walk leaves
    /// the tree. Every visited node is pushed to `path` when one is given.
    fn predict_row(&self, root: NodeId, x: &[i64], mut path: Option<&mut Vec<NodeId>>) -> Result<Option<&str>, TreeError> {
        self.check_instance(root)?;
        let mut current = Some(root);
        let mut steps = 0;
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            if let Some(p) = path.as_mut() {
                p.push(node_id);
            }
            if let Some(label) = node.label() {
                return Ok(Some(label));
            }
            if steps == self.nodes.len() {
                return Err(TreeError::CycleDetected(root, steps));
            }
            steps += 1;

            let (feature, v) = Tree::feature_value(node, x)?;
            current = node.get_child(v).ok_or(TreeError::InvalidFeatureValue(feature, v))?;
            trace!("x[{}] = {}, moving from {} to {:?}.", feature, v, node_id, current);
        }
        warn!("Walk from {} left the tree after {} steps without reaching a label.", root, steps);
        Ok(None)
    }

    /// Predict the label of a single feature vector.
    ///
    /// * `root` - Node the walk starts from.
    /// * `x` - Feature vector, every tested position must hold 0 or 1.
    ///
    /// A 1 moves the walk to the left child and a 0 to the right one. The
    /// configured unknown label is returned when the walk reaches a missing child.
    pub fn predict(&self, root: NodeId, x: &[i64]) -> Result<&str, TreeError> {
        Ok(self
            .predict_row(root, x, None)?
            .unwrap_or(self.config.unknown_label.as_str()))
    }

    /// Nodes visited while predicting `x`, starting with `root`.
    pub fn decision_path(&self, root: NodeId, x: &[i64]) -> Result<Vec<NodeId>, TreeError> {
        let mut path = Vec::new();
        self.predict_row(root, x, Some(&mut path))?;
        Ok(path)
    }

    fn predict_single_threaded(&self, root: NodeId, rows: &[Vec<i64>]) -> Vec<Result<&str, TreeError>> {
        rows.iter().map(|x| self.predict(root, x)).collect()
    }

    fn predict_parallel(&self, root: NodeId, rows: &[Vec<i64>]) -> Vec<Result<&str, TreeError>> {
        rows.par_iter().map(|x| self.predict(root, x)).collect()
    }

    /// Predict every row, in parallel if the tree is configured to.
    /// A failing row does not stop the others.
    pub fn predict_batch(&self, root: NodeId, rows: &[Vec<i64>]) -> Vec<Result<&str, TreeError>> {
        if self.config.parallel {
            self.predict_parallel(root, rows)
        } else {
            self.predict_single_threaded(root, rows)
        }
    }
}
