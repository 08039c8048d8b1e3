pub mod predict;
pub mod tree;

pub use crate::node::NodeId;
pub use tree::Tree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::errors::TreeError;
    use crate::node::{Node, NodeId};
    use crate::tree::Tree;

    /// Builds the occupation tree:
    ///
    /// ```text
    ///              x0
    ///         1 /      \ 0
    ///         x1        x2
    ///      1 /  \ 0  1 /  \ 0
    /// программист кодер посмотрим нет
    /// ```
    fn occupation_tree() -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let root = tree.add_obj(Node::internal(0), None, true).unwrap();
        let v_11 = tree.add_obj(Node::internal(1), Some(root), true).unwrap();
        let v_12 = tree.add_obj(Node::internal(2), Some(root), false).unwrap();
        tree.add_obj(Node::leaf("программист"), Some(v_11), true).unwrap();
        tree.add_obj(Node::leaf("кодер"), Some(v_11), false).unwrap();
        tree.add_obj(Node::leaf("посмотрим"), Some(v_12), true).unwrap();
        tree.add_obj(Node::leaf("нет"), Some(v_12), false).unwrap();
        (tree, root)
    }

    #[test]
    fn test_occupation_tree_predict() {
        let (tree, root) = occupation_tree();
        assert_eq!(tree.predict(root, &[1, 1, 0]).unwrap(), "программист");
        assert_eq!(tree.predict(root, &[0, 1, 0]).unwrap(), "нет");
        assert_eq!(tree.predict(root, &[0, 1, 1]).unwrap(), "посмотрим");
        assert_eq!(tree.predict(root, &[1, 0, 1]).unwrap(), "кодер");
    }

    #[test]
    fn test_occupation_tree_empty_input() {
        let (tree, root) = occupation_tree();
        assert_eq!(tree.predict(root, &[]), Err(TreeError::FeatureIndexOutOfBounds(0, 0)));
    }

    #[test]
    fn test_occupation_tree_shape() {
        let (tree, root) = occupation_tree();
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.depth(root).unwrap(), 2);
        assert_eq!(tree.n_leaves(root).unwrap(), 4);
        assert_eq!(tree.parent_of(root).unwrap(), None);
        let expected = [
            "0:[x0 == 1] yes=1,no=2",
            "      1:[x1 == 1] yes=3,no=4",
            "            3:leaf=программист",
            "            4:leaf=кодер",
            "      2:[x2 == 1] yes=5,no=6",
            "            5:leaf=посмотрим",
            "            6:leaf=нет",
        ];
        assert_eq!(tree.display(root).unwrap().lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_reattaching_does_not_replace_children() {
        let (mut tree, root) = occupation_tree();
        let v_11 = tree.node(root).unwrap().left().unwrap();
        tree.add_obj(Node::leaf("другое"), Some(v_11), true).unwrap();
        assert_eq!(tree.predict(root, &[1, 1, 0]).unwrap(), "программист");
    }

    #[test]
    fn test_prediction_does_not_mutate() {
        let (tree, root) = occupation_tree();
        let before = tree.display(root).unwrap();
        let x = vec![0, 1, 1];
        tree.predict(root, &x).unwrap();
        assert_eq!(x, vec![0, 1, 1]);
        assert_eq!(tree.display(root).unwrap(), before);
    }
}
