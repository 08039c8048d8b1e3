/// Feature index carried by leaf nodes.
pub const LEAF_FEATURE: i64 = -1;
/// Label returned when a walk leaves the tree without reaching a leaf.
pub const UNKNOWN_LABEL: &str = "Неизвестно";
/// Feature value that sends the walk to the left child.
pub const GO_LEFT: i64 = 1;
/// Feature value that sends the walk to the right child.
pub const GO_RIGHT: i64 = 0;
