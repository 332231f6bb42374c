//! Resolving the branches that lead to a selected leaf.

use crate::node::TreeNode;

/// Root-to-leaf identifier path to the leaf `target`, leaf included.
///
/// The search is depth-first in sibling order and only leaves are compared
/// against `target`; the first hit wins. Returns an empty vec when no leaf has
/// that identifier.
///
/// Resolve against the tree that is actually displayed (already filtered),
/// otherwise ancestors of a pruned leaf would be requested open.
///
/// # Example
/// ```
/// use navtree_core::node::TreeNode;
/// use navtree_core::path::resolve_ancestors;
///
/// let tree = vec![TreeNode::branch("A").child(
///     TreeNode::branch("B").child(TreeNode::leaf("c1").with_title("Line Chart")),
/// )];
/// assert_eq!(resolve_ancestors(&tree, "c1"), vec!["A", "B", "c1"]);
/// assert!(resolve_ancestors(&tree, "zzz").is_empty());
/// ```
#[must_use]
pub fn resolve_ancestors(tree: &[TreeNode], target: &str) -> Vec<String> {
    let mut path = Vec::new();
    if resolve_into(tree, target, &mut path) {
        path.into_iter().map(str::to_owned).collect()
    } else {
        Vec::new()
    }
}

/// Branch identifiers on the path to `target`, without the leaf itself.
///
/// This is the set of branches that must be open to reveal the leaf.
#[must_use]
pub fn resolve_branch_path(tree: &[TreeNode], target: &str) -> Vec<String> {
    let mut path = resolve_ancestors(tree, target);
    path.pop();
    path
}

/// Whether a leaf with identifier `target` exists anywhere in `tree`.
#[must_use]
pub fn contains_leaf(tree: &[TreeNode], target: &str) -> bool {
    let mut scratch = Vec::new();
    resolve_into(tree, target, &mut scratch)
}

fn resolve_into<'a>(nodes: &'a [TreeNode], target: &str, path: &mut Vec<&'a str>) -> bool {
    for node in nodes {
        match node {
            TreeNode::Leaf(leaf) => {
                if leaf.id() == target {
                    path.push(leaf.id());
                    return true;
                }
            }
            TreeNode::Branch(branch) => {
                path.push(branch.id());
                if resolve_into(branch.children(), target, path) {
                    return true;
                }
                path.pop();
            }
        }
    }
    false
}
