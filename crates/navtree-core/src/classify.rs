//! Secondary-level branch classification.
//!
//! At most one secondary-level branch may be open at a time. Which branches
//! count as secondary is decided by a [`SecondaryClassifier`].

use ahash::AHashSet;

use crate::node::TreeNode;

/// Decides whether a branch identifier is secondary-level.
pub trait SecondaryClassifier {
    fn is_secondary(&self, id: &str) -> bool;

    /// Called whenever the catalog is replaced. Structural classifiers
    /// rebuild here; the default does nothing.
    fn on_catalog(&mut self, _tree: &[TreeNode]) {}
}

impl<F> SecondaryClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_secondary(&self, id: &str) -> bool {
        self(id)
    }
}

/// Structural rule: a branch is secondary iff its parent is a branch in the
/// root sequence.
///
/// Build it from the full catalog; filtering never changes a branch's depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthClassifier {
    secondary: AHashSet<String>,
}

impl DepthClassifier {
    #[must_use]
    pub fn from_tree(tree: &[TreeNode]) -> Self {
        let secondary = tree
            .iter()
            .flat_map(TreeNode::children)
            .filter(|child| child.is_branch())
            .map(|child| child.id().to_owned())
            .collect();
        Self { secondary }
    }

    /// Number of secondary-level branches known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secondary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secondary.is_empty()
    }
}

impl SecondaryClassifier for DepthClassifier {
    fn is_secondary(&self, id: &str) -> bool {
        self.secondary.contains(id)
    }

    fn on_catalog(&mut self, tree: &[TreeNode]) {
        *self = Self::from_tree(tree);
    }
}

/// Identifier-prefix rule for catalogs that encode the level in the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixClassifier {
    prefix: String,
}

impl PrefixClassifier {
    /// Prefix used by legacy example catalogs.
    pub const LEGACY_PREFIX: &'static str = "secondaryKey-";

    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self::new(Self::LEGACY_PREFIX)
    }
}

impl SecondaryClassifier for PrefixClassifier {
    fn is_secondary(&self, id: &str) -> bool {
        id.starts_with(&self.prefix)
    }
}

/// No branch is secondary; the single-open constraint is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSecondary;

impl SecondaryClassifier for NoSecondary {
    fn is_secondary(&self, _id: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<TreeNode> {
        vec![
            TreeNode::branch("T1")
                .child(TreeNode::branch("S1").child(TreeNode::branch("D1")))
                .child(TreeNode::branch("S2"))
                .child(TreeNode::leaf("leaf-under-top")),
            TreeNode::branch("T2").child(TreeNode::branch("S3")),
            TreeNode::leaf("top-leaf"),
        ]
    }

    #[test]
    fn depth_rule_marks_children_of_top_level_branches() {
        let c = DepthClassifier::from_tree(&catalog());
        assert_eq!(c.len(), 3);
        for id in ["S1", "S2", "S3"] {
            assert!(c.is_secondary(id), "{id}");
        }
        for id in ["T1", "T2", "D1", "leaf-under-top", "top-leaf"] {
            assert!(!c.is_secondary(id), "{id}");
        }
    }

    #[test]
    fn depth_rule_rebuilds_on_catalog_change() {
        let mut c = DepthClassifier::default();
        assert!(c.is_empty());
        c.on_catalog(&catalog());
        assert!(c.is_secondary("S3"));
        c.on_catalog(&[TreeNode::branch("X").child(TreeNode::branch("Y"))]);
        assert!(!c.is_secondary("S3"));
        assert!(c.is_secondary("Y"));
    }

    #[test]
    fn prefix_rule() {
        let c = PrefixClassifier::default();
        assert!(c.is_secondary("secondaryKey-line"));
        assert!(!c.is_secondary("line"));
    }

    #[test]
    fn closures_classify() {
        let c = |id: &str| id.ends_with("-2nd");
        assert!(c.is_secondary("bar-2nd"));
        assert!(!NoSecondary.is_secondary("bar-2nd"));
    }
}
