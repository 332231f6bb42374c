//! Catalog tree model.
//!
//! A catalog is an ordered sequence of [`TreeNode`]s. Each node is either a
//! [`Leaf`] (a selectable example) or a [`Branch`] (a collapsible category).
//! A branch with no children is still a branch.
//!
//! # Example
//!
//! ```
//! use navtree_core::node::TreeNode;
//!
//! let catalog = vec![TreeNode::branch("charts")
//!     .with_title("Charts")
//!     .child(TreeNode::branch("line")
//!         .child(TreeNode::leaf("line-basic").with_title("Basic Line")))
//!     .child(TreeNode::leaf("pie").with_title("Pie"))];
//!
//! assert!(catalog[0].is_branch());
//! assert_eq!(catalog[0].children().len(), 2);
//! assert_eq!(catalog[0].leaf_count(), 2);
//! ```
//!
//! # Preconditions
//!
//! Identifiers must be unique across the whole tree. Nothing in this crate
//! checks it; duplicates make expansion and selection ambiguous.

/// Pass-through attributes of a leaf. Never inspected by the algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafMeta {
    /// Thumbnail reference.
    pub screenshot: Option<String>,
    /// Whether the example is flagged as recommended.
    pub recommended: bool,
    /// Path of the example relative to the catalog root.
    pub relative_path: Option<String>,
    /// Source file name.
    pub filename: Option<String>,
}

/// A selectable example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    id: String,
    title: Option<String>,
    meta: LeafMeta,
}

impl Leaf {
    /// Identifier, also the selection key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn meta(&self) -> &LeafMeta {
        &self.meta
    }
}

/// A collapsible category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    id: String,
    title: Option<String>,
    icon: Option<String>,
    children: Vec<TreeNode>,
}

impl Branch {
    /// Identifier, also the expansion key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Icon name rendered next to the title.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Copy of this branch with its children replaced.
    pub(crate) fn with_filtered_children(&self, children: Vec<TreeNode>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            icon: self.icon.clone(),
            children,
        }
    }
}

/// A node in the catalog hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf(Leaf),
    Branch(Branch),
}

impl TreeNode {
    /// Create a leaf with the given identifier.
    #[must_use]
    pub fn leaf(id: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            id: id.into(),
            title: None,
            meta: LeafMeta::default(),
        })
    }

    /// Create a branch with the given identifier and no children.
    #[must_use]
    pub fn branch(id: impl Into<String>) -> Self {
        Self::Branch(Branch {
            id: id.into(),
            title: None,
            icon: None,
            children: Vec::new(),
        })
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = Some(title.into());
        match &mut self {
            Self::Leaf(leaf) => leaf.title = title,
            Self::Branch(branch) => branch.title = title,
        }
        self
    }

    /// Set leaf metadata. No-op on branches.
    #[must_use]
    pub fn with_meta(mut self, meta: LeafMeta) -> Self {
        if let Self::Leaf(leaf) = &mut self {
            leaf.meta = meta;
        }
        self
    }

    /// Set the branch icon. No-op on leaves.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        if let Self::Branch(branch) = &mut self {
            branch.icon = Some(icon.into());
        }
        self
    }

    /// Append a child node. No-op on leaves.
    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        if let Self::Branch(branch) = &mut self {
            branch.children.push(node);
        }
        self
    }

    /// Set children from a vec. No-op on leaves.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        if let Self::Branch(branch) = &mut self {
            branch.children = nodes;
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Branch(branch) => &branch.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.title(),
            Self::Branch(branch) => branch.title(),
        }
    }

    #[must_use]
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Children of a branch; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch(branch) => &branch.children,
        }
    }

    /// Count this node and all descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children()
            .iter()
            .fold(1usize, |acc, child| acc.saturating_add(child.node_count()))
    }

    /// Count leaves at or below this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => branch
                .children
                .iter()
                .fold(0usize, |acc, child| acc.saturating_add(child.leaf_count())),
        }
    }

    /// Visit this node and its descendants depth-first, pre-order.
    ///
    /// The callback receives each node with its depth (0 for `self`).
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a TreeNode, usize),
    {
        self.walk_at(0, f);
    }

    fn walk_at<'a, F>(&'a self, depth: usize, f: &mut F)
    where
        F: FnMut(&'a TreeNode, usize),
    {
        f(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, f);
        }
    }
}

/// Total number of nodes in a forest.
#[must_use]
pub fn forest_node_count(tree: &[TreeNode]) -> usize {
    tree.iter()
        .fold(0usize, |acc, node| acc.saturating_add(node.node_count()))
}

/// Collect the identifiers of every leaf in the forest, in display order.
#[must_use]
pub fn leaf_ids(tree: &[TreeNode]) -> Vec<&str> {
    let mut out = Vec::new();
    for node in tree {
        node.walk(&mut |n, _| {
            if n.is_leaf() {
                out.push(n.id());
            }
        });
    }
    out
}
