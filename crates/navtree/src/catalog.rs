//! Loading the example catalog from the host's JSON.
//!
//! The host ships the catalog as a JSON array of items:
//!
//! ```json
//! [{ "title": "Line", "value": "line", "icon": "line", "children": [
//!     { "title": "Basic Line", "value": "line-basic",
//!       "relativePath": "line/basic.ts", "screenshot": "line-basic.png" }
//! ]}]
//! ```
//!
//! An item with a `children` array (even an empty one) is a branch. The
//! identifier is `value`, falling back to `key`. Unknown fields are ignored.
//!
//! This is the one place structure is validated: items without an identifier
//! and duplicate identifiers are rejected before the tree reaches the
//! algorithms, which assume both invariants.

use std::io::Read;

use ahash::AHashSet;
use navtree_core::node::{LeafMeta, TreeNode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog item at {path} has neither `value` nor `key`")]
    MissingIdentifier { path: String },
    #[error("duplicate catalog identifier {id:?} at {path}")]
    DuplicateIdentifier { id: String, path: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One catalog entry as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CatalogItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recommended: bool,
}

impl CatalogItem {
    /// Identifier used for selection and expansion.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.value.as_deref().or(self.key.as_deref())
    }

    /// Wire form of a node.
    #[must_use]
    pub fn from_node(node: &TreeNode) -> Self {
        match node {
            TreeNode::Leaf(leaf) => {
                let meta = leaf.meta();
                Self {
                    title: leaf.title().map(str::to_owned),
                    value: Some(leaf.id().to_owned()),
                    relative_path: meta.relative_path.clone(),
                    filename: meta.filename.clone(),
                    screenshot: meta.screenshot.clone(),
                    recommended: meta.recommended,
                    ..Self::default()
                }
            }
            TreeNode::Branch(branch) => Self {
                title: branch.title().map(str::to_owned),
                value: Some(branch.id().to_owned()),
                icon: branch.icon().map(str::to_owned),
                children: Some(branch.children().iter().map(Self::from_node).collect()),
                ..Self::default()
            },
        }
    }

    fn into_node(self, path: &str, seen: &mut AHashSet<String>) -> Result<TreeNode> {
        let Some(id) = self.identifier().map(str::to_owned) else {
            return Err(CatalogError::MissingIdentifier {
                path: path.to_owned(),
            });
        };
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateIdentifier {
                id,
                path: path.to_owned(),
            });
        }

        let node = match self.children {
            Some(children) => {
                let mut node = TreeNode::branch(id);
                if let Some(icon) = self.icon {
                    node = node.with_icon(icon);
                }
                node.with_children(convert(children, path, seen)?)
            }
            None => TreeNode::leaf(id).with_meta(LeafMeta {
                screenshot: self.screenshot,
                recommended: self.recommended,
                relative_path: self.relative_path,
                filename: self.filename,
            }),
        };
        Ok(match self.title {
            Some(title) => node.with_title(title),
            None => node,
        })
    }
}

fn convert(items: Vec<CatalogItem>, parent: &str, seen: &mut AHashSet<String>) -> Result<Vec<TreeNode>> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let path = if parent.is_empty() {
                idx.to_string()
            } else {
                format!("{parent}/{idx}")
            };
            item.into_node(&path, seen)
        })
        .collect()
}

/// A validated catalog tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    nodes: Vec<TreeNode>,
}

impl Catalog {
    /// Validate wire items into a tree.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = AHashSet::new();
        let nodes = convert(items, "", &mut seen)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "catalog.loaded",
            roots = nodes.len(),
            identifiers = seen.len()
        );
        Ok(Self { nodes })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_reader(reader)?;
        Self::from_items(items)
    }

    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<TreeNode> {
        self.nodes
    }
}

/// Wire form of a forest, e.g. a filtered tree for a web renderer.
#[must_use]
pub fn to_items(tree: &[TreeNode]) -> Vec<CatalogItem> {
    tree.iter().map(CatalogItem::from_node).collect()
}

/// Serialize a forest to the catalog JSON shape.
pub fn to_json_string(tree: &[TreeNode]) -> Result<String> {
    Ok(serde_json::to_string(&to_items(tree))?)
}
