#![forbid(unsafe_code)]

//! Searchable example-catalog sidebar state.
//!
//! # Role in navtree
//! `navtree` is the stateful half: it loads the catalog the host ships
//! ([`catalog`]), and keeps the displayed tree and the set of open branches
//! in sync with the current selection and search text
//! ([`controller::ExpansionController`]). The algorithms it drives live in
//! `navtree-core` and are re-exported here.
//!
//! Rendering, routing, and loading the catalog over the network are left
//! to the host.

pub mod catalog;
pub mod controller;

pub use catalog::{Catalog, CatalogError, CatalogItem};
pub use controller::{ControllerConfig, ExpansionController};
pub use navtree_core::{
    Branch, DepthClassifier, ExpansionSet, Highlight, Leaf, LeafMeta, MatchError, MatchMode,
    Matcher, NoSecondary, PrefixClassifier, SearchConfig, SecondaryClassifier, TreeNode,
    apply_toggle, filter_node, filter_tree, resolve_ancestors, resolve_branch_path,
    split_by_match,
};
