#![forbid(unsafe_code)]

//! Pure algorithms behind a searchable navigation sidebar.
//!
//! # Role in navtree
//! `navtree-core` turns a catalog tree and a query into the tree that should
//! be displayed, and a selected leaf into the branches that must be open to
//! show it. Nothing here holds state or does I/O; the stateful controller
//! lives in the `navtree` crate.
//!
//! # Pieces
//! - [`filter::filter_tree`] prunes the catalog to matching nodes, keeping
//!   ancestor chains.
//! - [`path::resolve_ancestors`] finds the root-to-leaf path of a selection.
//! - [`expansion::apply_toggle`] applies a user open/close request under the
//!   single-open rule for secondary-level branches.
//! - [`highlight::split_by_match`] splits a title around the query match.
//!
//! All of them share match semantics through [`matcher::Matcher`].

pub mod classify;
pub mod expansion;
pub mod filter;
pub mod highlight;
pub mod matcher;
pub mod node;
pub mod path;

pub use classify::{DepthClassifier, NoSecondary, PrefixClassifier, SecondaryClassifier};
pub use expansion::{ExpansionSet, apply_toggle};
pub use filter::{filter_node, filter_tree};
pub use highlight::{Highlight, split_by_match};
pub use matcher::{MatchError, MatchMode, Matcher, SearchConfig};
pub use node::{Branch, Leaf, LeafMeta, TreeNode};
pub use path::{resolve_ancestors, resolve_branch_path};
