//! Sidebar state container.
//!
//! [`ExpansionController`] owns the catalog, the current query, the current
//! selection, and the set of open branches. Hosts push events into it (one
//! method per event) and read back the displayed tree and the open set.
//!
//! Selection and query changes replace the open set with exactly the branches
//! on the path to the selected leaf in the displayed tree. Branches the user
//! opened by hand are closed by those events. Pushing the current selection
//! or query again is not a change and leaves the open set alone. User toggles
//! go through [`apply_toggle`], which keeps at most one secondary-level branch
//! open.
//!
//! # Example
//! ```
//! use navtree::controller::{ControllerConfig, ExpansionController};
//! use navtree_core::classify::DepthClassifier;
//! use navtree_core::node::TreeNode;
//!
//! let catalog = vec![TreeNode::branch("A").child(
//!     TreeNode::branch("B").child(TreeNode::leaf("c1").with_title("Line Chart")),
//! )];
//! let mut sider =
//!     ExpansionController::new(catalog, DepthClassifier::default(), ControllerConfig::default());
//!
//! sider.select("c1");
//! assert_eq!(sider.expansion().to_sorted_vec(), vec!["A", "B"]);
//!
//! sider.set_query("Bar");
//! assert!(sider.displayed().is_empty());
//! assert!(sider.expansion().is_empty());
//! ```

use std::borrow::Cow;

use navtree_core::classify::{DepthClassifier, SecondaryClassifier};
use navtree_core::expansion::{self, ExpansionSet, apply_toggle};
use navtree_core::filter::filter_tree;
use navtree_core::highlight::{Highlight, split_by_match};
use navtree_core::matcher::{Matcher, SearchConfig};
use navtree_core::node::TreeNode;
use navtree_core::path::{contains_leaf, resolve_ancestors, resolve_branch_path};

/// Construction options for [`ExpansionController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Match semantics for the search box.
    pub search: SearchConfig,
    /// Selection to resolve once at construction.
    pub initial_selection: Option<String>,
    /// Query to apply at construction.
    pub initial_query: String,
}

impl ControllerConfig {
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn with_initial_selection(mut self, key: impl Into<String>) -> Self {
        self.initial_selection = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Defaults with the search section read from the environment.
    ///
    /// See [`SearchConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            search: SearchConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Why the open set was recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetReason {
    Init,
    Catalog,
    Selection,
    Query,
}

impl ResetReason {
    #[cfg(feature = "tracing")]
    fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Catalog => "catalog",
            Self::Selection => "selection",
            Self::Query => "query",
        }
    }
}

/// Holds the open-branch set and keeps it in sync with selection and query.
///
/// The classifier must mark at most one branch per root-to-leaf path as
/// secondary, otherwise a selection reset can open two. [`DepthClassifier`]
/// always does. Not checked.
#[derive(Debug, Clone)]
pub struct ExpansionController<C = DepthClassifier> {
    catalog: Vec<TreeNode>,
    /// Filtered tree; `None` while no query is active.
    filtered: Option<Vec<TreeNode>>,
    search: SearchConfig,
    query: String,
    matcher: Matcher,
    selection: Option<String>,
    classifier: C,
    expansion: ExpansionSet,
}

impl<C: SecondaryClassifier> ExpansionController<C> {
    /// Create a controller and resolve the initial selection.
    #[must_use]
    pub fn new(catalog: Vec<TreeNode>, mut classifier: C, config: ControllerConfig) -> Self {
        classifier.on_catalog(&catalog);
        let matcher = Matcher::new(&config.initial_query, &config.search);
        let mut controller = Self {
            catalog,
            filtered: None,
            search: config.search,
            query: config.initial_query,
            matcher,
            selection: config.initial_selection,
            classifier,
            expansion: ExpansionSet::new(),
        };
        controller.refilter();
        controller.reset(ResetReason::Init);
        controller
    }

    // ── Events ──────────────────────────────────────────────────────

    /// Replace the catalog wholesale.
    pub fn set_catalog(&mut self, catalog: Vec<TreeNode>) -> &ExpansionSet {
        self.classifier.on_catalog(&catalog);
        self.catalog = catalog;
        self.refilter();
        self.reset(ResetReason::Catalog);
        &self.expansion
    }

    /// The host selected a leaf. A no-op when `key` is already selected.
    pub fn select(&mut self, key: impl Into<String>) -> &ExpansionSet {
        let key = key.into();
        if self.selection.as_deref() != Some(key.as_str()) {
            self.selection = Some(key);
            self.reset(ResetReason::Selection);
        }
        &self.expansion
    }

    /// The host has no current selection.
    pub fn clear_selection(&mut self) -> &ExpansionSet {
        if self.selection.take().is_some() {
            self.reset(ResetReason::Selection);
        }
        &self.expansion
    }

    /// The search text changed. A no-op when `query` equals the current one.
    pub fn set_query(&mut self, query: impl Into<String>) -> &ExpansionSet {
        let query = query.into();
        if query != self.query {
            self.apply_query(query);
        }
        &self.expansion
    }

    /// Empty the search box; the full catalog is displayed again.
    pub fn clear_query(&mut self) -> &ExpansionSet {
        self.set_query(String::new())
    }

    /// Change match semantics, re-running the current query.
    pub fn set_search_config(&mut self, search: SearchConfig) -> &ExpansionSet {
        self.search = search;
        let query = std::mem::take(&mut self.query);
        self.apply_query(query);
        &self.expansion
    }

    /// The renderer reports the keys the user wants open.
    pub fn toggle<I, S>(&mut self, requested: I) -> &ExpansionSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = apply_toggle(&self.expansion, requested, &self.classifier);

        #[cfg(feature = "tracing")]
        {
            let evicted = self.expansion.iter().filter(|id| !next.contains(id)).count();
            tracing::debug!(
                message = "expansion.toggle",
                open = next.len(),
                evicted,
                secondary_open = next.secondary_count(&self.classifier)
            );
        }

        self.expansion = next;
        &self.expansion
    }

    /// Close every branch.
    pub fn collapse_all(&mut self) -> &ExpansionSet {
        expansion::collapse_all(&mut self.expansion);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "expansion.collapse_all");
        &self.expansion
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// The tree to render: the filtered catalog, or the catalog itself when
    /// no query is active.
    #[must_use]
    pub fn displayed(&self) -> &[TreeNode] {
        self.filtered.as_deref().unwrap_or(&self.catalog)
    }

    /// The unfiltered catalog.
    #[must_use]
    pub fn catalog(&self) -> &[TreeNode] {
        &self.catalog
    }

    #[must_use]
    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.contains(id)
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[must_use]
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.as_deref() == Some(id)
    }

    /// Whether the selected leaf survives the current query.
    #[must_use]
    pub fn is_selection_visible(&self) -> bool {
        self.selection
            .as_deref()
            .is_some_and(|key| contains_leaf(self.displayed(), key))
    }

    /// Root-to-leaf path of the selection in the displayed tree, leaf included.
    #[must_use]
    pub fn selection_path(&self) -> Vec<String> {
        self.selection
            .as_deref()
            .map(|key| resolve_ancestors(self.displayed(), key))
            .unwrap_or_default()
    }

    /// Split a title around the current query for display.
    #[must_use]
    pub fn highlight<'a>(&self, title: &'a str) -> Highlight<'a> {
        split_by_match(title, &self.matcher)
    }

    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    // ── Internals ───────────────────────────────────────────────────

    fn apply_query(&mut self, query: String) {
        self.query = query;
        self.matcher = Matcher::new(&self.query, &self.search);
        self.refilter();
        self.reset(ResetReason::Query);
    }

    fn refilter(&mut self) {
        self.filtered = match filter_tree(&self.catalog, &self.matcher) {
            Cow::Borrowed(_) => None,
            Cow::Owned(tree) => Some(tree),
        };
    }

    fn reset(&mut self, reason: ResetReason) {
        let path = self
            .selection
            .as_deref()
            .map(|key| resolve_branch_path(self.displayed(), key))
            .unwrap_or_default();
        self.expansion = path.into_iter().collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "expansion.reset",
            reason = reason.as_str(),
            open = self.expansion.len(),
            displayed_roots = self.displayed().len()
        );
        #[cfg(not(feature = "tracing"))]
        let _ = reason;
    }
}
