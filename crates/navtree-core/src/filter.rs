//! Pruning a catalog down to the nodes that match a query.
//!
//! A node whose own title matches is kept whole. A branch that does not
//! match survives only through matching descendants, and then carries only
//! those. Sibling order is preserved and the input is never mutated.

use std::borrow::Cow;

use crate::matcher::Matcher;
use crate::node::{Branch, TreeNode};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// Filter a forest against `matcher`.
///
/// An inactive matcher (empty query) returns the input borrowed, so callers
/// can tell the unfiltered case apart with [`Cow::Borrowed`]. A query that
/// matches nothing yields an empty forest.
///
/// # Example
/// ```
/// use navtree_core::filter::filter_tree;
/// use navtree_core::matcher::Matcher;
/// use navtree_core::node::TreeNode;
///
/// let tree = vec![TreeNode::branch("A").child(
///     TreeNode::branch("B").child(TreeNode::leaf("c1").with_title("Line Chart")),
/// )];
/// assert_eq!(filter_tree(&tree, &Matcher::literal("Line")).as_ref(), tree.as_slice());
/// assert!(filter_tree(&tree, &Matcher::literal("Bar")).is_empty());
/// ```
#[must_use]
pub fn filter_tree<'a>(tree: &'a [TreeNode], matcher: &Matcher) -> Cow<'a, [TreeNode]> {
    if !matcher.is_active() {
        return Cow::Borrowed(tree);
    }

    #[cfg(feature = "tracing")]
    let filter_start = Instant::now();
    #[cfg(feature = "tracing")]
    let nodes_in = crate::node::forest_node_count(tree);
    #[cfg(feature = "tracing")]
    let filter_span = tracing::debug_span!(
        "navtree.filter",
        nodes_in,
        nodes_out = tracing::field::Empty,
        filter_duration_us = tracing::field::Empty,
    );
    #[cfg(feature = "tracing")]
    let _filter_guard = filter_span.enter();

    let filtered = filter_forest(tree, matcher);

    #[cfg(feature = "tracing")]
    {
        let elapsed_us = filter_start.elapsed().as_micros() as u64;
        filter_span.record("nodes_out", crate::node::forest_node_count(&filtered));
        filter_span.record("filter_duration_us", elapsed_us);
    }

    Cow::Owned(filtered)
}

/// Filter a single node. `None` when nothing in it matches.
#[must_use]
pub fn filter_node(node: &TreeNode, matcher: &Matcher) -> Option<TreeNode> {
    if !matcher.is_active() || matcher.is_match(node.title()) {
        return Some(node.clone());
    }
    match node {
        TreeNode::Leaf(_) => None,
        TreeNode::Branch(branch) => filter_branch(branch, matcher),
    }
}

fn filter_branch(branch: &Branch, matcher: &Matcher) -> Option<TreeNode> {
    let children = filter_forest(branch.children(), matcher);
    if children.is_empty() {
        return None;
    }
    Some(TreeNode::Branch(branch.with_filtered_children(children)))
}

fn filter_forest(nodes: &[TreeNode], matcher: &Matcher) -> Vec<TreeNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, matcher))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{MatchMode, SearchConfig};
    use crate::node::leaf_ids;
    #[cfg(feature = "tracing")]
    use std::sync::{Arc, Mutex};
    #[cfg(feature = "tracing")]
    use tracing::Subscriber;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::Layer;
    #[cfg(feature = "tracing")]
    use tracing_subscriber::layer::{Context, SubscriberExt};

    fn catalog() -> Vec<TreeNode> {
        vec![
            TreeNode::branch("charts")
                .with_title("Charts")
                .child(
                    TreeNode::branch("line")
                        .with_title("Line")
                        .child(TreeNode::leaf("line-basic").with_title("Basic Line"))
                        .child(TreeNode::leaf("line-area").with_title("Area Chart")),
                )
                .child(
                    TreeNode::branch("bar")
                        .with_title("Bar")
                        .child(TreeNode::leaf("bar-stacked").with_title("Stacked Bar Chart"))
                        .child(TreeNode::leaf("bar-basic").with_title("Basic Bar")),
                ),
            TreeNode::branch("maps")
                .with_title("Maps")
                .child(TreeNode::leaf("map-world").with_title("World")),
            TreeNode::leaf("gallery").with_title("Gallery"),
        ]
    }

    #[test]
    fn empty_query_borrows_input() {
        let tree = catalog();
        let out = filter_tree(&tree, &Matcher::inactive());
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ref(), tree.as_slice());
    }

    #[test]
    fn leaf_match_keeps_ancestor_chain_only() {
        let tree = catalog();
        let out = filter_tree(&tree, &Matcher::literal("Stacked"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id(), "charts");
        assert_eq!(out[0].children().len(), 1);
        assert_eq!(out[0].children()[0].id(), "bar");
        assert_eq!(leaf_ids(&out), vec!["bar-stacked"]);
    }

    #[test]
    fn matching_branch_title_keeps_all_children() {
        let tree = catalog();
        let out = filter_tree(&tree, &Matcher::literal("Maps"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], tree[1]);
    }

    #[test]
    fn branch_title_match_keeps_unmatched_descendants() {
        // "Line" matches the branch title and one leaf title.
        let tree = catalog();
        let out = filter_tree(&tree, &Matcher::literal("Line"));
        assert_eq!(leaf_ids(&out), vec!["line-basic", "line-area"]);
    }

    #[test]
    fn sibling_order_is_preserved() {
        let tree = catalog();
        let out = filter_tree(&tree, &Matcher::literal("Basic"));
        assert_eq!(leaf_ids(&out), vec!["line-basic", "bar-basic"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let tree = catalog();
        assert!(filter_tree(&tree, &Matcher::literal("Radar")).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let tree = catalog();
        let before = tree.clone();
        let _ = filter_tree(&tree, &Matcher::literal("Bar"));
        assert_eq!(tree, before);
    }

    #[test]
    fn untitled_nodes_only_survive_through_descendants() {
        let tree = vec![
            TreeNode::branch("anon").child(TreeNode::leaf("x").with_title("Scatter")),
            TreeNode::leaf("untitled"),
        ];
        let out = filter_tree(&tree, &Matcher::literal("Scatter"));
        assert_eq!(leaf_ids(&out), vec!["x"]);
    }

    #[test]
    fn empty_branch_survives_only_by_title() {
        let tree = vec![TreeNode::branch("e").with_title("Empty")];
        assert_eq!(filter_tree(&tree, &Matcher::literal("Emp")).len(), 1);
        assert!(filter_tree(&tree, &Matcher::literal("zzz")).is_empty());
    }

    #[test]
    fn idempotent_on_filtered_output() {
        let tree = catalog();
        let m = Matcher::literal("Chart");
        let once = filter_tree(&tree, &m).into_owned();
        let twice = filter_tree(&once, &m).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn ignore_case_mode_filters() {
        let tree = catalog();
        let m = Matcher::new("world", &SearchConfig::default().with_mode(MatchMode::IgnoreAsciiCase));
        assert_eq!(leaf_ids(&filter_tree(&tree, &m)), vec!["map-world"]);
    }

    #[test]
    fn filter_node_on_leaf() {
        let leaf = TreeNode::leaf("x").with_title("Pie");
        assert!(filter_node(&leaf, &Matcher::literal("Pie")).is_some());
        assert!(filter_node(&leaf, &Matcher::literal("Bar")).is_none());
    }

    #[cfg(feature = "tracing")]
    #[derive(Debug, Default)]
    struct FilterTraceState {
        filter_span_seen: bool,
        has_nodes_in_field: bool,
        recorded: Vec<String>,
    }

    #[cfg(feature = "tracing")]
    struct FilterTraceCapture {
        state: Arc<Mutex<FilterTraceState>>,
    }

    #[cfg(feature = "tracing")]
    impl<S> Layer<S> for FilterTraceCapture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            _id: &tracing::Id,
            _ctx: Context<'_, S>,
        ) {
            if attrs.metadata().name() != "navtree.filter" {
                return;
            }
            let mut state = self.state.lock().expect("filter trace state lock");
            state.filter_span_seen = true;
            state.has_nodes_in_field |= attrs.metadata().fields().field("nodes_in").is_some();
        }

        fn on_record(
            &self,
            id: &tracing::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if span.metadata().name() != "navtree.filter" {
                return;
            }

            struct FieldVisitor(Vec<String>);
            impl tracing::field::Visit for FieldVisitor {
                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    _value: &dyn std::fmt::Debug,
                ) {
                    self.0.push(field.name().to_owned());
                }
            }

            let mut visitor = FieldVisitor(Vec::new());
            values.record(&mut visitor);
            self.state
                .lock()
                .expect("filter trace state lock")
                .recorded
                .extend(visitor.0);
        }
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn filter_span_records_sizes_and_duration() {
        let trace_state = Arc::new(Mutex::new(FilterTraceState::default()));
        let subscriber = tracing_subscriber::registry().with(FilterTraceCapture {
            state: Arc::clone(&trace_state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);
        tracing::callsite::rebuild_interest_cache();

        let tree = catalog();
        let _ = filter_tree(&tree, &Matcher::literal("Bar"));

        tracing::callsite::rebuild_interest_cache();
        let snapshot = trace_state.lock().expect("filter trace state lock");
        assert!(snapshot.filter_span_seen, "expected navtree.filter span");
        assert!(snapshot.has_nodes_in_field, "navtree.filter missing nodes_in");
        assert!(
            snapshot.recorded.iter().any(|f| f == "nodes_out"),
            "navtree.filter did not record nodes_out"
        );
        assert!(
            snapshot.recorded.iter().any(|f| f == "filter_duration_us"),
            "navtree.filter did not record filter_duration_us"
        );
    }
}
