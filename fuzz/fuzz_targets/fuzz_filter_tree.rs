#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use navtree_core::filter::filter_tree;
use navtree_core::highlight::{Highlight, split_by_match};
use navtree_core::matcher::{MatchMode, Matcher, SearchConfig};
use navtree_core::node::TreeNode;
use navtree_core::path::resolve_ancestors;

#[derive(Debug, Arbitrary)]
enum Shape {
    Leaf(Option<String>),
    Branch(Option<String>, Vec<Shape>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    roots: Vec<Shape>,
    query: String,
    ignore_case: bool,
    trim: bool,
}

fn build(shapes: &[Shape], depth: usize, next: &mut usize) -> Vec<TreeNode> {
    shapes
        .iter()
        .map(|shape| {
            *next += 1;
            match shape {
                Shape::Leaf(title) => {
                    let node = TreeNode::leaf(format!("l{next}"));
                    title.iter().fold(node, |n, t| n.with_title(t.clone()))
                }
                Shape::Branch(title, children) => {
                    let node = TreeNode::branch(format!("b{next}"));
                    let node = title.iter().fold(node, |n, t| n.with_title(t.clone()));
                    // Cap depth to keep recursion bounded.
                    if depth < 16 {
                        node.with_children(build(children, depth + 1, next))
                    } else {
                        node
                    }
                }
            }
        })
        .collect()
}

fn collect_leaves(tree: &[TreeNode], out: &mut Vec<String>) {
    for node in tree {
        node.walk(&mut |n, _| {
            if n.is_leaf() {
                out.push(n.id().to_owned());
            }
        });
    }
}

fuzz_target!(|input: Input| {
    let mut next = 0;
    let tree = build(&input.roots, 0, &mut next);
    let mode = if input.ignore_case {
        MatchMode::IgnoreAsciiCase
    } else {
        MatchMode::Literal
    };
    let config = SearchConfig::default()
        .with_mode(mode)
        .with_trim_query(input.trim);
    let matcher = Matcher::new(&input.query, &config);

    let filtered = filter_tree(&tree, &matcher).into_owned();
    let again = filter_tree(&filtered, &matcher).into_owned();
    assert_eq!(filtered, again, "filter is not idempotent");

    let mut kept = Vec::new();
    collect_leaves(&filtered, &mut kept);
    for id in &kept {
        let path = resolve_ancestors(&filtered, id);
        assert_eq!(path.last(), Some(id), "path must end in the leaf");
    }

    for root in &filtered {
        root.walk(&mut |node, _| {
            if let Some(title) = node.title() {
                if let Highlight::Split { prefix, matched, suffix } = split_by_match(title, &matcher) {
                    assert_eq!(format!("{prefix}{matched}{suffix}"), title);
                }
            }
        });
    }
});
