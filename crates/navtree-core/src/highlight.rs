//! Splitting a title around the first query match for display.

use crate::matcher::Matcher;

/// A title prepared for highlighted display. Borrows from the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// No active query, or the title does not match.
    Plain(&'a str),
    /// Text before the first match, the match, and the rest.
    Split {
        prefix: &'a str,
        matched: &'a str,
        suffix: &'a str,
    },
}

impl<'a> Highlight<'a> {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    /// Segments in display order, each flagged whether it is the match.
    ///
    /// Empty segments are skipped.
    #[must_use]
    pub fn segments(&self) -> Vec<(&'a str, bool)> {
        match *self {
            Self::Plain(text) => vec![(text, false)],
            Self::Split {
                prefix,
                matched,
                suffix,
            } => [(prefix, false), (matched, true), (suffix, false)]
                .into_iter()
                .filter(|(text, _)| !text.is_empty())
                .collect(),
        }
    }
}

/// Split `title` around the first match of `matcher`.
///
/// Uses [`Matcher::find`], the same test the filter applies, so every title
/// the filter keeps on its own merit splits here.
///
/// # Example
/// ```
/// use navtree_core::highlight::{Highlight, split_by_match};
/// use navtree_core::matcher::Matcher;
///
/// assert_eq!(
///     split_by_match("Stacked Bar Chart", &Matcher::literal("Bar")),
///     Highlight::Split { prefix: "Stacked ", matched: "Bar", suffix: " Chart" },
/// );
/// assert_eq!(split_by_match("Pie", &Matcher::literal("Bar")), Highlight::Plain("Pie"));
/// ```
#[must_use]
pub fn split_by_match<'a>(title: &'a str, matcher: &Matcher) -> Highlight<'a> {
    match matcher.find(title) {
        Some(range) => Highlight::Split {
            prefix: &title[..range.start],
            matched: &title[range.clone()],
            suffix: &title[range.end..],
        },
        None => Highlight::Plain(title),
    }
}
