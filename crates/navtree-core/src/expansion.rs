//! Expansion set and the user-toggle transition.

use ahash::AHashSet;

use crate::classify::SecondaryClassifier;

/// Unordered set of open branch identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    keys: AHashSet<String>,
}

impl ExpansionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate identifiers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Identifiers sorted lexicographically, for stable output.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// How many open identifiers `classifier` marks secondary.
    #[must_use]
    pub fn secondary_count<C: SecondaryClassifier>(&self, classifier: &C) -> usize {
        self.iter().filter(|id| classifier.is_secondary(id)).count()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Apply a user open/close request to `previous`.
///
/// `requested` is the full set of keys the renderer wants open, in the order
/// it reports them. If any newly added key is secondary-level, the first one
/// wins: the result holds every non-secondary requested key plus that one, so
/// any other secondary branch is closed. Otherwise `requested` is accepted as-is.
///
/// If `previous` has at most one secondary key, so does the result.
///
/// # Example
/// ```
/// use navtree_core::classify::PrefixClassifier;
/// use navtree_core::expansion::{ExpansionSet, apply_toggle};
///
/// let c = PrefixClassifier::new("s-");
/// let open: ExpansionSet = ["t1", "s-line"].into_iter().collect();
/// let next = apply_toggle(&open, ["t1", "s-line", "s-bar"], &c);
/// assert_eq!(next.to_sorted_vec(), vec!["s-bar", "t1"]);
/// ```
#[must_use]
pub fn apply_toggle<C, I, S>(previous: &ExpansionSet, requested: I, classifier: &C) -> ExpansionSet
where
    C: SecondaryClassifier,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let requested: Vec<String> = requested.into_iter().map(Into::into).collect();
    let opened = requested
        .iter()
        .find(|id| !previous.contains(id) && classifier.is_secondary(id))
        .cloned();

    match opened {
        Some(opened) => requested
            .into_iter()
            .filter(|id| !classifier.is_secondary(id))
            .chain(std::iter::once(opened))
            .collect(),
        None => requested.into_iter().collect(),
    }
}

/// Collapse everything.
pub fn collapse_all(set: &mut ExpansionSet) {
    set.clear();
}
