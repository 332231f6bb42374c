//! Query matching shared by filtering and highlighting.
//!
//! A [`Matcher`] is built once per query. [`filter_tree`](crate::filter::filter_tree)
//! asks it whether a title matches and
//! [`split_by_match`](crate::highlight::split_by_match) asks it where, so a title
//! kept by the filter always yields a highlight split.
//!
//! # Example
//! ```
//! use navtree_core::matcher::{MatchMode, Matcher, SearchConfig};
//!
//! let config = SearchConfig::default().with_mode(MatchMode::IgnoreAsciiCase);
//! let matcher = Matcher::new("bar", &config);
//! assert_eq!(matcher.find("Stacked Bar Chart"), Some(8..11));
//! assert!(!Matcher::new("", &config).is_active());
//! ```

use std::fmt;
use std::ops::Range;

/// How a query is compared against titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Case-sensitive substring.
    #[default]
    Literal,
    /// ASCII case-insensitive substring. Byte offsets map 1:1 onto the title.
    IgnoreAsciiCase,
    /// Regular expression. Requires the `regex-search` feature.
    Regex,
}

impl MatchMode {
    /// Parse a mode name as used by `NAVTREE_SEARCH_MODE`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "literal" | "exact" => Some(Self::Literal),
            "ignore-case" | "ignore_case" | "insensitive" => Some(Self::IgnoreAsciiCase),
            "regex" | "re" => Some(Self::Regex),
            _ => None,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Match semantics.
    pub mode: MatchMode,
    /// Trim surrounding whitespace before matching. A blank query then
    /// disables filtering.
    pub trim_query: bool,
}

impl SearchConfig {
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_trim_query(mut self, trim: bool) -> Self {
        self.trim_query = trim;
        self
    }

    /// Create from environment configuration.
    ///
    /// Reads `NAVTREE_SEARCH_MODE` (`literal`, `ignore-case`, `regex`) and
    /// `NAVTREE_TRIM_QUERY` (`1`, `true`, or `yes`, case-insensitive).
    /// Unset or unrecognized values keep the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = get_env("NAVTREE_SEARCH_MODE")
            .and_then(|v| MatchMode::parse(&v))
            .unwrap_or_default();
        let trim_query = get_env("NAVTREE_TRIM_QUERY")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self { mode, trim_query }
    }
}

/// Failure to build a [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The query is not a valid regular expression.
    InvalidPattern { pattern: String, reason: String },
    /// Regex mode was requested without the `regex-search` feature.
    RegexUnavailable,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid search pattern {pattern:?}: {reason}")
            }
            Self::RegexUnavailable => {
                write!(f, "regex search requires the `regex-search` feature")
            }
        }
    }
}

impl std::error::Error for MatchError {}

#[derive(Debug, Clone)]
enum Kind {
    Inactive,
    Literal,
    IgnoreAsciiCase { needle_lower: String },
    #[cfg(feature = "regex-search")]
    Regex(regex::Regex),
}

/// Compiled query.
#[derive(Debug, Clone)]
pub struct Matcher {
    query: String,
    kind: Kind,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::inactive()
    }
}

impl Matcher {
    /// A matcher that filters nothing.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            query: String::new(),
            kind: Kind::Inactive,
        }
    }

    /// Case-sensitive substring matcher.
    #[must_use]
    pub fn literal(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.is_empty() {
            return Self::inactive();
        }
        Self {
            query,
            kind: Kind::Literal,
        }
    }

    /// ASCII case-insensitive substring matcher.
    #[must_use]
    pub fn ignore_ascii_case(query: impl Into<String>) -> Self {
        let query = query.into();
        if query.is_empty() {
            return Self::inactive();
        }
        let needle_lower = query.to_ascii_lowercase();
        Self {
            query,
            kind: Kind::IgnoreAsciiCase { needle_lower },
        }
    }

    /// Build a matcher, reporting patterns that cannot be compiled.
    pub fn try_new(query: &str, config: &SearchConfig) -> Result<Self, MatchError> {
        let query = if config.trim_query {
            query.trim()
        } else {
            query
        };
        if query.is_empty() {
            return Ok(Self::inactive());
        }
        match config.mode {
            MatchMode::Literal => Ok(Self::literal(query)),
            MatchMode::IgnoreAsciiCase => Ok(Self::ignore_ascii_case(query)),
            MatchMode::Regex => Self::regex(query),
        }
    }

    /// Build a matcher, falling back to literal matching when the query is
    /// not a usable pattern.
    #[must_use]
    pub fn new(query: &str, config: &SearchConfig) -> Self {
        match Self::try_new(query, config) {
            Ok(matcher) => matcher,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(message = "navtree.matcher.fallback", error = %_err);
                let query = if config.trim_query {
                    query.trim()
                } else {
                    query
                };
                Self::literal(query)
            }
        }
    }

    #[cfg(feature = "regex-search")]
    fn regex(query: &str) -> Result<Self, MatchError> {
        let re = regex::Regex::new(query).map_err(|err| MatchError::InvalidPattern {
            pattern: query.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            query: query.to_owned(),
            kind: Kind::Regex(re),
        })
    }

    #[cfg(not(feature = "regex-search"))]
    fn regex(_query: &str) -> Result<Self, MatchError> {
        Err(MatchError::RegexUnavailable)
    }

    /// Whether this matcher filters anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.kind, Kind::Inactive)
    }

    /// The query this matcher was built from (after trimming).
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Effective match mode; `None` when inactive.
    #[must_use]
    pub fn mode(&self) -> Option<MatchMode> {
        match self.kind {
            Kind::Inactive => None,
            Kind::Literal => Some(MatchMode::Literal),
            Kind::IgnoreAsciiCase { .. } => Some(MatchMode::IgnoreAsciiCase),
            #[cfg(feature = "regex-search")]
            Kind::Regex(_) => Some(MatchMode::Regex),
        }
    }

    /// Byte range of the first match in `title`.
    ///
    /// Always `None` for an inactive matcher.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<Range<usize>> {
        match &self.kind {
            Kind::Inactive => None,
            Kind::Literal => title
                .find(self.query.as_str())
                .map(|start| start..start + self.query.len()),
            Kind::IgnoreAsciiCase { needle_lower } => title
                .to_ascii_lowercase()
                .find(needle_lower.as_str())
                .map(|start| start..start + needle_lower.len()),
            #[cfg(feature = "regex-search")]
            Kind::Regex(re) => re.find(title).map(|m| m.range()),
        }
    }

    /// Whether `title` matches. Untitled nodes are searched as `""`.
    #[must_use]
    pub fn is_match(&self, title: Option<&str>) -> bool {
        self.find(title.unwrap_or("")).is_some()
    }
}
