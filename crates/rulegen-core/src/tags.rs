use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tags a rule may be categorized under.
pub const DEFAULT_TAGS: &[&str] = &[
    "authentication",
    "data-security",
    "infrastructure",
    "privacy",
    "secrets",
    "web",
];

/// The set of known tags, passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog(BTreeSet<String>);

impl Default for TagCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS.iter().copied())
    }
}

impl TagCatalog {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Tags in `tags` that the catalog does not know, in input order.
    pub fn unknown<'a, S: AsRef<str>>(&self, tags: &'a [S]) -> Vec<&'a str> {
        tags.iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_known(t))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
