//! Post model

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::helpers::parse_date;

/// A single front-matter value: a scalar string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    /// Scalar view of the value; lists have no scalar form
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

/// Ordered front-matter mapping, in document order
pub type Metadata = IndexMap<String, MetaValue>;

/// A blog post: parsed front-matter plus the markdown body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Front-matter fields
    pub metadata: Metadata,

    /// Raw markdown body (front-matter stripped)
    pub body: String,
}

impl Post {
    /// Create a post from already parsed parts
    pub fn new(metadata: Metadata, body: impl Into<String>) -> Self {
        Self {
            metadata,
            body: body.into(),
        }
    }

    /// Scalar metadata field, or "" when absent or list-valued
    pub fn field(&self, key: &str) -> &str {
        self.metadata
            .get(key)
            .and_then(MetaValue::as_str)
            .unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.field("title")
    }

    pub fn author(&self) -> &str {
        self.field("author")
    }

    pub fn excerpt(&self) -> &str {
        self.field("excerpt")
    }

    /// Slug declared in the front-matter, if any
    pub fn slug(&self) -> Option<&str> {
        self.metadata
            .get("slug")
            .and_then(MetaValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Post tags. A scalar `tags: foo` counts as a single tag.
    pub fn tags(&self) -> &[String] {
        match self.metadata.get("tags") {
            Some(MetaValue::List(tags)) => tags,
            Some(MetaValue::Text(tag)) if !tag.is_empty() => std::slice::from_ref(tag),
            _ => &[],
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Publication date, if present and parseable
    pub fn date(&self) -> Option<NaiveDateTime> {
        parse_date(self.field("date"))
    }

    /// Estimated reading time in whole minutes, never less than one
    pub fn reading_time(&self, words_per_minute: usize) -> usize {
        let words = self.body.split_whitespace().count();
        words.div_ceil(words_per_minute.max(1)).max(1)
    }
}
