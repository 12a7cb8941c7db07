//! Query engine - tag filtering and free-text search over a post collection

use std::collections::BTreeSet;
use std::fmt;

use crate::content::Post;

/// Tag selection of the listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// The selected tag, or `None` for "all"
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            TagFilter::All => None,
            TagFilter::Tag(tag) => Some(tag),
        }
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => post.has_tag(tag),
        }
    }
}

impl From<&str> for TagFilter {
    fn from(tag: &str) -> Self {
        if tag == "all" {
            TagFilter::All
        } else {
            TagFilter::Tag(tag.to_string())
        }
    }
}

impl From<Option<&str>> for TagFilter {
    fn from(tag: Option<&str>) -> Self {
        tag.map(TagFilter::from).unwrap_or_default()
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag().unwrap_or("all"))
    }
}

/// Listing query: active tag, search text and current page.
///
/// Handlers consume the state and return the next one. Changing the tag or
/// the search text always goes back to the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub active_tag: TagFilter,
    pub search_text: String,
    pub current_page: usize,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(self, tag: impl Into<TagFilter>) -> Self {
        Self {
            active_tag: tag.into(),
            current_page: 0,
            ..self
        }
    }

    pub fn with_search(self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            current_page: 0,
            ..self
        }
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn with_page(self, page: usize, total_pages: usize) -> Self {
        Self {
            current_page: page.min(total_pages.saturating_sub(1)),
            ..self
        }
    }

    pub fn next_page(self, total_pages: usize) -> Self {
        let page = self.current_page + 1;
        self.with_page(page, total_pages)
    }

    pub fn prev_page(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1),
            ..self
        }
    }
}

/// Posts carrying `filter`'s tag, in input order. `All` keeps everything.
pub fn filter_by_tag<'a>(posts: &[&'a Post], filter: &TagFilter) -> Vec<&'a Post> {
    posts
        .iter()
        .copied()
        .filter(|post| filter.matches(post))
        .collect()
}

/// Posts whose title, excerpt or tags contain `text`, ignoring case.
///
/// Blank text keeps everything. Matching is plain substring containment.
pub fn search<'a>(posts: &[&'a Post], text: &str) -> Vec<&'a Post> {
    if text.trim().is_empty() {
        return posts.to_vec();
    }

    let term = text.to_lowercase();
    posts
        .iter()
        .copied()
        .filter(|post| {
            post.title().to_lowercase().contains(&term)
                || post.excerpt().to_lowercase().contains(&term)
                || post.tags().join(" ").to_lowercase().contains(&term)
        })
        .collect()
}

/// Every tag used by `posts`, sorted and deduplicated
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Apply the tag filter, then the search, to the whole collection
pub fn apply<'a>(posts: &'a [Post], query: &QueryState) -> Vec<&'a Post> {
    let all: Vec<&Post> = posts.iter().collect();
    let filtered = filter_by_tag(&all, &query.active_tag);
    search(&filtered, &query.search_text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::FrontMatter;

    pub(crate) fn post(title: &str, excerpt: &str, tags: &[&str]) -> Post {
        let raw = format!(
            "---\ntitle: {}\nslug: {}\nexcerpt: {}\ntags: [{}]\n---\nBody",
            title,
            slug::slugify(title),
            excerpt,
            tags.join(", ")
        );
        let fm = FrontMatter::parse(&raw);
        Post::new(fm.metadata, fm.body)
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Deploying to AWS", "Lambda basics", &["aws", "cloud"]),
            post("Rust ownership", "Borrowing explained", &["rust"]),
            post("AWS cost tips", "Saving money", &["cloud"]),
            post("Writing tests", "Unit and e2e", &["testing", "rust"]),
            post("Home lab", "Mentions aws in passing", &[]),
        ]
    }

    fn titles<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|p| p.title()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();
        assert_eq!(filter_by_tag(&refs, &TagFilter::All), refs);
        assert_eq!(filter_by_tag(&refs, &TagFilter::from("all")), refs);
    }

    #[test]
    fn test_filter_by_tag() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();

        let rust = filter_by_tag(&refs, &"rust".into());
        assert_eq!(titles(&rust), ["Rust ownership", "Writing tests"]);
        assert!(rust.iter().all(|p| p.has_tag("rust")));

        assert!(filter_by_tag(&refs, &"Rust".into()).is_empty());
        assert!(filter_by_tag(&refs, &"missing".into()).is_empty());
    }

    #[test]
    fn test_search_blank_is_identity() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();
        assert_eq!(search(&refs, ""), refs);
        assert_eq!(search(&refs, "   "), refs);
    }

    #[test]
    fn test_search_title_matches_keep_order() {
        let posts: Vec<Post> = sample()
            .into_iter()
            .map(|mut p| {
                p.metadata.shift_remove("excerpt");
                p.metadata.shift_remove("tags");
                p
            })
            .collect();
        let refs: Vec<&Post> = posts.iter().collect();

        let found = search(&refs, "AWS");
        assert_eq!(titles(&found), ["Deploying to AWS", "AWS cost tips"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();

        let upper = search(&refs, "AWS");
        assert_eq!(upper, search(&refs, "aws"));
        assert_eq!(
            titles(&upper),
            ["Deploying to AWS", "AWS cost tips", "Home lab"]
        );

        assert_eq!(titles(&search(&refs, "TESTING")), ["Writing tests"]);
        assert_eq!(titles(&search(&refs, "borrowing")), ["Rust ownership"]);
    }

    #[test]
    fn test_search_result_is_subset() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();
        for text in ["a", "zzz", "rust", " ", "e2e"] {
            let found = search(&refs, text);
            assert!(found.iter().all(|p| refs.contains(p)));
        }
    }

    #[test]
    fn test_collect_tags_sorted_unique() {
        assert_eq!(collect_tags(&sample()), ["aws", "cloud", "rust", "testing"]);
        assert!(collect_tags(&[]).is_empty());
    }

    #[test]
    fn test_apply_filters_then_searches() {
        let posts = sample();
        let query = QueryState::new().with_tag("cloud").with_search("cost");
        assert_eq!(titles(&apply(&posts, &query)), ["AWS cost tips"]);
    }

    #[test]
    fn test_query_changes_reset_page() {
        let query = QueryState {
            current_page: 3,
            ..Default::default()
        };
        assert_eq!(query.clone().with_tag("rust").current_page, 0);
        assert_eq!(query.with_search("x").current_page, 0);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let query = QueryState::new();
        assert_eq!(query.clone().prev_page().current_page, 0);
        assert_eq!(query.clone().next_page(2).current_page, 1);
        assert_eq!(query.clone().next_page(2).next_page(2).current_page, 1);
        assert_eq!(query.clone().with_page(9, 3).current_page, 2);
        assert_eq!(query.with_page(5, 0).current_page, 0);
    }

    #[test]
    fn test_tag_filter_display() {
        assert_eq!(TagFilter::All.to_string(), "all");
        assert_eq!(TagFilter::from(Some("aws")).to_string(), "aws");
        assert_eq!(TagFilter::from(None), TagFilter::All);
    }
}
