//! Listing renderers
//!
//! A view owns the content of the listing containers (post list, search
//! box, tag filter bar, pagination) and replaces it wholesale on every
//! render call.

use super::pagination::PageView;
use super::query::TagFilter;
use crate::config::SiteConfig;
use crate::helpers::{display_date, html_escape, page_arrow, post_card, tag_button};

pub const LOADING_MESSAGE: &str = "Loading posts...";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading posts.";
pub const NO_POSTS_MESSAGE: &str = "No posts yet.";
pub const NO_MATCHES_MESSAGE: &str = "No posts match your search.";

/// Output side of the listing controller
pub trait ListingView {
    fn show_loading(&mut self);
    fn show_error(&mut self, message: &str);
    /// The site has no posts at all
    fn show_no_posts(&mut self);
    /// The current tag/search combination matches nothing
    fn show_no_matches(&mut self);
    fn render_search(&mut self, text: &str);
    fn render_tag_filters(&mut self, tags: &[String], active: &TagFilter);
    fn render_posts(&mut self, page: &PageView<'_>);
    /// Clears the controls when there is a single page
    fn render_pagination(&mut self, page: &PageView<'_>);
}

/// HTML fragments for the listing containers
#[derive(Debug, Clone, Default)]
pub struct HtmlListing {
    config: SiteConfig,
    /// Content of `#posts-list`
    pub posts_list: String,
    /// Value of `#search-input`
    pub search_input: String,
    /// Content of `#tag-filters`
    pub tag_filters: String,
    /// Content of `#pagination`
    pub pagination: String,
}

impl HtmlListing {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// All containers, each preceded by a marker comment naming its element id
    pub fn to_fragments(&self) -> String {
        format!(
            "<!-- #search-input -->\n{}\n<!-- #tag-filters -->\n{}\n<!-- #posts-list -->\n{}\n<!-- #pagination -->\n{}\n",
            html_escape(&self.search_input),
            self.tag_filters,
            self.posts_list,
            self.pagination
        )
    }
}

impl ListingView for HtmlListing {
    fn show_loading(&mut self) {
        self.posts_list = LOADING_MESSAGE.to_string();
        self.pagination.clear();
    }

    fn show_error(&mut self, message: &str) {
        self.posts_list = html_escape(message);
        self.tag_filters.clear();
        self.pagination.clear();
    }

    fn show_no_posts(&mut self) {
        self.posts_list = NO_POSTS_MESSAGE.to_string();
        self.tag_filters.clear();
        self.pagination.clear();
    }

    fn show_no_matches(&mut self) {
        self.posts_list = NO_MATCHES_MESSAGE.to_string();
    }

    fn render_search(&mut self, text: &str) {
        self.search_input = text.to_string();
    }

    fn render_tag_filters(&mut self, tags: &[String], active: &TagFilter) {
        let mut html = tag_button(None, *active == TagFilter::All);
        for tag in tags {
            html.push_str(&tag_button(Some(tag.as_str()), active.as_tag() == Some(tag.as_str())));
        }
        self.tag_filters = html;
    }

    fn render_posts(&mut self, page: &PageView<'_>) {
        self.posts_list = page
            .items
            .iter()
            .map(|post| post_card(&self.config, post))
            .collect();
    }

    fn render_pagination(&mut self, page: &PageView<'_>) {
        if !page.has_controls() {
            self.pagination.clear();
            return;
        }

        self.pagination = format!(
            r#"{}<span class="page-status">Page {} of {}</span>{}"#,
            page_arrow("\u{2190}", page.prev_index()),
            page.page_index + 1,
            page.total_pages,
            page_arrow("\u{2192}", page.next_index())
        );
    }
}

/// Plain-text listing for the terminal
#[derive(Debug, Clone, Default)]
pub struct TextListing {
    config: SiteConfig,
    header: String,
    tags: String,
    posts: String,
    pagination: String,
}

impl TextListing {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current screen, sections separated by blank lines
    pub fn render(&self) -> String {
        [&self.header, &self.tags, &self.posts, &self.pagination]
            .iter()
            .filter(|section| !section.is_empty())
            .map(|section| section.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl ListingView for TextListing {
    fn show_loading(&mut self) {
        self.posts = LOADING_MESSAGE.to_string();
        self.pagination.clear();
    }

    fn show_error(&mut self, message: &str) {
        self.posts = message.to_string();
        self.tags.clear();
        self.pagination.clear();
    }

    fn show_no_posts(&mut self) {
        self.posts = NO_POSTS_MESSAGE.to_string();
        self.tags.clear();
        self.pagination.clear();
    }

    fn show_no_matches(&mut self) {
        self.posts = NO_MATCHES_MESSAGE.to_string();
    }

    fn render_search(&mut self, text: &str) {
        self.header = if text.trim().is_empty() {
            String::new()
        } else {
            format!("Search: {}", text)
        };
    }

    fn render_tag_filters(&mut self, tags: &[String], active: &TagFilter) {
        let mark = |name: &str, selected: bool| {
            if selected {
                format!("[{}]", name)
            } else {
                name.to_string()
            }
        };

        let mut line = format!("Tags: {}", mark("all", *active == TagFilter::All));
        for tag in tags {
            line.push(' ');
            line.push_str(&mark(tag.as_str(), active.as_tag() == Some(tag.as_str())));
        }
        self.tags = line;
    }

    fn render_posts(&mut self, page: &PageView<'_>) {
        let mut out = String::new();
        for post in &page.items {
            out.push_str(&format!(
                "{}  {} ({})\n",
                display_date(post.field("date"), &self.config.date_format),
                post.title(),
                post.slug().unwrap_or("-")
            ));
            if !post.excerpt().is_empty() {
                out.push_str(&format!("    {}\n", post.excerpt()));
            }
            let mut meta = format!(
                "    By {} \u{00b7} {} min read",
                post.author(),
                post.reading_time(self.config.words_per_minute)
            );
            if !post.tags().is_empty() {
                meta.push_str(&format!(" \u{00b7} {}", post.tags().join(", ")));
            }
            out.push_str(&meta);
            out.push('\n');
        }
        self.posts = out;
    }

    fn render_pagination(&mut self, page: &PageView<'_>) {
        self.pagination = if page.has_controls() {
            format!(
                "Page {} of {} ({} posts)",
                page.page_index + 1,
                page.total_pages,
                page.total_items
            )
        } else {
            String::new()
        };
    }
}
